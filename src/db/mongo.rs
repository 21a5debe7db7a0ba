use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const MAX_POOL_SIZE: u32 = 10;

pub async fn create_mongo_client(uri: &String) -> Arc<Client> {
    println!("Connecting to MongoDB: {}", uri);

    let mut client_options = ClientOptions::parse(uri)
        .await
        .expect("MongoDB URI may be incorrect! Failed to parse.");

    client_options.connect_timeout = Some(Duration::from_secs(CONNECT_TIMEOUT_SECS));
    client_options.server_selection_timeout = Some(Duration::from_secs(CONNECT_TIMEOUT_SECS));
    client_options.max_pool_size = Some(MAX_POOL_SIZE);
    client_options.min_pool_size = Some(1);

    // Pin the stable server API so driver upgrades don't change wire behavior
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client =
        Client::with_options(client_options).expect("Failed to create MongoDB client with options");

    verify_connection(&client).await;

    Arc::new(client)
}

async fn verify_connection(client: &Client) {
    match client
        .database("Inventory")
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await
    {
        Ok(_) => println!("Successfully connected to MongoDB and verified with ping command"),
        Err(e) => {
            eprintln!("WARNING: Connected to MongoDB but ping test failed: {}", e);
            eprintln!("The API may still work, but some functionality might be impaired");
        }
    }
}
