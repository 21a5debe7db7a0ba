use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use cozystay_api::{db, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    println!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                // Dashboards and booking pages are browser clients
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(client.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/hotels", web::get().to(routes::hotel::get_hotels))
                    .service(
                        web::scope("/rooms")
                            .route("/listing", web::get().to(routes::room::get_room_listing))
                            .route(
                                "/available",
                                web::get().to(routes::room::get_available_rooms),
                            )
                            .route(
                                "/available/count",
                                web::get().to(routes::room::get_available_rooms_count),
                            ),
                    )
                    .route(
                        "/reservations",
                        web::get().to(routes::reservation::get_reservations),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
