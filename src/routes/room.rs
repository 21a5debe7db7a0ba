use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::models::room::Room;
use crate::models::stay::StayRequest;
use crate::services::availability_service;
use crate::services::listing_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuery {
    pub hotel_id: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub adults: Option<u32>,
    pub children: Option<u32>,
}

impl StayQuery {
    pub fn stay(&self) -> StayRequest {
        StayRequest::from_params(
            self.check_in.as_deref(),
            self.check_out.as_deref(),
            self.adults.unwrap_or(1),
            self.children.unwrap_or(0),
        )
    }
}

/*
    /api/rooms/listing
*/
pub async fn get_room_listing(
    data: web::Data<Arc<Client>>,
    params: web::Query<StayQuery>,
) -> impl Responder {
    let client = data.into_inner();
    let hotel_id = match ObjectId::parse_str(&params.hotel_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid hotel ID"),
    };
    let stay = params.stay();

    // With a valid stay window the availability query vets the rooms; a
    // dateless visit lists the active inventory at base/rule rates instead.
    if stay.window().is_some() {
        match availability_service::find_available_rooms(&client, hotel_id, &stay).await {
            Ok(rooms) => {
                let summaries = listing_service::group_rooms_by_type(&rooms, &stay, true);
                HttpResponse::Ok().json(summaries)
            }
            Err(err) => {
                eprintln!("Failed to load available rooms: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to load room listing.")
            }
        }
    } else {
        let collection: mongodb::Collection<Room> =
            client.database("Inventory").collection("Rooms");
        match collection
            .find(doc! { "hotelId": hotel_id, "isActive": true })
            .await
        {
            Ok(cursor) => match cursor.try_collect::<Vec<Room>>().await {
                Ok(rooms) => {
                    let summaries = listing_service::group_rooms_by_type(&rooms, &stay, false);
                    HttpResponse::Ok().json(summaries)
                }
                Err(err) => {
                    eprintln!("Failed to collect documents: {:?}", err);
                    HttpResponse::InternalServerError().body("Failed to collect rooms.")
                }
            },
            Err(err) => {
                eprintln!("Failed to find documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to find rooms.")
            }
        }
    }
}

/*
    /api/rooms/available
*/
pub async fn get_available_rooms(
    data: web::Data<Arc<Client>>,
    params: web::Query<StayQuery>,
) -> impl Responder {
    let client = data.into_inner();
    let hotel_id = match ObjectId::parse_str(&params.hotel_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid hotel ID"),
    };

    match availability_service::find_available_rooms(&client, hotel_id, &params.stay()).await {
        Ok(rooms) => HttpResponse::Ok().json(rooms),
        Err(err) => {
            eprintln!("Failed to load available rooms: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to load available rooms.")
        }
    }
}

/*
    /api/rooms/available/count
*/
pub async fn get_available_rooms_count(
    data: web::Data<Arc<Client>>,
    params: web::Query<StayQuery>,
) -> impl Responder {
    let client = data.into_inner();
    let hotel_id = match ObjectId::parse_str(&params.hotel_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid hotel ID"),
    };

    match availability_service::find_available_rooms(&client, hotel_id, &params.stay()).await {
        Ok(rooms) => HttpResponse::Ok().json(json!({ "count": rooms.len() })),
        Err(err) => {
            eprintln!("Failed to count available rooms: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to count available rooms.")
        }
    }
}
