use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::models::reservation::{Reservation, ReservationStatus};
use crate::services::reservation_service::{self, DateWindow, ReservationFilter};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationQuery {
    pub business_id: String,
    pub search: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
}

/*
    /api/reservations
*/
pub async fn get_reservations(
    data: web::Data<Arc<Client>>,
    params: web::Query<ReservationQuery>,
) -> impl Responder {
    let client = data.into_inner();
    let business_id = match ObjectId::parse_str(&params.business_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid business ID"),
    };

    let status = params
        .status
        .as_deref()
        .filter(|status| *status != "all")
        .and_then(parse_status);
    let filter = ReservationFilter {
        search: params.search.clone(),
        status,
        window: params
            .date
            .as_deref()
            .map(DateWindow::from_param)
            .unwrap_or_default(),
    };

    let collection: mongodb::Collection<Reservation> =
        client.database("Bookings").collection("Reservations");
    match collection.find(doc! { "businessId": business_id }).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Reservation>>().await {
            Ok(reservations) => {
                let today = Utc::now().date_naive();
                let filtered =
                    reservation_service::filter_reservations(reservations, &filter, today);
                HttpResponse::Ok().json(filtered)
            }
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect reservations.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find reservations.")
        }
    }
}

fn parse_status(raw: &str) -> Option<ReservationStatus> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}
