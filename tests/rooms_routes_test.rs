mod common;

use common::{room, special_price};

use actix_web::{test, web, App, HttpResponse, Responder};
use bson::oid::ObjectId;
use serde_json::json;

use cozystay_api::routes::room::StayQuery;
use cozystay_api::services::listing_service::group_rooms_by_type;

// A store-free stand-in for the listing handler: same query contract and
// grouping pipeline, fixture inventory instead of a collection.
async fn listing_preview(params: web::Query<StayQuery>) -> impl Responder {
    let stay = params.stay();

    let hotel_id = ObjectId::new();
    let mut deluxe_low = room(hotel_id, "102", "Deluxe", 80.0);
    deluxe_low.bed_type = vec!["Queen".to_string(), "Queen".to_string()];
    deluxe_low.special_prices = vec![special_price((12, 20), (1, 5), 150.0)];
    let deluxe_high = room(hotel_id, "401", "Deluxe", 100.0);
    let standard = room(hotel_id, "103", "Standard", 60.0);

    let summaries = group_rooms_by_type(&[deluxe_low, deluxe_high, standard], &stay, false);
    HttpResponse::Ok().json(json!({
        "nights": stay.nights(),
        "guests": stay.total_guests(),
        "roomTypes": summaries,
    }))
}

#[actix_web::test]
async fn test_listing_query_is_extracted_and_grouped() {
    let app = test::init_service(
        App::new().route("/rooms/listing", web::get().to(listing_preview)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/rooms/listing?hotelId=64b9f0a1a2b3c4d5e6f70809&checkIn=2025-12-23&checkOut=2025-12-26&adults=2&children=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["nights"], 3);
    assert_eq!(body["guests"], 3);

    let room_types = body["roomTypes"].as_array().unwrap();
    assert_eq!(room_types.len(), 2);
    // The special period lifts room 102 to 150 a night, so the flat-rate
    // sibling represents the Deluxe group for these dates
    assert_eq!(room_types[0]["type"], "Deluxe");
    assert_eq!(room_types[0]["price"], 100.0);
    assert_eq!(room_types[0]["count"], 2);
    assert_eq!(room_types[1]["type"], "Standard");
    assert_eq!(room_types[1]["price"], 60.0);
}

#[actix_web::test]
async fn test_unparseable_dates_degrade_to_base_rates() {
    let app = test::init_service(
        App::new().route("/rooms/listing", web::get().to(listing_preview)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/rooms/listing?hotelId=64b9f0a1a2b3c4d5e6f70809&checkIn=soon&checkOut=later")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["nights"], 0);
    assert_eq!(body["guests"], 1);

    let room_types = body["roomTypes"].as_array().unwrap();
    assert_eq!(room_types[0]["price"], 80.0);
}

#[actix_web::test]
async fn test_bed_info_reaches_the_response() {
    let app = test::init_service(
        App::new().route("/rooms/listing", web::get().to(listing_preview)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/rooms/listing?hotelId=64b9f0a1a2b3c4d5e6f70809")
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;

    // Without dates the 80-a-night room wins the Deluxe group
    assert_eq!(body["roomTypes"][0]["price"], 80.0);
    assert_eq!(body["roomTypes"][0]["bedInfo"], "2 Queen");
}
