#![allow(dead_code)]

use bson::oid::ObjectId;
use chrono::NaiveDate;

use cozystay_api::models::reservation::{CustomerInfo, Reservation, ReservationStatus};
use cozystay_api::models::room::{Room, RoomStatus, SpecialPrice};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn bson_date(date: NaiveDate) -> bson::DateTime {
    bson::DateTime::from_chrono(date.and_hms_opt(0, 0, 0).unwrap().and_utc())
}

pub fn room(hotel_id: ObjectId, number: &str, room_type: &str, base: f64) -> Room {
    Room {
        id: Some(ObjectId::new()),
        hotel_id,
        number: number.to_string(),
        room_type: room_type.to_string(),
        floor: Some(1),
        capacity: 2,
        price: base,
        size: None,
        status: RoomStatus::Available,
        amenities: Vec::new(),
        features: Vec::new(),
        condition: None,
        images: Vec::new(),
        is_active: true,
        bed_type: Vec::new(),
        number_of_beds: None,
        number_of_bathrooms: None,
        description: None,
        monthly_prices: Vec::new(),
        special_prices: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

pub fn special_price(start: (u32, u32), end: (u32, u32), price: f64) -> SpecialPrice {
    SpecialPrice {
        start_month: Some(start.0),
        start_day: Some(start.1),
        end_month: Some(end.0),
        end_day: Some(end.1),
        price: Some(price),
    }
}

pub fn confirmed_reservation(room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> Reservation {
    Reservation {
        id: Some(ObjectId::new()),
        business_id: room.hotel_id,
        business_type: None,
        customer_id: None,
        customer_info: CustomerInfo {
            name: Some("Guest".to_string()),
            email: Some("guest@example.com".to_string()),
            phone: None,
        },
        room_id: room.id,
        check_in: Some(bson_date(check_in)),
        check_out: Some(bson_date(check_out)),
        guests: Some(2),
        table_id: None,
        party_size: None,
        service_id: None,
        staff_id: None,
        date: Some(bson_date(check_in)),
        time: None,
        duration: None,
        status: ReservationStatus::Confirmed,
        total_amount: None,
        payment_status: None,
        notes: None,
        special_requests: None,
        source: None,
        payment_method: None,
        created_at: None,
        updated_at: None,
    }
}
