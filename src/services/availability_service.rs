use chrono::NaiveDate;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client, Collection,
};

use crate::models::reservation::Reservation;
use crate::models::room::{Room, RoomStatus};
use crate::models::stay::StayRequest;

/// True when no holding reservation for this room overlaps the window.
/// Overlap is the half-open test `start < res_end && end > res_start`, so
/// back-to-back stays sharing a turnover day do not conflict.
pub fn is_room_free(
    room: &Room,
    reservations: &[Reservation],
    start: NaiveDate,
    end: NaiveDate,
) -> bool {
    !reservations.iter().any(|reservation| {
        if !reservation.blocks_availability() {
            return false;
        }
        let same_room = match (reservation.room_id, room.id) {
            (Some(reserved), Some(room_id)) => reserved == room_id,
            _ => false,
        };
        if !same_room {
            return false;
        }
        match reservation.stay_window() {
            Some((res_start, res_end)) => start < res_end && end > res_start,
            None => false,
        }
    })
}

/// Pure counterpart of the availability query: active/available/capacity
/// gates, then reservation-overlap filtering. An invalid stay window means
/// nothing can be offered.
pub fn filter_available(
    rooms: Vec<Room>,
    reservations: &[Reservation],
    stay: &StayRequest,
) -> Vec<Room> {
    let (start, end) = match stay.window() {
        Some(window) => window,
        None => return Vec::new(),
    };
    let guests = stay.total_guests();

    rooms
        .into_iter()
        .filter(|room| room.is_active && room.status == RoomStatus::Available)
        .filter(|room| room.capacity >= guests)
        .filter(|room| is_room_free(room, reservations, start, end))
        .collect()
}

/// Fetch a hotel's candidate rooms and holding reservations, then apply the
/// overlap filter. The store narrows candidates (active, available, big
/// enough) and holding statuses; date overlap stays in application code.
pub async fn find_available_rooms(
    client: &Client,
    hotel_id: ObjectId,
    stay: &StayRequest,
) -> Result<Vec<Room>, mongodb::error::Error> {
    if stay.window().is_none() {
        return Ok(Vec::new());
    }

    let rooms: Collection<Room> = client.database("Inventory").collection("Rooms");
    let candidate_filter = doc! {
        "hotelId": hotel_id,
        "isActive": true,
        "status": "available",
        "capacity": { "$gte": stay.total_guests() as i64 },
    };
    let candidates: Vec<Room> = rooms.find(candidate_filter).await?.try_collect().await?;
    if candidates.is_empty() {
        return Ok(candidates);
    }

    let reservations: Collection<Reservation> =
        client.database("Bookings").collection("Reservations");
    let holding_filter = doc! {
        "businessId": hotel_id,
        "status": { "$in": ["pending", "confirmed"] },
    };
    let holding: Vec<Reservation> = reservations
        .find(holding_filter)
        .await?
        .try_collect()
        .await?;

    Ok(filter_available(candidates, &holding, stay))
}
