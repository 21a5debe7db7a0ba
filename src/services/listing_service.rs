use crate::models::listing::RoomTypeSummary;
use crate::models::room::{Room, RoomStatus};
use crate::models::stay::StayRequest;
use crate::services::bed_types::format_bed_types;
use crate::services::pricing_service::PricingService;

/// Collapse physical rooms into one bookable entry per room type, priced at
/// the lowest average nightly rate in the group.
///
/// `availability_filtered` marks input that already went through the
/// availability query; otherwise rooms parked in occupied, maintenance or
/// cleaning states are skipped here. Output order is the first-seen order
/// of room types. Per-hotel type counts are small, so the grouping is a
/// plain linear scan.
pub fn group_rooms_by_type(
    rooms: &[Room],
    stay: &StayRequest,
    availability_filtered: bool,
) -> Vec<RoomTypeSummary> {
    let mut summaries: Vec<RoomTypeSummary> = Vec::new();

    for room in rooms {
        if !availability_filtered && room.status != RoomStatus::Available {
            continue;
        }
        let per_night = PricingService::average_nightly_rate(room, stay);

        match summaries
            .iter_mut()
            .find(|summary| summary.room_type == room.room_type)
        {
            None => summaries.push(seed_summary(room, per_night)),
            Some(summary) => {
                summary.count += 1;
                if per_night < summary.price {
                    adopt_representative(summary, room, per_night);
                }
            }
        }
    }

    summaries
}

fn seed_summary(room: &Room, per_night: f64) -> RoomTypeSummary {
    RoomTypeSummary {
        room_type: room.room_type.clone(),
        price: per_night,
        room_id: room.id,
        image: room.images.first().cloned(),
        description: room.description.clone(),
        amenities: room.amenities.clone(),
        features: room.features.clone(),
        bed_info: format_bed_types(&room.bed_type),
        count: 1,
    }
}

/// A strictly cheaper room replaces the whole representative record for its
/// type; the previous image is kept only when the new room has none.
fn adopt_representative(summary: &mut RoomTypeSummary, room: &Room, per_night: f64) {
    summary.price = per_night;
    summary.room_id = room.id;
    if let Some(image) = room.images.first() {
        summary.image = Some(image.clone());
    }
    summary.description = room.description.clone();
    summary.amenities = room.amenities.clone();
    summary.features = room.features.clone();
    summary.bed_info = format_bed_types(&room.bed_type);
}
