use bson::oid::ObjectId;
use serde::Serialize;

/// One bookable entry per room type, derived per listing request from the
/// physical room inventory. The representative fields come from the room
/// with the lowest average nightly rate in the group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeSummary {
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
    pub room_id: Option<ObjectId>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub features: Vec<String>,
    pub bed_info: String,
    pub count: u32,
}
