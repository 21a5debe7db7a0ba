use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCondition {
    Excellent,
    Good,
    NeedsRepair,
}

/// Annual recurring date-range rate override with month/day granularity.
/// A period may wrap the year boundary, e.g. Dec 15 through Jan 5.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialPrice {
    #[serde(default)]
    pub start_month: Option<u32>,
    #[serde(default)]
    pub start_day: Option<u32>,
    #[serde(default)]
    pub end_month: Option<u32>,
    #[serde(default)]
    pub end_day: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl SpecialPrice {
    /// Nightly rate when the period covers the given calendar month/day,
    /// `None` otherwise. Rules with absent fields or out-of-range months
    /// never match.
    pub fn rate_for(&self, month: u32, day: u32) -> Option<f64> {
        let (start_month, start_day, end_month, end_day) = match (
            self.start_month,
            self.start_day,
            self.end_month,
            self.end_day,
        ) {
            (Some(sm), Some(sd), Some(em), Some(ed)) => (sm, sd, em, ed),
            _ => return None,
        };
        if !(1..=12).contains(&start_month) || !(1..=12).contains(&end_month) {
            return None;
        }

        let on_or_after_start = month > start_month || (month == start_month && day >= start_day);
        let on_or_before_end = month < end_month || (month == end_month && day <= end_day);

        let covered = if start_month < end_month || (start_month == end_month && start_day <= end_day)
        {
            // Period stays within one calendar year
            on_or_after_start && on_or_before_end
        } else {
            // Period wraps the Dec -> Jan boundary
            on_or_after_start || on_or_before_end
        };

        if covered {
            self.price
        } else {
            None
        }
    }
}

/// Annual recurring whole-month rate override, inclusive on both ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPrice {
    #[serde(default)]
    pub start_month: Option<u32>,
    #[serde(default)]
    pub end_month: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl MonthlyPrice {
    /// Nightly rate when `month` falls inside the inclusive month range.
    /// A range entered backwards across the year boundary (startMonth >
    /// endMonth, e.g. Nov through Feb) never matches; month ranges are
    /// expected in calendar order.
    pub fn rate_for(&self, month: u32) -> Option<f64> {
        let (start_month, end_month) = match (self.start_month, self.end_month) {
            (Some(sm), Some(em)) => (sm, em),
            _ => return None,
        };
        if start_month <= month && month <= end_month {
            self.price
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub hotel_id: ObjectId,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub capacity: u32,
    pub price: f64,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub condition: Option<RoomCondition>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub bed_type: Vec<String>,
    #[serde(default)]
    pub number_of_beds: Option<u32>,
    #[serde(default)]
    pub number_of_bathrooms: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub monthly_prices: Vec<MonthlyPrice>,
    #[serde(default)]
    pub special_prices: Vec<SpecialPrice>,
    #[serde(default)]
    pub created_at: Option<bson::DateTime>,
    #[serde(default)]
    pub updated_at: Option<bson::DateTime>,
}

fn default_is_active() -> bool {
    true
}
