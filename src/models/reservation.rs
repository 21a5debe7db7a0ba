use bson::oid::ObjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Hotel,
    Restaurant,
    Salon,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationSource {
    Website,
    Phone,
    WalkIn,
    Admin,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A booking against any tenant module: rooms (hotel), tables (restaurant)
/// or services (salon). Only the fields for the owning module are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub business_id: ObjectId,
    #[serde(default)]
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub customer_id: Option<ObjectId>,
    #[serde(default)]
    pub customer_info: CustomerInfo,
    #[serde(default)]
    pub room_id: Option<ObjectId>,
    #[serde(default)]
    pub check_in: Option<bson::DateTime>,
    #[serde(default)]
    pub check_out: Option<bson::DateTime>,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub table_id: Option<ObjectId>,
    #[serde(default)]
    pub party_size: Option<u32>,
    #[serde(default)]
    pub service_id: Option<ObjectId>,
    #[serde(default)]
    pub staff_id: Option<ObjectId>,
    #[serde(default)]
    pub date: Option<bson::DateTime>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    pub status: ReservationStatus,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub source: Option<ReservationSource>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub created_at: Option<bson::DateTime>,
    #[serde(default)]
    pub updated_at: Option<bson::DateTime>,
}

impl Reservation {
    /// Stay window as calendar dates. Check-in falls back to the booking
    /// `date`; a missing check-out collapses the window to its start.
    /// `None` when the reservation carries no dates at all.
    pub fn stay_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.check_in.or(self.date)?.to_chrono().date_naive();
        let end = self
            .check_out
            .map(|d| d.to_chrono().date_naive())
            .unwrap_or(start);
        Some((start, end))
    }

    /// Booking date as a calendar date, for dashboard date filters.
    pub fn date_naive(&self) -> Option<NaiveDate> {
        self.date.map(|d| d.to_chrono().date_naive())
    }

    /// Whether this reservation holds inventory. Cancelled, completed and
    /// no-show bookings release the room.
    pub fn blocks_availability(&self) -> bool {
        matches!(
            self.status,
            ReservationStatus::Pending | ReservationStatus::Confirmed
        )
    }
}
