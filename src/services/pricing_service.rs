use chrono::{Datelike, NaiveDate};

use crate::models::room::Room;
use crate::models::stay::StayRequest;

pub struct PricingService;

impl PricingService {
    /// Resolve the rate for a single night. Special date-range periods win
    /// over monthly periods, which win over the base price; within a tier
    /// the first matching rule in stored order applies.
    pub fn nightly_rate(room: &Room, night: NaiveDate) -> f64 {
        let month = night.month();
        let day = night.day();

        if let Some(rate) = room
            .special_prices
            .iter()
            .find_map(|rule| rule.rate_for(month, day))
        {
            return rate;
        }

        if let Some(rate) = room
            .monthly_prices
            .iter()
            .find_map(|rule| rule.rate_for(month))
        {
            return rate;
        }

        room.price
    }

    /// Total cost of a stay covering every night from check-in (inclusive)
    /// up to check-out (exclusive). Empty or inverted windows cost 0.
    pub fn stay_total(room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> f64 {
        if check_in >= check_out {
            return 0.0;
        }

        let mut total = 0.0;
        let mut night = check_in;
        while night < check_out {
            total += Self::nightly_rate(room, night);
            night = match night.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        total
    }

    /// Average nightly rate over the requested stay, used to rank rooms
    /// within a type. A stay without nights falls back to the base price
    /// rather than dividing by zero.
    pub fn average_nightly_rate(room: &Room, stay: &StayRequest) -> f64 {
        let nights = stay.nights();
        if nights == 0 {
            return room.price;
        }
        match stay.window() {
            Some((start, end)) => Self::stay_total(room, start, end) / nights as f64,
            None => room.price,
        }
    }
}
