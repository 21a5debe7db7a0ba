use chrono::{DateTime, NaiveDate};

/// A requested stay window plus occupancy, as supplied by the booking page
/// query string. Dates stay `None` when absent or unparseable; downstream
/// pricing then quotes base rates instead of erroring.
#[derive(Debug, Clone, Copy, Default)]
pub struct StayRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
}

impl StayRequest {
    pub fn from_params(
        check_in: Option<&str>,
        check_out: Option<&str>,
        adults: u32,
        children: u32,
    ) -> Self {
        Self {
            check_in: check_in.and_then(parse_stay_date),
            check_out: check_out.and_then(parse_stay_date),
            adults,
            children,
        }
    }

    /// Number of nights, counting the check-in night and excluding the
    /// check-out night. Zero when the window is missing or inverted.
    pub fn nights(&self) -> i64 {
        match self.window() {
            Some((start, end)) => (end - start).num_days(),
            None => 0,
        }
    }

    /// The validated half-open date window, `None` unless both dates are
    /// present and check-out is after check-in.
    pub fn window(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) if end > start => Some((start, end)),
            _ => None,
        }
    }

    pub fn total_guests(&self) -> u32 {
        self.adults + self.children
    }
}

/// Accepts plain dates (`2025-08-07`) and RFC 3339 timestamps; anything
/// else reads as "no date supplied".
pub fn parse_stay_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|dt| dt.date_naive())
    })
}
