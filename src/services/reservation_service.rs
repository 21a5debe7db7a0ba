use chrono::{Datelike, Duration, NaiveDate};

use crate::models::reservation::{Reservation, ReservationStatus};

/// Dashboard date filter, relative to a caller-supplied "today" so the
/// filter itself stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DateWindow {
    #[default]
    All,
    Today,
    Tomorrow,
    ThisWeek,
}

impl DateWindow {
    /// Unknown values fall back to no date filtering, matching how the
    /// dashboards treat an unset dropdown.
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "today" => Self::Today,
            "tomorrow" => Self::Tomorrow,
            "week" => Self::ThisWeek,
            _ => Self::All,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub search: Option<String>,
    pub status: Option<ReservationStatus>,
    pub window: DateWindow,
}

/// One filter for every dashboard flavor (rooms, tables, salon services):
/// free-text search over customer name, email and reservation id, exact
/// status, and a date window. A reservation must satisfy all three.
pub fn filter_reservations(
    reservations: Vec<Reservation>,
    filter: &ReservationFilter,
    today: NaiveDate,
) -> Vec<Reservation> {
    reservations
        .into_iter()
        .filter(|reservation| matches_search(reservation, filter.search.as_deref()))
        .filter(|reservation| match filter.status {
            Some(status) => reservation.status == status,
            None => true,
        })
        .filter(|reservation| matches_window(reservation, filter.window, today))
        .collect()
}

fn matches_search(reservation: &Reservation, search: Option<&str>) -> bool {
    let term = match search {
        Some(term) if !term.trim().is_empty() => term.trim().to_lowercase(),
        _ => return true,
    };

    let info = &reservation.customer_info;
    let name_hit = info
        .name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(&term));
    let email_hit = info
        .email
        .as_deref()
        .is_some_and(|email| email.to_lowercase().contains(&term));
    let id_hit = reservation
        .id
        .is_some_and(|id| id.to_hex().contains(&term));

    name_hit || email_hit || id_hit
}

fn matches_window(reservation: &Reservation, window: DateWindow, today: NaiveDate) -> bool {
    let date = match reservation.date_naive() {
        Some(date) => date,
        None => return window == DateWindow::All,
    };
    match window {
        DateWindow::All => true,
        DateWindow::Today => date == today,
        DateWindow::Tomorrow => date == today + Duration::days(1),
        DateWindow::ThisWeek => {
            // Sunday-started week containing `today`
            let week_start =
                today - Duration::days(today.weekday().num_days_from_sunday() as i64);
            date >= week_start && date < week_start + Duration::days(7)
        }
    }
}
