pub mod hotel;
pub mod listing;
pub mod reservation;
pub mod room;
pub mod stay;
