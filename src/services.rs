pub mod availability_service;
pub mod bed_types;
pub mod listing_service;
pub mod pricing_service;
pub mod reservation_service;
