//! Field-level clean-up applied to every spreadsheet row.

pub mod band;
pub mod date;
pub mod venue;

pub use band::strip_band_name;
pub use date::{expand_month_year, parse_event_date};
pub use venue::VenueMap;
