use chrono::NaiveDate;
use serde::Serialize;

/// One row of the attendance spreadsheet, as read from the export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    /// Line number of the row in the source file (the header is line 1)
    pub row: usize,
    /// `Band` column
    pub band: String,
    /// `Wo` column
    pub location: String,
    /// `Wann` column
    pub date: String,
}

impl InputRecord {
    pub fn new(
        row: usize,
        band: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            row,
            band: band.into(),
            location: location.into(),
            date: date.into(),
        }
    }
}

/// A concert visit ready to be written as a `band_events` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEvent {
    pub band_name: String,
    pub place: String,
    pub date: NaiveDate,
    pub users_id: i64,
    pub rating: i32,
}

impl NormalizedEvent {
    /// The event date in `YYYY-MM-DD` form
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
