use tracing::{debug, instrument, warn};

use crate::config::ImportConfig;
use crate::error::{ImportError, Result};
use crate::normalize::{parse_event_date, strip_band_name, VenueMap};
use crate::types::{InputRecord, NormalizedEvent};

/// What to do with a row whose date cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the run on the first malformed row
    #[default]
    Abort,
    /// Report the row and continue with the next one
    Skip,
}

/// A row that was dropped because of a malformed date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub row: usize,
    pub value: String,
}

/// Result of converting a full set of rows
#[derive(Debug, Default)]
pub struct ConversionOutcome {
    pub events: Vec<NormalizedEvent>,
    pub rows_read: usize,
    pub skipped_empty: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Turns spreadsheet rows into normalized events.
#[derive(Debug, Clone)]
pub struct RowConverter {
    venues: VenueMap,
    users_id: i64,
    rating: i32,
}

impl RowConverter {
    pub fn new(venues: VenueMap, users_id: i64, rating: i32) -> Self {
        Self {
            venues,
            users_id,
            rating,
        }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(config.venue_map(), config.users_id, config.rating)
    }

    /// Normalize a single row.
    ///
    /// `Ok(None)` means the row has an empty band, place or date and is
    /// skipped silently.
    pub fn convert_record(&self, record: &InputRecord) -> Result<Option<NormalizedEvent>> {
        let band_name = strip_band_name(&record.band);
        let place = self.venues.resolve(&record.location);
        let date = record.date.trim();

        if band_name.is_empty() || place.is_empty() || date.is_empty() {
            return Ok(None);
        }

        let date = parse_event_date(date).ok_or_else(|| ImportError::MalformedDate {
            row: record.row,
            value: date.to_string(),
        })?;

        Ok(Some(NormalizedEvent {
            band_name: band_name.to_string(),
            place: place.to_string(),
            date,
            users_id: self.users_id,
            rating: self.rating,
        }))
    }

    /// Convert in-memory rows, preserving their order.
    pub fn convert<I>(&self, rows: I, policy: ErrorPolicy) -> Result<ConversionOutcome>
    where
        I: IntoIterator<Item = InputRecord>,
    {
        self.convert_results(rows.into_iter().map(Ok), policy)
    }

    /// Convert rows coming from a fallible source such as a CSV reader.
    ///
    /// Source errors always abort; only malformed dates are subject to `policy`.
    #[instrument(skip(self, rows))]
    pub fn convert_results<I>(&self, rows: I, policy: ErrorPolicy) -> Result<ConversionOutcome>
    where
        I: IntoIterator<Item = Result<InputRecord>>,
    {
        let mut outcome = ConversionOutcome::default();

        for record in rows {
            let record = record?;
            outcome.rows_read += 1;

            match self.convert_record(&record) {
                Ok(Some(event)) => outcome.events.push(event),
                Ok(None) => {
                    debug!(row = record.row, "Skipping row with empty band, place or date");
                    outcome.skipped_empty += 1;
                }
                Err(ImportError::MalformedDate { row, value }) if policy == ErrorPolicy::Skip => {
                    warn!(row, value = %value, "Skipping row with malformed date");
                    outcome.rejected.push(RejectedRow { row, value });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(outcome)
    }
}

impl Default for RowConverter {
    fn default() -> Self {
        Self::from_config(&ImportConfig::default())
    }
}
