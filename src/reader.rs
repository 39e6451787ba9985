use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::constants::{BAND_COLUMN, DATE_COLUMN, LOCATION_COLUMN};
use crate::error::{ImportError, Result};
use crate::types::InputRecord;

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    band: usize,
    location: usize,
    date: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
                .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            band: find(BAND_COLUMN)?,
            location: find(LOCATION_COLUMN)?,
            date: find(DATE_COLUMN)?,
        })
    }
}

/// Reads the attendance export, one `InputRecord` per data row.
///
/// The header is validated up front; column order does not matter and extra
/// columns are ignored. Rows shorter than the header read missing cells as
/// empty strings.
pub struct BandCsvReader<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnIndex,
}

impl BandCsvReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::MissingFile {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "Opened input file");
        Self::from_reader(file)
    }
}

impl<R: Read> BandCsvReader<R> {
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);
        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;
        debug!(?headers, "Validated CSV header");
        Ok(Self { reader, columns })
    }

    /// Iterate the data rows in file order
    pub fn records(&mut self) -> impl Iterator<Item = Result<InputRecord>> + '_ {
        let columns = self.columns;
        self.reader.records().map(move |result| -> Result<InputRecord> {
            let record = result?;
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default();
            let cell = |idx: usize| record.get(idx).unwrap_or_default().to_string();
            Ok(InputRecord {
                row,
                band: cell(columns.band),
                location: cell(columns.location),
                date: cell(columns.date),
            })
        })
    }
}
