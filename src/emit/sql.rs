use super::StatementEmitter;
use crate::constants;
use crate::error::Result;
use crate::types::NormalizedEvent;

/// Writes `INSERT INTO <table> (...) VALUES (...);` statements
#[derive(Debug, Clone)]
pub struct SqlInsertEmitter {
    table: String,
}

impl SqlInsertEmitter {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl Default for SqlInsertEmitter {
    fn default() -> Self {
        Self::new(constants::DEFAULT_TABLE)
    }
}

/// Quote a value as an SQL string literal, doubling embedded single quotes
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

impl StatementEmitter for SqlInsertEmitter {
    fn format(&self, event: &NormalizedEvent) -> Result<String> {
        Ok(format!(
            "INSERT INTO {} (band_name, place, date, users_id, rating) VALUES ({}, {}, {}, {}, {});",
            self.table,
            quote(&event.band_name),
            quote(&event.place),
            quote(&event.iso_date()),
            event.users_id,
            event.rating,
        ))
    }
}
