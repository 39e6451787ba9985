//! Output formats for normalized events.

pub mod json;
pub mod sql;

use std::io::Write;

use crate::error::Result;
use crate::types::NormalizedEvent;

pub use json::JsonLinesEmitter;
pub use sql::SqlInsertEmitter;

/// Renders one event as one line of output (without the trailing newline)
pub trait StatementEmitter {
    fn format(&self, event: &NormalizedEvent) -> Result<String>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Sql,
    Json,
}

impl OutputFormat {
    pub fn emitter(self, table: &str) -> Box<dyn StatementEmitter> {
        match self {
            OutputFormat::Sql => Box::new(SqlInsertEmitter::new(table)),
            OutputFormat::Json => Box::new(JsonLinesEmitter),
        }
    }
}

/// Render every event and write it to `out`, one per line.
///
/// All lines are rendered before the first byte is written, so a formatting
/// failure leaves `out` untouched.
pub fn write_events<W: Write>(
    emitter: &dyn StatementEmitter,
    events: &[NormalizedEvent],
    out: &mut W,
) -> Result<usize> {
    let lines = events
        .iter()
        .map(|event| emitter.format(event))
        .collect::<Result<Vec<_>>>()?;

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(lines.len())
}
