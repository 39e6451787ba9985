pub mod config;
pub mod constants;
pub mod converter;
pub mod emit;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod reader;
pub mod types;

pub use config::ImportConfig;
pub use converter::{ConversionOutcome, ErrorPolicy, RejectedRow, RowConverter};
pub use emit::{OutputFormat, StatementEmitter};
pub use error::{ImportError, Result};
pub use pipeline::{ImportOptions, ImportSummary, Pipeline};
pub use types::{InputRecord, NormalizedEvent};
