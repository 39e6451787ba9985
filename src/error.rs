use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Input file '{path}' could not be opened: {source}")]
    MissingFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed date '{value}' in row {row}")]
    MalformedDate { row: usize, value: String },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log directory '{path}' is not usable: {message}")]
    LogDir { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, ImportError>;
