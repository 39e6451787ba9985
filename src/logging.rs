use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{ImportError, Result};

/// Initializes logging on stderr, plus daily-rotated JSON files when `log_dir` is given.
///
/// stdout is reserved for the generated statements. The returned guard must be
/// held until exit so buffered file logs are flushed.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Respect RUST_LOG if set; otherwise info for our crate and warnings elsewhere
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bands_import=info,warn"));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = daily_appender(dir)?;
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().json().with_writer(non_blocking_writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}

fn daily_appender(dir: &Path) -> Result<RollingFileAppender> {
    let log_dir_error = |message: String| ImportError::LogDir {
        path: dir.display().to_string(),
        message,
    };

    fs::create_dir_all(dir).map_err(|e| log_dir_error(e.to_string()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("bands_import.log")
        .build(dir)
        .map_err(|e| log_dir_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_dir_under_a_regular_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("notadir");
        fs::write(&blocker, "").unwrap();

        let err = daily_appender(&blocker.join("logs")).err().unwrap();
        assert!(matches!(err, ImportError::LogDir { .. }));
    }

    #[test]
    fn test_log_dir_is_created() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("logs").join("nested");

        daily_appender(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
