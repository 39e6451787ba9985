use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::config::ImportConfig;
use crate::constants;
use crate::converter::{ErrorPolicy, RejectedRow, RowConverter};
use crate::emit::{write_events, OutputFormat};
use crate::error::Result;
use crate::reader::BandCsvReader;

/// Options for a single import run
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub policy: ErrorPolicy,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(constants::DEFAULT_INPUT_PATH),
            format: OutputFormat::default(),
            policy: ErrorPolicy::default(),
        }
    }
}

/// Result of a complete import run
#[derive(Debug)]
pub struct ImportSummary {
    pub rows_read: usize,
    pub emitted: usize,
    pub skipped_empty: usize,
    pub rejected: Vec<RejectedRow>,
}

pub struct Pipeline;

impl Pipeline {
    /// Read the input file, convert every row and write the output.
    ///
    /// Nothing is written to `out` unless the whole file converts under the
    /// chosen error policy.
    #[instrument(skip(config, options, out), fields(input = %options.input.display()))]
    pub fn run<W: Write>(
        config: &ImportConfig,
        options: &ImportOptions,
        out: &mut W,
    ) -> Result<ImportSummary> {
        let reader = BandCsvReader::from_path(&options.input)?;
        Self::run_with_reader(config, reader, options, out)
    }

    pub fn run_with_reader<R: Read, W: Write>(
        config: &ImportConfig,
        mut reader: BandCsvReader<R>,
        options: &ImportOptions,
        out: &mut W,
    ) -> Result<ImportSummary> {
        let started = Instant::now();
        let converter = RowConverter::from_config(config);
        let outcome = converter.convert_results(reader.records(), options.policy)?;

        let emitter = options.format.emitter(&config.table);
        let emitted = write_events(emitter.as_ref(), &outcome.events, out)?;

        if !outcome.rejected.is_empty() {
            warn!("{} rows rejected because of malformed dates", outcome.rejected.len());
        }
        info!(
            rows_read = outcome.rows_read,
            emitted,
            skipped_empty = outcome.skipped_empty,
            rejected = outcome.rejected.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Import finished"
        );

        Ok(ImportSummary {
            rows_read: outcome.rows_read,
            emitted,
            skipped_empty: outcome.skipped_empty,
            rejected: outcome.rejected,
        })
    }
}
