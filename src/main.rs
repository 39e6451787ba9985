use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::debug;

use bands_import::{constants, logging, ErrorPolicy, ImportConfig, ImportOptions, OutputFormat, Pipeline};

#[derive(Parser)]
#[command(name = "bands-to-sql")]
#[command(about = "Convert the concert spreadsheet export into band_events inserts")]
#[command(version = "0.1.0")]
struct Cli {
    /// CSV export with Band, Wo and Wann columns
    #[arg(default_value = constants::DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// TOML config (defaults to ./bands_import.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Sql)]
    format: Format,

    /// What to do with rows whose date cannot be parsed
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    on_error: OnError,

    /// Override the users_id written for every event
    #[arg(long)]
    users_id: Option<i64>,

    /// Override the rating written for every event
    #[arg(long)]
    rating: Option<i32>,

    /// Also write JSON logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Sql,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnError {
    /// Stop at the first malformed row and write nothing
    Abort,
    /// Report malformed rows on stderr and convert the rest
    Skip,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ImportConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(users_id) = cli.users_id {
        config.users_id = users_id;
    }
    if let Some(rating) = cli.rating {
        config.rating = rating;
    }
    debug!(?config, "Effective configuration");

    let options = ImportOptions {
        input: cli.input,
        format: match cli.format {
            Format::Sql => OutputFormat::Sql,
            Format::Json => OutputFormat::Json,
        },
        policy: match cli.on_error {
            OnError::Abort => ErrorPolicy::Abort,
            OnError::Skip => ErrorPolicy::Skip,
        },
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = Pipeline::run(&config, &options, &mut out)
        .with_context(|| format!("Import of '{}' failed", options.input.display()))?;
    debug!(?summary, "Run summary");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let _guard = logging::init_logging(cli.log_dir.as_deref())
        .context("Failed to initialize logging")?;

    run(cli)
}
