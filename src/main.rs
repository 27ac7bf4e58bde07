use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

use bpd_ingester::config::IngestionConfig;
use bpd_ingester::error::IngestError;
use bpd_ingester::logging;
use bpd_ingester::pipeline;
use bpd_ingester::source;

#[derive(Parser)]
#[command(name = "bpd_ingester")]
#[command(about = "Bangalore Pub Directory listing cleaner")]
#[command(version = "0.1.0")]
struct Cli {
    /// Absolute path to the scraped CSV export
    #[arg(long)]
    input: PathBuf,

    /// Absolute path for the cleaned JSON payload (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Optional JSON config overriding rating/review thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Allow downstream persistence instead of a rehearsal run
    #[arg(long)]
    no_dry_run: bool,
}

fn run(cli: Cli) -> Result<ExitCode> {
    if !cli.input.is_absolute() {
        return Err(
            IngestError::InvalidArgument("--input must be an absolute path".to_string()).into(),
        );
    }
    if let Some(output) = &cli.output {
        if !output.is_absolute() {
            return Err(
                IngestError::InvalidArgument("--output must be an absolute path".to_string())
                    .into(),
            );
        }
    }

    let mut config = IngestionConfig::load(cli.config.as_deref())?;
    config.dry_run = !cli.no_dry_run;

    let rows = source::load_rows(&cli.input)?;
    let report = pipeline::ingest(rows, &config);
    let payload = serde_json::to_string_pretty(&report)?;

    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{payload}\n"))?;

            println!("\n📊 Ingestion results for {}:", cli.input.display());
            println!("   Input rows: {}", report.summary.input_rows);
            println!("   After dedupe: {}", report.summary.post_dedupe);
            println!("   Imported: {}", report.summary.imported);
            println!("   Skipped: {}", report.summary.skipped);
            println!("   Output file: {}", path.display());
        }
        None => println!("{payload}"),
    }

    if config.dry_run {
        eprintln!("Dry run complete. No writes were executed. Use --no-dry-run when ready.");
    }

    if report.exceeds_skip_budget() {
        warn!(
            skip_ratio = report.skip_ratio(),
            "more than 15% of rows were skipped"
        );
        eprintln!("⚠️  Warning: more than 15% of rows were skipped. Review the skipped report.");
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    logging::init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("Ingestion run failed: {e}");
            eprintln!("❌ Ingestion failed: {e}");
            ExitCode::FAILURE
        }
    }
}
