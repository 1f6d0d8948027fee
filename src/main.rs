//! CLI entry point for the F1 metrics exporter.
//!
//! Each subcommand builds one chart CSV from the historical results tables;
//! `all` builds every chart in turn.

use anyhow::Result;
use clap::{Parser, Subcommand};
use f1_metrics::charts::{self, Chart};
use f1_metrics::config::{self, DEFAULT_DATA_DIR, DEFAULT_OUT_DIR, DataDir};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "f1_metrics")]
#[command(about = "Aggregate F1 results into chart-ready CSV files", long_about = None)]
struct Cli {
    /// Directory containing the input CSV tables
    #[arg(short, long, global = true, env = "F1_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Directory the chart CSVs are written to
    #[arg(short, long, global = true, env = "F1_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-season driver points, wins and poles (chart1.csv)
    DriverSeasons,
    /// Per-season constructor points, wins and poles (chart2.csv)
    ConstructorSeasons,
    /// Career driver metrics for the heatmap (heatmap_metrics.csv)
    DriverCareer,
    /// Drivers' championships won (championships_radial.csv)
    DriverChampionships,
    /// Constructors' championships won (constructor_championships_radial.csv)
    ConstructorChampionships,
    /// Build every chart
    All,
}

impl Commands {
    fn charts(&self) -> Vec<Chart> {
        match self {
            Commands::DriverSeasons => vec![Chart::DriverSeasons],
            Commands::ConstructorSeasons => vec![Chart::ConstructorSeasons],
            Commands::DriverCareer => vec![Chart::DriverCareer],
            Commands::DriverChampionships => vec![Chart::DriverChampionships],
            Commands::ConstructorChampionships => vec![Chart::ConstructorChampionships],
            Commands::All => Chart::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = config::log_file_path();
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("f1_metrics.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let data = DataDir::new(cli.data_dir);

    std::fs::create_dir_all(&cli.out_dir)?;

    for chart in cli.command.charts() {
        let path = charts::run(chart, &data, &cli.out_dir)?;
        info!(chart = ?chart, path = %path.display(), "Wrote chart");
    }

    Ok(())
}
