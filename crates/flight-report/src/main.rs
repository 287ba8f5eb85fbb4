//! Flight Route Explorer report CLI
//!
//! Loads a CSV export of the dataset and prints the dashboard for one
//! airport and year.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use flight_analytics::{loader, AnalyticsEngine, DEFAULT_TOP_N};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flight-report")]
#[command(about = "Explore historical flight routes by airport and year")]
struct Args {
    /// CSV export of the flight-route dataset
    #[arg(short, long, default_value = "Airports.csv")]
    data: PathBuf,

    /// Airport code (case-sensitive)
    #[arg(short, long, default_value = "ORD")]
    airport: String,

    /// Year to report on
    #[arg(short, long, default_value_t = 2000)]
    year: i32,

    /// Number of airports in the traffic ranking
    #[arg(short, long, default_value_t = DEFAULT_TOP_N, allow_negative_numbers = true)]
    top: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Only list the airports with departures in the selected year
    #[arg(long)]
    list_airports: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("flight_report=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let store = loader::load_from_path(&args.data)
        .with_context(|| format!("failed to load {}", args.data.display()))?;
    let engine = AnalyticsEngine::new(store);

    info!(
        "Dataset: {} records, years {:?}",
        engine.store().len(),
        engine.years()
    );

    if args.list_airports {
        let airports = engine.available_airports(args.year);
        info!("{} airports with departures in {}", airports.len(), args.year);
        for code in airports {
            println!("{code}");
        }
        return Ok(());
    }

    info!("Report: {} ({}), top {}", args.airport, args.year, args.top);
    let output = match args.format {
        Format::Markdown => engine.dashboard_markdown(&args.airport, args.year, args.top)?,
        Format::Json => engine.dashboard_json(&args.airport, args.year, args.top)?,
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["flight-report"]);
        assert_eq!(args.airport, "ORD");
        assert_eq!(args.year, 2000);
        assert_eq!(args.top, 10);
        assert_eq!(args.format, Format::Markdown);
        assert!(!args.list_airports);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "flight-report",
            "--data",
            "routes.csv",
            "-a",
            "ATL",
            "-y",
            "1995",
            "--top",
            "-1",
            "--format",
            "json",
        ]);
        assert_eq!(args.data, PathBuf::from("routes.csv"));
        assert_eq!(args.airport, "ATL");
        assert_eq!(args.year, 1995);
        assert_eq!(args.top, -1);
        assert_eq!(args.format, Format::Json);
    }
}
