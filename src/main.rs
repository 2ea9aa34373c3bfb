//! Main entry point for the F1 season data downloader

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use f1_data_downloader::aggregator::{AggregationReport, SeasonAggregator};
use f1_data_downloader::config;
use f1_data_downloader::fetcher::ergast::ErgastFetcher;
use f1_data_downloader::output::SeasonWriter;
use f1_data_downloader::summary::derive_summary;

/// Initialize tracing subscriber with optional JSON formatting
fn init_tracing() {
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("f1_data_downloader=info"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run() -> anyhow::Result<()> {
    let fetcher = ErgastFetcher::new().context("failed to construct the upstream fetcher")?;
    let mut aggregator = SeasonAggregator::new(fetcher);
    let writer = SeasonWriter::new(config::OUTPUT_DIR);

    let mut seasons = Vec::new();
    let mut summaries = Vec::new();
    let mut reports: Vec<AggregationReport> = Vec::new();

    for year in config::YEARS {
        info!("processing year {year}");
        let (season, report) = aggregator.aggregate(year).await;

        writer
            .write_season_files(&season)
            .with_context(|| format!("failed to write {year} output files"))?;

        summaries.push(derive_summary(&season));
        seasons.push(season);
        reports.push(report);
    }

    let complete_path = writer
        .write_complete_dataset(&seasons)
        .context("failed to write the complete dataset")?;
    let summary_path = writer
        .write_summaries(&summaries)
        .context("failed to write the summary file")?;

    for report in &reports {
        if report.is_complete() {
            info!(
                "{}: {} of {} rounds aggregated",
                report.year, report.aggregated_rounds, report.scheduled_rounds
            );
        } else {
            info!(
                "{}: {} of {} rounds aggregated, skipped rounds {:?}",
                report.year,
                report.aggregated_rounds,
                report.scheduled_rounds,
                report.skipped_rounds
            );
        }
    }
    info!(
        "complete dataset at {}, summaries at {}",
        complete_path.display(),
        summary_path.display()
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        error!("run failed: {e:#}");
        std::process::exit(1);
    }
}
