//! JSON and CSV persistence
//!
//! One JSON/CSV file pair per (year, resource type), plus the cross-year
//! complete dataset and summary files. JSON mirrors the aggregated
//! structure with stable key order; CSV flattens each resource into rows
//! under a fixed, explicit header.

use std::path::PathBuf;
use tracing::info;

use crate::summary::SeasonSummary;
use crate::Season;

pub mod csv;
pub mod json;
pub mod path;

use self::path::{OutputLayout, ResourceKind};

/// Output writer errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// CSV write error
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes all persisted artifacts for aggregated seasons.
pub struct SeasonWriter {
    layout: OutputLayout,
}

impl SeasonWriter {
    /// Create a writer rooted at the given output directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: OutputLayout::new(root),
        }
    }

    /// Write the five JSON/CSV file pairs for one season.
    ///
    /// Returns the paths written, in a fixed order (schedule, qualifying,
    /// results, driver standings, constructor standings; JSON before CSV).
    pub fn write_season_files(&self, season: &Season) -> OutputResult<Vec<PathBuf>> {
        let year = season.year;
        let mut written = Vec::new();

        // Schedule
        let schedule: Vec<_> = season.rounds.iter().map(self::json::schedule_entry).collect();
        let json_path = self.layout.json_path(year, ResourceKind::Schedule);
        self::json::write_json(&json_path, &schedule)?;
        written.push(json_path);
        let csv_path = self.layout.csv_path(year, ResourceKind::Schedule);
        self::csv::write_records(&csv_path, self::csv::SCHEDULE_HEADERS, &self::csv::schedule_records(season))?;
        written.push(csv_path);

        // Qualifying
        let qualifying: Vec<_> = season
            .rounds
            .iter()
            .map(|round| self::json::RoundQualifying::new(year, round))
            .collect();
        let json_path = self.layout.json_path(year, ResourceKind::Qualifying);
        self::json::write_json(&json_path, &qualifying)?;
        written.push(json_path);
        let csv_path = self.layout.csv_path(year, ResourceKind::Qualifying);
        self::csv::write_records(
            &csv_path,
            self::csv::QUALIFYING_HEADERS,
            &self::csv::qualifying_records(season),
        )?;
        written.push(csv_path);

        // Results
        let results: Vec<_> = season
            .rounds
            .iter()
            .map(|round| self::json::RoundResults::new(year, round))
            .collect();
        let json_path = self.layout.json_path(year, ResourceKind::Results);
        self::json::write_json(&json_path, &results)?;
        written.push(json_path);
        let csv_path = self.layout.csv_path(year, ResourceKind::Results);
        self::csv::write_records(&csv_path, self::csv::RESULT_HEADERS, &self::csv::result_records(season))?;
        written.push(csv_path);

        // Driver standings
        let json_path = self.layout.json_path(year, ResourceKind::DriverStandings);
        self::json::write_json(&json_path, &season.driver_standings)?;
        written.push(json_path);
        let csv_path = self.layout.csv_path(year, ResourceKind::DriverStandings);
        self::csv::write_records(
            &csv_path,
            self::csv::DRIVER_STANDING_HEADERS,
            &self::csv::driver_standing_records(season),
        )?;
        written.push(csv_path);

        // Constructor standings
        let json_path = self.layout.json_path(year, ResourceKind::ConstructorStandings);
        self::json::write_json(&json_path, &season.constructor_standings)?;
        written.push(json_path);
        let csv_path = self.layout.csv_path(year, ResourceKind::ConstructorStandings);
        self::csv::write_records(
            &csv_path,
            self::csv::CONSTRUCTOR_STANDING_HEADERS,
            &self::csv::constructor_standing_records(season),
        )?;
        written.push(csv_path);

        info!("{year}: wrote {} files", written.len());
        Ok(written)
    }

    /// Write the complete aggregated dataset across all seasons.
    pub fn write_complete_dataset(&self, seasons: &[Season]) -> OutputResult<PathBuf> {
        let (first, last) = Self::year_span(seasons.iter().map(|s| s.year));
        let path = self.layout.complete_dataset_path(first, last);
        self::json::write_json(&path, &seasons)?;
        Ok(path)
    }

    /// Write the derived summaries across all seasons.
    pub fn write_summaries(&self, summaries: &[SeasonSummary]) -> OutputResult<PathBuf> {
        let (first, last) = Self::year_span(summaries.iter().map(|s| s.year));
        let path = self.layout.summary_path(first, last);
        self::json::write_json(&path, &summaries)?;
        Ok(path)
    }

    fn year_span(years: impl Iterator<Item = u32>) -> (u32, u32) {
        let mut first = u32::MAX;
        let mut last = 0;
        for year in years {
            first = first.min(year);
            last = last.max(year);
        }
        if first == u32::MAX {
            (0, 0)
        } else {
            (first, last)
        }
    }
}
