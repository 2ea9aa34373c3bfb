//! Output file locations
//!
//! All files live directly under the output root. File names follow the
//! original dataset's naming so downstream consumers keep working:
//! `schedule_{year}`, `qualifying_{year}_all_rounds`,
//! `results_{year}_all_rounds`, `driver_standings_{year}`,
//! `constructor_standings_{year}`, each as `.json` and `.csv`, plus
//! `f1_complete_data_{first}_{last}.json` and
//! `f1_summary_{first}_{last}.json` spanning the whole run.

use std::path::PathBuf;

/// The five per-year resource types that get a JSON/CSV file pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Race calendar with circuit information
    Schedule,
    /// Qualifying classifications for all rounds
    Qualifying,
    /// Race classifications for all rounds
    Results,
    /// Final driver championship standings
    DriverStandings,
    /// Final constructor championship standings
    ConstructorStandings,
}

impl ResourceKind {
    /// File stem for this resource in the given year.
    pub fn file_stem(&self, year: u32) -> String {
        match self {
            ResourceKind::Schedule => format!("schedule_{year}"),
            ResourceKind::Qualifying => format!("qualifying_{year}_all_rounds"),
            ResourceKind::Results => format!("results_{year}_all_rounds"),
            ResourceKind::DriverStandings => format!("driver_standings_{year}"),
            ResourceKind::ConstructorStandings => format!("constructor_standings_{year}"),
        }
    }
}

/// Resolves output file paths under a root directory.
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Create a layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// JSON path for a (year, resource) pair.
    pub fn json_path(&self, year: u32, kind: ResourceKind) -> PathBuf {
        self.root.join(format!("{}.json", kind.file_stem(year)))
    }

    /// CSV path for a (year, resource) pair.
    pub fn csv_path(&self, year: u32, kind: ResourceKind) -> PathBuf {
        self.root.join(format!("{}.csv", kind.file_stem(year)))
    }

    /// Path of the complete aggregated dataset spanning the run.
    pub fn complete_dataset_path(&self, first_year: u32, last_year: u32) -> PathBuf {
        self.root
            .join(format!("f1_complete_data_{first_year}_{last_year}.json"))
    }

    /// Path of the derived summary file spanning the run.
    pub fn summary_path(&self, first_year: u32, last_year: u32) -> PathBuf {
        self.root
            .join(format!("f1_summary_{first_year}_{last_year}.json"))
    }
}
