//! # F1 Season Data Downloader Library
//!
//! A batch downloader for Formula 1 season data from an Ergast-style public
//! statistics API. For each configured season it aggregates the race
//! calendar, per-round qualifying and race results, and the final
//! championship standings into a [`Season`] structure, derives summary
//! statistics from it, and persists everything as JSON and CSV files.
//!
//! ## Architecture
//!
//! The library is organized into several core modules:
//!
//! - [`fetcher`] - HTTP client and per-resource fetchers for the upstream API
//! - [`aggregator`] - Season aggregation pipeline with partial-failure tolerance
//! - [`summary`] - Pure derivation of per-season summary statistics
//! - [`output`] - JSON and CSV persistence with fixed column schemas
//! - [`pacing`] - Minimum inter-call interval between upstream requests
//! - [`config`] - Run constants (base URL, year range, pacing, timeouts)
//!
//! ## Failure model
//!
//! Nothing in the pipeline is fatal by design. A non-success HTTP status or
//! a malformed response means "no data for this resource"; an error while
//! processing one round skips that round and the season proceeds; a
//! standings error degrades to empty standings. The worst outcome of a run
//! is an incomplete output file.

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Season aggregation pipeline
pub mod aggregator;

/// Run configuration constants
pub mod config;

/// Upstream API client and resource fetchers
pub mod fetcher;

/// JSON and CSV persistence
pub mod output;

/// Request pacing
pub mod pacing;

/// Per-season summary statistics
pub mod summary;

/// A single qualifying classification entry.
///
/// Ordered by classified position ascending in the source data. A missing
/// position signals that the driver did not classify.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualifyingResult {
    /// Classified position ("1", "2", ...), absent if not classified
    pub position: Option<String>,
    /// Driver full name (given name + family name)
    pub driver_name: String,
    /// Constructor name
    pub constructor_name: String,
    /// Q1 lap time, if set
    pub q1: Option<String>,
    /// Q2 lap time, if the driver advanced
    pub q2: Option<String>,
    /// Q3 lap time, if the driver advanced
    pub q3: Option<String>,
}

/// A single race classification entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceResult {
    /// Finishing position ("1", "2", ...), absent if not classified
    pub position: Option<String>,
    /// Driver full name (given name + family name)
    pub driver_name: String,
    /// Constructor name
    pub constructor_name: String,
    /// Championship points scored, decimal-as-string as on the wire
    pub points: String,
    /// Finishing status (e.g. "Finished", "+1 Lap", "Collision")
    pub status: String,
    /// Grid position at the start
    pub grid: String,
    /// Laps completed
    pub laps: String,
    /// Fastest lap time, if one was recorded
    pub fastest_lap_time: Option<String>,
}

/// Circuit descriptor for a race event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Circuit {
    /// Circuit name
    pub name: String,
    /// Locality (city/town)
    pub locality: String,
    /// Country name
    pub country: String,
    /// Latitude, decimal-as-string as on the wire
    pub latitude: String,
    /// Longitude, decimal-as-string as on the wire
    pub longitude: String,
}

/// One race weekend within a season.
///
/// The round number is the natural key within a [`Season`]: 1-based and
/// contiguous in the upstream schedule, though aggregated seasons may have
/// gaps where a round failed to fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    /// Round number, 1-based
    pub round: u32,
    /// Race name (e.g. "Monaco Grand Prix")
    pub name: String,
    /// Race date
    pub date: NaiveDate,
    /// Scheduled start time, if published
    pub time: Option<String>,
    /// Circuit descriptor
    pub circuit: Circuit,
    /// Qualifying classification, empty for future or cancelled rounds
    pub qualifying: Vec<QualifyingResult>,
    /// Race classification, empty for future or cancelled rounds
    pub results: Vec<RaceResult>,
}

/// A race event from the season schedule, before its sub-resources have
/// been fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledRace {
    /// Round number, 1-based
    pub round: u32,
    /// Race name
    pub name: String,
    /// Race date
    pub date: NaiveDate,
    /// Scheduled start time, if published
    pub time: Option<String>,
    /// Circuit descriptor
    pub circuit: Circuit,
}

impl ScheduledRace {
    /// Attach fetched sub-resources, producing a complete [`Round`].
    pub fn into_round(
        self,
        qualifying: Vec<QualifyingResult>,
        results: Vec<RaceResult>,
    ) -> Round {
        Round {
            round: self.round,
            name: self.name,
            date: self.date,
            time: self.time,
            circuit: self.circuit,
            qualifying,
            results,
        }
    }
}

/// A ranked entry in the driver championship table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriverStanding {
    /// Rank, 1-based, as on the wire ("1", "2", ...)
    pub position: String,
    /// Driver full name
    pub driver_name: String,
    /// Constructor the driver is listed under
    pub constructor_name: String,
    /// Points total, decimal-as-string as on the wire
    pub points: String,
    /// Race wins
    pub wins: String,
}

/// A ranked entry in the constructor championship table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConstructorStanding {
    /// Rank, 1-based, as on the wire ("1", "2", ...)
    pub position: String,
    /// Constructor name
    pub constructor_name: String,
    /// Points total, decimal-as-string as on the wire
    pub points: String,
    /// Race wins
    pub wins: String,
}

/// One fully aggregated season.
///
/// Immutable after aggregation completes; the summary deriver treats it as
/// read-only input and every persisted artifact is a function of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Season {
    /// Season year
    pub year: u32,
    /// Aggregated rounds, ordered by round number ascending
    pub rounds: Vec<Round>,
    /// Final driver standings snapshot, possibly empty
    pub driver_standings: Vec<DriverStanding>,
    /// Final constructor standings snapshot, possibly empty
    pub constructor_standings: Vec<ConstructorStanding>,
}

impl Season {
    /// Create an empty season shell for the given year.
    pub fn new(year: u32) -> Self {
        Self {
            year,
            rounds: Vec::new(),
            driver_standings: Vec::new(),
            constructor_standings: Vec::new(),
        }
    }

    /// Number of aggregated rounds.
    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }
}
