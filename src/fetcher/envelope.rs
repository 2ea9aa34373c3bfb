//! Wire model for the upstream API envelope
//!
//! Every response is wrapped in a fixed `MRData` envelope containing either
//! a `RaceTable` (schedule, qualifying, results) or a `StandingsTable`
//! (driver/constructor standings). Every collection field carries
//! `#[serde(default)]` so an absent key at any nesting level deserializes
//! to empty data instead of failing: "no data for this round/year" is a
//! normal condition, not an error.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use crate::{
    Circuit, ConstructorStanding, DriverStanding, QualifyingResult, RaceResult, ScheduledRace,
};

/// Top-level document wrapping a race table.
#[derive(Debug, Default, Deserialize)]
pub struct RaceDocument {
    /// The fixed envelope object
    #[serde(rename = "MRData", default)]
    pub mr_data: RaceEnvelope,
}

/// `MRData` payload for race-table responses.
#[derive(Debug, Default, Deserialize)]
pub struct RaceEnvelope {
    /// Race table, absent for malformed responses
    #[serde(rename = "RaceTable", default)]
    pub race_table: RaceTable,
}

/// Race table holding zero or more race entries.
#[derive(Debug, Default, Deserialize)]
pub struct RaceTable {
    /// Race entries; the schedule endpoint returns one per round, the
    /// per-round endpoints return at most one
    #[serde(rename = "Races", default)]
    pub races: Vec<WireRace>,
}

impl RaceDocument {
    /// Consume the document and return its race entries.
    pub fn into_races(self) -> Vec<WireRace> {
        self.mr_data.race_table.races
    }
}

/// One race entry as it appears on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireRace {
    /// Season year as a string
    #[serde(default)]
    pub season: String,
    /// Round number as a string
    #[serde(default)]
    pub round: String,
    /// Race name
    #[serde(rename = "raceName", default)]
    pub race_name: String,
    /// Race date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    /// Scheduled start time, if published
    #[serde(default)]
    pub time: Option<String>,
    /// Circuit descriptor
    #[serde(rename = "Circuit", default)]
    pub circuit: WireCircuit,
    /// Qualifying classification (per-round qualifying endpoint only)
    #[serde(rename = "QualifyingResults", default)]
    pub qualifying_results: Vec<WireQualifyingResult>,
    /// Race classification (per-round results endpoint only)
    #[serde(rename = "Results", default)]
    pub results: Vec<WireRaceResult>,
}

impl WireRace {
    /// Convert into a schedule entry.
    ///
    /// Returns `None` if the round number or date is malformed; the entry
    /// is then dropped from the schedule with a warning.
    pub fn into_scheduled(self) -> Option<ScheduledRace> {
        let round = match self.round.parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                warn!(
                    "dropping schedule entry '{}' with malformed round number '{}'",
                    self.race_name, self.round
                );
                return None;
            }
        };
        let date = match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                warn!(
                    "dropping schedule entry '{}' with malformed date '{}'",
                    self.race_name, self.date
                );
                return None;
            }
        };

        Some(ScheduledRace {
            round,
            name: self.race_name,
            date,
            time: self.time,
            circuit: self.circuit.into_circuit(),
        })
    }
}

/// Circuit descriptor on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireCircuit {
    /// Circuit name
    #[serde(rename = "circuitName", default)]
    pub circuit_name: String,
    /// Geographic location
    #[serde(rename = "Location", default)]
    pub location: WireLocation,
}

impl WireCircuit {
    fn into_circuit(self) -> Circuit {
        Circuit {
            name: self.circuit_name,
            locality: self.location.locality,
            country: self.location.country,
            latitude: self.location.lat,
            longitude: self.location.long,
        }
    }
}

/// Circuit location on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireLocation {
    /// Locality (city/town)
    #[serde(default)]
    pub locality: String,
    /// Country name
    #[serde(default)]
    pub country: String,
    /// Latitude, decimal-as-string
    #[serde(default)]
    pub lat: String,
    /// Longitude, decimal-as-string
    #[serde(default)]
    pub long: String,
}

/// Driver reference on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireDriver {
    /// Given name
    #[serde(rename = "givenName", default)]
    pub given_name: String,
    /// Family name
    #[serde(rename = "familyName", default)]
    pub family_name: String,
}

impl WireDriver {
    /// Full display name, `"{given} {family}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// Constructor reference on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireConstructor {
    /// Constructor name
    #[serde(default)]
    pub name: String,
}

/// Qualifying classification entry on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireQualifyingResult {
    /// Classified position, absent if the driver did not classify
    #[serde(default)]
    pub position: Option<String>,
    /// Driver reference
    #[serde(rename = "Driver", default)]
    pub driver: WireDriver,
    /// Constructor reference
    #[serde(rename = "Constructor", default)]
    pub constructor: WireConstructor,
    /// Q1 lap time
    #[serde(rename = "Q1", default)]
    pub q1: Option<String>,
    /// Q2 lap time
    #[serde(rename = "Q2", default)]
    pub q2: Option<String>,
    /// Q3 lap time
    #[serde(rename = "Q3", default)]
    pub q3: Option<String>,
}

impl From<WireQualifyingResult> for QualifyingResult {
    fn from(wire: WireQualifyingResult) -> Self {
        Self {
            position: wire.position,
            driver_name: wire.driver.full_name(),
            constructor_name: wire.constructor.name,
            q1: wire.q1,
            q2: wire.q2,
            q3: wire.q3,
        }
    }
}

/// Race classification entry on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireRaceResult {
    /// Finishing position, absent if the driver did not classify
    #[serde(default)]
    pub position: Option<String>,
    /// Championship points scored
    #[serde(default)]
    pub points: String,
    /// Finishing status
    #[serde(default)]
    pub status: String,
    /// Grid position
    #[serde(default)]
    pub grid: String,
    /// Laps completed
    #[serde(default)]
    pub laps: String,
    /// Driver reference
    #[serde(rename = "Driver", default)]
    pub driver: WireDriver,
    /// Constructor reference
    #[serde(rename = "Constructor", default)]
    pub constructor: WireConstructor,
    /// Fastest lap, if one was recorded
    #[serde(rename = "FastestLap", default)]
    pub fastest_lap: Option<WireFastestLap>,
}

/// Fastest lap block on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireFastestLap {
    /// Lap time wrapper
    #[serde(rename = "Time", default)]
    pub time: Option<WireLapTime>,
}

/// Lap time wrapper on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireLapTime {
    /// Lap time string (e.g. "1:30.734")
    #[serde(default)]
    pub time: String,
}

impl From<WireRaceResult> for RaceResult {
    fn from(wire: WireRaceResult) -> Self {
        let fastest_lap_time = wire
            .fastest_lap
            .and_then(|fl| fl.time)
            .map(|t| t.time);
        Self {
            position: wire.position,
            driver_name: wire.driver.full_name(),
            constructor_name: wire.constructor.name,
            points: wire.points,
            status: wire.status,
            grid: wire.grid,
            laps: wire.laps,
            fastest_lap_time,
        }
    }
}

/// Top-level document wrapping a standings table.
#[derive(Debug, Default, Deserialize)]
pub struct StandingsDocument {
    /// The fixed envelope object
    #[serde(rename = "MRData", default)]
    pub mr_data: StandingsEnvelope,
}

/// `MRData` payload for standings responses.
#[derive(Debug, Default, Deserialize)]
pub struct StandingsEnvelope {
    /// Standings table, absent for malformed responses
    #[serde(rename = "StandingsTable", default)]
    pub standings_table: StandingsTable,
}

/// Standings table holding chronologically ordered snapshots.
#[derive(Debug, Default, Deserialize)]
pub struct StandingsTable {
    /// Standings snapshots; the last one is the most recent
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<WireStandingsList>,
}

impl StandingsDocument {
    /// Consume the document and return the final (last) standings
    /// snapshot, if any snapshot exists.
    pub fn into_final_snapshot(self) -> Option<WireStandingsList> {
        let mut snapshots = self.mr_data.standings_table.standings_lists;
        snapshots.pop()
    }
}

/// One standings snapshot on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireStandingsList {
    /// Driver standings (driver-standings endpoint only)
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<WireDriverStanding>,
    /// Constructor standings (constructor-standings endpoint only)
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<WireConstructorStanding>,
}

/// Driver standing entry on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireDriverStanding {
    /// Rank, 1-based
    #[serde(default)]
    pub position: String,
    /// Points total
    #[serde(default)]
    pub points: String,
    /// Race wins
    #[serde(default)]
    pub wins: String,
    /// Driver reference
    #[serde(rename = "Driver", default)]
    pub driver: WireDriver,
    /// Constructors the driver drove for, most recent last
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<WireConstructor>,
}

impl From<WireDriverStanding> for DriverStanding {
    fn from(wire: WireDriverStanding) -> Self {
        // The standings table lists the driver under the first constructor
        let constructor_name = wire
            .constructors
            .into_iter()
            .next()
            .map(|c| c.name)
            .unwrap_or_default();
        Self {
            position: wire.position,
            driver_name: wire.driver.full_name(),
            constructor_name,
            points: wire.points,
            wins: wire.wins,
        }
    }
}

/// Constructor standing entry on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct WireConstructorStanding {
    /// Rank, 1-based
    #[serde(default)]
    pub position: String,
    /// Points total
    #[serde(default)]
    pub points: String,
    /// Race wins
    #[serde(default)]
    pub wins: String,
    /// Constructor reference
    #[serde(rename = "Constructor", default)]
    pub constructor: WireConstructor,
}

impl From<WireConstructorStanding> for ConstructorStanding {
    fn from(wire: WireConstructorStanding) -> Self {
        Self {
            position: wire.position,
            constructor_name: wire.constructor.name,
            points: wire.points,
            wins: wire.wins,
        }
    }
}
