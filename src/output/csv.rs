//! CSV output with fixed column schemas
//!
//! Each resource type flattens into rows under a fixed, explicit header
//! list. The header row is written unconditionally - an empty resource
//! still produces a file with headers - and missing optional fields write
//! as an empty string, never an omitted column.

use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

use super::{OutputError, OutputResult};
use crate::Season;

/// Column headers for the schedule CSV.
pub const SCHEDULE_HEADERS: &[&str] = &[
    "year",
    "round",
    "raceName",
    "date",
    "time",
    "circuitName",
    "locality",
    "country",
    "lat",
    "long",
];

/// Column headers for the qualifying CSV.
pub const QUALIFYING_HEADERS: &[&str] = &[
    "year",
    "round",
    "raceName",
    "date",
    "driverName",
    "constructorName",
    "position",
    "Q1",
    "Q2",
    "Q3",
];

/// Column headers for the race results CSV.
pub const RESULT_HEADERS: &[&str] = &[
    "year",
    "round",
    "raceName",
    "date",
    "driverName",
    "constructorName",
    "position",
    "points",
    "status",
    "grid",
    "laps",
    "fastestLapTime",
];

/// Column headers for the driver standings CSV.
pub const DRIVER_STANDING_HEADERS: &[&str] =
    &["year", "position", "driverName", "constructorName", "points", "wins"];

/// Column headers for the constructor standings CSV.
pub const CONSTRUCTOR_STANDING_HEADERS: &[&str] =
    &["year", "position", "constructorName", "points", "wins"];

/// One schedule CSV row.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ScheduleRecord {
    year: u32,
    round: u32,
    race_name: String,
    date: String,
    time: String,
    circuit_name: String,
    locality: String,
    country: String,
    lat: String,
    long: String,
}

/// One qualifying CSV row.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct QualifyingRecord {
    year: u32,
    round: u32,
    race_name: String,
    date: String,
    driver_name: String,
    constructor_name: String,
    position: String,
    q1: String,
    q2: String,
    q3: String,
}

/// One race result CSV row.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ResultRecord {
    year: u32,
    round: u32,
    race_name: String,
    date: String,
    driver_name: String,
    constructor_name: String,
    position: String,
    points: String,
    status: String,
    grid: String,
    laps: String,
    fastest_lap_time: String,
}

/// One driver standing CSV row.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DriverStandingRecord {
    year: u32,
    position: String,
    driver_name: String,
    constructor_name: String,
    points: String,
    wins: String,
}

/// One constructor standing CSV row.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConstructorStandingRecord {
    year: u32,
    position: String,
    constructor_name: String,
    points: String,
    wins: String,
}

/// Build schedule rows, one per round.
pub fn schedule_records(season: &Season) -> Vec<ScheduleRecord> {
    season
        .rounds
        .iter()
        .map(|round| ScheduleRecord {
            year: season.year,
            round: round.round,
            race_name: round.name.clone(),
            date: round.date.to_string(),
            time: round.time.clone().unwrap_or_default(),
            circuit_name: round.circuit.name.clone(),
            locality: round.circuit.locality.clone(),
            country: round.circuit.country.clone(),
            lat: round.circuit.latitude.clone(),
            long: round.circuit.longitude.clone(),
        })
        .collect()
}

/// Build qualifying rows, one per classification entry per round.
pub fn qualifying_records(season: &Season) -> Vec<QualifyingRecord> {
    season
        .rounds
        .iter()
        .flat_map(|round| {
            round.qualifying.iter().map(|entry| QualifyingRecord {
                year: season.year,
                round: round.round,
                race_name: round.name.clone(),
                date: round.date.to_string(),
                driver_name: entry.driver_name.clone(),
                constructor_name: entry.constructor_name.clone(),
                position: entry.position.clone().unwrap_or_default(),
                q1: entry.q1.clone().unwrap_or_default(),
                q2: entry.q2.clone().unwrap_or_default(),
                q3: entry.q3.clone().unwrap_or_default(),
            })
        })
        .collect()
}

/// Build race result rows, one per classification entry per round.
pub fn result_records(season: &Season) -> Vec<ResultRecord> {
    season
        .rounds
        .iter()
        .flat_map(|round| {
            round.results.iter().map(|entry| ResultRecord {
                year: season.year,
                round: round.round,
                race_name: round.name.clone(),
                date: round.date.to_string(),
                driver_name: entry.driver_name.clone(),
                constructor_name: entry.constructor_name.clone(),
                position: entry.position.clone().unwrap_or_default(),
                points: entry.points.clone(),
                status: entry.status.clone(),
                grid: entry.grid.clone(),
                laps: entry.laps.clone(),
                fastest_lap_time: entry.fastest_lap_time.clone().unwrap_or_default(),
            })
        })
        .collect()
}

/// Build driver standing rows.
pub fn driver_standing_records(season: &Season) -> Vec<DriverStandingRecord> {
    season
        .driver_standings
        .iter()
        .map(|standing| DriverStandingRecord {
            year: season.year,
            position: standing.position.clone(),
            driver_name: standing.driver_name.clone(),
            constructor_name: standing.constructor_name.clone(),
            points: standing.points.clone(),
            wins: standing.wins.clone(),
        })
        .collect()
}

/// Build constructor standing rows.
pub fn constructor_standing_records(season: &Season) -> Vec<ConstructorStandingRecord> {
    season
        .constructor_standings
        .iter()
        .map(|standing| ConstructorStandingRecord {
            year: season.year,
            position: standing.position.clone(),
            constructor_name: standing.constructor_name.clone(),
            points: standing.points.clone(),
            wins: standing.wins.clone(),
        })
        .collect()
}

/// Write records under an explicit header row.
///
/// Creates parent directories as needed. Returns the number of data rows
/// written (excluding the header).
pub fn write_records<T, P>(path: P, headers: &[&str], records: &[T]) -> OutputResult<u64>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| OutputError::Io(format!("failed to create directory: {e}")))?;
    }

    let file = File::create(path)
        .map_err(|e| OutputError::Io(format!("failed to create {}: {e}", path.display())))?;
    let buf_writer = BufWriter::new(file);

    // The header is written explicitly so empty resources still produce a
    // header row; serialization then runs headerless.
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(buf_writer);

    writer
        .write_record(headers)
        .map_err(|e| OutputError::Csv(format!("failed to write header: {e}")))?;

    let mut rows = 0u64;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| OutputError::Csv(format!("failed to write row: {e}")))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| OutputError::Io(format!("failed to flush: {e}")))?;

    debug!("wrote {rows} rows to {}", path.display());
    Ok(rows)
}
