//! JSON output
//!
//! Pretty-printed JSON mirroring the aggregated structures. Key order is
//! stable: struct fields serialize in declaration order and counter maps
//! are `BTreeMap`s.

use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

use super::{OutputError, OutputResult};
use crate::{QualifyingResult, RaceResult, Round, ScheduledRace};

/// Serialize a value as pretty JSON, creating parent directories as
/// needed.
pub fn write_json<T, P>(path: P, value: &T) -> OutputResult<()>
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
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value)
        .map_err(|e| OutputError::Json(format!("failed to serialize {}: {e}", path.display())))?;

    debug!("wrote {}", path.display());
    Ok(())
}

/// Schedule entry for a round, with the sub-resources stripped.
pub fn schedule_entry(round: &Round) -> ScheduledRace {
    ScheduledRace {
        round: round.round,
        name: round.name.clone(),
        date: round.date,
        time: round.time.clone(),
        circuit: round.circuit.clone(),
    }
}

/// Per-round qualifying view for the qualifying JSON file.
#[derive(Debug, Serialize)]
pub struct RoundQualifying<'a> {
    /// Season year
    pub year: u32,
    /// Round number
    pub round: u32,
    /// Race name
    pub name: &'a str,
    /// Race date
    pub date: NaiveDate,
    /// Qualifying classification
    pub qualifying: &'a [QualifyingResult],
}

impl<'a> RoundQualifying<'a> {
    /// Borrow the qualifying view of a round.
    pub fn new(year: u32, round: &'a Round) -> Self {
        Self {
            year,
            round: round.round,
            name: &round.name,
            date: round.date,
            qualifying: &round.qualifying,
        }
    }
}

/// Per-round results view for the results JSON file.
#[derive(Debug, Serialize)]
pub struct RoundResults<'a> {
    /// Season year
    pub year: u32,
    /// Round number
    pub round: u32,
    /// Race name
    pub name: &'a str,
    /// Race date
    pub date: NaiveDate,
    /// Race classification
    pub results: &'a [RaceResult],
}

impl<'a> RoundResults<'a> {
    /// Borrow the results view of a round.
    pub fn new(year: u32, round: &'a Round) -> Self {
        Self {
            year,
            round: round.round,
            name: &round.name,
            date: round.date,
            results: &round.results,
        }
    }
}
