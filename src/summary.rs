//! Per-season summary statistics
//!
//! A pure, single-pass derivation over an aggregated [`Season`]: champions
//! from the standings, plus races-by-country, pole-position and race-win
//! tallies from the rounds. Recomputable at any time from the season data;
//! nothing here is independently mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Season;

/// Placeholder name used when no champion can be determined (e.g. the
/// season is still in progress and no standing holds position 1).
pub const CHAMPION_PLACEHOLDER: &str = "TBD";

/// Champion entry, either resolved from the standings or the placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChampionEntry {
    /// Driver full name or constructor name
    pub name: String,
    /// Points total, decimal-as-string as on the wire
    pub points: String,
    /// Race wins
    pub wins: String,
}

impl ChampionEntry {
    /// The well-defined placeholder: `TBD` with zero points and wins.
    pub fn placeholder() -> Self {
        Self {
            name: CHAMPION_PLACEHOLDER.to_string(),
            points: "0".to_string(),
            wins: "0".to_string(),
        }
    }
}

/// Derived summary statistics for one season.
///
/// Counter maps are `BTreeMap` so serialized output has stable key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonSummary {
    /// Season year
    pub year: u32,
    /// Number of aggregated rounds
    pub total_races: usize,
    /// Driver champion, or the placeholder
    pub champion: ChampionEntry,
    /// Constructor champion, or the placeholder
    pub constructor_champion: ChampionEntry,
    /// Race count per circuit country
    pub races_by_country: BTreeMap<String, u32>,
    /// Pole-position count per driver (first qualifying entry per round)
    pub pole_positions: BTreeMap<String, u32>,
    /// Race-win count per driver (first result entry per round)
    pub race_wins: BTreeMap<String, u32>,
}

/// Derive the summary for a season.
///
/// Champions are selected by exact string equality on `position == "1"`;
/// if no entry matches (incomplete season, empty standings) the
/// placeholder is substituted. The tallies are built in one pass over the
/// rounds, so no round is ever counted twice: every round contributes one
/// count to `races_by_country`, and rounds with a non-empty qualifying or
/// results list contribute one count to the pole or win tally.
pub fn derive_summary(season: &Season) -> SeasonSummary {
    let champion = season
        .driver_standings
        .iter()
        .find(|standing| standing.position == "1")
        .map(|standing| ChampionEntry {
            name: standing.driver_name.clone(),
            points: standing.points.clone(),
            wins: standing.wins.clone(),
        })
        .unwrap_or_else(ChampionEntry::placeholder);

    let constructor_champion = season
        .constructor_standings
        .iter()
        .find(|standing| standing.position == "1")
        .map(|standing| ChampionEntry {
            name: standing.constructor_name.clone(),
            points: standing.points.clone(),
            wins: standing.wins.clone(),
        })
        .unwrap_or_else(ChampionEntry::placeholder);

    let mut races_by_country: BTreeMap<String, u32> = BTreeMap::new();
    let mut pole_positions: BTreeMap<String, u32> = BTreeMap::new();
    let mut race_wins: BTreeMap<String, u32> = BTreeMap::new();

    for round in &season.rounds {
        *races_by_country
            .entry(round.circuit.country.clone())
            .or_insert(0) += 1;

        // The classification is ordered by position; the first qualifying
        // entry is the pole-sitter, the first result entry the winner.
        if let Some(pole_sitter) = round.qualifying.first() {
            *pole_positions
                .entry(pole_sitter.driver_name.clone())
                .or_insert(0) += 1;
        }
        if let Some(winner) = round.results.first() {
            *race_wins.entry(winner.driver_name.clone()).or_insert(0) += 1;
        }
    }

    SeasonSummary {
        year: season.year,
        total_races: season.rounds.len(),
        champion,
        constructor_champion,
        races_by_country,
        pole_positions,
        race_wins,
    }
}
