//! Season aggregation pipeline
//!
//! Walks a year's race calendar, fetches per-round qualifying and race
//! results sequentially, and assembles the per-year [`Season`] together
//! with the final championship standings. Failures are tolerated at two
//! boundaries: an error for an individual round skips that round and the
//! season proceeds with whatever rounds succeeded, and a standings error
//! degrades to empty standings. Aggregation itself never fails.

use tracing::{info, warn};

use crate::fetcher::SeasonDataSource;
use crate::Season;

/// Outcome of aggregating one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationReport {
    /// Season year
    pub year: u32,
    /// Rounds on the upstream schedule
    pub scheduled_rounds: usize,
    /// Rounds successfully aggregated
    pub aggregated_rounds: usize,
    /// Round numbers skipped after a fetch error
    pub skipped_rounds: Vec<u32>,
}

impl AggregationReport {
    /// True if every scheduled round was aggregated.
    pub fn is_complete(&self) -> bool {
        self.skipped_rounds.is_empty()
    }
}

/// Drives a [`SeasonDataSource`] to build one [`Season`] per year.
pub struct SeasonAggregator<S: SeasonDataSource> {
    source: S,
}

impl<S: SeasonDataSource> SeasonAggregator<S> {
    /// Create an aggregator over the given data source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Aggregate one season.
    ///
    /// Fetches the schedule, then qualifying and results for each round in
    /// schedule order, then the final driver and constructor standings.
    /// Every failure is logged and absorbed; the returned season contains
    /// whatever was successfully gathered.
    pub async fn aggregate(&mut self, year: u32) -> (Season, AggregationReport) {
        let mut season = Season::new(year);

        let schedule = match self.source.fetch_schedule(year).await {
            Ok(schedule) => schedule,
            Err(e) => {
                warn!("failed to fetch {year} schedule: {e}");
                Vec::new()
            }
        };

        let scheduled_rounds = schedule.len();
        let mut skipped_rounds = Vec::new();
        info!("{year}: {scheduled_rounds} rounds on the calendar");

        for scheduled in schedule {
            let round = scheduled.round;
            info!("{year} round {round}: fetching {}", scheduled.name);

            let qualifying = match self.source.fetch_qualifying(year, round).await {
                Ok(qualifying) => qualifying,
                Err(e) => {
                    warn!("{year} round {round}: qualifying fetch failed, skipping round: {e}");
                    skipped_rounds.push(round);
                    continue;
                }
            };

            let results = match self.source.fetch_results(year, round).await {
                Ok(results) => results,
                Err(e) => {
                    warn!("{year} round {round}: results fetch failed, skipping round: {e}");
                    skipped_rounds.push(round);
                    continue;
                }
            };

            season.rounds.push(scheduled.into_round(qualifying, results));
        }

        match self.source.fetch_driver_standings(year).await {
            Ok(standings) => season.driver_standings = standings,
            Err(e) => warn!("{year}: driver standings fetch failed, leaving empty: {e}"),
        }
        match self.source.fetch_constructor_standings(year).await {
            Ok(standings) => season.constructor_standings = standings,
            Err(e) => warn!("{year}: constructor standings fetch failed, leaving empty: {e}"),
        }

        let report = AggregationReport {
            year,
            scheduled_rounds,
            aggregated_rounds: season.rounds.len(),
            skipped_rounds,
        };
        info!(
            "{year}: aggregated {}/{} rounds, {} driver standings, {} constructor standings",
            report.aggregated_rounds,
            report.scheduled_rounds,
            season.driver_standings.len(),
            season.constructor_standings.len()
        );

        (season, report)
    }
}
