//! Integration tests for the season aggregation pipeline
//!
//! Drive the aggregator against an in-memory data source with injectable
//! failures and verify the partial-failure semantics: one bad round never
//! aborts a season, standings errors degrade to empty lists, and no round
//! is ever fabricated.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

use f1_data_downloader::aggregator::SeasonAggregator;
use f1_data_downloader::fetcher::{FetcherError, FetcherResult, SeasonDataSource};
use f1_data_downloader::{
    Circuit, ConstructorStanding, DriverStanding, QualifyingResult, RaceResult, ScheduledRace,
};

/// In-memory data source with injectable per-round failures.
#[derive(Default)]
struct FakeSource {
    schedule: Vec<ScheduledRace>,
    qualifying: HashMap<u32, Vec<QualifyingResult>>,
    results: HashMap<u32, Vec<RaceResult>>,
    driver_standings: Vec<DriverStanding>,
    constructor_standings: Vec<ConstructorStanding>,
    fail_schedule: bool,
    fail_qualifying_for: HashSet<u32>,
    fail_results_for: HashSet<u32>,
    fail_driver_standings: bool,
    fail_constructor_standings: bool,
}

fn network_error() -> FetcherError {
    FetcherError::Network("connection reset by peer".to_string())
}

#[async_trait]
impl SeasonDataSource for FakeSource {
    async fn fetch_schedule(&mut self, _year: u32) -> FetcherResult<Vec<ScheduledRace>> {
        if self.fail_schedule {
            return Err(network_error());
        }
        Ok(self.schedule.clone())
    }

    async fn fetch_qualifying(
        &mut self,
        _year: u32,
        round: u32,
    ) -> FetcherResult<Vec<QualifyingResult>> {
        if self.fail_qualifying_for.contains(&round) {
            return Err(network_error());
        }
        Ok(self.qualifying.get(&round).cloned().unwrap_or_default())
    }

    async fn fetch_results(&mut self, _year: u32, round: u32) -> FetcherResult<Vec<RaceResult>> {
        if self.fail_results_for.contains(&round) {
            return Err(network_error());
        }
        Ok(self.results.get(&round).cloned().unwrap_or_default())
    }

    async fn fetch_driver_standings(
        &mut self,
        _year: u32,
    ) -> FetcherResult<Vec<DriverStanding>> {
        if self.fail_driver_standings {
            return Err(network_error());
        }
        Ok(self.driver_standings.clone())
    }

    async fn fetch_constructor_standings(
        &mut self,
        _year: u32,
    ) -> FetcherResult<Vec<ConstructorStanding>> {
        if self.fail_constructor_standings {
            return Err(network_error());
        }
        Ok(self.constructor_standings.clone())
    }
}

fn scheduled(round: u32, country: &str) -> ScheduledRace {
    ScheduledRace {
        round,
        name: format!("{country} Grand Prix"),
        date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        time: None,
        circuit: Circuit {
            name: format!("{country} Circuit"),
            locality: "Somewhere".to_string(),
            country: country.to_string(),
            latitude: "0.0".to_string(),
            longitude: "0.0".to_string(),
        },
    }
}

fn quali(driver: &str) -> QualifyingResult {
    QualifyingResult {
        position: Some("1".to_string()),
        driver_name: driver.to_string(),
        constructor_name: "Team".to_string(),
        q1: Some("1:30.000".to_string()),
        q2: None,
        q3: None,
    }
}

fn result(driver: &str) -> RaceResult {
    RaceResult {
        position: Some("1".to_string()),
        driver_name: driver.to_string(),
        constructor_name: "Team".to_string(),
        points: "25".to_string(),
        status: "Finished".to_string(),
        grid: "1".to_string(),
        laps: "57".to_string(),
        fastest_lap_time: None,
    }
}

#[tokio::test]
async fn test_full_season_aggregation() {
    let mut source = FakeSource {
        schedule: vec![scheduled(1, "Bahrain"), scheduled(2, "Saudi Arabia")],
        ..Default::default()
    };
    source.qualifying.insert(1, vec![quali("Max Verstappen")]);
    source.qualifying.insert(2, vec![quali("Sergio Perez")]);
    source.results.insert(1, vec![result("Max Verstappen")]);
    source.results.insert(2, vec![result("Sergio Perez")]);
    source.driver_standings = vec![DriverStanding {
        position: "1".to_string(),
        driver_name: "Max Verstappen".to_string(),
        constructor_name: "Red Bull".to_string(),
        points: "51".to_string(),
        wins: "1".to_string(),
    }];

    let mut aggregator = SeasonAggregator::new(source);
    let (season, report) = aggregator.aggregate(2024).await;

    assert_eq!(season.year, 2024);
    assert_eq!(season.total_rounds(), 2);
    assert_eq!(season.rounds[0].round, 1);
    assert_eq!(season.rounds[1].round, 2);
    assert_eq!(season.rounds[0].qualifying.len(), 1);
    assert_eq!(season.driver_standings.len(), 1);
    assert!(report.is_complete());
    assert_eq!(report.scheduled_rounds, 2);
    assert_eq!(report.aggregated_rounds, 2);
}

#[tokio::test]
async fn test_failed_round_is_skipped_and_season_proceeds() {
    let mut source = FakeSource {
        schedule: vec![
            scheduled(1, "Bahrain"),
            scheduled(2, "Saudi Arabia"),
            scheduled(3, "Australia"),
        ],
        ..Default::default()
    };
    source.results.insert(1, vec![result("Max Verstappen")]);
    source.results.insert(3, vec![result("Carlos Sainz")]);
    source.fail_results_for.insert(2);

    let mut aggregator = SeasonAggregator::new(source);
    let (season, report) = aggregator.aggregate(2024).await;

    assert_eq!(season.total_rounds(), 2);
    let round_numbers: Vec<u32> = season.rounds.iter().map(|r| r.round).collect();
    assert_eq!(round_numbers, vec![1, 3]);
    assert_eq!(report.skipped_rounds, vec![2]);
    assert!(!report.is_complete());
}

#[tokio::test]
async fn test_no_round_outside_the_schedule_is_fabricated() {
    let mut source = FakeSource {
        schedule: vec![scheduled(1, "Bahrain"), scheduled(2, "Saudi Arabia")],
        ..Default::default()
    };
    // Data exists for a round that is not on the schedule; it must not appear
    source.results.insert(7, vec![result("Nobody")]);

    let mut aggregator = SeasonAggregator::new(source);
    let (season, report) = aggregator.aggregate(2024).await;

    let scheduled_numbers: HashSet<u32> = [1, 2].into_iter().collect();
    assert!(season.total_rounds() <= report.scheduled_rounds);
    for round in &season.rounds {
        assert!(scheduled_numbers.contains(&round.round));
    }
}

#[tokio::test]
async fn test_schedule_failure_yields_empty_season() {
    let source = FakeSource {
        fail_schedule: true,
        ..Default::default()
    };

    let mut aggregator = SeasonAggregator::new(source);
    let (season, report) = aggregator.aggregate(2024).await;

    assert_eq!(season.total_rounds(), 0);
    assert_eq!(report.scheduled_rounds, 0);
    assert_eq!(report.aggregated_rounds, 0);
}

#[tokio::test]
async fn test_standings_failure_degrades_to_empty_lists() {
    let mut source = FakeSource {
        schedule: vec![scheduled(1, "Bahrain")],
        fail_driver_standings: true,
        fail_constructor_standings: true,
        ..Default::default()
    };
    source.results.insert(1, vec![result("Max Verstappen")]);

    let mut aggregator = SeasonAggregator::new(source);
    let (season, _report) = aggregator.aggregate(2024).await;

    // Rounds survive even when standings do not
    assert_eq!(season.total_rounds(), 1);
    assert!(season.driver_standings.is_empty());
    assert!(season.constructor_standings.is_empty());
}

#[tokio::test]
async fn test_round_with_no_data_is_kept_with_empty_lists() {
    // A future or cancelled round fetches successfully but returns nothing
    let source = FakeSource {
        schedule: vec![scheduled(1, "Bahrain")],
        ..Default::default()
    };

    let mut aggregator = SeasonAggregator::new(source);
    let (season, report) = aggregator.aggregate(2025).await;

    assert_eq!(season.total_rounds(), 1);
    assert!(season.rounds[0].qualifying.is_empty());
    assert!(season.rounds[0].results.is_empty());
    assert!(report.is_complete());
}
