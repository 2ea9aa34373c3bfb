//! Integration tests for JSON/CSV persistence
//!
//! Verify the fixed CSV schemas, the row-count relationship with the
//! aggregated data, and that the written JSON round-trips: re-deriving
//! the summaries from the written season data reproduces the written
//! summary file byte for byte.

use chrono::NaiveDate;
use tempfile::TempDir;

use f1_data_downloader::output::SeasonWriter;
use f1_data_downloader::summary::derive_summary;
use f1_data_downloader::{
    Circuit, ConstructorStanding, DriverStanding, QualifyingResult, RaceResult, Round, Season,
};

fn circuit(country: &str) -> Circuit {
    Circuit {
        name: format!("{country} Circuit"),
        locality: "Somewhere".to_string(),
        country: country.to_string(),
        latitude: "10.5".to_string(),
        longitude: "-20.25".to_string(),
    }
}

fn quali(driver: &str, position: &str) -> QualifyingResult {
    QualifyingResult {
        position: Some(position.to_string()),
        driver_name: driver.to_string(),
        constructor_name: "Team".to_string(),
        q1: Some("1:30.000".to_string()),
        q2: Some("1:29.500".to_string()),
        q3: None,
    }
}

fn result(driver: &str, position: &str, points: &str) -> RaceResult {
    RaceResult {
        position: Some(position.to_string()),
        driver_name: driver.to_string(),
        constructor_name: "Team".to_string(),
        points: points.to_string(),
        status: "Finished".to_string(),
        grid: position.to_string(),
        laps: "57".to_string(),
        fastest_lap_time: None,
    }
}

/// Season with one round that has an empty qualifying array and a
/// two-entry results array.
fn scenario_season() -> Season {
    let mut season = Season::new(2024);
    season.rounds.push(Round {
        round: 1,
        name: "Australian Grand Prix".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 24).unwrap(),
        time: None,
        circuit: circuit("Australia"),
        qualifying: Vec::new(),
        results: vec![
            result("Carlos Sainz", "1", "25"),
            result("Charles Leclerc", "2", "18"),
        ],
    });
    season
}

fn two_round_season() -> Season {
    let mut season = Season::new(2023);
    season.rounds.push(Round {
        round: 1,
        name: "Bahrain Grand Prix".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 3, 5).unwrap(),
        time: Some("15:00:00Z".to_string()),
        circuit: circuit("Bahrain"),
        qualifying: vec![
            quali("Max Verstappen", "1"),
            quali("Sergio Perez", "2"),
            quali("Charles Leclerc", "3"),
        ],
        results: vec![
            result("Max Verstappen", "1", "25"),
            result("Sergio Perez", "2", "18"),
        ],
    });
    season.rounds.push(Round {
        round: 2,
        name: "Saudi Arabian Grand Prix".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 3, 19).unwrap(),
        time: None,
        circuit: circuit("Saudi Arabia"),
        qualifying: vec![quali("Sergio Perez", "1")],
        results: vec![result("Sergio Perez", "1", "25")],
    });
    season.driver_standings = vec![DriverStanding {
        position: "1".to_string(),
        driver_name: "Max Verstappen".to_string(),
        constructor_name: "Red Bull".to_string(),
        points: "575".to_string(),
        wins: "19".to_string(),
    }];
    season.constructor_standings = vec![ConstructorStanding {
        position: "1".to_string(),
        constructor_name: "Red Bull".to_string(),
        points: "860".to_string(),
        wins: "21".to_string(),
    }];
    season
}

fn data_row_count(path: &std::path::Path) -> usize {
    let contents = std::fs::read_to_string(path).unwrap();
    contents.lines().count().saturating_sub(1)
}

#[test]
fn test_csv_row_counts_equal_source_array_lengths() {
    let temp_dir = TempDir::new().unwrap();
    let writer = SeasonWriter::new(temp_dir.path());

    let season = two_round_season();
    writer.write_season_files(&season).unwrap();

    let root = temp_dir.path();
    // schedule: one row per round
    assert_eq!(data_row_count(&root.join("schedule_2023.csv")), 2);
    // qualifying: 3 + 1 entries
    assert_eq!(data_row_count(&root.join("qualifying_2023_all_rounds.csv")), 4);
    // results: 2 + 1 entries
    assert_eq!(data_row_count(&root.join("results_2023_all_rounds.csv")), 3);
    assert_eq!(data_row_count(&root.join("driver_standings_2023.csv")), 1);
    assert_eq!(data_row_count(&root.join("constructor_standings_2023.csv")), 1);
}

#[test]
fn test_all_ten_per_year_files_are_written() {
    let temp_dir = TempDir::new().unwrap();
    let writer = SeasonWriter::new(temp_dir.path());

    let written = writer.write_season_files(&two_round_season()).unwrap();
    assert_eq!(written.len(), 10);
    for path in &written {
        assert!(path.exists(), "missing output file {}", path.display());
    }
}

#[test]
fn test_empty_qualifying_round_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let writer = SeasonWriter::new(temp_dir.path());

    let season = scenario_season();
    writer.write_season_files(&season).unwrap();

    let root = temp_dir.path();
    // Qualifying CSV contributes 0 rows but still has its header
    assert_eq!(data_row_count(&root.join("qualifying_2024_all_rounds.csv")), 0);
    let qualifying = std::fs::read_to_string(root.join("qualifying_2024_all_rounds.csv")).unwrap();
    assert!(qualifying.starts_with("year,round,raceName,date"));

    // Results CSV contributes 2 rows
    assert_eq!(data_row_count(&root.join("results_2024_all_rounds.csv")), 2);

    // Pole tally omits the round; win tally credits the first result entry
    let summary = derive_summary(&season);
    assert!(summary.pole_positions.is_empty());
    assert_eq!(summary.race_wins.get("Carlos Sainz"), Some(&1));
    assert_eq!(summary.race_wins.len(), 1);
}

#[test]
fn test_summary_round_trip_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let writer = SeasonWriter::new(temp_dir.path());

    let seasons = vec![two_round_season(), scenario_season()];
    let summaries: Vec<_> = seasons.iter().map(derive_summary).collect();

    let complete_path = writer.write_complete_dataset(&seasons).unwrap();
    let summary_path = writer.write_summaries(&summaries).unwrap();

    // Reload the written seasons and derive the summaries again
    let complete_bytes = std::fs::read(&complete_path).unwrap();
    let restored: Vec<Season> = serde_json::from_slice(&complete_bytes).unwrap();
    assert_eq!(restored, seasons);

    let rederived: Vec<_> = restored.iter().map(derive_summary).collect();
    let rederived_bytes = serde_json::to_vec_pretty(&rederived).unwrap();

    let written_bytes = std::fs::read(&summary_path).unwrap();
    assert_eq!(rederived_bytes, written_bytes);
}

#[test]
fn test_cross_year_file_names_span_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let writer = SeasonWriter::new(temp_dir.path());

    let seasons = vec![two_round_season(), scenario_season()]; // 2023, 2024
    let complete_path = writer.write_complete_dataset(&seasons).unwrap();
    assert_eq!(
        complete_path.file_name().unwrap().to_str().unwrap(),
        "f1_complete_data_2023_2024.json"
    );

    let summaries: Vec<_> = seasons.iter().map(derive_summary).collect();
    let summary_path = writer.write_summaries(&summaries).unwrap();
    assert_eq!(
        summary_path.file_name().unwrap().to_str().unwrap(),
        "f1_summary_2023_2024.json"
    );
}
