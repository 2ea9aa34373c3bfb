//! Upstream API client and resource fetchers

use crate::{ConstructorStanding, DriverStanding, QualifyingResult, RaceResult, ScheduledRace};
use async_trait::async_trait;

pub mod envelope;
pub mod ergast;
pub mod http;

/// Fetcher errors
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// Network-level failure (connect, timeout, transfer)
    #[error("network error: {0}")]
    Network(String),

    /// Request construction failure
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for fetcher operations
pub type FetcherResult<T> = Result<T, FetcherError>;

/// Per-resource access to one season's data.
///
/// Each method returns the unwrapped array from the response envelope. A
/// missing resource - non-success status, malformed body, or an absent key
/// at any nesting level - is an empty vector, never an error: an empty
/// round is a common condition (future or cancelled races). Errors are
/// reserved for network-level failures, which the aggregator catches at
/// the round or season boundary.
#[async_trait]
pub trait SeasonDataSource {
    /// Fetch the season's race calendar, ordered by round number ascending.
    async fn fetch_schedule(&mut self, year: u32) -> FetcherResult<Vec<ScheduledRace>>;

    /// Fetch the qualifying classification for one round.
    async fn fetch_qualifying(
        &mut self,
        year: u32,
        round: u32,
    ) -> FetcherResult<Vec<QualifyingResult>>;

    /// Fetch the race classification for one round.
    async fn fetch_results(&mut self, year: u32, round: u32) -> FetcherResult<Vec<RaceResult>>;

    /// Fetch the final driver standings snapshot for the season.
    async fn fetch_driver_standings(&mut self, year: u32)
        -> FetcherResult<Vec<DriverStanding>>;

    /// Fetch the final constructor standings snapshot for the season.
    async fn fetch_constructor_standings(
        &mut self,
        year: u32,
    ) -> FetcherResult<Vec<ConstructorStanding>>;
}
