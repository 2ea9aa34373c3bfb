//! Resource fetchers for the Ergast-style API
//!
//! One method per resource type, each issuing a single GET against the
//! `{base}/{year}[/{round}]/{resource}.json` endpoint pattern and
//! unwrapping the relevant array from the response envelope. The fetcher
//! owns the [`Pacer`] and awaits it before every request, so pacing is a
//! fetcher-side policy rather than part of the HTTP client.

use async_trait::async_trait;
use std::time::Duration;

use crate::fetcher::envelope::{RaceDocument, StandingsDocument};
use crate::fetcher::http::ErgastHttpClient;
use crate::fetcher::{FetcherResult, SeasonDataSource};
use crate::pacing::Pacer;
use crate::{config, ConstructorStanding, DriverStanding, QualifyingResult, RaceResult, ScheduledRace};

/// Fetcher for Ergast-style season data endpoints.
pub struct ErgastFetcher {
    http: ErgastHttpClient,
    base_url: String,
    pacer: Pacer,
}

impl ErgastFetcher {
    /// Create a fetcher against the configured upstream API.
    pub fn new() -> FetcherResult<Self> {
        Self::with_base_url(config::BASE_URL, config::REQUEST_TIMEOUT, config::PACING_INTERVAL)
    }

    /// Create a fetcher against an explicit base URL with explicit timing.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
        pacing_interval: Duration,
    ) -> FetcherResult<Self> {
        Ok(Self {
            http: ErgastHttpClient::new(timeout)?,
            base_url: base_url.into(),
            pacer: Pacer::new(pacing_interval),
        })
    }

    /// Fetch a race-table document, pacing first.
    async fn race_document(&mut self, url: &str) -> FetcherResult<RaceDocument> {
        self.pacer.pace().await;
        Ok(self
            .http
            .get_document::<RaceDocument>(url)
            .await?
            .unwrap_or_default())
    }

    /// Fetch a standings-table document, pacing first.
    async fn standings_document(&mut self, url: &str) -> FetcherResult<StandingsDocument> {
        self.pacer.pace().await;
        Ok(self
            .http
            .get_document::<StandingsDocument>(url)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl SeasonDataSource for ErgastFetcher {
    async fn fetch_schedule(&mut self, year: u32) -> FetcherResult<Vec<ScheduledRace>> {
        let url = format!("{}/{year}.json", self.base_url);
        let document = self.race_document(&url).await?;
        Ok(document
            .into_races()
            .into_iter()
            .filter_map(|race| race.into_scheduled())
            .collect())
    }

    async fn fetch_qualifying(
        &mut self,
        year: u32,
        round: u32,
    ) -> FetcherResult<Vec<QualifyingResult>> {
        let url = format!("{}/{year}/{round}/qualifying.json", self.base_url);
        let document = self.race_document(&url).await?;
        // The per-round endpoint returns at most one race entry
        Ok(document
            .into_races()
            .into_iter()
            .next()
            .map(|race| race.qualifying_results.into_iter().map(Into::into).collect())
            .unwrap_or_default())
    }

    async fn fetch_results(&mut self, year: u32, round: u32) -> FetcherResult<Vec<RaceResult>> {
        let url = format!("{}/{year}/{round}/results.json", self.base_url);
        let document = self.race_document(&url).await?;
        Ok(document
            .into_races()
            .into_iter()
            .next()
            .map(|race| race.results.into_iter().map(Into::into).collect())
            .unwrap_or_default())
    }

    async fn fetch_driver_standings(
        &mut self,
        year: u32,
    ) -> FetcherResult<Vec<DriverStanding>> {
        let url = format!("{}/{year}/driverStandings.json", self.base_url);
        let document = self.standings_document(&url).await?;
        Ok(document
            .into_final_snapshot()
            .map(|snapshot| snapshot.driver_standings.into_iter().map(Into::into).collect())
            .unwrap_or_default())
    }

    async fn fetch_constructor_standings(
        &mut self,
        year: u32,
    ) -> FetcherResult<Vec<ConstructorStanding>> {
        let url = format!("{}/{year}/constructorStandings.json", self.base_url);
        let document = self.standings_document(&url).await?;
        Ok(document
            .into_final_snapshot()
            .map(|snapshot| {
                snapshot
                    .constructor_standings
                    .into_iter()
                    .map(Into::into)
                    .collect()
            })
            .unwrap_or_default())
    }
}
