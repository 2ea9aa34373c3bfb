//! HTTP client for the upstream statistics API
//!
//! A thin wrapper over [`reqwest::Client`] with the failure semantics the
//! pipeline needs: a non-success status or an unparseable body means "no
//! data for this resource" and comes back as `Ok(None)`, while
//! network-level failures (connect, timeout, transfer) surface as errors
//! for the caller to handle at the round or season boundary.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::{FetcherError, FetcherResult};

/// HTTP client for Ergast-style API endpoints.
pub struct ErgastHttpClient {
    client: Client,
}

impl ErgastHttpClient {
    /// Create a client with the given per-request timeout.
    ///
    /// The timeout keeps a hung call from blocking the run; expiry is
    /// reported as a network error and degrades to "no data" upstream.
    pub fn new(timeout: Duration) -> FetcherResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetcherError::InvalidRequest(e.to_string()))?;
        Ok(Self { client })
    }

    /// Execute a GET request and deserialize the JSON body.
    ///
    /// Returns `Ok(None)` for a non-success status and for a body that does
    /// not match `T` (logged at warn level). Network failures are errors.
    pub async fn get_document<T>(&self, url: &str) -> FetcherResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetcherError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {url} returned {status}, treating as no data");
            return Ok(None);
        }

        match response.json::<T>().await {
            Ok(document) => Ok(Some(document)),
            Err(e) => {
                warn!("GET {url} returned an unparseable body ({e}), treating as no data");
                Ok(None)
            }
        }
    }
}
