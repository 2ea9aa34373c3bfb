//! Run configuration constants
//!
//! The downloader is an operator-run batch tool with no CLI flags; the
//! processed year range and all tuning values are compile-time constants.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Base URL of the upstream statistics API.
/// All endpoints follow the pattern `{BASE_URL}/{year}[/{round}]/{resource}.json`.
pub const BASE_URL: &str = "https://ergast.com/api/f1";

/// Seasons processed by a run, inclusive on both ends.
pub const YEARS: RangeInclusive<u32> = 2022..=2024;

/// Minimum interval between consecutive upstream requests.
/// The API publishes no formal rate limit; one request per second matches
/// the pacing the upstream operators ask bulk consumers to keep.
pub const PACING_INTERVAL: Duration = Duration::from_secs(1);

/// Per-request timeout.
/// A hung call must not block the run forever; expiry is treated the same
/// as a non-success status ("no data for this resource").
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Directory all output files are written under, relative to the working
/// directory.
pub const OUTPUT_DIR: &str = "data";
