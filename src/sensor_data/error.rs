use crate::stations::error::StationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorDataError {
    /// Caller contract violation, raised before any request is made.
    #[error("Invalid time range: end ({end}) must be greater than start ({start})")]
    InvalidRange { start: i64, end: i64 },

    /// Caller contract violation, raised before any request is made.
    #[error("Invalid window size: {0} seconds (must be positive)")]
    InvalidWindowSeconds(i64),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response body from {0}")]
    ResponseDecode(String, #[source] reqwest::Error),

    /// Station-listing failure while resolving a numeric id for a data fetch.
    #[error(transparent)]
    Station(#[from] StationError),
}
