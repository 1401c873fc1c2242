//! # Lookup Error Types Module
//!
//! Failures of the external cocktail lookup. Every variant is reported to the
//! user as "no results"; none of them is retried.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Lookup returned HTTP status {0}")]
    Status(u16),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),
}

impl LookupError {
    /// Whether the service answered with a non-success status
    pub fn is_status(&self) -> bool {
        matches!(self, LookupError::Status(_))
    }
}
