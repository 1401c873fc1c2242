//! # Lookup Configuration Module
//!
//! This module defines the configuration of the external cocktail lookup
//! service: where it lives, its credentials and how long a search may take.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

// Constants for lookup configuration
pub const DEFAULT_BASE_URL: &str = "https://cocktail-by-api-ninjas.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "cocktail-by-api-ninjas.p.rapidapi.com";
pub const COCKTAIL_PATH: &str = "/v1/cocktail";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_KEY_VAR: &str = "COCKTAIL_API_KEY";
pub const API_HOST_VAR: &str = "COCKTAIL_API_HOST";
pub const BASE_URL_VAR: &str = "COCKTAIL_API_URL";
pub const TIMEOUT_VAR: &str = "COCKTAIL_LOOKUP_TIMEOUT_SECS";

/// Configuration structure for the cocktail lookup
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Scheme and host of the service, without a trailing slash
    pub base_url: String,
    /// Sent as the `X-RapidAPI-Host` header
    pub api_host: String,
    /// Sent as the `X-RapidAPI-Key` header
    pub api_key: String,
    /// Timeout for a single lookup in seconds
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LookupConfig {
    /// Load configuration from the environment, reading `.env` first if present
    ///
    /// `COCKTAIL_API_KEY` is required; the other variables fall back to defaults.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup function
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = get(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("{API_KEY_VAR} must be set"))?;

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{TIMEOUT_VAR} must be a whole number of seconds"))?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            base_url: get(BASE_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            api_host: get(API_HOST_VAR).unwrap_or(defaults.api_host),
            api_key,
            timeout_secs,
        })
    }

    /// Full URL of the cocktail search endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, COCKTAIL_PATH)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
