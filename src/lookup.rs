//! # Cocktail Lookup
//!
//! The external recipe service, seen through the [`CocktailLookup`] trait.
//! [`ApiNinjasClient`] is the HTTP implementation used by the binary; tests
//! substitute in-process fakes.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error, info};

use crate::enrichment::RawCocktail;
use crate::lookup_config::LookupConfig;
use crate::lookup_errors::LookupError;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
/// Header carrying the API host
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Source of raw cocktail records matching a search query
#[async_trait]
pub trait CocktailLookup: Send + Sync {
    /// Look up cocktails by name
    ///
    /// An empty vector means the service found no matches and is not an error.
    async fn lookup(&self, query: &str) -> Result<Vec<RawCocktail>, LookupError>;
}

/// HTTP client for the API Ninjas cocktail endpoint
pub struct ApiNinjasClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    api_host: String,
}

impl ApiNinjasClient {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let endpoint = Url::parse(&config.endpoint())
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {e}", config.endpoint())))?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }

    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CocktailLookup for ApiNinjasClient {
    async fn lookup(&self, query: &str) -> Result<Vec<RawCocktail>, LookupError> {
        info!(query = %query, "Looking up cocktails");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("name", query)])
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .send()
            .await
            .map_err(|e| {
                error!(query = %query, error = %e, "Cocktail lookup request failed");
                LookupError::RequestFailed(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(query = %query, status = status.as_u16(), "Cocktail lookup returned error status");
            return Err(LookupError::Status(status.as_u16()));
        }

        let records: Vec<RawCocktail> = response.json().await?;
        debug!(query = %query, count = records.len(), "Cocktail lookup completed");
        Ok(records)
    }
}
