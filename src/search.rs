//! # Search Session
//!
//! Runs user searches against a [`CocktailLookup`] and keeps the results
//! currently on display.
//!
//! Every search is tagged with a monotonically increasing request id. When a
//! lookup completes, its result is applied only if no newer search has been
//! issued in the meantime; stale results are dropped without touching the
//! displayed state. Lookups are bounded by a timeout, and a timed-out lookup
//! is reported as a failure.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::enrichment::{Cocktail, RecipeEnricher};
use crate::lookup::CocktailLookup;
use crate::lookup_errors::LookupError;

/// What a single search call resolved to
#[derive(Debug)]
pub enum SearchOutcome {
    /// Matches were found and are now displayed
    Found(Vec<Cocktail>),
    /// The service answered with an empty list
    NoMatches,
    /// The lookup failed; the display now shows no results
    Failed(LookupError),
    /// A newer search was issued before this one completed; nothing was applied
    Superseded,
}

/// Kind of result currently on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search has completed yet
    Idle,
    Found,
    NoMatches,
    Failed,
}

#[derive(Debug)]
struct DisplayedResults {
    /// Request id of the search these results belong to
    request_id: u64,
    status: SearchStatus,
    cocktails: Vec<Cocktail>,
}

/// Search state for one user
pub struct SearchSession<L> {
    lookup: L,
    enricher: RecipeEnricher,
    timeout: Duration,
    latest_request: AtomicU64,
    displayed: Mutex<DisplayedResults>,
}

impl<L: CocktailLookup> SearchSession<L> {
    pub fn new(lookup: L, timeout: Duration) -> Self {
        Self {
            lookup,
            enricher: RecipeEnricher::new(),
            timeout,
            latest_request: AtomicU64::new(0),
            displayed: Mutex::new(DisplayedResults {
                request_id: 0,
                status: SearchStatus::Idle,
                cocktails: Vec::new(),
            }),
        }
    }

    /// Search for cocktails by name
    ///
    /// A blank query issues no request and returns `None`.
    pub async fn search(&self, query: &str) -> Option<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring blank search query");
            return None;
        }

        let request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        info!(request_id, query = %query, "Starting cocktail search");

        let result = match tokio::time::timeout(self.timeout, self.lookup.lookup(query)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout(self.timeout)),
        };

        if !self.is_latest(request_id) {
            debug!(request_id, "Discarding superseded search result");
            return Some(SearchOutcome::Superseded);
        }

        let (status, cocktails, outcome) = match result {
            Ok(records) if records.is_empty() => {
                info!(request_id, "No cocktails matched the search");
                (SearchStatus::NoMatches, Vec::new(), SearchOutcome::NoMatches)
            }
            Ok(records) => {
                let cocktails = self.enricher.enrich_all(records);
                (SearchStatus::Found, cocktails.clone(), SearchOutcome::Found(cocktails))
            }
            Err(e) => {
                error!(request_id, query = %query, error = %e, "Cocktail search failed");
                (SearchStatus::Failed, Vec::new(), SearchOutcome::Failed(e))
            }
        };

        if self.apply(request_id, status, cocktails) {
            Some(outcome)
        } else {
            Some(SearchOutcome::Superseded)
        }
    }

    /// The lookup searches are sent to
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Invalidate every search still in flight
    pub fn cancel_pending(&self) {
        let request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(request_id, "Cancelled pending searches");
    }

    /// Cocktails currently on display; empty after a failure or an empty result
    pub fn results(&self) -> Vec<Cocktail> {
        self.displayed().cocktails.clone()
    }

    /// What the displayed results represent
    pub fn status(&self) -> SearchStatus {
        self.displayed().status
    }

    fn is_latest(&self, request_id: u64) -> bool {
        self.latest_request.load(Ordering::SeqCst) == request_id
    }

    fn displayed(&self) -> std::sync::MutexGuard<'_, DisplayedResults> {
        // State is only ever replaced wholesale, so a poisoned value is still consistent
        self.displayed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the displayed results unless a newer search got there first
    fn apply(&self, request_id: u64, status: SearchStatus, cocktails: Vec<Cocktail>) -> bool {
        let mut displayed = self.displayed();

        if !self.is_latest(request_id) || displayed.request_id > request_id {
            debug!(request_id, "Discarding superseded search result");
            return false;
        }

        *displayed = DisplayedResults {
            request_id,
            status,
            cocktails,
        };
        true
    }
}
