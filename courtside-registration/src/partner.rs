//! Partner search
//!
//! Debounced, sequence-numbered search. Each submitted query takes a
//! fresh sequence number; a response is applied only if no newer query
//! has been issued since, so results are last-write-wins by issuance
//! order, not arrival order. The current player is filtered out of the
//! results.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use shared::models::Player;

use crate::backend::RegistrationBackend;
use crate::error::FlowResult;

/// Minimum characters before a search fires.
pub const MIN_SEARCH_LEN: usize = 3;

/// Delay after the last keystroke before the request goes out.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounced partner search state.
pub struct PartnerSearch {
    min_query_len: usize,
    debounce: Duration,
    latest: AtomicU64,
    results: Mutex<Vec<Player>>,
}

impl Default for PartnerSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl PartnerSearch {
    pub fn new() -> Self {
        Self {
            min_query_len: MIN_SEARCH_LEN,
            debounce: SEARCH_DEBOUNCE,
            latest: AtomicU64::new(0),
            results: Mutex::new(Vec::new()),
        }
    }

    /// Override the debounce delay (tests use zero).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Results of the most recent completed, non-superseded search.
    pub fn results(&self) -> Vec<Player> {
        self.results.lock().expect("results lock poisoned").clone()
    }

    /// Run a search for `query`.
    ///
    /// Returns `Ok(Some(results))` when this query's results were
    /// applied, `Ok(None)` when the query was too short or superseded
    /// by a newer one. `me` is excluded from the results.
    pub async fn search<B: RegistrationBackend>(
        &self,
        backend: &B,
        me: &Player,
        query: &str,
    ) -> FlowResult<Option<Vec<Player>>> {
        let query = query.trim();
        if query.chars().count() < self.min_query_len {
            // A short query also supersedes any search still in flight
            self.latest.fetch_add(1, Ordering::SeqCst);
            self.results.lock().expect("results lock poisoned").clear();
            return Ok(None);
        }

        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if self.latest.load(Ordering::SeqCst) != seq {
            // Superseded while debouncing
            return Ok(None);
        }

        let users = backend.search_users(query).await?;

        if self.latest.load(Ordering::SeqCst) != seq {
            tracing::debug!(%query, "discarding stale partner search response");
            return Ok(None);
        }

        let filtered: Vec<Player> = users.into_iter().filter(|u| u.uid != me.uid).collect();
        *self.results.lock().expect("results lock poisoned") = filtered.clone();
        Ok(Some(filtered))
    }
}
