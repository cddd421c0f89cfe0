//! Matchmaking search view.
//!
//! Filters are always editable. A search only runs when [`MatchmakingView::search`]
//! is called; editing filters never re-queries.

use std::sync::Arc;

use novamatch_core::error::Result;
use novamatch_core::gateway::RemoteGateway;
use novamatch_core::matchmaking::{MatchFilters, MatchResult};
use tokio::sync::{Mutex, RwLock};

use crate::lists::{ListRow, Listing};

pub const NO_RESULTS: &str = "No results yet. Adjust filters and search.";

#[derive(Debug, Clone, PartialEq)]
pub enum MatchState {
    /// No search issued yet
    Idle,
    /// Results of the last search, in server order
    HasResults(Vec<MatchResult>),
}

impl From<&MatchResult> for ListRow {
    fn from(result: &MatchResult) -> Self {
        Self {
            title: format!("Match score: {}", result.score),
            detail: format!("Startup {} ↔ Investor {}", result.a_id, result.b_id),
        }
    }
}

pub struct MatchmakingView {
    gateway: Arc<dyn RemoteGateway>,
    filters: Mutex<MatchFilters>,
    state: RwLock<MatchState>,
}

impl MatchmakingView {
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        Self {
            gateway,
            filters: Mutex::new(MatchFilters::default()),
            state: RwLock::new(MatchState::Idle),
        }
    }

    pub async fn filters(&self) -> MatchFilters {
        self.filters.lock().await.clone()
    }

    pub async fn update_filters(&self, edit: impl FnOnce(&mut MatchFilters)) {
        edit(&mut *self.filters.lock().await);
    }

    pub async fn state(&self) -> MatchState {
        self.state.read().await.clone()
    }

    /// Runs a search with the current filters and returns the result count.
    ///
    /// On failure the previous state is kept.
    pub async fn search(&self) -> Result<usize> {
        let query = self.filters().await.to_query();
        match self.gateway.run_match_query(&query).await {
            Ok(results) => {
                let count = results.len();
                tracing::debug!(count, "Match search completed");
                *self.state.write().await = MatchState::HasResults(results);
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Match search failed");
                Err(e)
            }
        }
    }

    pub async fn listing(&self) -> Listing {
        match &*self.state.read().await {
            MatchState::HasResults(results) if !results.is_empty() => {
                Listing::Rows(results.iter().map(ListRow::from).collect())
            }
            _ => Listing::Empty(NO_RESULTS),
        }
    }
}
