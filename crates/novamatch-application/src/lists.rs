//! Latest startups and investors.
//!
//! [`ProfileLists`] keeps the most recently fetched collections. Both are
//! fetched concurrently; each one is replaced only when its own request
//! succeeds, so a failed fetch leaves what was shown before.

use std::sync::Arc;

use novamatch_core::gateway::RemoteGateway;
use novamatch_core::profile::{InvestorProfile, Stage, StartupProfile};
use tokio::sync::RwLock;

pub const NO_STARTUPS: &str = "No startups yet.";
pub const NO_INVESTORS: &str = "No investors yet.";

/// One rendered line pair of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub title: String,
    pub detail: String,
}

/// What a list view shows: rows, or a fixed placeholder when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty(&'static str),
    Rows(Vec<ListRow>),
}

impl Listing {
    fn from_rows(rows: Vec<ListRow>, placeholder: &'static str) -> Self {
        if rows.is_empty() {
            Listing::Empty(placeholder)
        } else {
            Listing::Rows(rows)
        }
    }
}

impl From<&StartupProfile> for ListRow {
    fn from(startup: &StartupProfile) -> Self {
        Self {
            title: startup.name.clone(),
            detail: startup.tagline.clone(),
        }
    }
}

impl From<&InvestorProfile> for ListRow {
    fn from(investor: &InvestorProfile) -> Self {
        let stages: Vec<String> = investor.preferred_stage.iter().map(Stage::to_string).collect();
        Self {
            title: investor.name.clone(),
            detail: format!("Stages: {}", stages.join(", ")),
        }
    }
}

/// Outcome of one [`ProfileLists::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub startups_updated: bool,
    pub investors_updated: bool,
}

pub struct ProfileLists {
    gateway: Arc<dyn RemoteGateway>,
    startups: RwLock<Vec<StartupProfile>>,
    investors: RwLock<Vec<InvestorProfile>>,
}

impl ProfileLists {
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        Self {
            gateway,
            startups: RwLock::new(Vec::new()),
            investors: RwLock::new(Vec::new()),
        }
    }

    /// Fetches both collections concurrently.
    pub async fn load(&self) -> LoadOutcome {
        let (startups_updated, investors_updated) =
            tokio::join!(self.refresh_startups(), self.refresh_investors());
        LoadOutcome {
            startups_updated,
            investors_updated,
        }
    }

    async fn refresh_startups(&self) -> bool {
        match self.gateway.list_startups().await {
            Ok(startups) => {
                tracing::debug!(count = startups.len(), "Loaded startups");
                *self.startups.write().await = startups;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load startups");
                false
            }
        }
    }

    async fn refresh_investors(&self) -> bool {
        match self.gateway.list_investors().await {
            Ok(investors) => {
                tracing::debug!(count = investors.len(), "Loaded investors");
                *self.investors.write().await = investors;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load investors");
                false
            }
        }
    }

    pub async fn startups(&self) -> Vec<StartupProfile> {
        self.startups.read().await.clone()
    }

    pub async fn investors(&self) -> Vec<InvestorProfile> {
        self.investors.read().await.clone()
    }

    pub async fn startup_listing(&self) -> Listing {
        let rows = self.startups.read().await.iter().map(ListRow::from).collect();
        Listing::from_rows(rows, NO_STARTUPS)
    }

    pub async fn investor_listing(&self) -> Listing {
        let rows = self.investors.read().await.iter().map(ListRow::from).collect();
        Listing::from_rows(rows, NO_INVESTORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{investor, startup, FakeGateway};
    use novamatch_core::NovaError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_lists_show_placeholders() {
        let lists = ProfileLists::new(Arc::new(FakeGateway::new()));
        assert_eq!(lists.startup_listing().await, Listing::Empty(NO_STARTUPS));
        assert_eq!(lists.investor_listing().await, Listing::Empty(NO_INVESTORS));

        lists.load().await;
        assert_eq!(lists.startup_listing().await, Listing::Empty("No startups yet."));
    }

    #[tokio::test]
    async fn test_load_populates_both_regardless_of_order() {
        for (startup_delay, investor_delay) in [(50, 5), (5, 50)] {
            let gateway = Arc::new(FakeGateway::new());
            *gateway.startups.lock().unwrap() = Some(Ok(vec![startup("Zeta"), startup("Alpha")]));
            *gateway.investors.lock().unwrap() = Some(Ok(vec![investor("Fund")]));
            *gateway.startup_delay.lock().unwrap() = Some(Duration::from_millis(startup_delay));
            *gateway.investor_delay.lock().unwrap() = Some(Duration::from_millis(investor_delay));

            let lists = ProfileLists::new(gateway);
            let outcome = lists.load().await;
            assert!(outcome.startups_updated && outcome.investors_updated);

            let names: Vec<String> = lists.startups().await.into_iter().map(|s| s.name).collect();
            assert_eq!(names, vec!["Zeta", "Alpha"]);
            assert_eq!(lists.investors().await.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_load_is_concurrent() {
        let gateway = Arc::new(FakeGateway::new());
        *gateway.startup_delay.lock().unwrap() = Some(Duration::from_millis(150));
        *gateway.investor_delay.lock().unwrap() = Some(Duration::from_millis(150));

        let lists = ProfileLists::new(gateway);
        let started = std::time::Instant::now();
        lists.load().await;
        assert!(started.elapsed() < Duration::from_millis(290));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_data() {
        let gateway = Arc::new(FakeGateway::new());
        *gateway.startups.lock().unwrap() = Some(Ok(vec![startup("Acme")]));
        *gateway.investors.lock().unwrap() = Some(Ok(vec![investor("Fund")]));
        let lists = ProfileLists::new(gateway.clone());
        lists.load().await;

        *gateway.startups.lock().unwrap() = Some(Err(NovaError::network("down")));
        *gateway.investors.lock().unwrap() = Some(Ok(vec![investor("Fund"), investor("Other")]));
        let outcome = lists.load().await;

        assert!(!outcome.startups_updated);
        assert!(outcome.investors_updated);
        assert_eq!(lists.startups().await[0].name, "Acme");
        assert_eq!(lists.investors().await.len(), 2);
    }

    #[test]
    fn test_rows() {
        let mut fund = investor("Fund");
        fund.preferred_stage = vec![Stage::Seed, Stage::SeriesA];
        assert_eq!(
            ListRow::from(&fund),
            ListRow {
                title: "Fund".to_string(),
                detail: "Stages: seed, series-a".to_string(),
            }
        );
        assert_eq!(ListRow::from(&startup("Acme")).detail, "Acme tagline");
        assert_eq!(ListRow::from(&investor("Bare")).detail, "Stages: ");
    }
}
