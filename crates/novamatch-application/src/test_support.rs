//! In-memory fakes shared by the application tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use novamatch_core::auth::{AuthResponse, IdentityProvider, SessionStorage, SignedInProfile};
use novamatch_core::error::{NovaError, Result};
use novamatch_core::gateway::RemoteGateway;
use novamatch_core::matchmaking::{MatchQuery, MatchResult};
use novamatch_core::profile::{
    CreatedRecord, InvestorProfile, NewInvestor, NewStartup, StartupProfile,
};
use novamatch_core::Notifier;

pub fn startup(name: &str) -> StartupProfile {
    StartupProfile {
        id: Some(format!("s-{}", name.to_lowercase())),
        name: name.to_string(),
        tagline: format!("{} tagline", name),
        industry: vec![],
        stage: None,
        funding_needs_min: None,
        funding_needs_max: None,
    }
}

pub fn investor(name: &str) -> InvestorProfile {
    InvestorProfile {
        id: Some(format!("i-{}", name.to_lowercase())),
        name: name.to_string(),
        email: String::new(),
        domains: vec![],
        preferred_stage: vec![],
        ticket_min: None,
        ticket_max: None,
    }
}

pub fn profile(name: &str) -> SignedInProfile {
    SignedInProfile {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        picture: "https://example.com/avatar.png".to_string(),
        ..Default::default()
    }
}

/// Scriptable gateway that records what it was asked to do.
#[derive(Default)]
pub struct FakeGateway {
    pub startups: Mutex<Option<Result<Vec<StartupProfile>>>>,
    pub investors: Mutex<Option<Result<Vec<InvestorProfile>>>>,
    pub startup_delay: Mutex<Option<Duration>>,
    pub investor_delay: Mutex<Option<Duration>>,
    pub create_result: Mutex<Option<Result<CreatedRecord>>>,
    pub create_delay: Mutex<Option<Duration>>,
    pub match_result: Mutex<Option<Result<Vec<MatchResult>>>>,
    pub auth_result: Mutex<Option<Result<AuthResponse>>>,
    pub created_startups: Mutex<Vec<NewStartup>>,
    pub created_investors: Mutex<Vec<NewInvestor>>,
    pub queries: Mutex<Vec<MatchQuery>>,
    pub tokens: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn take<T>(slot: &Mutex<Option<Result<T>>>, fallback: impl FnOnce() -> Result<T>) -> Result<T>
    where
        T: Clone,
    {
        match &*slot.lock().unwrap() {
            Some(result) => result.clone(),
            None => fallback(),
        }
    }

    async fn pause(delay: &Mutex<Option<Duration>>) {
        let delay = *delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl RemoteGateway for FakeGateway {
    async fn list_startups(&self) -> Result<Vec<StartupProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::pause(&self.startup_delay).await;
        Self::take(&self.startups, || Ok(vec![]))
    }

    async fn list_investors(&self) -> Result<Vec<InvestorProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::pause(&self.investor_delay).await;
        Self::take(&self.investors, || Ok(vec![]))
    }

    async fn create_startup(&self, payload: &NewStartup) -> Result<CreatedRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.created_startups.lock().unwrap().push(payload.clone());
        Self::pause(&self.create_delay).await;
        Self::take(&self.create_result, || {
            Ok(CreatedRecord {
                id: "created-1".to_string(),
            })
        })
    }

    async fn create_investor(&self, payload: &NewInvestor) -> Result<CreatedRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.created_investors.lock().unwrap().push(payload.clone());
        Self::pause(&self.create_delay).await;
        Self::take(&self.create_result, || {
            Ok(CreatedRecord {
                id: "created-1".to_string(),
            })
        })
    }

    async fn run_match_query(&self, query: &MatchQuery) -> Result<Vec<MatchResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        Self::take(&self.match_result, || Ok(vec![]))
    }

    async fn exchange_identity(&self, id_token: &str) -> Result<AuthResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.lock().unwrap().push(id_token.to_string());
        Self::take(&self.auth_result, || Err(NovaError::network("no auth scripted")))
    }
}

/// Session storage held in memory.
#[derive(Default)]
pub struct MemorySessionStorage {
    pub stored: Mutex<Option<SignedInProfile>>,
    pub fail_load: AtomicBool,
    pub fail_save: AtomicBool,
    pub saves: AtomicUsize,
    pub clears: AtomicUsize,
}

impl MemorySessionStorage {
    pub fn with_profile(profile: SignedInProfile) -> Self {
        Self {
            stored: Mutex::new(Some(profile)),
            ..Default::default()
        }
    }

    pub fn stored(&self) -> Option<SignedInProfile> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn load(&self) -> Result<Option<SignedInProfile>> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(NovaError::Serialization {
                format: "JSON".to_string(),
                message: "corrupt".to_string(),
            });
        }
        Ok(self.stored())
    }

    async fn save(&self, profile: &SignedInProfile) -> Result<()> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(NovaError::io("disk full"));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.stored.lock().unwrap() = Some(profile.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

/// Identity provider that hands out scripted credentials.
#[derive(Default)]
pub struct FakeProvider {
    pub loaded: AtomicBool,
    pub loads: AtomicUsize,
    pub initialized_with: Mutex<Vec<String>>,
    pub buttons_rendered: AtomicUsize,
    pub credentials: Mutex<VecDeque<String>>,
}

impl FakeProvider {
    pub fn with_credentials(credentials: &[&str]) -> Self {
        Self {
            credentials: Mutex::new(credentials.iter().map(|c| c.to_string()).collect()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    async fn load(&self) -> Result<()> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.loaded.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn initialize(&self, client_id: &str) -> Result<()> {
        self.initialized_with.lock().unwrap().push(client_id.to_string());
        Ok(())
    }

    fn render_button(&self) -> Result<()> {
        self.buttons_rendered.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn next_credential(&self) -> Result<Option<String>> {
        Ok(self.credentials.lock().unwrap().pop_front())
    }
}

/// Notifier that records alerts instead of showing them.
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
