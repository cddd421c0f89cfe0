//! Wiring of the application services for the interactive shell.

use std::sync::Arc;

use novamatch_application::{
    IdentitySession, IdentityWidget, InvestorForm, MatchmakingView, OnCreated, ProfileLists,
    StartupForm,
};
use novamatch_core::auth::{IdentityProvider, SessionStorage};
use novamatch_core::navigation::View;
use novamatch_core::{AppConfig, Notifier, RemoteGateway};
use tokio::sync::mpsc;

use crate::screens::{self, HomeSnapshot};

/// Request to refetch the latest startups and investors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadLists;

pub struct App {
    pub config: AppConfig,
    pub session: Arc<IdentitySession>,
    pub lists: Arc<ProfileLists>,
    pub startup_form: Arc<StartupForm>,
    pub investor_form: Arc<InvestorForm>,
    pub matchmaking: MatchmakingView,
    pub widget: IdentityWidget,
    reload_tx: mpsc::Sender<ReloadLists>,
}

fn reload_on_created(reload_tx: &mpsc::Sender<ReloadLists>) -> OnCreated {
    let tx = reload_tx.clone();
    Arc::new(move |id: String| {
        tracing::debug!(%id, "Record created, requesting list reload");
        if let Err(e) = tx.try_send(ReloadLists) {
            tracing::warn!(error = %e, "Could not queue list reload");
        }
    })
}

impl App {
    pub async fn build(
        config: AppConfig,
        gateway: Arc<dyn RemoteGateway>,
        storage: Arc<dyn SessionStorage>,
        provider: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
        reload_tx: mpsc::Sender<ReloadLists>,
    ) -> Self {
        let session = Arc::new(IdentitySession::init(storage).await);
        let widget = IdentityWidget::new(
            provider,
            gateway.clone(),
            session.clone(),
            notifier,
            config.google_client_id.clone(),
        );

        Self {
            session,
            lists: Arc::new(ProfileLists::new(gateway.clone())),
            startup_form: Arc::new(
                StartupForm::new(gateway.clone()).with_on_created(reload_on_created(&reload_tx)),
            ),
            investor_form: Arc::new(
                InvestorForm::new(gateway.clone()).with_on_created(reload_on_created(&reload_tx)),
            ),
            matchmaking: MatchmakingView::new(gateway),
            widget,
            config,
            reload_tx,
        }
    }

    pub async fn request_reload(&self) {
        if let Err(e) = self.reload_tx.send(ReloadLists).await {
            tracing::warn!(error = %e, "List reloader has stopped");
        }
    }

    /// Renders `view` from the current state.
    pub async fn render(&self, view: View) -> String {
        let sign_in_enabled = self.config.sign_in_enabled();
        match view {
            View::Home => {
                let snapshot = HomeSnapshot {
                    profile: self.session.profile().await,
                    sign_in_enabled,
                    startup_draft: self.startup_form.draft().await,
                    startup_pending: self.startup_form.is_pending(),
                    investor_draft: self.investor_form.draft().await,
                    investor_pending: self.investor_form.is_pending(),
                    startups: self.lists.startup_listing().await,
                    investors: self.lists.investor_listing().await,
                };
                screens::home(&snapshot)
            }
            View::Matchmaking => {
                let filters = self.matchmaking.filters().await;
                screens::matchmaking(&filters, &self.matchmaking.listing().await)
            }
            View::Chat => screens::chat(),
            View::Profile => screens::profile(self.session.profile().await.as_ref(), sign_in_enabled),
            View::Resources => screens::resources(),
        }
    }
}
