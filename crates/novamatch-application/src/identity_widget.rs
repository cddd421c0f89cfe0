//! Sign-in widget bridging a third-party identity provider to the backend.
//!
//! The widget loads the provider on demand (once), hands the credential it
//! produces to the backend's identity exchange, and on success stores the
//! returned profile in the [`IdentitySession`]. Failures raise a blocking
//! alert through the [`Notifier`].

use std::sync::Arc;

use novamatch_core::auth::{IdentityProvider, SignedInProfile};
use novamatch_core::error::Result;
use novamatch_core::gateway::RemoteGateway;
use novamatch_core::Notifier;

use crate::identity_session::IdentitySession;

pub const CONFIGURE_LABEL: &str = "Configure Google Sign-In";
pub const MISSING_CLIENT_ID_ALERT: &str = "Missing GOOGLE_CLIENT_ID env. Set it and reload.";
pub const AUTH_FAILED_ALERT: &str = "Google authentication failed";
pub const AUTH_ERROR_ALERT: &str = "Google authentication error";

/// Called with the profile after a successful sign-in.
pub type OnSignedIn = Arc<dyn Fn(&SignedInProfile) + Send + Sync>;

/// What the widget presents after mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// No client identifier configured; a disabled prompt is shown instead.
    ConfigurationPrompt,
    /// The provider's sign-in control is rendered.
    Ready,
}

pub struct IdentityWidget {
    provider: Arc<dyn IdentityProvider>,
    gateway: Arc<dyn RemoteGateway>,
    session: Arc<IdentitySession>,
    notifier: Arc<dyn Notifier>,
    client_id: Option<String>,
    on_signed_in: Option<OnSignedIn>,
}

impl IdentityWidget {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        gateway: Arc<dyn RemoteGateway>,
        session: Arc<IdentitySession>,
        notifier: Arc<dyn Notifier>,
        client_id: Option<String>,
    ) -> Self {
        Self {
            provider,
            gateway,
            session,
            notifier,
            client_id,
            on_signed_in: None,
        }
    }

    pub fn with_on_signed_in(mut self, on_signed_in: OnSignedIn) -> Self {
        self.on_signed_in = Some(on_signed_in);
        self
    }

    /// Prepares the provider and renders its control.
    ///
    /// Without a client identifier nothing is loaded and the configuration
    /// prompt is shown instead.
    pub async fn mount(&self) -> Result<WidgetState> {
        let Some(client_id) = self.client_id.as_deref() else {
            return Ok(WidgetState::ConfigurationPrompt);
        };

        if self.provider.is_loaded() {
            tracing::debug!("Reusing loaded identity provider");
        } else {
            self.provider.load().await?;
        }

        self.provider.initialize(client_id)?;
        self.provider.render_button()?;
        Ok(WidgetState::Ready)
    }

    /// Reacts to the user activating the configuration prompt.
    pub async fn activate_configuration_prompt(&self) {
        self.notifier.alert(MISSING_CLIENT_ID_ALERT).await;
    }

    /// Exchanges `credential` for a profile and signs in with it.
    ///
    /// Returns `None` (after alerting) when the exchange is refused or fails.
    pub async fn handle_credential(&self, credential: &str) -> Option<SignedInProfile> {
        let response = match self.gateway.exchange_identity(credential).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Identity exchange failed");
                self.notifier.alert(AUTH_ERROR_ALERT).await;
                return None;
            }
        };

        let profile = match response.into_profile() {
            Ok(profile) => profile,
            Err(e) => {
                tracing::error!(error = %e, "Auth failed");
                self.notifier.alert(AUTH_FAILED_ALERT).await;
                return None;
            }
        };

        if let Err(e) = self.session.sign_in(profile.clone()).await {
            tracing::error!(error = %e, "Failed to store signed-in profile");
            self.notifier.alert(AUTH_ERROR_ALERT).await;
            return None;
        }

        if let Some(on_signed_in) = &self.on_signed_in {
            on_signed_in(&profile);
        }
        Some(profile)
    }

    /// Runs one full sign-in: mount, wait for a credential, exchange it.
    pub async fn sign_in(&self) -> Result<Option<SignedInProfile>> {
        if self.mount().await? == WidgetState::ConfigurationPrompt {
            self.activate_configuration_prompt().await;
            return Ok(None);
        }

        match self.provider.next_credential().await? {
            Some(credential) => Ok(self.handle_credential(&credential).await),
            None => {
                tracing::debug!("Sign-in dismissed");
                Ok(None)
            }
        }
    }
}
