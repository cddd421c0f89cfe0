//! The signed-in identity for the running client.
//!
//! [`IdentitySession`] is the single accessor for the signed-in profile. It
//! reads durable storage once in [`IdentitySession::init`]; afterwards storage
//! is only written by [`IdentitySession::sign_in`] and cleared by
//! [`IdentitySession::sign_out`].

use std::sync::Arc;

use novamatch_core::auth::{SessionStorage, SignedInProfile};
use novamatch_core::error::Result;
use tokio::sync::RwLock;

pub struct IdentitySession {
    storage: Arc<dyn SessionStorage>,
    profile: RwLock<Option<SignedInProfile>>,
}

impl IdentitySession {
    /// Reads the stored profile once.
    ///
    /// An unreadable stored profile is treated as signed out.
    pub async fn init(storage: Arc<dyn SessionStorage>) -> Self {
        let profile = match storage.load().await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable stored profile");
                None
            }
        };

        if let Some(ref profile) = profile {
            tracing::info!(user = %profile.display_name(), "Restored signed-in profile");
        }

        Self {
            storage,
            profile: RwLock::new(profile),
        }
    }

    pub async fn profile(&self) -> Option<SignedInProfile> {
        self.profile.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.profile.read().await.is_some()
    }

    /// Persists `profile` and makes it the current identity.
    ///
    /// Nothing changes in memory when persisting fails.
    pub async fn sign_in(&self, profile: SignedInProfile) -> Result<()> {
        self.storage.save(&profile).await?;
        tracing::info!(user = %profile.display_name(), "Signed in");
        *self.profile.write().await = Some(profile);
        Ok(())
    }

    /// Clears the stored profile and the in-memory identity.
    ///
    /// The in-memory identity is cleared even if storage reports an error.
    pub async fn sign_out(&self) -> Result<()> {
        let previous = self.profile.write().await.take();
        if let Some(previous) = previous {
            tracing::info!(user = %previous.display_name(), "Signed out");
        }
        self.storage.clear().await
    }
}
