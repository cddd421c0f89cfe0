use async_trait::async_trait;

use super::model::SignedInProfile;
use crate::error::Result;

/// Durable storage for the signed-in profile.
///
/// Holds at most one profile under a fixed key.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Reads the stored profile, `Ok(None)` when nothing is stored.
    async fn load(&self) -> Result<Option<SignedInProfile>>;

    /// Replaces the stored profile.
    async fn save(&self, profile: &SignedInProfile) -> Result<()>;

    /// Removes the stored profile. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<()>;
}
