use async_trait::async_trait;

use crate::error::Result;

/// A third-party sign-in provider (e.g. Google Identity Services).
///
/// The provider is loaded on demand. Callers check [`is_loaded`] first so that
/// an already loaded provider is reused rather than loaded twice.
///
/// [`is_loaded`]: IdentityProvider::is_loaded
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn is_loaded(&self) -> bool;

    /// Loads the provider's client library.
    async fn load(&self) -> Result<()>;

    /// Configures the provider with the application's client identifier.
    fn initialize(&self, client_id: &str) -> Result<()>;

    /// Presents the provider's sign-in control.
    fn render_button(&self) -> Result<()>;

    /// Waits for the next credential the user produces.
    ///
    /// Returns `Ok(None)` when the user dismisses the sign-in flow.
    async fn next_credential(&self) -> Result<Option<String>>;
}
