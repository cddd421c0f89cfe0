use async_trait::async_trait;

/// Surfaces blocking, user-visible alerts.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Shows `message` and resolves once the user has acknowledged it.
    async fn alert(&self, message: &str);
}
