//! Domain layer of the NovaMatch client.
//!
//! Holds the records exchanged with the backend, the pure normalization of
//! form input, navigation state, and the traits the other layers implement.

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod matchmaking;
pub mod navigation;
pub mod normalize;
pub mod notifier;
pub mod profile;
mod wire;

// Re-export common types
pub use config::AppConfig;
pub use error::{NovaError, Result};
pub use gateway::RemoteGateway;
pub use notifier::Notifier;
