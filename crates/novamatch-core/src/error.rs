//! Error types for the NovaMatch client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire NovaMatch client.
///
/// Every remote, storage and validation failure is mapped onto one of these
/// variants so that views can decide how to degrade (log, alert, or ignore).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum NovaError {
    /// Transport failure or non-success HTTP status
    #[error("Network error: {message}")]
    Network {
        /// HTTP status code when the server answered at all
        status: Option<u16>,
        message: String,
    },

    /// Response body was not JSON or did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Input rejected before any request was dispatched
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identity exchange was refused or could not be completed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error of local files
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NovaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Network error without a status (transport failure)
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Network error for a non-success HTTP status
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::Network {
            status: Some(status),
            message: format!("server responded with {}: {}", status, body.into()),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for NovaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for NovaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NovaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, NovaError>`.
pub type Result<T> = std::result::Result<T, NovaError>;
