//! Configuration service implementation.
//!
//! Resolves [`AppConfig`] from the optional config file
//! (`~/.config/novamatch/config.toml`), the environment, and caller overrides.

use std::path::PathBuf;

use novamatch_core::config::{AppConfig, ConfigLayer};
use novamatch_core::error::Result;

use crate::paths::NovaPaths;

/// Environment variable holding the backend base URL.
pub const ENV_BACKEND_URL: &str = "BACKEND_URL";
/// Environment variable holding the identity provider client identifier.
pub const ENV_GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";

/// Loads configuration layers and merges them into an [`AppConfig`].
#[derive(Debug, Clone)]
pub struct ConfigService {
    file_path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading the default config file.
    pub fn new() -> Result<Self> {
        Ok(Self {
            file_path: NovaPaths::config_file()?,
        })
    }

    /// Creates a service reading a custom config file.
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Reads the config file layer. A missing file yields an empty layer.
    pub fn load_file_layer(&self) -> Result<ConfigLayer> {
        if !self.file_path.exists() {
            tracing::debug!(path = %self.file_path.display(), "No config file, using defaults");
            return Ok(ConfigLayer::default());
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Reads the environment layer from the process environment.
    pub fn env_layer() -> ConfigLayer {
        Self::env_layer_from(|key| std::env::var(key).ok())
    }

    /// Reads the environment layer through `lookup`.
    pub fn env_layer_from(lookup: impl Fn(&str) -> Option<String>) -> ConfigLayer {
        ConfigLayer {
            backend_url: lookup(ENV_BACKEND_URL),
            google_client_id: lookup(ENV_GOOGLE_CLIENT_ID),
        }
    }

    /// Resolves defaults, then file, then environment, then `overrides`.
    pub fn resolve(&self, overrides: &ConfigLayer) -> Result<AppConfig> {
        self.resolve_with_env(&Self::env_layer(), overrides)
    }

    pub fn resolve_with_env(&self, env: &ConfigLayer, overrides: &ConfigLayer) -> Result<AppConfig> {
        let mut config = AppConfig::default();
        config.apply(&self.load_file_layer()?);
        config.apply(env);
        config.apply(overrides);

        tracing::debug!(
            backend_url = %config.backend_url,
            sign_in_enabled = config.sign_in_enabled(),
            "Resolved configuration"
        );
        Ok(config)
    }
}
