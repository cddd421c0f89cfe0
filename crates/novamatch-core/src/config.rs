//! Client configuration.
//!
//! Values are layered: defaults, then the config file, then the environment,
//! then command-line flags. Each layer is a [`ConfigLayer`]; blank values in a
//! layer count as absent.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the backend, without trailing slash
    pub backend_url: String,
    /// Identity provider client identifier. `None` disables sign-in.
    pub google_client_id: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            google_client_id: None,
        }
    }
}

impl AppConfig {
    /// Applies a layer on top of the current values.
    pub fn apply(&mut self, layer: &ConfigLayer) {
        if let Some(url) = non_blank(layer.backend_url.as_deref()) {
            self.backend_url = url.trim_end_matches('/').to_string();
        }
        if let Some(client_id) = non_blank(layer.google_client_id.as_deref()) {
            self.google_client_id = Some(client_id.to_string());
        }
    }

    pub fn sign_in_enabled(&self) -> bool {
        self.google_client_id.is_some()
    }
}

/// One partial source of configuration (`config.toml`, env, flags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default)]
    pub google_client_id: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert!(!config.sign_in_enabled());
    }

    #[test]
    fn test_later_layers_win() {
        let mut config = AppConfig::default();
        config.apply(&ConfigLayer {
            backend_url: Some("https://api.example.com/".to_string()),
            google_client_id: Some("file-client".to_string()),
        });
        config.apply(&ConfigLayer {
            backend_url: None,
            google_client_id: Some("env-client".to_string()),
        });
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.google_client_id.as_deref(), Some("env-client"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply(&ConfigLayer {
            backend_url: Some("   ".to_string()),
            google_client_id: Some(String::new()),
        });
        assert_eq!(config, AppConfig::default());
    }
}
