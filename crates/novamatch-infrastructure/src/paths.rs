//! Path management for NovaMatch local files.
//!
//! ```text
//! ~/.config/novamatch/         # Config directory (dirs::config_dir)
//! ├── config.toml              # Optional configuration file
//! ├── auth_profile.json        # Signed-in profile, absent when signed out
//! └── logs/                    # Application logs
//!     └── novamatch.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "novamatch";

/// File name of the stored signed-in profile; the one fixed storage key.
pub const AUTH_PROFILE_FILE: &str = "auth_profile.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for novamatch_core::NovaError {
    fn from(err: PathError) -> Self {
        novamatch_core::NovaError::config(err.to_string())
    }
}

pub struct NovaPaths;

impl NovaPaths {
    /// Returns the NovaMatch configuration directory (e.g. `~/.config/novamatch/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path holding the serialized signed-in profile.
    pub fn auth_profile_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(AUTH_PROFILE_FILE))
    }

    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
