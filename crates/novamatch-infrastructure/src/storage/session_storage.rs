//! File-backed storage for the signed-in profile.
//!
//! The profile lives as JSON in `~/.config/novamatch/auth_profile.json`.
//! Absence of the file means "signed out".

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use novamatch_core::auth::{SessionStorage, SignedInProfile};
use novamatch_core::error::Result;
use tokio::fs;

use crate::paths::NovaPaths;

/// Stores the signed-in profile as a single JSON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash never leaves a half-written profile behind.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Creates storage at the default path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: NovaPaths::auth_profile_file()?,
        })
    }

    /// Creates storage at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> Result<Option<SignedInProfile>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() || content.trim() == "null" {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn save(&self, profile: &SignedInProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(profile)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).await?;

        // The profile carries identity claims; keep it private to the user.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600)).await?;
        }

        fs::rename(&tmp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), "Stored signed-in profile");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Cleared signed-in profile");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
