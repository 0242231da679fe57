// ABOUTME: JSON file settings store using async filesystem operations
// ABOUTME: Writes through a temporary sibling file and renames it into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{SettingsStore, UserSettings};
use macrotrack_core::errors::{AppError, AppResult};
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Settings stored as pretty-printed JSON at a fixed path
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store backed by `path`; the file and its parent directories are
    /// created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the settings file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait::async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> AppResult<UserSettings> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(UserSettings::default());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read settings from {}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            AppError::storage(format!(
                "Settings file {} is not valid JSON",
                self.path.display()
            ))
            .with_source(e)
        })
    }

    async fn save(&self, settings: &UserSettings) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(settings)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json).await?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                warn!(
                    path = %temp_path.display(),
                    error = %cleanup,
                    "Failed to remove temporary settings file"
                );
            }
            return Err(AppError::storage(format!(
                "Failed to replace settings file {}",
                self.path.display()
            ))
            .with_source(e));
        }

        info!(path = %self.path.display(), "Saved user settings");
        Ok(())
    }
}
