// ABOUTME: In-memory settings store for tests and ephemeral sessions
// ABOUTME: Shares state across clones through an async read-write lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{SettingsStore, UserSettings};
use macrotrack_core::errors::AppResult;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Settings held in process memory
///
/// Clones share the same underlying settings.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    settings: Arc<RwLock<Option<UserSettings>>>,
}

impl InMemorySettingsStore {
    /// Empty store; `load` returns defaults until something is saved
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with settings
    #[must_use]
    pub fn with_settings(settings: UserSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Some(settings))),
        }
    }
}

#[async_trait::async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> AppResult<UserSettings> {
        Ok(self.settings.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, settings: &UserSettings) -> AppResult<()> {
        *self.settings.write().await = Some(settings.clone());
        Ok(())
    }
}
