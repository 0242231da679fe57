// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: JSON file input helpers for macrotrack-cli
// ABOUTME: Reads questionnaire answers and daily logs with path-aware error messages

use macrotrack::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;

/// Read and deserialize a JSON file
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}", path.display())).with_source(e)
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        AppError::invalid_input(format!("{} is not valid: {e}", path.display()))
            .with_resource_id(path.display().to_string())
    })
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
