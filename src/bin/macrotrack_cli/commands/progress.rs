// ABOUTME: Daily intake progress command for macrotrack-cli
// ABOUTME: Loads a food log file and compares it with saved targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrotrack::errors::AppResult;
use macrotrack::intelligence::progress_against;
use macrotrack::models::DailyLog;
use macrotrack::settings::SettingsStore;
use std::path::Path;
use tracing::debug;

use crate::helpers::display::display_progress;
use crate::helpers::input::{print_json, read_json};

type Result<T> = AppResult<T>;

/// Compare a daily log with saved targets
pub async fn show(store: &dyn SettingsStore, log_path: &Path, json: bool) -> Result<()> {
    let log: DailyLog = read_json(log_path).await?;
    let settings = store.load().await?;
    debug!(date = %log.date, entries = log.entries.len(), "Loaded daily log");

    let progress = progress_against(&log, &settings.macro_targets);
    if json {
        return print_json(&progress);
    }
    println!("\n{}", log.date.format("%A %-d %B %Y"));
    display_progress(&progress);
    Ok(())
}
