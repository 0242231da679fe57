// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for macrotrack-cli
// ABOUTME: Provides access to program, target, and progress commands

pub mod program;
pub mod progress;
pub mod targets;
