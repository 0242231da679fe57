// ABOUTME: Core types and constants for the Macrotrack nutrition platform
// ABOUTME: Foundation crate with error handling, profile and food log models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macrotrack Core
//!
//! Foundation crate providing shared types and constants for the Macrotrack
//! nutrition platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy conversion factors and input validation limits
//! - **models**: Profile inputs, program outputs, and food log records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, program, food log)
pub mod models;
