// ABOUTME: Core types and constants for the moodmenu recommendation platform
// ABOUTME: Foundation crate with data models, error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

#![deny(unsafe_code)]

//! # Moodmenu Core
//!
//! Foundation crate providing shared types and constants for the moodmenu
//! recommendation platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP responses
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Core data models (`Dish`, `Mood`, `DietaryStyle`, `Recommendation`)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and default values organized by domain
pub mod constants;

/// Core data models (`Dish`, `Mood`, `DietaryStyle`, `Recommendation`, etc.)
pub mod models;
