// ABOUTME: Configuration module organization for the moodmenu server
// ABOUTME: Environment-variable driven settings with typed wrappers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Server configuration.

/// Environment-variable based configuration loading
pub mod environment;

pub use environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};
