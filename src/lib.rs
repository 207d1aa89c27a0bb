// ABOUTME: Library root for the moodmenu recommendation server
// ABOUTME: Wires configuration, storage, and HTTP routes around the intelligence crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! # Moodmenu Server
//!
//! HTTP backend for mood-based dish recommendations. The request flow is
//! deliberately thin: routes deserialize the guest's preferences, the menu
//! catalog is read as a snapshot from `SQLite`, and the pure
//! [`moodmenu_intelligence`] engine turns both into a scored, explained
//! shortlist.

#![deny(unsafe_code)]

/// Environment-driven server configuration
pub mod config;
/// Menu catalog storage backed by `SQLite`
pub mod database;
/// Structured logging setup
pub mod logging;
/// Shared server resources threaded through route handlers
pub mod resources;
/// HTTP route definitions organized by domain
pub mod routes;
/// HTTP server assembly and lifecycle
pub mod server;
