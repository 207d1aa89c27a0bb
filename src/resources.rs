// ABOUTME: Centralized server resources shared across all HTTP route handlers
// ABOUTME: Holds the database, configuration, and recommendation engine behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Shared server resources.
//!
//! One `Arc<ServerResources>` is created at startup and cloned into every
//! route group, so handlers never thread individual dependencies around.

use std::sync::Arc;

use moodmenu_intelligence::RecommendationEngine;

use crate::config::ServerConfig;
use crate::database::MenuDatabase;

/// Everything route handlers need, behind a single `Arc`.
pub struct ServerResources {
    /// Menu catalog storage
    pub database: Arc<MenuDatabase>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Stateless recommendation engine
    pub engine: RecommendationEngine,
}

impl ServerResources {
    /// Bundle resources for sharing across route handlers
    #[must_use]
    pub fn new(database: MenuDatabase, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
            engine: RecommendationEngine::new(),
        }
    }
}
