// ABOUTME: Route module organization for the moodmenu HTTP API
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Route module for the moodmenu server.
//!
//! Each domain module contains only route definitions and thin handler
//! functions; recommendation logic lives in `moodmenu-intelligence` and
//! storage in [`crate::database`].

use std::sync::Arc;

use axum::Router;

use crate::resources::ServerResources;

/// Health check and system status routes
pub mod health;
/// Menu catalog routes
pub mod menu;
/// Recommendation routes
pub mod recommendations;

/// Health check route handlers
pub use health::HealthRoutes;
/// Menu route handlers
pub use menu::MenuRoutes;
/// Recommendation route handlers
pub use recommendations::{RecommendationRequest, RecommendationRoutes};

/// Assemble the full application router.
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(MenuRoutes::routes(resources.clone()))
        .merge(RecommendationRoutes::routes(resources))
}
