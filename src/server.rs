// ABOUTME: HTTP server assembly wiring routes, CORS, and request tracing
// ABOUTME: Binds the listener and runs the axum service until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! HTTP server assembly and lifecycle.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::resources::ServerResources;
use crate::routes;

/// The moodmenu HTTP server.
pub struct RecommendationServer {
    resources: Arc<ServerResources>,
}

impl RecommendationServer {
    /// Create a server around shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router with middleware applied.
    #[must_use]
    pub fn router(&self) -> Router {
        routes::router(self.resources.clone())
            .layer(setup_cors())
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the listener and serve until shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails
    /// while running.
    pub async fn run(&self, port: u16) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
            .await
            .with_context(|| format!("Failed to bind HTTP port {port}"))?;

        info!("HTTP server listening on http://0.0.0.0:{port}");

        axum::serve(listener, self.router())
            .await
            .context("HTTP server error")
    }
}

/// Configure CORS from the `CORS_ALLOWED_ORIGINS` environment variable.
///
/// Empty or "*" allows any origin (development); otherwise a comma-separated
/// origin list is enforced.
fn setup_cors() -> CorsLayer {
    let allowed = std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let allow_origin = if allowed.is_empty() || allowed == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
