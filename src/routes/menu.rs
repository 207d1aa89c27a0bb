// ABOUTME: Menu catalog route handlers exposing the full dish list
// ABOUTME: Thin read-only wrapper around the MenuCatalog storage trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Menu catalog routes.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use moodmenu_core::errors::AppError;

use crate::database::MenuCatalog;
use crate::resources::ServerResources;

/// Menu routes implementation
pub struct MenuRoutes;

impl MenuRoutes {
    /// Create all menu routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/menu", get(Self::handle_list_menu))
            .with_state(resources)
    }

    /// GET /api/menu - full catalog in storage order
    async fn handle_list_menu(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let dishes = resources.database.list_dishes().await?;
        Ok(Json(dishes).into_response())
    }
}
