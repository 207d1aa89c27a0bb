// ABOUTME: Recommendation route handlers turning guest preferences into a shortlist
// ABOUTME: Deserializes raw preference text, reads a catalog snapshot, runs the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Recommendation routes.
//!
//! The handler is deliberately forgiving: unknown moods or styles and
//! malformed preference text degrade to weaker personalization, never to a
//! client error. A catalog read failure degrades to an empty catalog, which
//! surfaces as 404 "no recommendations found" rather than 500.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use moodmenu_core::errors::AppError;
use moodmenu_intelligence::PreferenceProfile;

use crate::database::MenuCatalog;
use crate::resources::ServerResources;

/// Guest preference payload for POST /api/recommendations.
///
/// Mood and style arrive as free-form labels and the liked/disliked fields
/// as raw comma-separated text; all parsing tolerance lives downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    /// Optional caller-supplied user identifier, used only for logging
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Mood label, e.g. "Joy"
    #[serde(default)]
    pub mood: String,
    /// Dietary style label, e.g. "Vegetarian"
    #[serde(default)]
    pub style: String,
    /// Comma-separated liked ingredients
    #[serde(default)]
    pub like_to_eat: String,
    /// Comma-separated disliked ingredients
    #[serde(default)]
    pub dont_like_to_eat: String,
}

/// Stand-in preferences for the GET surface, where the guest has not
/// submitted any: an upbeat omnivore who avoids mushrooms.
const DEFAULT_MOOD: &str = "Joy";
const DEFAULT_STYLE: &str = "Standard";
const DEFAULT_LIKED: &str = "meat, fish";
const DEFAULT_DISLIKED: &str = "mushrooms";

/// Recommendation routes implementation
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create all recommendation routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recommendations", post(Self::handle_recommendations))
            .route(
                "/api/recommendations/:user_id",
                get(Self::handle_user_recommendations),
            )
            .with_state(resources)
    }

    /// POST /api/recommendations - scored, explained shortlist
    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RecommendationRequest>,
    ) -> Result<Response, AppError> {
        info!(
            user.id = request.user_id,
            mood = %request.mood,
            style = %request.style,
            "recommendation request received"
        );

        let profile = PreferenceProfile::from_request(
            &request.mood,
            &request.style,
            &request.like_to_eat,
            &request.dont_like_to_eat,
        );

        Self::respond(&resources, &profile).await
    }

    /// GET /api/recommendations/{user_id} - shortlist under stand-in
    /// preferences, for guests who have not submitted any
    async fn handle_user_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        info!(user.id = user_id, "default-preference recommendation request");

        let profile = PreferenceProfile::from_request(
            DEFAULT_MOOD,
            DEFAULT_STYLE,
            DEFAULT_LIKED,
            DEFAULT_DISLIKED,
        );

        Self::respond(&resources, &profile).await
    }

    async fn respond(
        resources: &ServerResources,
        profile: &PreferenceProfile,
    ) -> Result<Response, AppError> {
        // An unreadable catalog degrades to an empty one; the guest sees
        // "no recommendations found", not an internal error.
        let dishes = match resources.database.list_dishes().await {
            Ok(dishes) => dishes,
            Err(e) => {
                warn!(error = %e, "menu catalog unavailable, degrading to empty catalog");
                Vec::new()
            }
        };

        let recommendations = resources.engine.recommend(&dishes, profile);
        if recommendations.is_empty() {
            return Err(AppError::not_found("Recommendations"));
        }

        Ok(Json(recommendations).into_response())
    }
}
