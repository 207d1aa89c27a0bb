// ABOUTME: Recommendation output models produced by the engine
// ABOUTME: ScoredDish pairs a catalog dish with its match score; Recommendation is the response record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

use serde::{Deserialize, Serialize};

use super::Dish;

/// A shortlisted dish together with the score the engine assigned to it.
///
/// Ephemeral: borrows the catalog snapshot for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredDish<'a> {
    /// The selected catalog dish
    pub dish: &'a Dish,
    /// Heuristic fit in `[20, 98]`
    pub match_score: u8,
    /// Icon tag derived from the dish category via a fixed lookup
    pub icon: &'static str,
}

/// A single recommendation record returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Menu row identity
    pub id: i64,
    /// Display name (never empty; falls back to a placeholder)
    pub name: String,
    /// Category label (never empty; falls back to the generic category)
    pub category: String,
    /// Free-text description, when the catalog row has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in whole currency units (never null; falls back to a fixed value)
    pub price: i64,
    /// Icon tag for the category
    pub icon: String,
    /// Heuristic fit in `[20, 98]`
    pub match_score: u8,
    /// 1-3 ordered human-readable reasons, the last naming the dish
    pub reasons: Vec<String>,
}
