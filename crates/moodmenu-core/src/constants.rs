// ABOUTME: Domain constants for scoring, selection, and row fallbacks
// ABOUTME: Single source for the numeric values shared by engine and service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Application constants organized by domain.
//!
//! The recommendation heuristic is driven by a handful of fixed values; they
//! live here so that the engine configuration defaults and the tests agree on
//! a single source.

/// Match score computation values
pub mod scoring {
    /// Starting score before any bonus is applied
    pub const BASE_SCORE: i32 = 50;

    /// Lower clamp bound for a reported match score
    pub const MIN_SCORE: u8 = 20;

    /// Upper clamp bound for a reported match score
    pub const MAX_SCORE: u8 = 98;

    /// Bonus per liked ingredient token found in the ingredient text
    pub const LIKED_INGREDIENT_BONUS: i32 = 15;

    /// Bonus per mood keyword found in the ingredient text or dish name
    pub const MOOD_KEYWORD_BONUS: i32 = 10;

    /// Bonus per dietary-style keyword found in the ingredient text
    pub const STYLE_KEYWORD_BONUS: i32 = 8;
}

/// Shortlist composition limits
pub mod selection {
    /// Maximum number of dishes in a recommendation shortlist
    pub const MAX_RECOMMENDATIONS: usize = 5;

    /// Maximum number of reasons attached to a single recommendation
    pub const MAX_REASONS: usize = 3;
}

/// Fallback values for incomplete catalog rows
pub mod fallbacks {
    /// Category used for bookkeeping when a row has none
    pub const DEFAULT_CATEGORY: &str = "Main";

    /// Placeholder display name for a row without one
    pub const DEFAULT_DISH_NAME: &str = "Dish";

    /// Price reported when a row has none (same unit as stored prices)
    pub const DEFAULT_PRICE: i64 = 500;

    /// Icon tag for unrecognized categories
    pub const DEFAULT_ICON: &str = "🍽️";
}
