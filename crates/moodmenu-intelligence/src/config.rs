// ABOUTME: Recommendation engine configuration for scoring and shortlist limits
// ABOUTME: Configures base score, bonus values, clamp bounds, and result caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Recommendation Engine Configuration
//!
//! Numeric knobs for the scoring heuristic and the shortlist composition,
//! with defaults matching the production values in
//! [`moodmenu_core::constants`](moodmenu_core::constants).

use moodmenu_core::constants::{scoring, selection};
use serde::{Deserialize, Serialize};

/// Recommendation engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Values feeding the additive match-score heuristic
    pub scoring: ScoringConfig,
    /// Limits on shortlist composition
    pub limits: SelectionLimits,
}

/// Values feeding the additive match-score heuristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Starting score before any bonus is applied
    pub base_score: i32,
    /// Bonus per liked ingredient token found in the ingredient text
    pub liked_ingredient_bonus: i32,
    /// Bonus per mood keyword found in the ingredient text or dish name
    pub mood_keyword_bonus: i32,
    /// Bonus per dietary-style keyword found in the ingredient text
    pub style_keyword_bonus: i32,
    /// Lower clamp bound for the reported score
    pub min_score: u8,
    /// Upper clamp bound for the reported score
    pub max_score: u8,
}

/// Limits on shortlist composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionLimits {
    /// Maximum number of dishes in a shortlist
    pub max_recommendations: usize,
    /// Maximum number of reasons attached to one recommendation
    pub max_reasons: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: scoring::BASE_SCORE,
            liked_ingredient_bonus: scoring::LIKED_INGREDIENT_BONUS,
            mood_keyword_bonus: scoring::MOOD_KEYWORD_BONUS,
            style_keyword_bonus: scoring::STYLE_KEYWORD_BONUS,
            min_score: scoring::MIN_SCORE,
            max_score: scoring::MAX_SCORE,
        }
    }
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            max_recommendations: selection::MAX_RECOMMENDATIONS,
            max_reasons: selection::MAX_REASONS,
        }
    }
}
