// ABOUTME: Single-pass shortlist selection with category diversity and hard exclusion
// ABOUTME: Scans the catalog snapshot in storage order, first dish per category wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Shortlist selection.
//!
//! Composition policy, not ranking: the shortlist covers up to five distinct
//! categories in catalog scan order, it is not a top-5-by-score. A dish whose
//! ingredient text contains any disliked token is skipped before scoring or
//! category bookkeeping and is never reconsidered, even when the shortlist
//! ends up shorter than five.

use std::collections::HashSet;

use moodmenu_core::models::{Dish, ScoredDish};
use tracing::{debug, trace};

use crate::config::SelectionLimits;
use crate::preferences::PreferenceProfile;
use crate::scoring::MatchScorer;
use crate::tables;

/// Select an ordered, category-diverse shortlist from a catalog snapshot.
///
/// The snapshot is scanned once in its natural (storage) order. The result
/// keeps that order; it may legitimately hold fewer than
/// `limits.max_recommendations` entries when the catalog has fewer eligible
/// categories.
#[must_use]
pub fn select_diverse<'a>(
    dishes: &'a [Dish],
    profile: &PreferenceProfile,
    scorer: &MatchScorer,
    limits: &SelectionLimits,
) -> Vec<ScoredDish<'a>> {
    let mut shortlist: Vec<ScoredDish<'a>> = Vec::new();
    let mut categories_seen: HashSet<&str> = HashSet::new();

    for dish in dishes {
        if shortlist.len() >= limits.max_recommendations {
            break;
        }

        // Exclusion is absolute and happens before any scoring or category
        // bookkeeping; an excluded dish is never reconsidered.
        let ingredients = dish.ingredients_lower();
        if let Some(token) = profile
            .disliked
            .iter()
            .find(|token| ingredients.contains(token.as_str()))
        {
            trace!(
                dish.id = dish.id,
                token = token.as_str(),
                "skipping dish with disliked ingredient"
            );
            continue;
        }

        // One dish per category, first seen in catalog order wins.
        let category = dish.category_or_default();
        if !categories_seen.insert(category) {
            continue;
        }

        let match_score = scorer.score(dish, profile.mood, profile.style, &profile.liked);
        debug!(
            dish.id = dish.id,
            dish.category = category,
            match_score,
            "added dish to shortlist"
        );
        shortlist.push(ScoredDish {
            dish,
            match_score,
            icon: tables::category_icon(category),
        });
    }

    shortlist
}
