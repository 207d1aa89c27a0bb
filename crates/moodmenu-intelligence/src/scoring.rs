// ABOUTME: Additive match-score heuristic mapping a dish and preferences to 20-98
// ABOUTME: Pure function of fixed lookup tables plus substring tests, no exclusion logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Match score computation.
//!
//! The scorer is reproducible on any dish: exclusion of disliked ingredients
//! is a selection decision and lives in [`crate::selection`], never here.

use std::collections::BTreeSet;

use moodmenu_core::models::{DietaryStyle, Dish, Mood};

use crate::config::ScoringConfig;
use crate::tables;

/// Computes the heuristic fit between a dish and a preference profile.
///
/// The score is an additive total over fixed lookup tables and substring
/// tests, clamped into `[min_score, max_score]` as the terminal step. No
/// randomness, no dependence on token ordering.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    config: ScoringConfig,
}

impl MatchScorer {
    /// Create a scorer with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with a custom configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a dish against the request preferences.
    ///
    /// Bonuses (each repetition unbounded before the clamp):
    /// - per liked token found in the lowercased ingredient text
    /// - per mood keyword found in the ingredient text or dish name
    /// - per dietary-style keyword found in the ingredient text
    /// - a flat bonus for recognized categories; a missing category earns
    ///   nothing (the "Main" fallback is selection bookkeeping, not scoring)
    #[must_use]
    pub fn score(
        &self,
        dish: &Dish,
        mood: Option<Mood>,
        style: Option<DietaryStyle>,
        liked: &BTreeSet<String>,
    ) -> u8 {
        let ingredients = dish.ingredients_lower();
        let name = dish.name_or_default().to_lowercase();

        let mut score = self.config.base_score;

        for token in liked {
            if ingredients.contains(token.as_str()) {
                score += self.config.liked_ingredient_bonus;
            }
        }

        if let Some(mood) = mood {
            for keyword in tables::mood_keywords(mood) {
                if ingredients.contains(keyword) || name.contains(keyword) {
                    score += self.config.mood_keyword_bonus;
                }
            }
        }

        if let Some(style) = style {
            for keyword in tables::style_keywords(style) {
                if ingredients.contains(keyword) {
                    score += self.config.style_keyword_bonus;
                }
            }
        }

        score += dish.category.as_deref().map_or(0, tables::category_bonus);

        // Terminal step: the score is never reported outside the clamp range.
        score.clamp(i32::from(self.config.min_score), i32::from(self.config.max_score)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::normalize_tokens;

    fn dish(category: &str, name: &str, ingredients: &str) -> Dish {
        Dish {
            id: 1,
            category: Some(category.into()),
            name: Some(name.into()),
            description: None,
            ingredients: Some(ingredients.into()),
            price: Some(400),
        }
    }

    #[test]
    fn test_base_plus_category_only() {
        let scorer = MatchScorer::new();
        let score = scorer.score(
            &dish("Drink", "Cola", "water, sugar syrup"),
            None,
            None,
            &BTreeSet::new(),
        );
        // 50 base + 2 drink category
        assert_eq!(score, 52);
    }

    #[test]
    fn test_kimchi_soup_scenario() {
        let scorer = MatchScorer::new();
        let liked = normalize_tokens("pork");
        let score = scorer.score(
            &dish("Soup", "Kimchi Soup", "kimchi, pork, tofu"),
            Some(Mood::Sadness),
            Some(DietaryStyle::Standard),
            &liked,
        );
        // 50 base + 15 liked "pork" + 10 mood "soup" in name + 5 soup category
        assert_eq!(score, 80);
    }

    #[test]
    fn test_liked_token_bonus_repeats_per_token() {
        let scorer = MatchScorer::new();
        let liked = normalize_tokens("pork, kimchi, tofu");
        let score = scorer.score(
            &dish("Unknown category", "Stew", "kimchi, pork, tofu"),
            None,
            None,
            &liked,
        );
        // 50 base + 3 * 15
        assert_eq!(score, 95);
    }

    #[test]
    fn test_score_clamped_to_upper_bound() {
        let scorer = MatchScorer::new();
        let liked = normalize_tokens("kimchi, pork, tofu, rice, scallion");
        let score = scorer.score(
            &dish("Main", "Meat Feast", "kimchi, pork, tofu, rice, scallion, beef, fish"),
            Some(Mood::Excitement),
            Some(DietaryStyle::Standard),
            &liked,
        );
        assert_eq!(score, 98);
    }

    #[test]
    fn test_unknown_mood_and_style_add_nothing() {
        let scorer = MatchScorer::new();
        let liked = normalize_tokens("pork");
        let with_none = scorer.score(&dish("Soup", "Plain Soup", "pork broth"), None, None, &liked);
        // 50 base + 15 liked + 5 category
        assert_eq!(with_none, 70);
    }

    #[test]
    fn test_mood_keyword_matches_name_or_ingredients() {
        let scorer = MatchScorer::new();
        let in_name = scorer.score(
            &dish("Hot appetizers", "Spicy Wings", "chicken wings"),
            Some(Mood::Anger),
            None,
            &BTreeSet::new(),
        );
        // 50 + 10 ("spicy" in name) + 4 category
        assert_eq!(in_name, 64);

        let in_ingredients = scorer.score(
            &dish("Hot appetizers", "Wings", "chicken wings, spicy sauce"),
            Some(Mood::Anger),
            None,
            &BTreeSet::new(),
        );
        assert_eq!(in_ingredients, 64);
    }

    #[test]
    fn test_substring_matching_false_positives_preserved() {
        // Naive substring containment: "ham" matches "chamomile". This is
        // deliberate contract, not a bug to fix here.
        let scorer = MatchScorer::new();
        let liked = normalize_tokens("ham");
        let score = scorer.score(
            &dish("Drink", "Herbal Tea", "chamomile, honey"),
            None,
            None,
            &liked,
        );
        // 50 + 15 + 2
        assert_eq!(score, 67);
    }

    #[test]
    fn test_missing_category_earns_no_bonus() {
        // The "Main" fallback exists for selection bookkeeping and icons;
        // it must not leak the +10 Main bonus into a category-less row.
        let scorer = MatchScorer::new();
        let uncategorized = Dish {
            category: None,
            ..dish("x", "Mystery Plate", "rice")
        };
        let score = scorer.score(&uncategorized, None, None, &BTreeSet::new());
        assert_eq!(score, 50);

        let blank_category = Dish {
            category: Some(String::new()),
            ..dish("x", "Mystery Plate", "rice")
        };
        let score = scorer.score(&blank_category, None, None, &BTreeSet::new());
        assert_eq!(score, 50);
    }

    #[test]
    fn test_score_never_leaves_range() {
        let scorer = MatchScorer::new();
        let empty = Dish {
            id: 0,
            category: None,
            name: None,
            description: None,
            ingredients: None,
            price: None,
        };
        for mood in [None, Some(Mood::Joy), Some(Mood::Anger)] {
            let score = scorer.score(&empty, mood, None, &BTreeSet::new());
            assert!((20..=98).contains(&score));
        }
    }
}
