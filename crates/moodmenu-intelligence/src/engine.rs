// ABOUTME: Top-level recommendation engine composing matcher, selector, scorer, explainer
// ABOUTME: Pure computation over a read-only catalog snapshot, no retained state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! The recommendation engine.
//!
//! One call, one catalog snapshot, one shortlist. The engine retains nothing
//! between calls, so identical inputs over an unchanged catalog produce
//! byte-identical output.

use moodmenu_core::models::{Dish, Recommendation, ScoredDish};
use tracing::debug;

use crate::config::EngineConfig;
use crate::preferences::PreferenceProfile;
use crate::reasons;
use crate::scoring::MatchScorer;
use crate::selection;

/// Mood-based dish recommendation engine.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
    scorer: MatchScorer,
}

impl RecommendationEngine {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let scorer = MatchScorer::with_config(config.scoring.clone());
        Self { config, scorer }
    }

    /// Select the category-diverse shortlist without attaching reasons.
    #[must_use]
    pub fn select<'a>(
        &self,
        dishes: &'a [Dish],
        profile: &PreferenceProfile,
    ) -> Vec<ScoredDish<'a>> {
        selection::select_diverse(dishes, profile, &self.scorer, &self.config.limits)
    }

    /// Produce the full recommendation list for one request.
    ///
    /// An empty catalog degrades to an empty list; surfacing that as a
    /// caller-visible "no recommendations found" condition is the service
    /// layer's concern.
    #[must_use]
    pub fn recommend(&self, dishes: &[Dish], profile: &PreferenceProfile) -> Vec<Recommendation> {
        debug!(
            catalog.dishes = dishes.len(),
            mood = ?profile.mood,
            style = ?profile.style,
            liked = profile.liked.len(),
            disliked = profile.disliked.len(),
            "generating recommendations"
        );

        self.select(dishes, profile)
            .into_iter()
            .map(|scored| {
                let dish = scored.dish;
                let name = dish.name_or_default();
                let category = dish.category_or_default();
                Recommendation {
                    id: dish.id,
                    name: name.to_owned(),
                    category: category.to_owned(),
                    description: dish.description.clone(),
                    price: dish.price_or_default(),
                    icon: scored.icon.to_owned(),
                    match_score: scored.match_score,
                    reasons: reasons::explain(
                        profile.mood,
                        name,
                        category,
                        self.config.limits.max_reasons,
                    ),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Dish> {
        vec![
            Dish {
                id: 1,
                category: Some("Soup".into()),
                name: Some("Kimchi Soup".into()),
                description: Some("Spicy fermented classic".into()),
                ingredients: Some("kimchi, pork, tofu".into()),
                price: Some(400),
            },
            Dish {
                id: 2,
                category: Some("Salad".into()),
                name: Some("Green Salad".into()),
                description: None,
                ingredients: Some("lettuce, cucumber".into()),
                price: Some(300),
            },
        ]
    }

    #[test]
    fn test_recommend_excludes_and_scores() {
        let engine = RecommendationEngine::new();
        let profile = PreferenceProfile::from_request("Sadness", "Standard", "pork", "cucumber");
        let result = engine.recommend(&catalog(), &profile);

        assert_eq!(result.len(), 1);
        let rec = &result[0];
        assert_eq!(rec.id, 1);
        assert_eq!(rec.category, "Soup");
        assert_eq!(rec.icon, "🍲");
        assert_eq!(rec.price, 400);
        assert_eq!(rec.match_score, 80);
        assert!((1..=3).contains(&rec.reasons.len()));
        assert!(rec.reasons.last().is_some_and(|r| r.contains("Kimchi Soup")));
    }

    #[test]
    fn test_recommend_empty_catalog() {
        let engine = RecommendationEngine::new();
        let profile = PreferenceProfile::from_request("Joy", "Vegan", "", "");
        assert!(engine.recommend(&[], &profile).is_empty());
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let engine = RecommendationEngine::new();
        let profile =
            PreferenceProfile::from_request("Anger", "Keto", "pork, tofu", "shrimp, peanut");
        let first = engine.recommend(&catalog(), &profile);
        let second = engine.recommend(&catalog(), &profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_incomplete_rows_get_fallbacks() {
        let engine = RecommendationEngine::new();
        let bare = vec![Dish {
            id: 9,
            category: None,
            name: None,
            description: None,
            ingredients: None,
            price: None,
        }];
        let profile = PreferenceProfile::default();
        let result = engine.recommend(&bare, &profile);

        assert_eq!(result.len(), 1);
        let rec = &result[0];
        assert_eq!(rec.name, "Dish");
        assert_eq!(rec.category, "Main");
        assert_eq!(rec.price, 500);
        assert_eq!(rec.icon, "🍽️");
    }
}
