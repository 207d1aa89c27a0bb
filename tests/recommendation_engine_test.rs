// ABOUTME: Integration tests for the recommendation engine over fixture catalogs
// ABOUTME: Verifies scoring bounds, exclusion, diversity, ordering, and explanation contracts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

mod common;

use moodmenu_core::models::{DietaryStyle, Dish, Mood};
use moodmenu_intelligence::{PreferenceProfile, RecommendationEngine};

fn fixture_catalog() -> Vec<Dish> {
    vec![
        common::dish_fixture(1, "Soup", "Kimchi Soup", "kimchi, pork, tofu"),
        common::dish_fixture(2, "Soup", "Miso Soup", "miso, tofu, seaweed"),
        common::dish_fixture(3, "Salad", "Green Salad", "lettuce, cucumber, tomato"),
        common::dish_fixture(4, "Main", "Bibimbap", "rice, beef, vegetable, egg"),
        common::dish_fixture(5, "Wok", "Chicken Wok", "noodles, chicken, vegetable"),
        common::dish_fixture(6, "Dessert", "Chocolate Cake", "chocolate, flour, sugar"),
        common::dish_fixture(7, "Drink", "Lemonade", "lemon, water, sugar"),
    ]
}

#[test]
fn test_scores_stay_in_range_across_all_moods_and_styles() {
    let engine = RecommendationEngine::new();
    let catalog = fixture_catalog();

    for mood in Mood::ALL {
        for style in DietaryStyle::ALL {
            let profile = PreferenceProfile::from_request(
                mood.display_name(),
                style.display_name(),
                "pork, chocolate, rice",
                "",
            );
            for rec in engine.recommend(&catalog, &profile) {
                assert!(
                    (20..=98).contains(&rec.match_score),
                    "score {} out of range for mood {mood:?} style {style:?}",
                    rec.match_score
                );
            }
        }
    }
}

#[test]
fn test_disliked_ingredients_never_appear() {
    let engine = RecommendationEngine::new();
    let catalog = fixture_catalog();
    let profile = PreferenceProfile::from_request("Joy", "Standard", "", "tofu, chocolate");

    for rec in engine.recommend(&catalog, &profile) {
        let dish = catalog
            .iter()
            .find(|d| d.id == rec.id)
            .expect("recommendation maps to a catalog dish");
        let ingredients = dish.ingredients_lower();
        assert!(!ingredients.contains("tofu"));
        assert!(!ingredients.contains("chocolate"));
    }
}

#[test]
fn test_exclusion_never_relaxed_to_fill_shortlist() {
    let engine = RecommendationEngine::new();
    // Every dish carries the disliked ingredient; nothing may come back.
    let catalog = vec![
        common::dish_fixture(1, "Soup", "Kimchi Soup", "kimchi, pork"),
        common::dish_fixture(2, "Main", "Pork Bowl", "pork, rice"),
    ];
    let profile = PreferenceProfile::from_request("Joy", "Standard", "", "pork");
    assert!(engine.recommend(&catalog, &profile).is_empty());
}

#[test]
fn test_one_dish_per_category_in_catalog_order() {
    let engine = RecommendationEngine::new();
    let catalog = fixture_catalog();
    let profile = PreferenceProfile::from_request("Calm", "Healthy", "", "");

    let recs = engine.recommend(&catalog, &profile);
    assert_eq!(recs.len(), 5);
    // Dish 2 shares the Soup category with dish 1 and is skipped.
    let ids: Vec<i64> = recs.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5, 6]);
}

#[test]
fn test_reasons_contract() {
    let engine = RecommendationEngine::new();
    let catalog = fixture_catalog();
    let profile = PreferenceProfile::from_request("Sadness", "Standard", "", "");

    for rec in engine.recommend(&catalog, &profile) {
        assert!((1..=3).contains(&rec.reasons.len()));
        let closing = rec.reasons.last().expect("at least one reason");
        assert!(closing.contains(&rec.name));
    }
}

#[test]
fn test_liked_ingredients_raise_scores() {
    let engine = RecommendationEngine::new();
    let catalog = fixture_catalog();

    let neutral = PreferenceProfile::from_request("Joy", "Standard", "", "");
    let keen = PreferenceProfile::from_request("Joy", "Standard", "kimchi, pork", "");

    let base_scores = engine.recommend(&catalog, &neutral);
    let boosted_scores = engine.recommend(&catalog, &keen);

    let base_kimchi = base_scores.iter().find(|r| r.id == 1).expect("kimchi soup");
    let boosted_kimchi = boosted_scores.iter().find(|r| r.id == 1).expect("kimchi soup");
    assert_eq!(
        i32::from(boosted_kimchi.match_score) - i32::from(base_kimchi.match_score),
        30
    );
}

#[test]
fn test_blank_preferences_still_produce_shortlist() {
    let engine = RecommendationEngine::new();
    let catalog = fixture_catalog();
    let profile = PreferenceProfile::from_request("", "", "", "");

    let recs = engine.recommend(&catalog, &profile);
    assert_eq!(recs.len(), 5);
    for rec in &recs {
        assert!((20..=98).contains(&rec.match_score));
        assert!(!rec.icon.is_empty());
    }
}
