// ABOUTME: Fixed lookup tables mapping moods, styles, and categories to bonuses
// ABOUTME: Declarative data consumed by the scorer and explainer, never branched logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Fixed lookup tables for the recommendation heuristic.
//!
//! Every table here is a total mapping over its enumeration (or defaults for
//! unknown categories), so the scorer and explainer stay free of policy
//! branches and each table is independently testable and extensible.

use moodmenu_core::constants::fallbacks;
use moodmenu_core::models::{DietaryStyle, Mood};

/// Keyword stems that earn a mood bonus when found in a dish's ingredient
/// text or name.
#[must_use]
pub fn mood_keywords(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Joy => &["sweet", "dessert", "chocolate", "fruit", "bright"],
        Mood::Sadness => &["soup", "warm", "comfort", "cozy"],
        Mood::Anger => &["spicy", "peppery", "intense", "sour"],
        Mood::Calm => &["light", "fresh", "salad", "green"],
        Mood::Excitement => &["energy", "protein", "meat", "fish"],
    }
}

/// Keyword stems that earn a dietary-style bonus when found in a dish's
/// ingredient text.
#[must_use]
pub fn style_keywords(style: DietaryStyle) -> &'static [&'static str] {
    match style {
        DietaryStyle::Standard => &["meat", "fish", "chicken", "beef"],
        DietaryStyle::Vegetarian => &["vegetable", "salad", "greens", "fruit"],
        DietaryStyle::Vegan => &["plant", "vegetable", "fruit", "nut"],
        DietaryStyle::Keto => &["fat", "butter", "cheese", "avocado"],
        DietaryStyle::Healthy => &["fresh", "salad", "vegetable", "fruit"],
    }
}

/// Flat category bonus; unknown categories add nothing.
#[must_use]
pub fn category_bonus(category: &str) -> i32 {
    match category {
        "Soup" => 5,
        "Salad" => 8,
        "Main" => 10,
        "Wok" => 7,
        "Korean street food" => 6,
        "Hot appetizers" => 4,
        "Dessert" => 3,
        "Drink" => 2,
        _ => 0,
    }
}

/// Icon tag for a category; unknown categories get the generic icon.
#[must_use]
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Soup" => "🍲",
        "Salad" => "🥗",
        "Main" => "🍽️",
        "Wok" => "🍜",
        "Korean street food" => "🌶️",
        "Hot appetizers" => "🔥",
        "Dessert" | "Desserts" => "🍰",
        "Drink" => "🥤",
        _ => fallbacks::DEFAULT_ICON,
    }
}

/// Two mood-specific reason templates per mood, in presentation order.
#[must_use]
pub fn mood_reasons(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Joy => &[
            "A great match for a celebratory mood",
            "Bright flavors will lift your spirits even higher",
        ],
        Mood::Sadness => &[
            "Comfort food helps take the edge off a low day",
            "Warm flavors create a sense of coziness",
        ],
        Mood::Anger => &[
            "A spicy kick helps release the tension",
            "Intense flavors take your mind off the problem",
        ],
        Mood::Calm => &[
            "A light dish will not disturb your inner peace",
            "Balanced flavors support the harmony",
        ],
        Mood::Excitement => &[
            "A hearty dish settles a restless mind",
            "Nutrient-dense food helps you focus",
        ],
    }
}

/// One category-specific reason for recognized categories.
#[must_use]
pub fn category_reason(category: &str) -> Option<&'static str> {
    match category {
        "Soup" => Some("A warm soup soothes and comforts"),
        "Salad" => Some("Fresh vegetables give you energy"),
        "Main" => Some("A filling plate keeps you satisfied for hours"),
        "Wok" => Some("A hot wok dish warms you up and lifts the mood"),
        "Korean street food" => Some("Bold spicy flavors give you a jolt"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_keywords_and_reasons() {
        for mood in Mood::ALL {
            assert!(!mood_keywords(mood).is_empty());
            assert_eq!(mood_reasons(mood).len(), 2);
        }
    }

    #[test]
    fn test_every_style_has_four_keywords() {
        for style in DietaryStyle::ALL {
            assert_eq!(style_keywords(style).len(), 4);
        }
    }

    #[test]
    fn test_unknown_category_defaults() {
        assert_eq!(category_bonus("Mystery"), 0);
        assert_eq!(category_icon("Mystery"), "🍽️");
        assert!(category_reason("Mystery").is_none());
    }

    #[test]
    fn test_dessert_alias_shares_icon() {
        assert_eq!(category_icon("Dessert"), category_icon("Desserts"));
    }
}
