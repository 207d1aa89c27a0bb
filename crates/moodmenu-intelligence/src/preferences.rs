// ABOUTME: Ingredient token normalization and request-scoped preference profiles
// ABOUTME: Parses comma-separated free text into lowercase token sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Preference parsing for one recommendation request.

use std::collections::BTreeSet;

use moodmenu_core::models::{DietaryStyle, Mood};

/// Normalize a comma-separated preference string into a set of lowercase
/// ingredient tokens.
///
/// Splits on comma, trims whitespace, lowercases, and drops pieces that are
/// empty after trimming. There are no error conditions: stray punctuation is
/// preserved as a literal token, with no spell-correction or stemming.
#[must_use]
pub fn normalize_tokens(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// The caller-supplied preferences for one request, normalized.
///
/// Request-scoped and never persisted. Mood and style arrive as free-form
/// labels; anything outside the closed sets parses to `None` and simply
/// contributes no bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceProfile {
    /// Parsed mood, if the label was recognized
    pub mood: Option<Mood>,
    /// Parsed dietary style, if the label was recognized
    pub style: Option<DietaryStyle>,
    /// Normalized liked-ingredient tokens (bonus list)
    pub liked: BTreeSet<String>,
    /// Normalized disliked-ingredient tokens (exclusion list)
    pub disliked: BTreeSet<String>,
}

impl PreferenceProfile {
    /// Build a profile from raw request fields.
    #[must_use]
    pub fn from_request(mood: &str, style: &str, liked_text: &str, disliked_text: &str) -> Self {
        Self {
            mood: Mood::from_label(mood),
            style: DietaryStyle::from_label(style),
            liked: normalize_tokens(liked_text),
            disliked: normalize_tokens(disliked_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_splits_trims_and_lowercases() {
        let tokens = normalize_tokens("Pork, KIMCHI ,  tofu");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.contains("pork"));
        assert!(tokens.contains("kimchi"));
        assert!(tokens.contains("tofu"));
    }

    #[test]
    fn test_normalize_drops_empty_pieces() {
        assert!(normalize_tokens("").is_empty());
        assert!(normalize_tokens("  ,  , ").is_empty());
        assert_eq!(normalize_tokens("pork,,fish").len(), 2);
    }

    #[test]
    fn test_stray_punctuation_is_preserved_literally() {
        let tokens = normalize_tokens("pork!, fi sh");
        assert!(tokens.contains("pork!"));
        assert!(tokens.contains("fi sh"));
    }

    #[test]
    fn test_profile_from_request() {
        let profile = PreferenceProfile::from_request("Sadness", "Standard", "pork", "cucumber");
        assert_eq!(profile.mood, Some(Mood::Sadness));
        assert_eq!(profile.style, Some(DietaryStyle::Standard));
        assert!(profile.liked.contains("pork"));
        assert!(profile.disliked.contains("cucumber"));
    }

    #[test]
    fn test_unrecognized_labels_parse_to_none() {
        let profile = PreferenceProfile::from_request("Hangry", "Paleo", "", "");
        assert_eq!(profile.mood, None);
        assert_eq!(profile.style, None);
        assert!(profile.liked.is_empty());
        assert!(profile.disliked.is_empty());
    }
}
