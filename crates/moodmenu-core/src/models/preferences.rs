// ABOUTME: Mood and dietary style enumerations for preference profiles
// ABOUTME: Closed sets with lenient label parsing; unrecognized labels yield no bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

use serde::{Deserialize, Serialize};

/// Diner mood reported with a recommendation request.
///
/// Moods travel over the wire as free-form labels; `from_label` parses them
/// leniently and an unrecognized label simply contributes no mood bonus, so
/// this enum never appears in a request type directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Celebratory, upbeat
    Joy,
    /// Low, in need of comfort
    Sadness,
    /// Irritated, tense
    Anger,
    /// Relaxed, at ease
    Calm,
    /// Restless, keyed up
    Excitement,
}

impl Mood {
    /// All moods, in a fixed order
    pub const ALL: [Self; 5] = [
        Self::Joy,
        Self::Sadness,
        Self::Anger,
        Self::Calm,
        Self::Excitement,
    ];

    /// Parse a request label case-insensitively; `None` for anything outside
    /// the closed set.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "joy" => Some(Self::Joy),
            "sadness" => Some(Self::Sadness),
            "anger" => Some(Self::Anger),
            "calm" => Some(Self::Calm),
            "excitement" => Some(Self::Excitement),
            _ => None,
        }
    }

    /// Canonical display label
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Sadness => "Sadness",
            Self::Anger => "Anger",
            Self::Calm => "Calm",
            Self::Excitement => "Excitement",
        }
    }
}

/// Dietary style reported with a recommendation request.
///
/// Same parsing policy as [`Mood`]: unrecognized labels yield no style bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryStyle {
    /// No dietary restriction
    Standard,
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
    /// Ketogenic
    Keto,
    /// Health-focused
    Healthy,
}

impl DietaryStyle {
    /// All styles, in a fixed order
    pub const ALL: [Self; 5] = [
        Self::Standard,
        Self::Vegetarian,
        Self::Vegan,
        Self::Keto,
        Self::Healthy,
    ];

    /// Parse a request label case-insensitively; `None` for anything outside
    /// the closed set.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            "keto" => Some(Self::Keto),
            "healthy" => Some(Self::Healthy),
            _ => None,
        }
    }

    /// Canonical display label
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Keto => "Keto",
            Self::Healthy => "Healthy",
        }
    }
}
