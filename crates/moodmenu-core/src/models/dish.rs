// ABOUTME: Dish model representing a single menu catalog row
// ABOUTME: Carries identity, category, ingredient text, and price with row fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

use serde::{Deserialize, Serialize};

use crate::constants::fallbacks;

/// A single menu entry as stored by the catalog.
///
/// Dishes are read-only from the engine's perspective; a recommendation
/// request never mutates them. Nullable catalog columns surface as `Option`
/// here and are resolved to fallback values at selection time, never earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
pub struct Dish {
    /// Unique identifier of the menu row
    pub id: i64,
    /// Short category label, e.g. "Soup" or "Salad"
    pub category: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Free-text description shown to diners
    pub description: Option<String>,
    /// Free-text ingredient list, may be empty
    pub ingredients: Option<String>,
    /// Price in whole currency units, non-negative
    pub price: Option<i64>,
}

impl Dish {
    /// Category label, falling back to the generic category for rows
    /// without one.
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(fallbacks::DEFAULT_CATEGORY)
    }

    /// Display name, falling back to a generic placeholder.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(fallbacks::DEFAULT_DISH_NAME)
    }

    /// Price, falling back to the fixed fallback value for rows without one.
    #[must_use]
    pub fn price_or_default(&self) -> i64 {
        self.price.unwrap_or(fallbacks::DEFAULT_PRICE)
    }

    /// Lowercased ingredient text; empty string for rows without one.
    ///
    /// Both the exclusion test and every substring bonus operate on this
    /// form, so the lowering happens in exactly one place.
    #[must_use]
    pub fn ingredients_lower(&self) -> String {
        self.ingredients
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }
}
