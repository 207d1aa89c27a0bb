// ABOUTME: Dish recommendation engine for mood-based menu shortlists
// ABOUTME: Scores dishes against preference profiles and composes diverse shortlists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

#![deny(unsafe_code)]

//! # Moodmenu Intelligence
//!
//! The recommendation engine: given a diner's mood, dietary style, and
//! free-text like/dislike ingredient lists, select and rank a small,
//! category-diverse set of dishes from the full menu, score each by fit,
//! and explain the score.
//!
//! Every request is a pure, self-contained computation over a catalog
//! snapshot passed in by the caller; the engine holds no shared state and
//! nothing here suspends or blocks.
//!
//! ## Components
//!
//! - [`preferences`]: ingredient token normalization and the request-scoped
//!   [`PreferenceProfile`]
//! - [`scoring`]: the additive match-score heuristic (always in `[20, 98]`)
//! - [`selection`]: single-pass, category-diverse shortlist composition
//! - [`reasons`]: human-readable explanations, independent of the score
//! - [`config`]: numeric knobs with defaults matching the production values
//! - [`tables`]: the fixed mood/style/category lookup tables as data

/// Engine configuration (scoring values and shortlist limits)
pub mod config;

/// Top-level engine composing matcher, selector, scorer, and explainer
pub mod engine;

/// Ingredient token normalization and preference profiles
pub mod preferences;

/// Reason generation for shortlisted dishes
pub mod reasons;

/// Match score computation
pub mod scoring;

/// Shortlist selection with the category-diversity invariant
pub mod selection;

/// Fixed lookup tables: keywords, bonuses, icons, reason templates
pub mod tables;

pub use config::{EngineConfig, ScoringConfig, SelectionLimits};
pub use engine::RecommendationEngine;
pub use preferences::{normalize_tokens, PreferenceProfile};
pub use scoring::MatchScorer;
