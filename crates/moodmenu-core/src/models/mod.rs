// ABOUTME: Core data models for the moodmenu recommendation platform
// ABOUTME: Re-exports Dish, Mood, DietaryStyle, and recommendation output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! # Data Models
//!
//! Core data structures used throughout the moodmenu server.
//!
//! ## Design Principles
//!
//! - **Catalog Agnostic**: `Dish` abstracts away how menu rows are stored
//! - **Lenient**: Optional fields accommodate incomplete catalog rows
//! - **Serializable**: All models support JSON serialization for the API
//!
//! ## Core Models
//!
//! - `Dish`: a single menu entry (category, name, ingredient text, price)
//! - `Mood` / `DietaryStyle`: the closed enumerations driving score bonuses
//! - `ScoredDish`: a shortlisted dish with its match score and icon tag
//! - `Recommendation`: the response record returned to callers

mod dish;
mod preferences;
mod recommendation;

pub use dish::Dish;
pub use preferences::{DietaryStyle, Mood};
pub use recommendation::{Recommendation, ScoredDish};
