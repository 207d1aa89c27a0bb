// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, resource, and menu fixture helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu
#![allow(dead_code)]

//! Shared test utilities for `moodmenu_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use moodmenu_core::models::Dish;
use moodmenu_server::config::environment::ServerConfig;
use moodmenu_server::database::{MenuDatabase, NewDish};
use moodmenu_server::resources::ServerResources;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (in-memory, schema migrated)
pub async fn create_test_database() -> Result<Arc<MenuDatabase>> {
    init_test_logging();
    let database = Arc::new(MenuDatabase::new("sqlite::memory:").await?);
    Ok(database)
}

/// Build a `NewDish` fixture
pub fn new_dish(category: &str, name: &str, ingredients: &str, price: i64) -> NewDish {
    NewDish {
        category: Some(category.to_owned()),
        name: Some(name.to_owned()),
        description: None,
        ingredients: Some(ingredients.to_owned()),
        price: Some(price),
    }
}

/// A small catalog covering several categories
pub fn sample_menu() -> Vec<NewDish> {
    vec![
        new_dish("Soup", "Kimchi Soup", "kimchi, pork, tofu", 420),
        new_dish("Salad", "Green Salad", "lettuce, cucumber, tomato", 320),
        new_dish("Main", "Bibimbap", "rice, beef, vegetable, egg", 560),
        new_dish("Wok", "Chicken Wok Noodles", "noodles, chicken, vegetable", 520),
        new_dish("Dessert", "Chocolate Bingsu", "chocolate, milk, fruit", 350),
        new_dish("Drink", "Iced Barley Tea", "barley, water", 150),
    ]
}

/// Insert the sample catalog and return the assigned ids
pub async fn seed_sample_menu(database: &MenuDatabase) -> Result<Vec<i64>> {
    let mut ids = Vec::new();
    for dish in sample_menu() {
        ids.push(database.insert_dish(&dish).await?);
    }
    Ok(ids)
}

/// In-process catalog fixture for pure engine tests
pub fn dish_fixture(id: i64, category: &str, name: &str, ingredients: &str) -> Dish {
    Dish {
        id,
        category: Some(category.to_owned()),
        name: Some(name.to_owned()),
        description: None,
        ingredients: Some(ingredients.to_owned()),
        price: Some(400),
    }
}

/// Create test `ServerResources` around an in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let database = MenuDatabase::new("sqlite::memory:").await?;
    let config = Arc::new(ServerConfig::default());
    Ok(Arc::new(ServerResources::new(database, config)))
}

/// Test resources with the sample catalog pre-seeded
pub async fn create_seeded_test_resources() -> Result<Arc<ServerResources>> {
    let resources = create_test_resources().await?;
    for dish in sample_menu() {
        resources.database.insert_dish(&dish).await?;
    }
    Ok(resources)
}
