// ABOUTME: Menu catalog storage backed by SQLite with a read-only catalog trait
// ABOUTME: Owns the connection pool, schema migration, and dish persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Menu catalog storage.
//!
//! The recommendation flow only ever needs a full catalog snapshot, so the
//! read side is a single-method [`MenuCatalog`] trait. Handlers depend on the
//! trait, which keeps the engine testable against fixture catalogs without a
//! database.

use async_trait::async_trait;
use moodmenu_core::errors::{AppError, AppResult};
use moodmenu_core::models::Dish;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

const CREATE_MENU_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS menu (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category TEXT,
        name TEXT,
        description TEXT,
        ingredients TEXT,
        price INTEGER
    )
";

/// Read access to the menu catalog.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    /// Fetch the full catalog snapshot in storage (insertion) order.
    async fn list_dishes(&self) -> AppResult<Vec<Dish>>;
}

/// A dish payload for insertion; the id is assigned by the database.
#[derive(Debug, Clone, Default)]
pub struct NewDish {
    /// Menu category, e.g. "Soup"
    pub category: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Longer free-text description
    pub description: Option<String>,
    /// Comma-separated ingredient list
    pub ingredients: Option<String>,
    /// Price in minor currency units
    pub price: Option<i64>,
}

/// `SQLite`-backed menu catalog.
pub struct MenuDatabase {
    pool: SqlitePool,
}

impl MenuDatabase {
    /// Open (and create if missing) the database at the given URL and run
    /// schema migration.
    ///
    /// # Errors
    ///
    /// Returns a database error if the pool cannot be created or the schema
    /// migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                AppError::database(format!("Invalid database URL: {database_url}")).with_source(e)
            })?
            .create_if_missing(true);

        // An in-memory database exists per connection, so the pool must pin
        // a single connection that never gets recycled.
        let in_memory = database_url.contains(":memory:");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database("Failed to connect to database").with_source(e))?;

        let database = Self { pool };
        database.migrate().await?;
        info!("Database initialized: {}", database.backend_info());
        Ok(database)
    }

    /// Storage backend description for startup logging
    #[must_use]
    pub fn backend_info(&self) -> &'static str {
        "SQLite"
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(CREATE_MENU_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("Failed to create menu table").with_source(e))?;
        debug!("Menu schema ready");
        Ok(())
    }

    /// Insert a dish and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub async fn insert_dish(&self, dish: &NewDish) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO menu (category, name, description, ingredients, price)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&dish.category)
        .bind(&dish.name)
        .bind(&dish.description)
        .bind(&dish.ingredients)
        .bind(dish.price)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to insert dish").with_source(e))?;

        Ok(result.last_insert_rowid())
    }

    /// Number of dishes currently in the catalog.
    ///
    /// # Errors
    ///
    /// Returns a database error if the count query fails.
    pub async fn dish_count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM menu")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database("Failed to count dishes").with_source(e))?;
        Ok(count)
    }
}

#[async_trait]
impl MenuCatalog for MenuDatabase {
    async fn list_dishes(&self) -> AppResult<Vec<Dish>> {
        sqlx::query_as::<_, Dish>(
            "SELECT id, category, name, description, ingredients, price FROM menu ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to load menu").with_source(e))
    }
}
