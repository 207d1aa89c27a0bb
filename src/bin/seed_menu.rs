// ABOUTME: Menu seeding utility loading a demonstration catalog into SQLite
// ABOUTME: Creates dishes across the recognized categories for local development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Menu seeder for the moodmenu server.
//!
//! Loads a demonstration catalog covering every recognized category so the
//! recommendation endpoint has something to work with out of the box.
//!
//! Usage:
//! ```bash
//! # Seed the menu (uses DATABASE_URL from environment)
//! cargo run --bin seed-menu
//!
//! # Override database URL
//! cargo run --bin seed-menu -- --database-url sqlite:./data/menu.db
//!
//! # Force re-seed even if dishes already exist
//! cargo run --bin seed-menu -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use moodmenu_server::config::environment::{DatabaseUrl, ServerConfig};
use moodmenu_server::database::{MenuDatabase, NewDish};
use moodmenu_server::logging;
use tracing::info;

#[derive(Parser)]
#[command(name = "seed-menu")]
#[command(about = "Moodmenu demonstration menu seeder")]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Seed even if the catalog already holds dishes
    #[arg(long)]
    force: bool,
}

fn demo_menu() -> Vec<NewDish> {
    let dish = |category: &str, name: &str, description: &str, ingredients: &str, price: i64| {
        NewDish {
            category: Some(category.to_owned()),
            name: Some(name.to_owned()),
            description: Some(description.to_owned()),
            ingredients: Some(ingredients.to_owned()),
            price: Some(price),
        }
    };

    vec![
        dish(
            "Soup",
            "Kimchi Soup",
            "Warm fermented kimchi stew with pork and tofu",
            "kimchi, pork, tofu, scallion",
            420,
        ),
        dish(
            "Soup",
            "Chicken Noodle Soup",
            "Comforting broth with pulled chicken",
            "chicken, noodles, carrot, celery",
            380,
        ),
        dish(
            "Salad",
            "Green Salad",
            "Light salad of fresh greens",
            "lettuce, cucumber, tomato, olive oil",
            320,
        ),
        dish(
            "Salad",
            "Avocado Salad",
            "Creamy avocado over crisp vegetables",
            "avocado, lettuce, cheese, nuts",
            450,
        ),
        dish(
            "Main",
            "Bibimbap",
            "Rice bowl with vegetables, beef, and egg",
            "rice, beef, vegetable, egg, sesame",
            560,
        ),
        dish(
            "Main",
            "Grilled Salmon",
            "Protein-rich salmon with butter glaze",
            "fish, butter, lemon, greens",
            690,
        ),
        dish(
            "Wok",
            "Chicken Wok Noodles",
            "Stir-fried noodles with chicken and vegetables",
            "noodles, chicken, vegetable, soy sauce",
            520,
        ),
        dish(
            "Korean street food",
            "Tteokbokki",
            "Chewy rice cakes in a spicy sauce",
            "rice cake, spicy sauce, fish cake",
            390,
        ),
        dish(
            "Hot appetizers",
            "Spicy Chicken Wings",
            "Intense peppery glaze over crispy wings",
            "chicken, spicy sauce, garlic",
            410,
        ),
        dish(
            "Dessert",
            "Chocolate Bingsu",
            "Sweet shaved ice with chocolate and fruit",
            "chocolate, milk, fruit, sweet syrup",
            350,
        ),
        dish(
            "Drink",
            "Iced Barley Tea",
            "Light and fresh cold tea",
            "barley, water",
            150,
        ),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();
    logging::init_from_env()?;

    let url = match &args.database_url {
        Some(raw) => DatabaseUrl::parse_url(raw),
        None => ServerConfig::from_env()?.database.url,
    };

    let database = MenuDatabase::new(&url.to_connection_string()).await?;

    let existing = database.dish_count().await?;
    if existing > 0 && !args.force {
        info!("Catalog already holds {existing} dishes; use --force to seed anyway");
        return Ok(());
    }

    let menu = demo_menu();
    for dish in &menu {
        let id = database.insert_dish(dish).await?;
        info!(
            dish.id = id,
            dish.name = dish.name.as_deref().unwrap_or("?"),
            "seeded dish"
        );
    }

    info!("Seeded {} dishes into {url}", menu.len());
    Ok(())
}
