// ABOUTME: Main server binary for the moodmenu recommendation API
// ABOUTME: Loads configuration, initializes logging and storage, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! # Moodmenu API Server Binary
//!
//! Starts the HTTP API serving the menu catalog and mood-based dish
//! recommendations.

use anyhow::Result;
use clap::Parser;
use moodmenu_server::{
    config::environment::ServerConfig, database::MenuDatabase, logging,
    resources::ServerResources, server::RecommendationServer,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "moodmenu-server")]
#[command(about = "Moodmenu API - mood-based dish recommendations for restaurant guests")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = &args.database_url {
        config.database.url =
            moodmenu_server::config::environment::DatabaseUrl::parse_url(database_url);
    }

    logging::init_from_env()?;

    info!("Starting Moodmenu API");
    info!("{}", config.summary());

    let database = MenuDatabase::new(&config.database.url.to_connection_string()).await?;
    let dish_count = database.dish_count().await?;
    if dish_count == 0 {
        info!("Menu catalog is empty; run the seed-menu binary to load dishes");
    } else {
        info!("Menu catalog loaded with {dish_count} dishes");
    }

    let resources = Arc::new(ServerResources::new(database, Arc::new(config.clone())));
    let server = RecommendationServer::new(resources);

    display_available_endpoints(&config);
    info!("Ready to recommend!");

    if let Err(e) = server.run(config.http_port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints with their ports
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness Check:   GET  http://{host}:{port}/ready");
    info!("Menu & Recommendations:");
    info!("   Full Menu:         GET  http://{host}:{port}/api/menu");
    info!("   Recommendations:   POST http://{host}:{port}/api/recommendations");
    info!("=== End of Endpoint List ===");
}
