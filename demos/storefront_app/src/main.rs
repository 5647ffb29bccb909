// demos/storefront_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod models;
mod state;
mod store;
mod web;

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use giftfields::{GiftFieldsExtension, HookDispatch, MemoryProductStore};

use crate::config::AppConfig;
use crate::state::AppState;
use crate::store::{Catalog, OrderBook, SessionCarts};

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO) // Default level
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
        .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
        .init();

    tracing::info!("Starting storefront demo server...");

    // Load application configuration
    let app_config = match AppConfig::from_env() {
        Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
        Err(e) => {
            tracing::error!(error = %e, "Failed to load application configuration.");
            // For a demo, panic is okay. In prod, exit gracefully.
            panic!("Configuration error: {}", e);
        }
    };

    // Build the host's stores
    let products = Arc::new(MemoryProductStore::new());
    let catalog = Arc::new(Catalog::new());
    let carts = Arc::new(SessionCarts::new());
    let orders = Arc::new(OrderBook::new());

    // Wire the extension into the lifecycle dispatch table. This is the
    // startup-time equivalent of the host's global callback registration.
    let hooks = Arc::new(HookDispatch::new());
    hooks.register(Arc::new(GiftFieldsExtension::new(products.clone())));
    tracing::info!("Gift fields extension registered.");

    // Seed catalog if configured
    if app_config.seed_catalog {
        if let Err(e) = store::seed_catalog(&catalog, products.as_ref()).await {
            tracing::error!(error = %e, "Failed to seed catalog.");
        }
    }

    // Create AppState
    let app_state = AppState {
        config: app_config.clone(),
        products,
        catalog,
        carts,
        orders,
        hooks,
    };

    // Configure and Start Actix Web Server
    let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
    tracing::info!("Attempting to bind server to {}...", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
            .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
            .configure(web::routes::configure_app_routes)
    })
    .bind(&server_address)?
    .run()
    .await
}
