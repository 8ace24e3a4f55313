//! # Turnos API
//!
//! Web server for the workshop booking engine. It exposes the availability
//! listing and the booking commit over HTTP and wires the pure scheduling
//! core to the Postgres store.
//!
//! ## Architecture
//!
//! - **Routes**: API endpoints and URL structure
//! - **Handlers**: request processing logic
//! - **Middleware**: error mapping to HTTP responses
//! - **Config**: environment configuration, including scheduling parameters
//!
//! The API uses Axum as the web framework and SQLx for database access. The
//! engine itself is stateless; the only shared-resource hazard (two commits
//! racing for one slot) is resolved inside the store, so instances can be
//! scaled horizontally.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Notifier implementations for booking confirmations
pub mod notifier;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use turnos_core::notify::BookingNotifier;
use turnos_core::schedule::SlotGenerator;

/// Shared application state accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Slot generator built from the configured opening hours, offset and
    /// granularity
    pub scheduler: SlotGenerator,
    /// Fire-and-forget confirmation dispatcher
    pub notifier: Arc<dyn BookingNotifier>,
}

/// Starts the API server with the provided configuration and database
/// connection: sets up logging, builds the scheduling state, configures
/// routes and serves until shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let scheduler = config.slot_generator()?;
    let state = Arc::new(ApiState {
        db_pool,
        scheduler,
        notifier: Arc::new(notifier::LogNotifier),
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability listing
        .merge(routes::availability::routes())
        // Booking and appointment lifecycle
        .merge(routes::appointment::routes())
        // Service catalog (read-only)
        .merge(routes::catalog::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
