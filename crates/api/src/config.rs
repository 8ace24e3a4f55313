//! # API Configuration Module
//!
//! Loads configuration for the booking API from environment variables,
//! including the scheduling parameters that configure the engine: the fixed
//! UTC offset, the slot granularity and the opening-hours table.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: bind address (default: "0.0.0.0")
//! - `API_PORT`: listen port (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `API_CORS_ORIGINS`: comma-separated allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: request timeout (default: 30)
//! - `BOOKING_UTC_OFFSET_MINUTES`: fixed wall-clock offset from UTC
//!   (default: -180, Argentina; no DST handling)
//! - `BOOKING_GRANULARITY_MINUTES`: step between candidate slot starts
//!   (default: 30)
//! - `OPENING_HOURS`: optional JSON opening-hours table; falls back to the
//!   built-in workshop schedule

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

use turnos_core::schedule::{OpeningHours, ShopClock, SlotGenerator, DEFAULT_GRANULARITY_MINUTES};

/// Configuration for the booking API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Fixed UTC offset for wall-clock conversions, in minutes
    pub utc_offset_minutes: i32,

    /// Step between candidate slot starts, in minutes
    pub granularity_minutes: u16,

    /// Opening-hours table as JSON; None uses the built-in schedule
    pub opening_hours_json: Option<String>,
}

impl ApiConfig {
    /// Loads configuration from environment variables, with defaults where
    /// sensible. `DATABASE_URL` is required.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Scheduling settings
        let utc_offset_minutes = env::var("BOOKING_UTC_OFFSET_MINUTES")
            .unwrap_or_else(|_| "-180".to_string())
            .parse()
            .wrap_err("Invalid BOOKING_UTC_OFFSET_MINUTES value")?;

        let granularity_minutes = env::var("BOOKING_GRANULARITY_MINUTES")
            .unwrap_or_else(|_| DEFAULT_GRANULARITY_MINUTES.to_string())
            .parse()
            .wrap_err("Invalid BOOKING_GRANULARITY_MINUTES value")?;

        let opening_hours_json = env::var("OPENING_HOURS").ok();

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            utc_offset_minutes,
            granularity_minutes,
            opening_hours_json,
        })
    }

    /// Builds the slot generator from the scheduling settings, validating
    /// the opening-hours table in the process.
    pub fn slot_generator(&self) -> Result<SlotGenerator> {
        let hours = match &self.opening_hours_json {
            Some(json) => serde_json::from_str::<OpeningHours>(json)
                .wrap_err("Invalid OPENING_HOURS value")?,
            None => OpeningHours::workshop_default(),
        };
        let clock = ShopClock::new(self.utc_offset_minutes);

        let generator = SlotGenerator::new(hours, clock, self.granularity_minutes)
            .wrap_err("Invalid scheduling configuration")?;
        Ok(generator)
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
