//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QUBITLEARN` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so the service starts with an empty environment;
//! API credentials are resolved separately through
//! [`CredentialResolver`](crate::adapters::credentials::CredentialResolver).
//!
//! # Example
//!
//! ```no_run
//! use qubitlearn::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on port {}", config.server.port);
//! ```

mod error;
mod inference;
mod payment;
mod server;
mod store;

pub use error::{ConfigError, ValidationError};
pub use inference::{InferenceConfig, SequenceStrategy};
pub use payment::{parse_test_mode_flag, PaymentConfig};
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Hosted inference endpoint and model selection
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Payment aggregator (IntaSend)
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Backing store (Supabase PostgREST)
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QUBITLEARN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `QUBITLEARN__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `QUBITLEARN__INFERENCE__SEQUENCE_STRATEGY=per_sequence`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QUBITLEARN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.inference.validate()?;
        self.payment.validate()?;
        self.store.validate()?;
        Ok(())
    }

    /// Whether the request timeout can cut off a slow paraphrase before the
    /// inference timeouts fire.
    pub fn request_timeout_can_cut_inference(&self) -> bool {
        self.inference.worst_case_paraphrase()
            > std::time::Duration::from_secs(self.server.request_timeout_secs)
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
