//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `CONSULTANCY_BOOKING` prefix; nested values are separated by `__`.
//!
//! # Example
//!
//! ```no_run
//! use consultancy_booking::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod booking;
mod database;
mod error;
mod notification;
mod server;
mod store;

pub use booking::BookingConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use notification::{NotificationConfig, NotificationMode};
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;

use serde::Deserialize;

/// Root application configuration
///
/// At most one of `database` and `store` is normally set. With neither,
/// bookings are kept in memory.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL booking store
    pub database: Option<DatabaseConfig>,

    /// Remote booking service
    pub store: Option<StoreConfig>,

    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub notification: NotificationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `CONSULTANCY_BOOKING__*` variables.
    ///
    /// - `CONSULTANCY_BOOKING__SERVER__BIND_ADDR=0.0.0.0:8080` -> `server.bind_addr`
    /// - `CONSULTANCY_BOOKING__DATABASE__URL=...` -> `database.url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONSULTANCY_BOOKING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        if let Some(store) = &self.store {
            store.validate(self.is_production())?;
        }
        self.booking.validate()?;
        self.notification.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CONSULTANCY_BOOKING__DATABASE__URL",
        "CONSULTANCY_BOOKING__STORE__URL",
        "CONSULTANCY_BOOKING__SERVER__BIND_ADDR",
        "CONSULTANCY_BOOKING__SERVER__ENVIRONMENT",
        "CONSULTANCY_BOOKING__BOOKING__UTC_OFFSET_MINUTES",
        "CONSULTANCY_BOOKING__NOTIFICATION__MODE",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.database.is_none());
        assert!(config.store.is_none());
        assert_eq!(config.notification.mode, NotificationMode::Log);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_database_and_booking_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("CONSULTANCY_BOOKING__DATABASE__URL", "postgresql://test@localhost/test"),
            ("CONSULTANCY_BOOKING__BOOKING__UTC_OFFSET_MINUTES", "-300"),
            ("CONSULTANCY_BOOKING__SERVER__BIND_ADDR", "3000"),
        ])
        .unwrap();

        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url.expose_secret(), "postgresql://test@localhost/test");
        assert_eq!(config.booking.utc_offset_minutes, -300);
        assert_eq!(config.server.socket_addr().unwrap().port(), 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_requires_https_store() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("CONSULTANCY_BOOKING__STORE__URL", "http://bookings.internal"),
            ("CONSULTANCY_BOOKING__SERVER__ENVIRONMENT", "production"),
        ])
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.validate(), Err(ValidationError::StoreUrlMustBeHttps));
    }

    #[test]
    fn test_notification_mode_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("CONSULTANCY_BOOKING__NOTIFICATION__MODE", "disabled")]).unwrap();
        assert_eq!(config.notification.mode, NotificationMode::Disabled);
    }
}
