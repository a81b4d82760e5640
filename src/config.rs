//! Configuration management for the salon server

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Salon-wide business settings
#[derive(Debug, Deserialize, Clone)]
pub struct SalonConfig {
    pub name: String,
    /// Offset of the salon's wall clock from UTC, used to decide what "today" is
    pub utc_offset_minutes: i32,
    /// Reseller subtotal (MT) from which the 25% tier applies automatically
    pub reseller_threshold: Decimal,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub salon: SalonConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. BELOS_SALON__UTC_OFFSET_MINUTES=60
            .add_source(
                Environment::with_prefix("BELOS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SalonConfig {
    fn default() -> Self {
        Self {
            name: "Belo's Salon & Store".to_string(),
            utc_offset_minutes: 120,
            reseller_threshold: Decimal::from(2500),
        }
    }
}
