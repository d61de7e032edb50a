use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::{error::config::ConfigError, model::settings::TypeRatingPolicy};

pub struct Config {
    pub database_url: String,
    pub type_rating_policy: TypeRatingPolicy,
    pub log_level: Level,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `DATABASE_URL` is required. `TYPE_RATING_MODE` defaults to `multiple` and `LOG_LEVEL`
    /// to `info`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let type_rating_policy = match std::env::var("TYPE_RATING_MODE") {
            Ok(value) => value.parse()?,
            Err(_) => TypeRatingPolicy::default(),
        };

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => Level::from_str(value.trim()).map_err(|e| ConfigError::InvalidEnvValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => Level::INFO,
        };

        Ok(Self {
            database_url,
            type_rating_policy,
            log_level,
        })
    }
}
