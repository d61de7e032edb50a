//! Airline-wide settings and engine policy.

use std::str::FromStr;

use crate::{error::config::ConfigError, model::db::AirlineModel};

/// Snapshot of airline settings, read fresh at the start of each operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirlineSettings {
    pub enforce_type_ratings: bool,
    pub type_rating_change_divisor: f64,
}

impl AirlineSettings {
    /// Divisor used for a type rating switch. Non-positive or NaN values count as 1.
    pub fn effective_divisor(&self) -> f64 {
        if self.type_rating_change_divisor > 0.0 {
            self.type_rating_change_divisor
        } else {
            1.0
        }
    }
}

impl Default for AirlineSettings {
    fn default() -> Self {
        Self {
            enforce_type_ratings: false,
            type_rating_change_divisor: 1.0,
        }
    }
}

impl From<&AirlineModel> for AirlineSettings {
    fn from(airline: &AirlineModel) -> Self {
        Self {
            enforce_type_ratings: airline.enforce_type_ratings,
            type_rating_change_divisor: airline.type_rating_change_divisor,
        }
    }
}

/// How many type ratings a pilot may hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeRatingPolicy {
    /// At most one rating; switching applies the career minute divisor.
    Single,
    /// Any number of ratings with no minute adjustment.
    #[default]
    Multiple,
}

impl FromStr for TypeRatingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            other => Err(ConfigError::InvalidEnvValue {
                var: "TYPE_RATING_MODE".to_string(),
                reason: format!("expected `single` or `multiple`, got `{}`", other),
            }),
        }
    }
}
