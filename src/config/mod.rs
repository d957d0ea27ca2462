#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lambda::LambdaConfig;
pub use toml_config::{HandlerConfig, ResolverConfig, WeatherConfig};

use crate::utils::error::{HandlerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    Resolver,
    Weather,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerKind::Resolver => write!(f, "resolver"),
            HandlerKind::Weather => write!(f, "weather"),
        }
    }
}

impl std::str::FromStr for HandlerKind {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resolver" => Ok(HandlerKind::Resolver),
            "weather" => Ok(HandlerKind::Weather),
            other => Err(HandlerError::InvalidConfigValueError {
                field: "SIGMA_HANDLER".to_string(),
                value: other.to_string(),
                reason: "Valid handlers: resolver, weather".to_string(),
            }),
        }
    }
}
