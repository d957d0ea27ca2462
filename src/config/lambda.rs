use crate::config::{HandlerConfig, HandlerKind};
use crate::domain::model::AddressFamily;
use crate::utils::error::{HandlerError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use std::env;

/// Configuration for the Lambda entry point, read from the function's environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub handler: HandlerKind,
    pub handlers: HandlerConfig,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `SIGMA_CONFIG` 指向的 TOML 檔為基底，其他環境變數覆蓋其值
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let handler = lookup("SIGMA_HANDLER");
        let handler = validate_required_field("SIGMA_HANDLER", &handler)?.parse::<HandlerKind>()?;

        let mut handlers = match lookup("SIGMA_CONFIG") {
            Some(path) => HandlerConfig::from_file(path)?,
            None => HandlerConfig::default(),
        };

        if let Some(family) = lookup("RESOLVER_FAMILY") {
            handlers.resolver.family = family.parse::<AddressFamily>()?;
        }
        if let Some(endpoint) = lookup("WEATHER_ENDPOINT") {
            handlers.weather.endpoint = endpoint;
        }
        if let Some(culture) = lookup("WEATHER_CULTURE") {
            handlers.weather.culture = culture;
        }
        if let Some(timeout) = lookup("WEATHER_TIMEOUT_SECONDS") {
            handlers.weather.timeout_seconds =
                timeout
                    .parse()
                    .map_err(|_| HandlerError::InvalidConfigValueError {
                        field: "WEATHER_TIMEOUT_SECONDS".to_string(),
                        value: timeout.clone(),
                        reason: "Must be a whole number of seconds".to_string(),
                    })?;
        }

        Ok(Self { handler, handlers })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.handlers.validate()?;
        tracing::info!("✅ Lambda configuration validation passed ({} handler)", self.handler);
        Ok(())
    }
}
