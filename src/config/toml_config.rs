use crate::adapters::weather::{DEFAULT_CULTURE, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::model::AddressFamily;
use crate::utils::error::{HandlerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandlerConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub family: AddressFamily,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_culture")]
    pub culture: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_culture() -> String {
    DEFAULT_CULTURE.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            culture: default_culture(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl HandlerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HandlerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HandlerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WEATHER_ENDPOINT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for WeatherConfig {
    fn validate(&self) -> Result<()> {
        validate_url("weather.endpoint", &self.endpoint)?;
        validate_non_empty_string("weather.culture", &self.culture)?;
        validate_range("weather.timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

impl Validate for HandlerConfig {
    fn validate(&self) -> Result<()> {
        self.weather.validate()?;
        tracing::debug!("Handler configuration validation passed");
        Ok(())
    }
}
