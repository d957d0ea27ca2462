use crate::config::WeatherConfig;
use crate::domain::model::WeatherQuery;
use crate::domain::ports::WeatherProvider;
use crate::utils::error::{HandlerError, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde_json::{Map, Value};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://weather.service.msn.com/find.aspx";
pub const DEFAULT_CULTURE: &str = "en-US";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const LOCATION_FIELDS: [(&str, &str); 7] = [
    ("name", "weatherlocationname"),
    ("lat", "lat"),
    ("long", "long"),
    ("timezone", "timezone"),
    ("alert", "alert"),
    ("degreetype", "degreetype"),
    ("imagerelativeurl", "imagerelativeurl"),
];

/// Client for the MSN weather search service.
#[derive(Debug, Clone)]
pub struct MsnWeatherClient {
    client: Client,
    endpoint: String,
    culture: String,
    timeout: Duration,
}

impl MsnWeatherClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            culture: DEFAULT_CULTURE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config.endpoint.clone())
            .with_culture(config.culture.clone())
            .with_timeout(Duration::from_secs(config.timeout_seconds))
    }

    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for MsnWeatherClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl WeatherProvider for MsnWeatherClient {
    async fn find(&self, query: &WeatherQuery) -> Result<Value> {
        if query.search.is_empty() {
            return Err(HandlerError::provider("missing search input"));
        }

        tracing::debug!(
            "Querying weather provider {} for '{}' ({})",
            self.endpoint,
            query.search,
            query.degree_type.as_str()
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("src", "outlook"),
                ("weadegreetype", query.degree_type.as_str()),
                ("culture", self.culture.as_str()),
                ("weasearchstr", query.search.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        tracing::debug!("Weather provider response status: {}", response.status());

        if response.status() != reqwest::StatusCode::OK {
            return Err(HandlerError::ProviderStatusError {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        parse_weather_body(&body)
    }
}

/// 將服務回傳的內容轉成 JSON 結構
pub fn parse_weather_body(body: &str) -> Result<Value> {
    if body.is_empty() {
        return Err(HandlerError::provider("failed to get body content"));
    }

    if !body.starts_with('<') {
        if body.to_ascii_lowercase().contains("not found") {
            return Ok(Value::Array(Vec::new()));
        }
        return Err(HandlerError::provider("invalid body content"));
    }

    if !body.contains("<weatherdata") {
        return Err(HandlerError::provider("failed to parse weather data"));
    }

    let mut items = Vec::new();
    for caps in weather_regex().captures_iter(body) {
        let attrs = parse_attributes(caps.get(1).map_or("", |m| m.as_str()));
        if let Some(message) = attrs.get("errormessage").and_then(Value::as_str) {
            return Err(HandlerError::provider(message));
        }

        let inner = caps.get(2).map_or("", |m| m.as_str());
        items.push(build_weather_item(&attrs, inner));
    }

    if items.is_empty() {
        return Err(HandlerError::provider("failed to parse weather data"));
    }

    Ok(Value::Array(items))
}

fn build_weather_item(attrs: &Map<String, Value>, inner: &str) -> Value {
    let mut location = Map::new();
    for (key, attr) in LOCATION_FIELDS {
        if let Some(value) = attrs.get(attr) {
            location.insert(key.to_string(), value.clone());
        }
    }

    let current = current_regex().captures(inner).map(|caps| {
        let mut current = parse_attributes(caps.get(1).map_or("", |m| m.as_str()));
        let image_base = location.get("imagerelativeurl").and_then(Value::as_str);
        let skycode = current.get("skycode").and_then(Value::as_str);
        if let (Some(base), Some(code)) = (image_base, skycode) {
            let url = format!("{}law/{}.gif", base, code);
            current.insert("imageUrl".to_string(), Value::String(url));
        }
        Value::Object(current)
    });

    let forecast: Vec<Value> = forecast_regex()
        .captures_iter(inner)
        .map(|caps| Value::Object(parse_attributes(caps.get(1).map_or("", |m| m.as_str()))))
        .collect();

    let mut item = Map::new();
    item.insert("location".to_string(), Value::Object(location));
    item.insert("current".to_string(), current.unwrap_or(Value::Null));
    item.insert(
        "forecast".to_string(),
        if forecast.is_empty() {
            Value::Null
        } else {
            Value::Array(forecast)
        },
    );
    Value::Object(item)
}

fn parse_attributes(raw: &str) -> Map<String, Value> {
    attribute_regex()
        .captures_iter(raw)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            (caps[1].to_string(), Value::String(unescape(value)))
        })
        .collect()
}

fn unescape(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }

    entity_regex()
        .replace_all(value, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

// 屬性值內允許未跳脫的 `>`，標籤結尾只能在引號外判斷
const ATTRIBUTES: &str = r#"((?:[^>"']|"[^"]*"|'[^']*')*?)"#;

fn weather_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?s)<weather\b{}(?:/>|>(.*?)</weather>)", ATTRIBUTES))
            .expect("valid regex")
    })
}

fn current_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"<current\b{}/?>", ATTRIBUTES)).expect("valid regex"))
}

fn forecast_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"<forecast\b{}/?>", ATTRIBUTES)).expect("valid regex"))
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([A-Za-z_:][\w:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
    })
}

fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&(#[xX]?[0-9A-Fa-f]+|[a-z]+);").expect("valid regex"))
}
