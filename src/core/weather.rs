use crate::adapters::MsnWeatherClient;
use crate::config::WeatherConfig;
use crate::core::{DegreeType, Handler, Payload, WeatherProvider, WeatherQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Looks up the weather for a search term. Temperatures are always requested in Celsius.
/// The payload is read as text leniently; invalid UTF-8 is replaced, never rejected.
pub struct WeatherHandler<P: WeatherProvider> {
    provider: P,
}

impl<P: WeatherProvider> WeatherHandler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl WeatherHandler<MsnWeatherClient> {
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(MsnWeatherClient::from_config(config))
    }
}

#[async_trait]
impl<P: WeatherProvider + 'static> Handler for WeatherHandler<P> {
    type Output = serde_json::Value;

    fn name(&self) -> &'static str {
        "weather"
    }

    async fn handle(&self, payload: Payload) -> Result<serde_json::Value> {
        let query = WeatherQuery {
            search: payload.to_text_lossy(),
            degree_type: DegreeType::Celsius,
        };

        self.provider.find(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HandlerError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingProvider {
        queries: Arc<Mutex<Vec<WeatherQuery>>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl WeatherProvider for RecordingProvider {
        async fn find(&self, query: &WeatherQuery) -> Result<serde_json::Value> {
            self.queries.lock().unwrap().push(query.clone());
            match &self.fail_with {
                Some(message) => Err(HandlerError::provider(message.clone())),
                None => Ok(serde_json::json!([{ "location": { "name": query.search } }])),
            }
        }
    }

    #[tokio::test]
    async fn test_query_uses_celsius() {
        let handler = WeatherHandler::new(RecordingProvider::default());

        let result = handler.handle(Payload::from("Taipei")).await.unwrap();
        assert_eq!(result[0]["location"]["name"], "Taipei");

        let queries = handler.provider().queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].search, "Taipei");
        assert_eq!(queries[0].degree_type, DegreeType::Celsius);
    }

    #[tokio::test]
    async fn test_non_utf8_search_reaches_provider() {
        let provider = RecordingProvider::default();
        let handler = WeatherHandler::new(provider.clone());

        let result = handler
            .handle(Payload::new(vec![b'Z', 0xfc, b'r', b'i', b'c', b'h']))
            .await
            .unwrap();
        assert_eq!(result[0]["location"]["name"], "Z\u{FFFD}rich");

        let queries = provider.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].search, "Z\u{FFFD}rich");
    }

    #[tokio::test]
    async fn test_provider_error_is_returned() {
        let provider = RecordingProvider {
            fail_with: Some("No match found".to_string()),
            ..Default::default()
        };
        let handler = WeatherHandler::new(provider);

        let err = handler.handle(Payload::from("Atlantis")).await.unwrap_err();
        assert_eq!(err.to_string(), "No match found");
    }
}
