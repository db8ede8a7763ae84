use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, warn};

use hydrobot_common::models::Lookup;
use hydrobot_common::traits::api::WeatherApi;
use crate::http::HttpClient;

pub const DEFAULT_WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Used whenever the provider cannot give us a temperature.
pub const FALLBACK_TEMPERATURE_C: f64 = 20.0;

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    main: WeatherMain,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

/// OpenWeatherMap current-weather lookup, metric units.
pub struct OpenWeatherService {
    http: Arc<dyn HttpClient>,
    api_key: String,
    base_url: String,
}

impl OpenWeatherService {
    pub fn new(http: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http, api_key, DEFAULT_WEATHER_API_URL)
    }

    pub fn with_base_url(
        http: Arc<dyn HttpClient>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherService {
    async fn current_temperature(&self, city: &str) -> Lookup<f64> {
        let query = vec![
            ("q".to_string(), city.to_string()),
            ("appid".to_string(), self.api_key.clone()),
            ("units".to_string(), "metric".to_string()),
        ];

        let resp = match self.http.get(self.base_url.clone(), query).await {
            Ok(r) => r,
            Err(e) => {
                error!("Weather request for '{}' failed: {}", city, e);
                return Lookup::fallback(FALLBACK_TEMPERATURE_C, format!("request failed: {e}"));
            }
        };

        if !resp.is_success() {
            error!("Weather provider returned status {} for '{}'", resp.status, city);
            return Lookup::fallback(FALLBACK_TEMPERATURE_C, format!("status {}", resp.status));
        }

        match serde_json::from_str::<WeatherPayload>(&resp.body) {
            Ok(payload) => {
                info!("Temperature for '{}': {}°C", city, payload.main.temp);
                Lookup::Live(payload.main.temp)
            }
            Err(e) => {
                warn!("Malformed weather payload for '{}': {}", city, e);
                Lookup::fallback(FALLBACK_TEMPERATURE_C, format!("malformed payload: {e}"))
            }
        }
    }
}
