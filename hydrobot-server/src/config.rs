//! hydrobot-server/src/config.rs
//!
//! Secrets and provider endpoints, read from `.env` and the environment.

use hydrobot_core::Error;
use hydrobot_core::services::food_service::DEFAULT_FOOD_API_URL;
use hydrobot_core::services::weather_service::DEFAULT_WEATHER_API_URL;

pub const DEFAULT_FOOD_API_KEY: &str = "DEMO_KEY";

#[derive(Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub weather_api_key: String,
    pub food_api_key: String,
    pub weather_api_url: String,
    pub food_api_url: String,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("weather_api_key", &"<redacted>")
            .field("food_api_key", &"<redacted>")
            .field("weather_api_url", &self.weather_api_url)
            .field("food_api_url", &self.food_api_url)
            .finish()
    }
}

impl BotConfig {
    /// Loads `.env` (if there is one) and then reads the process environment.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |key: &str| {
            optional(key).ok_or_else(|| Error::Config(format!("{key} is not set")))
        };

        Ok(Self {
            bot_token: required("BOT_TOKEN")?,
            weather_api_key: required("WEATHER_API_KEY")?,
            food_api_key: optional("FOOD_API_KEY").unwrap_or_else(|| DEFAULT_FOOD_API_KEY.to_string()),
            weather_api_url: optional("WEATHER_API_URL")
                .unwrap_or_else(|| DEFAULT_WEATHER_API_URL.to_string()),
            food_api_url: optional("FOOD_API_URL").unwrap_or_else(|| DEFAULT_FOOD_API_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_required_keys_and_defaults() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "token"),
            ("WEATHER_API_KEY", "weather"),
        ]))
        .unwrap();

        assert_eq!(config.bot_token, "token");
        assert_eq!(config.weather_api_key, "weather");
        assert_eq!(config.food_api_key, DEFAULT_FOOD_API_KEY);
        assert_eq!(config.weather_api_url, DEFAULT_WEATHER_API_URL);
        assert_eq!(config.food_api_url, DEFAULT_FOOD_API_URL);
    }

    #[test]
    fn test_missing_bot_token_fails() {
        let result = BotConfig::from_lookup(lookup_from(&[("WEATHER_API_KEY", "weather")]));
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("BOT_TOKEN")));
    }

    #[test]
    fn test_missing_weather_key_fails() {
        let result = BotConfig::from_lookup(lookup_from(&[("BOT_TOKEN", "token")]));
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("WEATHER_API_KEY")));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let result = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "   "),
            ("WEATHER_API_KEY", "weather"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "token"),
            ("WEATHER_API_KEY", "weather"),
            ("FOOD_API_KEY", "food"),
            ("WEATHER_API_URL", "http://localhost:8080/weather"),
            ("FOOD_API_URL", "http://localhost:8080/foods"),
        ]))
        .unwrap();

        assert_eq!(config.food_api_key, "food");
        assert_eq!(config.weather_api_url, "http://localhost:8080/weather");
        assert_eq!(config.food_api_url, "http://localhost:8080/foods");
        assert!(!format!("{config:?}").contains("token"));
    }
}
