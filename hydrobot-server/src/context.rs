//! hydrobot-server/src/context.rs
//!
//! Defines the main "global" context (ServerContext) for the bot server.

use std::sync::Arc;
use tracing::info;

use hydrobot_common::traits::api::{FoodApi, WeatherApi};
use hydrobot_core::http::{DefaultHttpClient, HttpClient};
use hydrobot_core::repositories::{
    InMemorySessionRepository,
    InMemoryUserRecordRepository,
    SessionRepository,
    UserRecordRepository,
};
use hydrobot_core::services::{
    CommandService,
    ConversationService,
    MessageService,
    OpenWeatherService,
    UsdaFoodService,
};

use crate::config::BotConfig;

/// The service graph shared by every message handler task.
pub struct ServerContext {
    pub message_service: Arc<MessageService>,
}

impl ServerContext {
    pub fn new(config: &BotConfig) -> Self {
        let http: Arc<dyn HttpClient> = Arc::new(DefaultHttpClient::new());
        let weather: Arc<dyn WeatherApi> = Arc::new(OpenWeatherService::with_base_url(
            http.clone(),
            config.weather_api_key.clone(),
            config.weather_api_url.clone(),
        ));
        let food: Arc<dyn FoodApi> = Arc::new(UsdaFoodService::with_base_url(
            http,
            config.food_api_key.clone(),
            config.food_api_url.clone(),
        ));

        Self::with_providers(weather, food)
    }

    /// Builds the context around the given providers with fresh in-memory stores.
    pub fn with_providers(weather: Arc<dyn WeatherApi>, food: Arc<dyn FoodApi>) -> Self {
        let records: Arc<dyn UserRecordRepository> = Arc::new(InMemoryUserRecordRepository::new());
        let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());

        let command_service = Arc::new(CommandService::new(records.clone(), sessions.clone()));
        let conversation_service = Arc::new(ConversationService::new(
            records,
            sessions,
            weather,
            food,
        ));
        let message_service = Arc::new(MessageService::new(command_service, conversation_service));

        info!("ServerContext created with in-memory stores");
        Self { message_service }
    }
}
