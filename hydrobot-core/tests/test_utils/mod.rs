// File: hydrobot-core/tests/test_utils/mod.rs
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use hydrobot_common::models::{ConversationState, IncomingMessage, Reply, UserRecord};
use hydrobot_core::Error;
use hydrobot_core::http::{HttpClient, HttpResponse};
use hydrobot_core::repositories::{
    InMemorySessionRepository,
    InMemoryUserRecordRepository,
    SessionRepository,
    UserRecordRepository,
};
use hydrobot_core::services::food_service::DEFAULT_FOOD_API_URL;
use hydrobot_core::services::weather_service::DEFAULT_WEATHER_API_URL;
use hydrobot_core::services::{
    CommandService,
    ConversationService,
    MessageService,
    OpenWeatherService,
    UsdaFoodService,
};

/// Canned provider answers keyed by endpoint. `None` simulates a
/// transport failure. Every request URL is recorded.
#[derive(Default)]
pub struct FakeHttpClient {
    pub weather: Option<HttpResponse>,
    pub food: Option<HttpResponse>,
    pub requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeHttpClient {
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn with_temperature(temp: f64) -> Self {
        Self {
            weather: Some(HttpResponse {
                status: 200,
                body: format!(r#"{{"main":{{"temp":{temp}}}}}"#),
            }),
            food: Some(HttpResponse {
                status: 200,
                body: r#"{"foods":[]}"#.into(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for FakeHttpClient {
    async fn get(&self, url: String, query: Vec<(String, String)>) -> Result<HttpResponse, Error> {
        self.requests.lock().unwrap().push((url.clone(), query));
        let canned = if url == DEFAULT_WEATHER_API_URL {
            self.weather.clone()
        } else if url == DEFAULT_FOOD_API_URL {
            self.food.clone()
        } else {
            None
        };
        canned.ok_or_else(|| Error::Platform(format!("connection refused: {url}")))
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
}

/// The full service graph over in-memory stores and a fake network.
pub struct TestBot {
    pub http: Arc<FakeHttpClient>,
    pub records: Arc<InMemoryUserRecordRepository>,
    pub sessions: Arc<InMemorySessionRepository>,
    pub service: MessageService,
}

impl TestBot {
    pub fn new(http: FakeHttpClient) -> Self {
        let http = Arc::new(http);
        let records = Arc::new(InMemoryUserRecordRepository::new());
        let sessions = Arc::new(InMemorySessionRepository::new());

        let records_dyn: Arc<dyn UserRecordRepository> = records.clone();
        let sessions_dyn: Arc<dyn SessionRepository> = sessions.clone();
        let http_dyn: Arc<dyn HttpClient> = http.clone();

        let command_service = Arc::new(CommandService::new(records_dyn.clone(), sessions_dyn.clone()));
        let conversation_service = Arc::new(ConversationService::new(
            records_dyn,
            sessions_dyn,
            Arc::new(OpenWeatherService::new(http_dyn.clone(), "weather-key")),
            Arc::new(UsdaFoodService::new(http_dyn, "food-key")),
        ));

        Self {
            http,
            records,
            sessions,
            service: MessageService::new(command_service, conversation_service),
        }
    }

    pub async fn send_on(&self, user_id: &str, text: &str, today: NaiveDate) -> Vec<Reply> {
        let msg = IncomingMessage {
            platform: "discord".into(),
            channel: "100".into(),
            user_id: user_id.into(),
            username: format!("user{user_id}"),
            text: text.into(),
        };
        self.service
            .process_incoming_message_on(&msg, today)
            .await
            .expect("message processing failed")
    }

    /// Sends on day(1) and returns the single text reply.
    pub async fn say(&self, user_id: &str, text: &str) -> String {
        self.say_on(user_id, text, day(1)).await
    }

    pub async fn say_on(&self, user_id: &str, text: &str, today: NaiveDate) -> String {
        let replies = self.send_on(user_id, text, today).await;
        assert_eq!(replies.len(), 1, "expected exactly one reply to {text:?}");
        replies[0]
            .as_text()
            .unwrap_or_else(|| panic!("expected a text reply to {text:?}"))
            .to_string()
    }

    pub async fn state(&self, user_id: &str) -> ConversationState {
        self.sessions.get_state(user_id).await.unwrap()
    }

    pub async fn record(&self, user_id: &str) -> Option<UserRecord> {
        self.records.get(user_id).await.unwrap()
    }

    /// Runs profile setup to completion.
    pub async fn set_profile(
        &self,
        user_id: &str,
        weight: &str,
        height: &str,
        age: &str,
        activity: &str,
        city: &str,
    ) -> String {
        self.say(user_id, "/set_profile").await;
        self.say(user_id, weight).await;
        self.say(user_id, height).await;
        self.say(user_id, age).await;
        self.say(user_id, activity).await;
        self.say(user_id, city).await
    }

    /// 50 kg, 160 cm, 25 y, 30 min at 20 °C: water 2000 ml, calories 1475 kcal.
    pub async fn standard_profile(&self, user_id: &str) -> String {
        self.set_profile(user_id, "50", "160", "25", "30", "Moscow").await
    }
}
