use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use hydrobot_common::models::{FoodRecord, Lookup, ProfileDraft, Reply, UserRecord};
use hydrobot_common::traits::api::{FoodApi, WeatherApi};
use crate::Error;
use crate::repositories::{SessionRepository, UserRecordRepository};
use crate::services::builtin_commands::PROFILE_REQUIRED;
use crate::services::conversation::{self, Effect};
use crate::services::goals::{calorie_norm, water_norm};

/// Feeds free-text messages through the conversation state machine and
/// carries out the resulting effects.
pub struct ConversationService {
    records: Arc<dyn UserRecordRepository>,
    sessions: Arc<dyn SessionRepository>,
    weather: Arc<dyn WeatherApi>,
    food: Arc<dyn FoodApi>,
}

impl ConversationService {
    pub fn new(
        records: Arc<dyn UserRecordRepository>,
        sessions: Arc<dyn SessionRepository>,
        weather: Arc<dyn WeatherApi>,
        food: Arc<dyn FoodApi>,
    ) -> Self {
        Self {
            records,
            sessions,
            weather,
            food,
        }
    }

    pub async fn handle_free_text(
        &self,
        user_id: &str,
        text: &str,
        today: NaiveDate,
    ) -> Result<Reply, Error> {
        let state = self.sessions.get_state(user_id).await?;
        let transition = conversation::advance(&state, text);
        debug!("user_id={} {:?} => {:?}", user_id, state, transition.next);
        self.sessions.set_state(user_id, transition.next).await?;

        match transition.effect {
            Effect::Reply(text) => Ok(Reply::Text(text)),
            Effect::ResolveFood { query } => self.resolve_food(user_id, &query).await,
            Effect::CommitProfile(draft) => self.commit_profile(user_id, draft).await,
            Effect::LogFood { food, grams } => self.log_food(user_id, food, grams, today).await,
        }
    }

    async fn resolve_food(&self, user_id: &str, query: &str) -> Result<Reply, Error> {
        let food = match self.food.resolve_food(query).await {
            Lookup::Live(f) => f,
            Lookup::Fallback { value, reason } => {
                debug!("Using fallback food record for '{}': {}", query, reason);
                value
            }
        };
        let prompt = conversation::food_weight_prompt(&food);
        self.sessions
            .set_state(user_id, conversation::food_resolved(food))
            .await?;
        Ok(Reply::Text(prompt))
    }

    async fn commit_profile(&self, user_id: &str, draft: ProfileDraft) -> Result<Reply, Error> {
        let temperature = self.weather.current_temperature(&draft.city).await;
        if let Lookup::Fallback { reason, .. } = &temperature {
            warn!("Using fallback temperature for '{}': {}", draft.city, reason);
        }
        let temp = *temperature.value();

        let water_goal = water_norm(draft.weight_kg, draft.activity_minutes, temp);
        let calorie_goal = calorie_norm(draft.weight_kg, draft.height_cm, draft.age, draft.activity_minutes);
        let profile = draft.into_profile(user_id.to_string(), water_goal, calorie_goal);

        // a fresh record: re-running setup starts progress over
        self.records.upsert(&UserRecord::new(profile)).await?;
        info!(
            "Profile saved for user_id={} => water_goal={:.0}, calorie_goal={:.0}",
            user_id, water_goal, calorie_goal
        );

        Ok(Reply::Text(format!(
            "Profile saved!\nYour water goal: {water_goal:.0} ml\nYour calorie goal: {calorie_goal:.0} kcal"
        )))
    }

    async fn log_food(
        &self,
        user_id: &str,
        food: FoodRecord,
        grams: f64,
        today: NaiveDate,
    ) -> Result<Reply, Error> {
        let mut record = match self.records.get(user_id).await? {
            Some(r) => r,
            None => return Ok(Reply::text(PROFILE_REQUIRED)),
        };

        let calories = food.calories_for(grams);
        record.progress.add_food(&food.name, calories, today);
        self.records.upsert(&record).await?;
        info!("user_id={} logged {} g of '{}' => {:.1} kcal", user_id, grams, food.name, calories);

        Ok(Reply::Text(format!("Logged: {calories:.1} kcal")))
    }
}
