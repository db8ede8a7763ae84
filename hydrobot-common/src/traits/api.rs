use async_trait::async_trait;

use crate::models::{FoodRecord, Lookup};

/// Current weather for a city. Implementations never fail; on any
/// problem they return a fallback temperature.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn current_temperature(&self, city: &str) -> Lookup<f64>;
}

/// Nutrition info for a free-text food name. Implementations never fail;
/// the worst case is a low-confidence stand-in record.
#[async_trait]
pub trait FoodApi: Send + Sync {
    async fn resolve_food(&self, query: &str) -> Lookup<FoodRecord>;
}
