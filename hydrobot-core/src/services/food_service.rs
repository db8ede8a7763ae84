use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, warn};

use hydrobot_common::models::{FoodRecord, Lookup};
use hydrobot_common::traits::api::FoodApi;
use crate::http::HttpClient;
use crate::services::food_table::{search_food, LocalFood};

pub const DEFAULT_FOOD_API_URL: &str = "https://api.nal.usda.gov/fdc/v1/foods/search";

/// Survey (FNDDS) covers everyday foods rather than branded products.
const FOOD_DATA_TYPE: &str = "Survey (FNDDS)";

/// Stand-in kcal/100 g when nothing is known about a food.
pub const UNKNOWN_FOOD_CALORIES: f64 = 100.0;

#[derive(Debug, Deserialize)]
struct SearchPayload {
    foods: Vec<UsdaFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsdaFood {
    description: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<UsdaNutrient>,
    serving_size: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsdaNutrient {
    #[serde(default)]
    nutrient_name: String,
    value: Option<f64>,
}

/// Why the remote lookup produced nothing usable.
#[derive(Debug)]
enum RemoteMiss {
    NoResults,
    Status(u16),
    Malformed(String),
    Request(String),
}

impl fmt::Display for RemoteMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteMiss::NoResults => write!(f, "no results"),
            RemoteMiss::Status(code) => write!(f, "status {code}"),
            RemoteMiss::Malformed(e) => write!(f, "malformed payload: {e}"),
            RemoteMiss::Request(e) => write!(f, "request failed: {e}"),
        }
    }
}

/// Resolves food names against USDA FoodData Central, then the local
/// table, then a stand-in record.
pub struct UsdaFoodService {
    http: Arc<dyn HttpClient>,
    api_key: String,
    base_url: String,
}

impl UsdaFoodService {
    pub fn new(http: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http, api_key, DEFAULT_FOOD_API_URL)
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

    async fn search_remote(&self, query: &str) -> Result<FoodRecord, RemoteMiss> {
        let params = vec![
            ("api_key".to_string(), self.api_key.clone()),
            ("query".to_string(), query.to_string()),
            ("pageSize".to_string(), "1".to_string()),
            ("dataType".to_string(), FOOD_DATA_TYPE.to_string()),
        ];

        let resp = self
            .http
            .get(self.base_url.clone(), params)
            .await
            .map_err(|e| RemoteMiss::Request(e.to_string()))?;
        if !resp.is_success() {
            return Err(RemoteMiss::Status(resp.status));
        }

        let payload: SearchPayload = serde_json::from_str(&resp.body)
            .map_err(|e| RemoteMiss::Malformed(e.to_string()))?;
        let food = payload.foods.into_iter().next().ok_or(RemoteMiss::NoResults)?;

        let calories = food
            .food_nutrients
            .iter()
            .find(|n| n.nutrient_name.to_lowercase().starts_with("energy"))
            .and_then(|n| n.value)
            .unwrap_or(0.0);

        Ok(FoodRecord {
            name: food.description.unwrap_or_else(|| query.to_string()),
            calories_per_100g: calories,
            details: format!("Serving: {} g", food.serving_size.unwrap_or(100.0)),
            success: true,
        })
    }
}

fn local_record(food: &LocalFood) -> FoodRecord {
    FoodRecord {
        name: food.name.to_string(),
        calories_per_100g: food.calories,
        details: format!(
            "Protein: {}g, Fat: {}g, Carbs: {}g",
            food.protein, food.fat, food.carbs
        ),
        success: true,
    }
}

fn unknown_record(query: &str, miss: &RemoteMiss) -> FoodRecord {
    let details = match miss {
        RemoteMiss::Request(_) => "An error occurred while fetching information",
        _ => "Information not found",
    };
    FoodRecord {
        name: capitalize(query),
        calories_per_100g: UNKNOWN_FOOD_CALORIES,
        details: details.to_string(),
        success: false,
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[async_trait]
impl FoodApi for UsdaFoodService {
    async fn resolve_food(&self, query: &str) -> Lookup<FoodRecord> {
        let miss = match self.search_remote(query).await {
            Ok(record) => {
                info!("Resolved '{}' remotely as '{}'", query, record.name);
                return Lookup::Live(record);
            }
            Err(miss) => miss,
        };

        match &miss {
            RemoteMiss::Request(e) => error!("Food lookup for '{}' failed: {}", query, e),
            other => warn!("Food '{}' not found remotely ({}), trying local table", query, other),
        }

        if let Some(food) = search_food(query) {
            return Lookup::fallback(local_record(food), format!("local table ({miss})"));
        }

        warn!("Food '{}' not found anywhere, using stand-in", query);
        Lookup::fallback(unknown_record(query, &miss), miss.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::http::{HttpResponse, MockHttpClient};

    fn service(mock: MockHttpClient) -> UsdaFoodService {
        UsdaFoodService::new(Arc::new(mock), "key")
    }

    fn ok(body: &str) -> Result<HttpResponse, Error> {
        Ok(HttpResponse { status: 200, body: body.to_string() })
    }

    #[tokio::test]
    async fn test_remote_hit_uses_energy_nutrient() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url, params| {
                url == DEFAULT_FOOD_API_URL
                    && params.contains(&("query".to_string(), "apple".to_string()))
                    && params.contains(&("pageSize".to_string(), "1".to_string()))
                    && params.contains(&("dataType".to_string(), "Survey (FNDDS)".to_string()))
            })
            .returning(|_, _| {
                ok(r#"{"foods":[{"description":"Apple, raw","servingSize":182,
                    "foodNutrients":[
                        {"nutrientName":"Protein","value":0.26},
                        {"nutrientName":"Energy","value":52.0}
                    ]}]}"#)
            });

        let found = service(mock).resolve_food("apple").await;
        assert!(found.is_live());
        let food = found.into_value();
        assert_eq!(food.name, "Apple, raw");
        assert_eq!(food.calories_per_100g, 52.0);
        assert_eq!(food.details, "Serving: 182 g");
        assert!(food.success);
    }

    #[tokio::test]
    async fn test_remote_hit_without_energy_is_zero() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            ok(r#"{"foods":[{"description":"Water","foodNutrients":[{"nutrientName":"Sodium, Na","value":4}]}]}"#)
        });

        let food = service(mock).resolve_food("water").await.into_value();
        assert_eq!(food.calories_per_100g, 0.0);
        assert_eq!(food.details, "Serving: 100 g");
    }

    #[tokio::test]
    async fn test_empty_results_use_local_alias() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| ok(r#"{"foods":[]}"#));

        let found = service(mock).resolve_food("ОВСЯНКА").await;
        assert!(!found.is_live());
        let food = found.into_value();
        assert_eq!(food.name, "Oatmeal");
        assert_eq!(food.calories_per_100g, 68.0);
        assert_eq!(food.details, "Protein: 2.4g, Fat: 1.4g, Carbs: 12g");
        assert!(food.success);
    }

    #[tokio::test]
    async fn test_unknown_food_after_error_is_stand_in() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_, _| Err(Error::Platform("dns failure".into())));

        let food = service(mock).resolve_food("dragon fruit").await.into_value();
        assert_eq!(food.name, "Dragon fruit");
        assert_eq!(food.calories_per_100g, 100.0);
        assert_eq!(food.details, "An error occurred while fetching information");
        assert!(!food.success);
    }

    #[tokio::test]
    async fn test_unknown_food_after_bad_status() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_, _| Ok(HttpResponse { status: 503, body: String::new() }));

        match service(mock).resolve_food("xyzzy").await {
            Lookup::Fallback { value, reason } => {
                assert_eq!(value.details, "Information not found");
                assert!(!value.success);
                assert_eq!(reason, "status 503");
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("dragon FRUIT"), "Dragon fruit");
        assert_eq!(capitalize("яблоко"), "Яблоко");
        assert_eq!(capitalize(""), "");
    }
}
