use serde::{Deserialize, Serialize};

/// Normalized nutrition info for one food, as shown to the user before
/// they enter how much they ate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub calories_per_100g: f64,
    pub details: String,
    /// false only for the "not found" stand-in record
    pub success: bool,
}

impl FoodRecord {
    /// kcal for the given amount in grams.
    pub fn calories_for(&self, grams: f64) -> f64 {
        self.calories_per_100g * grams / 100.0
    }
}
