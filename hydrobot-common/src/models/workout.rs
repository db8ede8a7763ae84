use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Workout type exactly as the user typed it.
    pub kind: String,
    pub duration_minutes: u32,
    pub calories_burned: f64,
    pub extra_water_ml: u32,
    pub logged_on: NaiveDate,
}
