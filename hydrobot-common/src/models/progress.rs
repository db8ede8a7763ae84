use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;
use crate::models::workout::WorkoutEntry;

/// Per-user accumulators. Nothing in here is ever reset automatically;
/// only re-running profile setup or an explicit wipe starts it over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub logged_water: f64,
    pub logged_calories: f64,
    pub burned_calories: f64,

    /// date => ml, used for charting
    pub water_history: BTreeMap<NaiveDate, f64>,
    /// date => kcal, used for charting
    pub calories_history: BTreeMap<NaiveDate, f64>,

    /// Food names in the order they were logged.
    pub food_log: Vec<String>,
    pub workout_log: Vec<WorkoutEntry>,
}

impl ProgressRecord {
    pub fn add_water(&mut self, ml: f64, day: NaiveDate) {
        self.logged_water += ml;
        *self.water_history.entry(day).or_insert(0.0) += ml;
    }

    pub fn add_food(&mut self, name: &str, kcal: f64, day: NaiveDate) {
        self.logged_calories += kcal;
        *self.calories_history.entry(day).or_insert(0.0) += kcal;
        self.food_log.push(name.to_string());
    }

    pub fn add_workout(&mut self, entry: WorkoutEntry) {
        self.burned_calories += entry.calories_burned;
        self.workout_log.push(entry);
    }

    /// Consumed minus burned.
    pub fn net_calories(&self) -> f64 {
        self.logged_calories - self.burned_calories
    }

    pub fn has_history(&self) -> bool {
        !self.water_history.is_empty() || !self.calories_history.is_empty()
    }

    /// Most frequently logged foods, highest count first. Ties keep the
    /// order in which each food was first logged.
    pub fn favorite_foods(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();
        for name in &self.food_log {
            let count = counts.entry(name.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(name.as_str());
            }
            *count += 1;
        }

        let mut ranked: Vec<(String, usize)> = first_seen
            .into_iter()
            .map(|name| (name.to_string(), counts[name]))
            .collect();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

/// A profile together with its progress. Storing the pair as one value
/// keeps "progress exists iff profile exists" true by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub profile: UserProfile,
    pub progress: ProgressRecord,
}

impl UserRecord {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            progress: ProgressRecord::default(),
        }
    }

    pub fn water_remaining(&self) -> f64 {
        (self.profile.water_goal - self.progress.logged_water).max(0.0)
    }

    pub fn calories_remaining(&self) -> f64 {
        (self.profile.calorie_goal - self.progress.net_calories()).max(0.0)
    }

    /// Share of the water goal already consumed, in percent. A zero goal
    /// counts as met.
    pub fn water_progress_percent(&self) -> f64 {
        if self.profile.water_goal <= 0.0 {
            return 100.0;
        }
        self.progress.logged_water / self.profile.water_goal * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_water_accumulates_per_day() {
        let mut progress = ProgressRecord::default();
        progress.add_water(800.0, day(1));
        progress.add_water(500.0, day(1));
        progress.add_water(250.0, day(2));

        assert_eq!(progress.logged_water, 1550.0);
        assert_eq!(progress.water_history.get(&day(1)), Some(&1300.0));
        assert_eq!(progress.water_history.get(&day(2)), Some(&250.0));
    }

    #[test]
    fn test_favorite_foods_ranked_by_count() {
        let mut progress = ProgressRecord::default();
        for name in ["Egg", "Banana", "Milk", "Banana", "Oatmeal", "Milk", "Banana"] {
            progress.add_food(name, 10.0, day(3));
        }

        let top = progress.favorite_foods(3);
        assert_eq!(
            top,
            vec![
                ("Banana".to_string(), 3),
                ("Milk".to_string(), 2),
                ("Egg".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_net_and_remaining() {
        let profile = UserProfile {
            user_id: "42".into(),
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            activity_minutes: 0,
            city: "Berlin".into(),
            water_goal: 2000.0,
            calorie_goal: 1500.0,
        };
        let mut record = UserRecord::new(profile);
        assert_eq!(record.calories_remaining(), 1500.0);

        record.progress.add_food("Banana", 1800.0, day(4));
        record.progress.burned_calories += 100.0;
        assert_eq!(record.progress.net_calories(), 1700.0);
        assert_eq!(record.calories_remaining(), 0.0);
    }
}
