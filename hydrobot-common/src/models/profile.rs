use serde::{Deserialize, Serialize};

/// Opaque identity handed to us by the chat platform.
pub type UserId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub activity_minutes: u32,
    pub city: String,

    /// Daily water target in ml, fixed when the profile is created.
    pub water_goal: f64,
    /// Daily calorie target in kcal, fixed when the profile is created.
    pub calorie_goal: f64,
}

/// Everything the profile-setup flow collects before goals are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub activity_minutes: u32,
    pub city: String,
}

impl ProfileDraft {
    pub fn into_profile(self, user_id: UserId, water_goal: f64, calorie_goal: f64) -> UserProfile {
        UserProfile {
            user_id,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age: self.age,
            activity_minutes: self.activity_minutes,
            city: self.city,
            water_goal,
            calorie_goal,
        }
    }
}
