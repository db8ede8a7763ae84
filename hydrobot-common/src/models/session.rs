use serde::{Deserialize, Serialize};

use crate::models::food::FoodRecord;
use crate::models::profile::ProfileDraft;

/// Where a user is in a multi-step flow. Values collected so far travel
/// inside the state, so a session is fully described by this one value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ConversationState {
    #[default]
    Idle,

    // profile setup
    WaitingWeight,
    WaitingHeight {
        weight_kg: f64,
    },
    WaitingAge {
        weight_kg: f64,
        height_cm: f64,
    },
    WaitingActivity {
        weight_kg: f64,
        height_cm: f64,
        age: u32,
    },
    WaitingCity {
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        activity_minutes: u32,
    },

    // food logging
    WaitingFoodName,
    WaitingFoodWeight {
        food: FoodRecord,
    },
}

impl ConversationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ConversationState::Idle)
    }

    pub fn is_profile_flow(&self) -> bool {
        matches!(
            self,
            ConversationState::WaitingWeight
                | ConversationState::WaitingHeight { .. }
                | ConversationState::WaitingAge { .. }
                | ConversationState::WaitingActivity { .. }
                | ConversationState::WaitingCity { .. }
        )
    }

    pub fn is_food_flow(&self) -> bool {
        matches!(
            self,
            ConversationState::WaitingFoodName | ConversationState::WaitingFoodWeight { .. }
        )
    }

    /// Builds the draft once the city is known. Only meaningful from
    /// `WaitingCity`.
    pub fn complete_profile(&self, city: &str) -> Option<ProfileDraft> {
        match self {
            ConversationState::WaitingCity {
                weight_kg,
                height_cm,
                age,
                activity_minutes,
            } => Some(ProfileDraft {
                weight_kg: *weight_kg,
                height_cm: *height_cm,
                age: *age,
                activity_minutes: *activity_minutes,
                city: city.to_string(),
            }),
            _ => None,
        }
    }
}
