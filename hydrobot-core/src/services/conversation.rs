//! Multi-step input collection as a pure state machine.
//!
//! `advance` maps `(state, input)` to the next state plus one effect for
//! the caller to carry out. Nothing here touches the network or the
//! stores, so every transition can be tested directly.

use hydrobot_common::models::{ConversationState, FoodRecord, ProfileDraft};

pub const PROMPT_WEIGHT: &str = "Enter your weight (kg):";
pub const PROMPT_HEIGHT: &str = "Enter your height (cm):";
pub const PROMPT_AGE: &str = "Enter your age:";
pub const PROMPT_ACTIVITY: &str = "How many minutes of activity do you get per day?";
pub const PROMPT_CITY: &str = "Which city are you in?";
pub const PROMPT_FOOD_NAME: &str = "What did you eat? Enter the food name:";
pub const INVALID_NUMBER: &str = "Please enter a valid number.";
pub const INVALID_WHOLE_NUMBER: &str = "Please enter a valid whole number.";
pub const INVALID_TEXT: &str = "Please enter some text.";
pub const IDLE_HINT: &str = "I didn't understand that. Send /start to see what I can do.";

/// What the caller must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send this text back.
    Reply(String),
    /// Look the food up, then move to `WaitingFoodWeight` with the result.
    ResolveFood { query: String },
    /// Look up the weather, derive goals and store a fresh record.
    CommitProfile(ProfileDraft),
    /// Add `food` scaled to `grams` to today's calories.
    LogFood { food: FoodRecord, grams: f64 },
}

impl Effect {
    /// The text of a `Reply` effect.
    pub fn into_text(self) -> Option<String> {
        match self {
            Effect::Reply(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: ConversationState,
    pub effect: Effect,
}

impl Transition {
    fn reply(next: ConversationState, text: &str) -> Self {
        Self {
            next,
            effect: Effect::Reply(text.to_string()),
        }
    }
}

pub fn start_profile_setup() -> Transition {
    Transition::reply(ConversationState::WaitingWeight, PROMPT_WEIGHT)
}

pub fn start_food_logging() -> Transition {
    Transition::reply(ConversationState::WaitingFoodName, PROMPT_FOOD_NAME)
}

/// Always lands in `Idle`, whatever the current state.
pub fn cancel(state: &ConversationState) -> Transition {
    let text = if state.is_profile_flow() {
        "Profile setup cancelled."
    } else if state.is_food_flow() {
        "Food logging cancelled."
    } else {
        "Nothing to cancel."
    };
    Transition::reply(ConversationState::Idle, text)
}

/// State reached once the food in a `ResolveFood` effect is known.
pub fn food_resolved(food: FoodRecord) -> ConversationState {
    ConversationState::WaitingFoodWeight { food }
}

/// Text shown after a food is resolved.
pub fn food_weight_prompt(food: &FoodRecord) -> String {
    format!(
        "🍴 {}: {} kcal per 100 g\n{}\nHow many grams did you eat?",
        food.name, food.calories_per_100g, food.details
    )
}

pub fn advance(state: &ConversationState, input: &str) -> Transition {
    use ConversationState::*;

    let input = input.trim();
    match state {
        Idle => Transition::reply(Idle, IDLE_HINT),

        WaitingWeight => match parse_positive(input) {
            Some(weight_kg) => Transition::reply(WaitingHeight { weight_kg }, PROMPT_HEIGHT),
            None => Transition::reply(state.clone(), INVALID_NUMBER),
        },

        WaitingHeight { weight_kg } => match parse_positive(input) {
            Some(height_cm) => Transition::reply(
                WaitingAge {
                    weight_kg: *weight_kg,
                    height_cm,
                },
                PROMPT_AGE,
            ),
            None => Transition::reply(state.clone(), INVALID_NUMBER),
        },

        WaitingAge {
            weight_kg,
            height_cm,
        } => match parse_whole(input) {
            Some(age) => Transition::reply(
                WaitingActivity {
                    weight_kg: *weight_kg,
                    height_cm: *height_cm,
                    age,
                },
                PROMPT_ACTIVITY,
            ),
            None => Transition::reply(state.clone(), INVALID_WHOLE_NUMBER),
        },

        WaitingActivity {
            weight_kg,
            height_cm,
            age,
        } => match parse_whole(input) {
            Some(activity_minutes) => Transition::reply(
                WaitingCity {
                    weight_kg: *weight_kg,
                    height_cm: *height_cm,
                    age: *age,
                    activity_minutes,
                },
                PROMPT_CITY,
            ),
            None => Transition::reply(state.clone(), INVALID_WHOLE_NUMBER),
        },

        WaitingCity { .. } => match state.complete_profile(input) {
            Some(draft) if !input.is_empty() => Transition {
                next: Idle,
                effect: Effect::CommitProfile(draft),
            },
            _ => Transition::reply(state.clone(), INVALID_TEXT),
        },

        WaitingFoodName => {
            if input.is_empty() {
                Transition::reply(WaitingFoodName, INVALID_TEXT)
            } else {
                Transition {
                    next: WaitingFoodName,
                    effect: Effect::ResolveFood {
                        query: input.to_string(),
                    },
                }
            }
        }

        WaitingFoodWeight { food } => match parse_positive(input) {
            Some(grams) => Transition {
                next: Idle,
                effect: Effect::LogFood {
                    food: food.clone(),
                    grams,
                },
            },
            None => Transition::reply(state.clone(), INVALID_NUMBER),
        },
    }
}

/// Finite and > 0. A decimal comma is accepted.
pub fn parse_positive(input: &str) -> Option<f64> {
    let value: f64 = input.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

pub fn parse_whole(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrobot_common::models::ConversationState::*;

    fn banana() -> FoodRecord {
        FoodRecord {
            name: "Banana".into(),
            calories_per_100g: 89.0,
            details: "Protein: 1.1g, Fat: 0.3g, Carbs: 22.8g".into(),
            success: true,
        }
    }

    #[test]
    fn test_profile_flow_collects_all_fields() {
        let t = start_profile_setup();
        assert_eq!(t.next, WaitingWeight);

        let t = advance(&t.next, "70.5");
        assert_eq!(t.next, WaitingHeight { weight_kg: 70.5 });
        assert_eq!(t.effect, Effect::Reply(PROMPT_HEIGHT.into()));

        let t = advance(&t.next, "175");
        let t = advance(&t.next, "30");
        let t = advance(&t.next, "45");
        assert_eq!(
            t.next,
            WaitingCity {
                weight_kg: 70.5,
                height_cm: 175.0,
                age: 30,
                activity_minutes: 45
            }
        );

        let t = advance(&t.next, "  Berlin ");
        assert_eq!(t.next, Idle);
        assert_eq!(
            t.effect,
            Effect::CommitProfile(ProfileDraft {
                weight_kg: 70.5,
                height_cm: 175.0,
                age: 30,
                activity_minutes: 45,
                city: "Berlin".into(),
            })
        );
    }

    #[test]
    fn test_bad_weight_reprompts_and_stays() {
        let mut state = WaitingWeight;
        for bad in ["heavy", "", "-3", "0", "NaN", "inf"] {
            let t = advance(&state, bad);
            assert_eq!(t.next, WaitingWeight, "input {bad:?}");
            assert_eq!(t.effect, Effect::Reply(INVALID_NUMBER.into()));
            state = t.next;
        }
    }

    #[test]
    fn test_bad_age_keeps_collected_values() {
        let state = WaitingAge { weight_kg: 60.0, height_cm: 160.0 };
        let t = advance(&state, "thirty");
        assert_eq!(t.next, state);
        assert_eq!(t.effect, Effect::Reply(INVALID_WHOLE_NUMBER.into()));

        // fractional ages are not whole numbers
        assert_eq!(advance(&state, "30.5").next, state);
    }

    #[test]
    fn test_decimal_comma_accepted() {
        assert_eq!(parse_positive("72,3"), Some(72.3));
    }

    #[test]
    fn test_empty_city_reprompts() {
        let state = WaitingCity {
            weight_kg: 60.0,
            height_cm: 160.0,
            age: 20,
            activity_minutes: 0,
        };
        let t = advance(&state, "   ");
        assert_eq!(t.next, state);
    }

    #[test]
    fn test_food_flow() {
        let t = start_food_logging();
        assert_eq!(t.next, WaitingFoodName);

        let t = advance(&t.next, "banana");
        assert_eq!(t.effect, Effect::ResolveFood { query: "banana".into() });

        let state = food_resolved(banana());
        let t = advance(&state, "abc");
        assert_eq!(t.next, state);

        let t = advance(&state, "150");
        assert_eq!(t.next, Idle);
        assert_eq!(t.effect, Effect::LogFood { food: banana(), grams: 150.0 });
    }

    #[test]
    fn test_cancel_from_any_state() {
        let states = [
            Idle,
            WaitingWeight,
            WaitingHeight { weight_kg: 1.0 },
            WaitingFoodName,
            food_resolved(banana()),
        ];
        for state in states {
            assert_eq!(cancel(&state).next, Idle);
        }
        assert_eq!(
            cancel(&WaitingFoodName).effect,
            Effect::Reply("Food logging cancelled.".into())
        );
    }

    #[test]
    fn test_idle_free_text_hint() {
        let t = advance(&Idle, "hello");
        assert_eq!(t.next, Idle);
        assert_eq!(t.effect, Effect::Reply(IDLE_HINT.into()));
    }
}
