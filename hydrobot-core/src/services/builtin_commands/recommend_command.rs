use hydrobot_common::models::{Reply, UserRecord};

pub const DRINK_NOW: &str =
    "🚰 You've had less than half of your daily water. Drink a glass of water right now!";

const BURN_SUGGESTIONS: &[&str] = &[
    "🏃 Workouts to burn calories:",
    "- Running (30 minutes) burns about 300 kcal",
    "- Swimming (45 minutes) burns about 400 kcal",
    "\n🥗 Low-calorie foods:",
    "- Cucumbers (15 kcal/100g)",
    "- Lettuce (12 kcal/100g)",
    "- Tomatoes (20 kcal/100g)",
];

const GAIN_SUGGESTIONS: &[&str] = &[
    "🍎 Foods to add calories:",
    "- Bananas (89 kcal/100g)",
    "- Avocado (160 kcal/100g)",
    "- Nuts (600 kcal/100g)",
];

pub const ON_TRACK: &str = "✅ You're on track today. Keep it up!";

const FAVORITES_SHOWN: usize = 3;

/// Rule-based suggestions. Pure; no state is changed.
pub fn handle_recommend(record: &UserRecord) -> Reply {
    let mut lines: Vec<String> = Vec::new();
    let net = record.progress.net_calories();
    let goal = record.profile.calorie_goal;

    if record.water_progress_percent() < 50.0 {
        lines.push(DRINK_NOW.to_string());
    }

    if net > goal {
        lines.extend(BURN_SUGGESTIONS.iter().map(|s| s.to_string()));
    } else if net < goal * 0.5 {
        lines.extend(GAIN_SUGGESTIONS.iter().map(|s| s.to_string()));
    }

    let favorites = record.progress.favorite_foods(FAVORITES_SHOWN);
    if !favorites.is_empty() {
        lines.push("\n👍 Your favorite foods:".to_string());
        for (food, count) in favorites {
            lines.push(format!("- {food} (logged {count} times)"));
        }
    }

    if lines.is_empty() {
        lines.push(ON_TRACK.to_string());
    }
    Reply::Text(lines.join("\n"))
}
