use tracing::info;

use hydrobot_common::models::{Reply, UserRecord, WorkoutEntry};
use crate::Error;
use crate::services::command_service::CommandContext;
use crate::services::food_service::capitalize;

pub const WORKOUT_USAGE: &str = "Usage: /log_workout <workout_type> <minutes>\nFor example: /log_workout running 30";

/// kcal burned per minute, keyed by lower-cased workout names.
const BURN_RATES: &[(&[&str], f64)] = &[
    (&["running", "run", "бег"], 10.0),
    (&["walking", "walk", "ходьба"], 5.0),
    (&["cycling", "bike", "велосипед"], 7.0),
    (&["swimming", "swim", "плавание"], 8.0),
    (&["yoga", "йога"], 3.0),
];
const DEFAULT_BURN_RATE: f64 = 5.0;

/// Extra water per complete 30 minutes of exercise.
const WATER_PER_HALF_HOUR_ML: u32 = 200;

pub fn calories_per_minute(kind: &str) -> f64 {
    let kind = kind.to_lowercase();
    BURN_RATES
        .iter()
        .find(|(names, _)| names.contains(&kind.as_str()))
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_BURN_RATE)
}

pub fn extra_water_ml(duration_minutes: u32) -> u32 {
    (duration_minutes / 30) * WATER_PER_HALF_HOUR_ML
}

pub async fn handle_log_workout(
    ctx: &CommandContext<'_>,
    mut record: UserRecord,
    raw_args: &str,
) -> Result<Reply, Error> {
    let mut parts = raw_args.split_whitespace();
    let (kind, duration) = match (parts.next(), parts.next().and_then(|d| d.parse::<u32>().ok())) {
        (Some(k), Some(d)) => (k, d),
        _ => return Ok(Reply::text(WORKOUT_USAGE)),
    };

    let burned = calories_per_minute(kind) * f64::from(duration);
    let water = extra_water_ml(duration);
    record.progress.add_workout(WorkoutEntry {
        kind: kind.to_string(),
        duration_minutes: duration,
        calories_burned: burned,
        extra_water_ml: water,
        logged_on: ctx.today,
    });
    ctx.records.upsert(&record).await?;
    info!("user_id={} logged workout '{}' {} min => {} kcal", ctx.user_id, kind, duration, burned);

    Ok(Reply::Text(format!(
        "🏃 {} {} min\nCalories burned: {}\nDrink an extra {} ml of water",
        capitalize(kind),
        duration,
        burned,
        water
    )))
}
