//! Daily targets derived from a profile. Pure functions, no I/O.

/// ml of water per kg of body weight
const WATER_PER_KG: f64 = 30.0;
/// extra ml for each complete 30-minute block of activity
const WATER_PER_ACTIVITY_BLOCK: f64 = 500.0;
/// extra ml when it is hot outside
const WATER_HEAT_BONUS: f64 = 500.0;
const HEAT_THRESHOLD_C: f64 = 25.0;

/// extra kcal per 30 minutes of activity, counted proportionally
const CALORIES_PER_ACTIVITY_BLOCK: f64 = 100.0;

const ACTIVITY_BLOCK_MINUTES: u32 = 30;

/// Daily water target in ml. Only complete 30-minute activity blocks
/// count. Not rounded.
pub fn water_norm(weight_kg: f64, activity_minutes: u32, temperature_c: f64) -> f64 {
    let base = weight_kg * WATER_PER_KG;
    let activity = f64::from(activity_minutes / ACTIVITY_BLOCK_MINUTES) * WATER_PER_ACTIVITY_BLOCK;
    let heat = if temperature_c > HEAT_THRESHOLD_C { WATER_HEAT_BONUS } else { 0.0 };
    base + activity + heat
}

/// Daily calorie target in kcal: 10·w + 6.25·h − 5·age, the same for
/// everyone, plus activity/30 × 100 (partial blocks count).
pub fn calorie_norm(weight_kg: f64, height_cm: f64, age: u32, activity_minutes: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let activity = f64::from(activity_minutes) / f64::from(ACTIVITY_BLOCK_MINUTES) * CALORIES_PER_ACTIVITY_BLOCK;
    base + activity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_base() {
        assert_eq!(water_norm(70.0, 0, 20.0), 2100.0);
    }

    #[test]
    fn test_water_counts_complete_blocks_only() {
        assert_eq!(water_norm(70.0, 29, 20.0), 2100.0);
        assert_eq!(water_norm(70.0, 45, 20.0), 2600.0);
        assert_eq!(water_norm(70.0, 60, 20.0), 3100.0);
    }

    #[test]
    fn test_water_heat_bonus_above_threshold() {
        assert_eq!(water_norm(70.0, 0, 30.0), 2600.0);
        // exactly 25 is not "hot"
        assert_eq!(water_norm(70.0, 0, 25.0), 2100.0);
    }

    #[test]
    fn test_calorie_base() {
        let expected = 10.0 * 70.0 + 6.25 * 175.0 - 5.0 * 30.0;
        assert_eq!(calorie_norm(70.0, 175.0, 30, 0), expected);
    }

    #[test]
    fn test_calorie_activity_is_proportional() {
        let base = calorie_norm(70.0, 175.0, 30, 0);
        assert_eq!(calorie_norm(70.0, 175.0, 30, 15), base + 50.0);
        assert_eq!(calorie_norm(70.0, 175.0, 30, 45), base + 150.0);
    }
}
