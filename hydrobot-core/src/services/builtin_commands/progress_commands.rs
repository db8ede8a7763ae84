use hydrobot_common::models::{Reply, UserRecord};
use crate::Error;
use crate::chart::render_progress_chart;

pub const NO_DATA: &str = "No data to plot yet. Log some water or food first!";

pub fn handle_check_progress(record: &UserRecord) -> Reply {
    let profile = &record.profile;
    let progress = &record.progress;
    Reply::Text(format!(
        "📊 Progress:\n\n\
         Water:\n\
         - Drank: {:.0} ml of {:.0} ml\n\
         - Left: {:.0} ml\n\n\
         Calories:\n\
         - Consumed: {:.0} kcal of {:.0} kcal\n\
         - Burned: {:.0} kcal\n\
         - Net: {:.0} kcal\n\
         - Left to goal: {:.0} kcal",
        progress.logged_water,
        profile.water_goal,
        record.water_remaining(),
        progress.logged_calories,
        profile.calorie_goal,
        progress.burned_calories,
        progress.net_calories(),
        record.calories_remaining(),
    ))
}

pub fn handle_plot_progress(record: &UserRecord) -> Result<Reply, Error> {
    if !record.progress.has_history() {
        return Ok(Reply::text(NO_DATA));
    }
    let png = render_progress_chart(record)?;
    Ok(Reply::Image {
        caption: "Water (top) and calories (bottom) per day. The dashed red line is your goal.".into(),
        filename: "progress.png".into(),
        png,
    })
}
