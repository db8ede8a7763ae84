use hydrobot_common::models::Reply;
use crate::Error;
use crate::services::command_service::CommandContext;

const COMMAND_LIST: &str = "Hi! I'll help you keep track of water and calories.\n\n\
⚙️ Commands:\n\
/set_profile - Set up your profile\n\
/log_water <ml> - Log water you drank\n\
/log_food - Log food you ate\n\
/log_workout <type> <minutes> - Log a workout\n\
/check_progress - Check today's progress\n\
/plot_progress - Show progress charts\n\
/get_recommendations - Food and workout suggestions\n\
/delete_data - Delete all your data\n\
/cancel - Cancel the current input";

pub async fn handle_start(ctx: &CommandContext<'_>) -> Result<Reply, Error> {
    let status = match ctx.records.get(ctx.user_id).await? {
        Some(record) => format!(
            "Your profile is set up: water goal {:.0} ml, calorie goal {:.0} kcal.",
            record.profile.water_goal, record.profile.calorie_goal
        ),
        None => "Your profile is not set up yet. Please set it up with /set_profile.".to_string(),
    };
    Ok(Reply::Text(format!("{COMMAND_LIST}\n\n{status}")))
}
