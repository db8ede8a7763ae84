// File: hydrobot-core/src/services/builtin_commands/mod.rs
//! Built-in chat commands. Each command lives in its own file; the
//! `CommandService` calls `handle_builtin_command` with the parsed command.

pub mod start_command;
pub mod flow_commands;
pub mod water_command;
pub mod workout_command;
pub mod progress_commands;
pub mod recommend_command;
pub mod delete_command;

use hydrobot_common::models::Reply;
use crate::Error;
use crate::services::command_service::{BotCommand, CommandContext};
use crate::services::builtin_commands::{
    start_command::handle_start,
    flow_commands::{handle_cancel, handle_log_food, handle_set_profile},
    water_command::handle_log_water,
    workout_command::handle_log_workout,
    progress_commands::{handle_check_progress, handle_plot_progress},
    recommend_command::handle_recommend,
    delete_command::handle_delete_data,
};

pub const PROFILE_REQUIRED: &str = "Please set up your profile first with /set_profile";

pub async fn handle_builtin_command(
    cmd: BotCommand,
    ctx: &CommandContext<'_>,
    raw_args: &str,
) -> Result<Reply, Error> {
    let record = if cmd.requires_profile() {
        match ctx.records.get(ctx.user_id).await? {
            Some(r) => Some(r),
            None => return Ok(Reply::text(PROFILE_REQUIRED)),
        }
    } else {
        None
    };

    match (cmd, record) {
        (BotCommand::Start, _) => handle_start(ctx).await,
        (BotCommand::SetProfile, _) => handle_set_profile(ctx).await,
        (BotCommand::Cancel, _) => handle_cancel(ctx).await,
        (BotCommand::DeleteData, _) => handle_delete_data(ctx).await,
        (BotCommand::LogFood, _) => handle_log_food(ctx).await,
        (BotCommand::LogWater, Some(r)) => handle_log_water(ctx, r, raw_args).await,
        (BotCommand::LogWorkout, Some(r)) => handle_log_workout(ctx, r, raw_args).await,
        (BotCommand::CheckProgress, Some(r)) => Ok(handle_check_progress(&r)),
        (BotCommand::PlotProgress, Some(r)) => handle_plot_progress(&r),
        (BotCommand::Recommend, Some(r)) => Ok(handle_recommend(&r)),
        (_, None) => Ok(Reply::text(PROFILE_REQUIRED)),
    }
}
