//! Commands that start or stop a multi-step flow. Starting a flow replaces
//! whatever flow was active, so only one runs per user.

use tracing::debug;

use hydrobot_common::models::Reply;
use crate::Error;
use crate::services::command_service::CommandContext;
use crate::services::conversation::{self, Transition};

async fn apply(ctx: &CommandContext<'_>, t: Transition) -> Result<Reply, Error> {
    debug!("user_id={} => {:?}", ctx.user_id, t.next);
    ctx.sessions.set_state(ctx.user_id, t.next).await?;
    Ok(Reply::Text(t.effect.into_text().unwrap_or_default()))
}

pub async fn handle_set_profile(ctx: &CommandContext<'_>) -> Result<Reply, Error> {
    apply(ctx, conversation::start_profile_setup()).await
}

/// Caller has already checked that a profile exists.
pub async fn handle_log_food(ctx: &CommandContext<'_>) -> Result<Reply, Error> {
    apply(ctx, conversation::start_food_logging()).await
}

pub async fn handle_cancel(ctx: &CommandContext<'_>) -> Result<Reply, Error> {
    let state = ctx.sessions.get_state(ctx.user_id).await?;
    apply(ctx, conversation::cancel(&state)).await
}
