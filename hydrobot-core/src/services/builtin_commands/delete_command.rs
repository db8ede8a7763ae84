use tracing::info;

use hydrobot_common::models::Reply;
use crate::Error;
use crate::services::command_service::CommandContext;

/// Wipes the user's record and any in-progress flow.
pub async fn handle_delete_data(ctx: &CommandContext<'_>) -> Result<Reply, Error> {
    ctx.sessions.clear(ctx.user_id).await?;
    if ctx.records.delete(ctx.user_id).await? {
        info!("Deleted all data for user_id={}", ctx.user_id);
        Ok(Reply::text("All your data has been deleted. Use /set_profile to start over."))
    } else {
        Ok(Reply::text("There is no data to delete."))
    }
}
