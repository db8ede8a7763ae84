use tracing::info;

use hydrobot_common::models::{Reply, UserRecord};
use crate::Error;
use crate::services::command_service::CommandContext;

pub const WATER_USAGE: &str = "Usage: /log_water <amount_in_ml>";

pub async fn handle_log_water(
    ctx: &CommandContext<'_>,
    mut record: UserRecord,
    raw_args: &str,
) -> Result<Reply, Error> {
    let amount: u32 = match raw_args.split_whitespace().next().and_then(|a| a.parse().ok()) {
        Some(a) => a,
        None => return Ok(Reply::text(WATER_USAGE)),
    };

    record.progress.add_water(f64::from(amount), ctx.today);
    ctx.records.upsert(&record).await?;
    info!(
        "user_id={} logged {} ml water (total {})",
        ctx.user_id, amount, record.progress.logged_water
    );

    Ok(Reply::Text(format!(
        "Logged: {} ml of water\nLeft to drink: {:.0} ml",
        amount,
        record.water_remaining()
    )))
}
