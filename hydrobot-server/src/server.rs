//! hydrobot-server/src/server.rs
//!
//! Connects to Discord and dispatches each inbound message on its own task.

use std::sync::Arc;

use tracing::{error, info, warn};

use hydrobot_common::models::IncomingMessage;
use hydrobot_core::Error;
use hydrobot_core::platforms::PlatformIntegration;
use hydrobot_core::platforms::discord::DiscordPlatform;
use hydrobot_core::services::MessageService;

use crate::config::BotConfig;
use crate::context::ServerContext;

pub async fn run_server(config: BotConfig) -> Result<(), Error> {
    let ctx = ServerContext::new(&config);

    let mut platform = DiscordPlatform::new(config.bot_token.clone());
    platform.connect().await?;
    let platform = Arc::new(platform);
    info!("HydroBot is running. Press Ctrl-C to stop.");

    tokio::select! {
        _ = dispatch_loop(platform.clone(), ctx.message_service.clone()) => {
            warn!("Message stream ended.");
        }
        res = tokio::signal::ctrl_c() => {
            if let Err(e) = res {
                error!("Failed to listen for Ctrl-C: {e}");
            }
            info!("Ctrl-C received, shutting down.");
        }
    }

    platform.shutdown().await;

    info!("HydroBot stopped.");
    Ok(())
}

async fn dispatch_loop(platform: Arc<DiscordPlatform>, message_service: Arc<MessageService>) {
    while let Some(msg) = platform.next_message_event().await {
        let platform = platform.clone();
        let message_service = message_service.clone();
        tokio::spawn(async move {
            handle_message(platform.as_ref(), &message_service, msg).await;
        });
    }
}

/// Processes one message and delivers every reply to the channel it came
/// from. Failures are logged, never propagated.
pub async fn handle_message(
    platform: &dyn PlatformIntegration,
    message_service: &MessageService,
    msg: IncomingMessage,
) {
    let replies = match message_service.process_incoming_message(&msg).await {
        Ok(replies) => replies,
        Err(e) => {
            error!("process_incoming_message failed for user {}: {:?}", msg.user_id, e);
            return;
        }
    };

    for reply in &replies {
        if let Err(e) = platform.send_reply(&msg.channel, reply).await {
            error!("Failed to send reply to channel {}: {:?}", msg.channel, e);
        }
    }
}
