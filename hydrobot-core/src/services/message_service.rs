use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use hydrobot_common::models::{IncomingMessage, Reply};
use crate::Error;
use crate::services::command_service::CommandService;
use crate::services::conversation_service::ConversationService;
use crate::utils::time;

/// Entry point for every inbound chat message: logs it, then routes
/// `/commands` to the CommandService and everything else to the
/// ConversationService.
pub struct MessageService {
    command_service: Arc<CommandService>,
    conversation_service: Arc<ConversationService>,
}

impl MessageService {
    pub fn new(
        command_service: Arc<CommandService>,
        conversation_service: Arc<ConversationService>,
    ) -> Self {
        debug!("MessageService::new() called");
        Self {
            command_service,
            conversation_service,
        }
    }

    pub async fn process_incoming_message(&self, msg: &IncomingMessage) -> Result<Vec<Reply>, Error> {
        self.process_incoming_message_on(msg, time::today()).await
    }

    /// Same as `process_incoming_message`, with history booked under `today`.
    pub async fn process_incoming_message_on(
        &self,
        msg: &IncomingMessage,
        today: NaiveDate,
    ) -> Result<Vec<Reply>, Error> {
        info!(
            "Message: user {} ({}) on {}#{} sent: {}",
            msg.user_id, msg.username, msg.platform, msg.channel, msg.text
        );

        if let Some(reply) = self
            .command_service
            .handle_chat_line(&msg.user_id, &msg.text, today)
            .await?
        {
            return Ok(vec![reply]);
        }

        let reply = self
            .conversation_service
            .handle_free_text(&msg.user_id, &msg.text, today)
            .await?;
        Ok(vec![reply])
    }
}
