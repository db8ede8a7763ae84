use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use hydrobot_common::models::Reply;
use crate::Error;
use crate::repositories::{SessionRepository, UserRecordRepository};
use crate::services::builtin_commands::handle_builtin_command;

/// Context passed to built-in command handlers.
pub struct CommandContext<'a> {
    pub user_id: &'a str,
    /// Day that water/calorie history entries are booked under.
    pub today: NaiveDate,
    pub records: &'a Arc<dyn UserRecordRepository>,
    pub sessions: &'a Arc<dyn SessionRepository>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    SetProfile,
    Cancel,
    LogWater,
    LogFood,
    LogWorkout,
    CheckProgress,
    PlotProgress,
    Recommend,
    DeleteData,
}

impl BotCommand {
    /// Name without the leading slash, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let cmd = match name.to_lowercase().as_str() {
            "start" | "help" => BotCommand::Start,
            "set_profile" => BotCommand::SetProfile,
            "cancel" => BotCommand::Cancel,
            "log_water" => BotCommand::LogWater,
            "log_food" => BotCommand::LogFood,
            "log_workout" => BotCommand::LogWorkout,
            "check_progress" => BotCommand::CheckProgress,
            "plot_progress" => BotCommand::PlotProgress,
            "get_recommendations" | "recommend" => BotCommand::Recommend,
            "delete_data" => BotCommand::DeleteData,
            _ => return None,
        };
        Some(cmd)
    }

    pub fn requires_profile(self) -> bool {
        !matches!(
            self,
            BotCommand::Start | BotCommand::SetProfile | BotCommand::Cancel | BotCommand::DeleteData
        )
    }
}

pub struct CommandService {
    records: Arc<dyn UserRecordRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl CommandService {
    pub fn new(
        records: Arc<dyn UserRecordRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        debug!("Initializing CommandService");
        Self { records, sessions }
    }

    /// Handles a chat line if it is a `/command`. Returns `None` for
    /// anything else so the caller can feed it to the conversation.
    pub async fn handle_chat_line(
        &self,
        user_id: &str,
        message_text: &str,
        today: NaiveDate,
    ) -> Result<Option<Reply>, Error> {
        let text = message_text.trim();
        if !text.starts_with('/') {
            return Ok(None);
        }

        // 1) Parse command and arguments
        let (cmd_part, args) = match text.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (text, ""),
        };
        let cmd_name = cmd_part.trim_start_matches('/');
        debug!("Parsed command: '{}', args: '{}'", cmd_name, args);

        // 2) Look up built-in command
        let cmd = match BotCommand::from_name(cmd_name) {
            Some(c) => c,
            None => {
                debug!("No command found matching '{}'", cmd_name);
                return Ok(Some(Reply::Text(format!(
                    "Unknown command /{cmd_name}. Send /start to see what I can do."
                ))));
            }
        };

        // 3) Build context and run
        let ctx = CommandContext {
            user_id,
            today,
            records: &self.records,
            sessions: &self.sessions,
        };
        let reply = handle_builtin_command(cmd, &ctx, args).await?;
        Ok(Some(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(BotCommand::from_name("LOG_WATER"), Some(BotCommand::LogWater));
        assert_eq!(BotCommand::from_name("recommend"), Some(BotCommand::Recommend));
        assert_eq!(BotCommand::from_name("get_recommendations"), Some(BotCommand::Recommend));
        assert_eq!(BotCommand::from_name("dance"), None);
    }

    #[test]
    fn test_profile_requirement() {
        assert!(!BotCommand::Start.requires_profile());
        assert!(!BotCommand::Cancel.requires_profile());
        assert!(BotCommand::LogFood.requires_profile());
        assert!(BotCommand::PlotProgress.requires_profile());
    }
}
