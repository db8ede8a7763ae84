use serde::{Deserialize, Serialize};

use crate::models::profile::UserId;

/// One inbound chat message, already stripped of platform specifics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub platform: String,
    pub channel: String,
    pub user_id: UserId,
    pub username: String,
    pub text: String,
}

/// What the bot sends back.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Image {
        caption: String,
        filename: String,
        png: Vec<u8>,
    },
}

impl Reply {
    pub fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(t) => Some(t),
            Reply::Image { .. } => None,
        }
    }
}
