// File: src/platforms/mod.rs

use async_trait::async_trait;
use hydrobot_common::models::Reply;
use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Error(String),
}

#[async_trait]
pub trait PlatformAuth {
    async fn authenticate(&mut self) -> Result<(), Error>;
    async fn is_authenticated(&self) -> Result<bool, Error>;
}

#[async_trait]
pub trait PlatformIntegration: PlatformAuth + Send + Sync {
    async fn connect(&mut self) -> Result<(), Error>;
    async fn disconnect(&mut self) -> Result<(), Error>;
    async fn send_message(&self, channel: &str, message: &str) -> Result<(), Error>;
    async fn send_image(
        &self,
        channel: &str,
        caption: &str,
        filename: &str,
        png: &[u8],
    ) -> Result<(), Error>;
    async fn get_connection_status(&self) -> Result<ConnectionStatus, Error>;

    async fn send_reply(&self, channel: &str, reply: &Reply) -> Result<(), Error> {
        match reply {
            Reply::Text(text) => self.send_message(channel, text).await,
            Reply::Image { caption, filename, png } => {
                self.send_image(channel, caption, filename, png).await
            }
        }
    }
}

pub mod discord;
