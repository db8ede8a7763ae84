use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace, warn};

use twilight_gateway::{
    self as gateway,
    CloseFrame,
    Config,
    Event,
    EventTypeFlags,
    Intents,
    Shard,
    MessageSender,
    StreamExt,
};
use twilight_http::Client as HttpClient;
use twilight_http::client::ClientBuilder;
use twilight_model::http::attachment::Attachment;
use twilight_model::id::marker::ChannelMarker;
use twilight_model::id::Id;

use hydrobot_common::models::IncomingMessage;
use crate::Error;
use crate::platforms::{ConnectionStatus, PlatformAuth, PlatformIntegration};

pub const PLATFORM_NAME: &str = "discord";

/// Reads gateway events from one shard and forwards user-authored
/// messages to `tx`.
async fn shard_runner(mut shard: Shard, tx: UnboundedSender<IncomingMessage>) {
    let shard_id = shard.id().number();
    info!("(ShardRunner) Shard {shard_id} started. Listening for events.");

    let wanted = EventTypeFlags::READY | EventTypeFlags::MESSAGE_CREATE;
    while let Some(item) = shard.next_event(wanted).await {
        match item {
            Ok(Event::Ready(ready)) => {
                info!("Shard {shard_id} => READY as {} (ID={})", ready.user.name, ready.user.id);
            }
            Ok(Event::MessageCreate(msg)) => {
                if msg.author.bot {
                    debug!("Ignoring bot message from {}", msg.author.name);
                    continue;
                }
                let incoming = IncomingMessage {
                    platform: PLATFORM_NAME.to_string(),
                    channel: msg.channel_id.to_string(),
                    user_id: msg.author.id.to_string(),
                    username: msg.author.name.clone(),
                    text: msg.content.clone(),
                };
                if tx.send(incoming).is_err() {
                    warn!("Shard {shard_id} => receiver dropped, stopping.");
                    break;
                }
            }
            Ok(other) => {
                trace!("Shard {shard_id} => unhandled event: {:?}", other.kind());
            }
            Err(err) => {
                error!("Shard {shard_id} => error receiving event: {err:?}");
            }
        }
    }

    warn!("(ShardRunner) Shard {shard_id} event loop ended.");
}

fn parse_channel_id(channel: &str) -> Result<Id<ChannelMarker>, Error> {
    channel
        .parse::<u64>()
        .ok()
        .and_then(Id::new_checked)
        .ok_or_else(|| Error::Platform(format!("Invalid channel ID: {channel}")))
}

pub struct DiscordPlatform {
    pub token: String,
    pub connection_status: StdMutex<ConnectionStatus>,

    /// Filled in by `connect`; None before that and after `disconnect`.
    pub rx: Mutex<Option<UnboundedReceiver<IncomingMessage>>>,

    pub shard_tasks: Vec<JoinHandle<()>>,
    pub shard_senders: Vec<MessageSender>,

    pub http: Option<Arc<HttpClient>>,
}

impl DiscordPlatform {
    pub fn new(token: String) -> Self {
        Self {
            token,
            connection_status: StdMutex::new(ConnectionStatus::Disconnected),
            rx: Mutex::new(None),
            shard_tasks: Vec::new(),
            shard_senders: Vec::new(),
            http: None,
        }
    }

    /// Waits for the next inbound message. Returns None once all shards
    /// have stopped or if we never connected.
    pub async fn next_message_event(&self) -> Option<IncomingMessage> {
        let mut guard = self.rx.lock().await;
        match guard.as_mut() {
            Some(r) => r.recv().await,
            None => None,
        }
    }

    /// Asks every shard to close and drops the inbound channel. Works
    /// through a shared reference, so in-flight handlers holding the
    /// platform do not block it.
    pub async fn shutdown(&self) {
        self.set_status(ConnectionStatus::Disconnected);
        for sender in &self.shard_senders {
            let _ = sender.close(CloseFrame::NORMAL);
        }
        *self.rx.lock().await = None;
        info!("(DiscordPlatform) Shut down {} shard(s)", self.shard_senders.len());
    }

    fn status(&self) -> ConnectionStatus {
        self.connection_status
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_status(&self, status: ConnectionStatus) {
        *self.connection_status
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = status;
    }

    fn http(&self) -> Result<&Arc<HttpClient>, Error> {
        self.http
            .as_ref()
            .ok_or_else(|| Error::Platform("Discord platform is not connected".into()))
    }
}

#[async_trait]
impl PlatformAuth for DiscordPlatform {
    async fn authenticate(&mut self) -> Result<(), Error> {
        if self.token.trim().is_empty() {
            return Err(Error::Platform("Discord token is empty".into()));
        }
        Ok(())
    }

    async fn is_authenticated(&self) -> Result<bool, Error> {
        Ok(!self.token.trim().is_empty())
    }
}

/// Connect, create the unbounded channel, store it in `rx`, and spawn the shard runners
#[async_trait]
impl PlatformIntegration for DiscordPlatform {
    async fn connect(&mut self) -> Result<(), Error> {
        if matches!(self.status(), ConnectionStatus::Connected) {
            info!("(DiscordPlatform) Already connected => skipping");
            return Ok(());
        }
        self.authenticate().await?;

        let (tx, rx) = unbounded_channel::<IncomingMessage>();
        {
            let mut guard = self.rx.lock().await;
            *guard = Some(rx);
        }

        let http_client = Arc::new(
            ClientBuilder::new()
                .token(self.token.clone())
                .timeout(Duration::from_secs(30))
                .build()
        );
        self.http = Some(http_client.clone());

        let config = Config::new(
            self.token.clone(),
            Intents::GUILD_MESSAGES | Intents::DIRECT_MESSAGES | Intents::MESSAGE_CONTENT,
        );

        let shards = gateway::create_recommended(&http_client, config, |_, b| b.build())
            .await
            .map_err(|e| {
                self.set_status(ConnectionStatus::Error(e.to_string()));
                Error::Platform(format!("create_recommended error: {e}"))
            })?;

        for shard in shards {
            self.shard_senders.push(shard.sender());
            let tx_for_shard = tx.clone();
            let handle = tokio::spawn(async move {
                shard_runner(shard, tx_for_shard).await;
            });
            self.shard_tasks.push(handle);
        }

        info!("(DiscordPlatform) Connected with {} shard(s)", self.shard_tasks.len());
        self.set_status(ConnectionStatus::Connected);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), Error> {
        self.shutdown().await;
        for task in &mut self.shard_tasks {
            let _ = task.await;
        }
        self.shard_senders.clear();
        self.shard_tasks.clear();
        Ok(())
    }

    async fn send_message(&self, channel: &str, message: &str) -> Result<(), Error> {
        let channel_id = parse_channel_id(channel)?;
        self.http()?
            .create_message(channel_id)
            .content(message)
            .await
            .map_err(|e| Error::Platform(format!("Error sending Discord message: {e:?}")))?;
        Ok(())
    }

    async fn send_image(
        &self,
        channel: &str,
        caption: &str,
        filename: &str,
        png: &[u8],
    ) -> Result<(), Error> {
        let channel_id = parse_channel_id(channel)?;
        let attachments = [Attachment::from_bytes(filename.to_string(), png.to_vec(), 1)];
        self.http()?
            .create_message(channel_id)
            .content(caption)
            .attachments(&attachments)
            .await
            .map_err(|e| Error::Platform(format!("Error sending Discord image: {e:?}")))?;
        Ok(())
    }

    async fn get_connection_status(&self) -> Result<ConnectionStatus, Error> {
        Ok(self.status())
    }
}
