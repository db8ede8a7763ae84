use async_trait::async_trait;

use crate::error::Error;
use crate::models::{ConversationState, UserRecord};

/// Key-value access to user records, keyed by platform user id.
#[async_trait]
pub trait UserRecordRepository: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>, Error>;

    /// Inserts or replaces the record for `record.profile.user_id`.
    async fn upsert(&self, record: &UserRecord) -> Result<(), Error>;

    /// Returns whether a record existed.
    async fn delete(&self, user_id: &str) -> Result<bool, Error>;
}

/// Per-user conversation state. Users without an entry are `Idle`.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get_state(&self, user_id: &str) -> Result<ConversationState, Error>;
    async fn set_state(&self, user_id: &str, state: ConversationState) -> Result<(), Error>;
    async fn clear(&self, user_id: &str) -> Result<(), Error>;
}
