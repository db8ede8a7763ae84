use async_trait::async_trait;
use dashmap::DashMap;

use hydrobot_common::models::ConversationState;
use hydrobot_common::traits::repository_traits::SessionRepository;
use crate::Error;

/// Only non-idle sessions are kept; setting `Idle` drops the entry.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: DashMap<String, ConversationState>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get_state(&self, user_id: &str) -> Result<ConversationState, Error> {
        Ok(self
            .sessions
            .get(user_id)
            .map(|s| s.value().clone())
            .unwrap_or_default())
    }

    async fn set_state(&self, user_id: &str, state: ConversationState) -> Result<(), Error> {
        if state.is_idle() {
            self.sessions.remove(user_id);
        } else {
            self.sessions.insert(user_id.to_string(), state);
        }
        Ok(())
    }

    async fn clear(&self, user_id: &str) -> Result<(), Error> {
        self.sessions.remove(user_id);
        Ok(())
    }
}
