// File: hydrobot-core/src/repositories/mod.rs

pub mod memory;

pub use hydrobot_common::traits::repository_traits::{SessionRepository, UserRecordRepository};
pub use memory::{InMemorySessionRepository, InMemoryUserRecordRepository};
