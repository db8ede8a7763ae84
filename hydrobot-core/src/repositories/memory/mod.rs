//! DashMap-backed stores. Everything here is lost on restart.

pub mod session;
pub mod user_record;

pub use session::InMemorySessionRepository;
pub use user_record::InMemoryUserRecordRepository;
