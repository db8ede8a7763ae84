// File: hydrobot-common/src/models/mod.rs
pub mod profile;
pub mod progress;
pub mod food;
pub mod workout;
pub mod lookup;
pub mod message;
pub mod session;

pub use profile::{ProfileDraft, UserId, UserProfile};
pub use progress::{ProgressRecord, UserRecord};
pub use food::FoodRecord;
pub use workout::WorkoutEntry;
pub use lookup::Lookup;
pub use message::{IncomingMessage, Reply};
pub use session::ConversationState;
