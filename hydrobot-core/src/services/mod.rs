// File: hydrobot-core/src/services/mod.rs

pub mod builtin_commands;
pub mod command_service;
pub mod conversation;
pub mod conversation_service;
pub mod food_service;
pub mod food_table;
pub mod goals;
pub mod message_service;
pub mod weather_service;

pub use command_service::{BotCommand, CommandContext, CommandService};
pub use conversation_service::ConversationService;
pub use food_service::UsdaFoodService;
pub use message_service::MessageService;
pub use weather_service::OpenWeatherService;
