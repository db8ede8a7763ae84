// File: hydrobot-common/src/lib.rs
pub mod error;
pub mod models;
pub mod traits;
