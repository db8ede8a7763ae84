// File: hydrobot-common/src/traits/mod.rs
pub mod api;
pub mod repository_traits;
