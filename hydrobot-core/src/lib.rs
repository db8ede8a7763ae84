// src/lib.rs

pub mod chart;
pub mod http;
pub mod platforms;
pub mod repositories;
pub mod services;
pub mod utils;

pub use hydrobot_common::error::Error;
pub use http::{DefaultHttpClient, HttpClient, HttpResponse};
