// ================================================================
// File: hydrobot-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_kind() {
        assert_eq!(
            Error::Config("BOT_TOKEN is not set".into()).to_string(),
            "Configuration error: BOT_TOKEN is not set"
        );
        assert_eq!(Error::Render("bad".into()).to_string(), "Render error: bad");
    }
}
