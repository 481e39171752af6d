//! Unified error type for macro-news-bot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Calendar acquisition error: {0}")]
    Calendar(String),
}
