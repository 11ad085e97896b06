//! Error types for grid construction, event decoding and configuration.

use thiserror::Error;

/// Errors that can occur while building a month or decoding its inputs.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid calendar month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid timestamp '{0}'. Expected YYYY-MM-DD HH:mm:ss")]
    InvalidTimestamp(String),

    #[error("Invalid priority code: {0}")]
    InvalidPriority(u8),

    #[error("Invalid done status code: {0}")]
    InvalidDoneStatus(u8),

    #[error("Event {id} ends before it starts")]
    InvertedSpan { id: i64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calendar layout operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
