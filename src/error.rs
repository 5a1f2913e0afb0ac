//! Operational errors of the command-line front end.
//!
//! Bad form input is never an error here; see [`crate::validate::FieldError`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid reference date '{value}': expected YYYY-MM-DD")]
    InvalidToday { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}

impl AppError {
    pub fn invalid_today(value: impl Into<String>) -> Self {
        Self::InvalidToday {
            value: value.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
