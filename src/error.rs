// src/error.rs

//! Unified error handling for the feed application.

use std::fmt;

use thiserror::Error;

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fetching a single creature failed
    #[error("Fetch error for creature {id}: {message}")]
    Fetch { id: u32, message: String },

    /// A persisted favorites entry could not be parsed
    #[error("Corrupt favorites entry '{entry}': {message}")]
    CorruptFavorites { entry: String, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a fetch error with the requested id as context.
    pub fn fetch(id: u32, message: impl fmt::Display) -> Self {
        Self::Fetch {
            id,
            message: message.to_string(),
        }
    }

    /// Create a corrupt-favorites error for a stored entry.
    pub fn corrupt_favorites(entry: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::CorruptFavorites {
            entry: entry.into(),
            message: message.to_string(),
        }
    }
}
