//! Error Types
//!
//! Storage and startup errors. None of these cross the Model's API:
//! load failures fall back to an empty list and write failures are logged.

use thiserror::Error;

/// Errors from the key-value persistence surface
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while starting the app
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No browser window or document available")]
    NoDocument,

    #[error("Root element not found: {0}")]
    RootNotFound(String),
}
