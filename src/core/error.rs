//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all layers, providing consistent error handling across the application.
//! Per-request validation failures never reach this type - they are rendered
//! as error text inside the tool's normal result (see
//! `domains::tools::ValidationError`).

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// A tool argument failed validation.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ValidationError),

    /// Dice notation that could not be parsed.
    #[error("Notation error: {0}")]
    Notation(#[from] crate::domains::dice::NotationError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from transport communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
