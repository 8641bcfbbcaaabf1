//! # Error Types
//!
//! This module defines error types used throughout the insignia library.

use thiserror::Error;

/// Main error type for insignia operations
#[derive(Debug, Error)]
pub enum InsigniaError {
    /// Content cannot be represented as a QR symbol (empty, or over capacity)
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Image processing or serialization error
    #[error("Image error: {0}")]
    Image(String),

    /// Server-level errors (bind, accept)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
