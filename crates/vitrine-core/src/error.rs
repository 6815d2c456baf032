//! Error types for vitrine.

use thiserror::Error;

/// The main error type for vitrine operations.
#[derive(Error, Debug)]
pub enum VitrineError {
    /// The room configuration is unusable.
    #[error("invalid room configuration: {0}")]
    InvalidConfig(String),

    /// An image reported a size that cannot be displayed.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Failed to decode an image.
    #[error("failed to decode image '{source_id}': {message}")]
    ImageDecode { source_id: String, message: String },

    /// An asset could not be located.
    #[error("asset '{0}' not found")]
    AssetNotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for vitrine operations.
pub type Result<T> = std::result::Result<T, VitrineError>;
