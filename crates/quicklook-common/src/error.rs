//! Error types for quicklook display operations.

use thiserror::Error;

/// Result type alias using DisplayError.
pub type DisplayResult<T> = Result<T, DisplayError>;

/// Primary error type for display operations.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Bad input: zero lengths, empty arrays, wrong dimensionality,
    /// unsupported channel counts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The render target failed (pixmap allocation, PNG compression).
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl DisplayError {
    /// Shorthand for an [`DisplayError::InvalidArgument`] with a formatted message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        DisplayError::InvalidArgument(msg.into())
    }
}

impl From<std::io::Error> for DisplayError {
    fn from(err: std::io::Error) -> Self {
        DisplayError::Render(err.to_string())
    }
}
