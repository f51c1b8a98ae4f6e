//! Error types for rs-inner-text.
//!
//! Text collection itself never fails; these errors come from the edges of
//! the crate (parsing configuration values, reading input).

/// Error type for the fallible entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `white-space` keyword that is not one of `normal`, `pre`, `nowrap`, `pre-wrap`.
    #[error("Invalid white-space value: {0:?}")]
    InvalidWhitespace(String),

    /// hast JSON input could not be deserialized.
    #[error("Invalid hast JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
