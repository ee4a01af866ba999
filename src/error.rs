//! Error types for the splitter

use thiserror::Error;

/// Result type for splitter operations
pub type Result<T> = std::result::Result<T, SplitterError>;

/// Errors surfaced by the setup and configuration paths.
///
/// Event handling never returns errors: once the engine is running, every
/// transport failure degrades to the `"ERROR"` reply sentinel and is absorbed
/// by the state machine.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The timer server could not be reached
    #[error("timer server connection failed: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration or catalog file did not deserialize
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
