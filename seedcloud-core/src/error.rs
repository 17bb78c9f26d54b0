//! Error types for seedcloud

use thiserror::Error;

/// Main error type for seedcloud operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input was not exactly five ASCII decimal digits
    #[error("invalid seed format: {0:?} (expected exactly 5 digits, e.g. 12345)")]
    InvalidSeedFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A deserialized scene broke a connection invariant
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Unknown layout policy: {0}")]
    UnknownPolicy(String),

    /// Reported by a renderer collaborator while building or drawing a scene
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for seedcloud operations
pub type Result<T> = std::result::Result<T, Error>;
