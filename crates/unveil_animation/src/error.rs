//! Error types for unveil_animation

use thiserror::Error;

/// Errors that can occur when building or validating animations.
#[derive(Error, Debug)]
pub enum AnimationError {
    /// A reveal spec failed validation (bad duration, non-finite values, ...)
    #[error("invalid reveal spec: {0}")]
    InvalidSpec(String),
}

/// Result type for unveil_animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
