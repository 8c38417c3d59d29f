//! Error types for unveil_reveal

use thiserror::Error;
use unveil_animation::AnimationError;

/// Errors that can occur during reveal registration.
///
/// Both variants fire at registration time; once a group is registered,
/// scroll-time conditions (rapid toggling, overlapping triggers, detached
/// nodes) are absorbed by the supersession and no-op rules instead of
/// surfacing as errors.
#[derive(Error, Debug)]
pub enum RevealError {
    /// A registration target is missing or detached from the surface.
    #[error("invalid registration target: element is not attached to the surface")]
    InvalidTarget,

    /// The reveal spec or threshold failed validation.
    #[error("invalid reveal spec: {0}")]
    InvalidSpec(String),
}

impl From<AnimationError> for RevealError {
    fn from(err: AnimationError) -> Self {
        match err {
            AnimationError::InvalidSpec(msg) => RevealError::InvalidSpec(msg),
        }
    }
}

/// Result type for unveil_reveal operations
pub type Result<T> = std::result::Result<T, RevealError>;
