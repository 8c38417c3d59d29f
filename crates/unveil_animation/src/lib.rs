//! Unveil Animation System
//!
//! Timed style transitions for the reveal coordinator.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible timing functions including custom cubic
//!   beziers
//! - **Interpolation**: per-property linear interpolation over style maps
//! - **Reveal Specs**: declarative initial/target transitions with
//!   registration-time validation
//! - **Transitions**: interruptible tweens that land exactly on their
//!   endpoint
//! - **Scheduler**: slotmap-keyed registry that advances every in-flight
//!   transition per tick
//!
//! Everything is single-threaded and tick-driven: `TransitionScheduler::tick`
//! is expected to be called from the host's frame loop.

pub mod easing;
pub mod error;
pub mod interpolate;
pub mod spec;
pub mod transition;

mod scheduler;

pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use interpolate::Interpolate;
pub use spec::RevealSpec;
pub use transition::{Direction, Transition};

pub use scheduler::{SchedulerHandle, TransitionId, TransitionScheduler};
