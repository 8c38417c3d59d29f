//! Reveal specs
//!
//! A `RevealSpec` is the declarative description callers hand to the
//! coordinator at registration: the hidden style, the revealed style, timing,
//! easing, and whether leaving the viewport plays the transition back.
//! Validation happens at registration so a broken spec can never silently
//! no-op mid-scroll.

use crate::easing::Easing;
use crate::error::{AnimationError, Result};
use serde::{Deserialize, Serialize};
use unveil_core::{StyleMap, StyleProperty};

/// Declarative description of a reveal transition.
///
/// Immutable once attached to a tracked element.
///
/// # Example
///
/// ```rust
/// use unveil_animation::{Easing, RevealSpec};
///
/// let spec = RevealSpec::fade_up(20.0)
///     .with_duration(600.0)
///     .with_easing(Easing::EaseOut)
///     .reverse_on_exit(true);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealSpec {
    /// Style while hidden (applied at registration).
    pub initial: StyleMap,
    /// Style once revealed.
    pub target: StyleMap,
    /// Transition duration in milliseconds.
    pub duration_ms: f32,
    /// Base delay before the transition starts, in milliseconds.
    pub delay_ms: f32,
    /// Easing curve applied to progress.
    pub easing: Easing,
    /// Play the transition back to `initial` when the element leaves the
    /// viewport. When false, the revealed state is terminal.
    pub reverse_on_exit: bool,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self::fade_up(20.0)
    }
}

impl RevealSpec {
    pub fn new(initial: StyleMap, target: StyleMap) -> Self {
        Self {
            initial,
            target,
            duration_ms: 600.0,
            delay_ms: 0.0,
            easing: Easing::default(),
            reverse_on_exit: false,
        }
    }

    /// Plain opacity fade, 0 to 1.
    pub fn fade() -> Self {
        Self::new(
            StyleMap::new().with(StyleProperty::Opacity, 0.0),
            StyleMap::new().with(StyleProperty::Opacity, 1.0),
        )
    }

    /// Fade in while sliding up from `offset` pixels below.
    pub fn fade_up(offset: f32) -> Self {
        Self::new(
            StyleMap::new()
                .with(StyleProperty::Opacity, 0.0)
                .with(StyleProperty::TranslateY, offset),
            StyleMap::new()
                .with(StyleProperty::Opacity, 1.0)
                .with(StyleProperty::TranslateY, 0.0),
        )
    }

    /// Fade in while sliding down from `offset` pixels above.
    pub fn fade_down(offset: f32) -> Self {
        Self::fade_up(-offset)
    }

    /// Fade in while scaling up from `from_scale`.
    pub fn scale_in(from_scale: f32) -> Self {
        Self::new(
            StyleMap::new()
                .with(StyleProperty::Opacity, 0.0)
                .with(StyleProperty::Scale, from_scale),
            StyleMap::new()
                .with(StyleProperty::Opacity, 1.0)
                .with(StyleProperty::Scale, 1.0),
        )
    }

    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn reverse_on_exit(mut self, enabled: bool) -> Self {
        self.reverse_on_exit = enabled;
        self
    }

    /// Validate numeric domains. Called by the coordinator at registration;
    /// a spec that passes here never fails at play time.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(AnimationError::InvalidSpec(format!(
                "duration must be finite and positive, got {}",
                self.duration_ms
            )));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(AnimationError::InvalidSpec(format!(
                "delay must be finite and non-negative, got {}",
                self.delay_ms
            )));
        }
        if self.initial.is_empty() || self.target.is_empty() {
            return Err(AnimationError::InvalidSpec(
                "initial and target styles must not be empty".into(),
            ));
        }
        if !self.initial.is_finite() || !self.target.is_finite() {
            return Err(AnimationError::InvalidSpec(
                "style values must be finite".into(),
            ));
        }
        if !self.initial.same_properties(&self.target) {
            return Err(AnimationError::InvalidSpec(
                "initial and target must cover the same properties".into(),
            ));
        }
        if !self.easing.is_valid() {
            return Err(AnimationError::InvalidSpec(format!(
                "easing control points must be finite with x in [0, 1], got {:?}",
                self.easing
            )));
        }
        Ok(())
    }
}
