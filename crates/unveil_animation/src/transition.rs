//! Style transitions
//!
//! A `Transition` tweens one style map toward another over a fixed duration
//! after an optional delay. It always starts from the style the element
//! currently shows, so superseding an in-flight transition never snaps, and
//! on natural completion its value is the endpoint map exactly, not a
//! floating-point neighbour of it.

use crate::easing::Easing;
use crate::interpolate::Interpolate;
use crate::spec::RevealSpec;
use serde::{Deserialize, Serialize};
use unveil_core::StyleMap;

/// Which way a reveal transition runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Current style toward `spec.target`.
    Forward,
    /// Current style back toward `spec.initial`.
    Reverse,
}

/// An in-flight tween between two style maps.
#[derive(Clone, Debug)]
pub struct Transition {
    from: StyleMap,
    to: StyleMap,
    duration_ms: f32,
    delay_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
    playing: bool,
}

impl Transition {
    /// Tween from `from` to `to`. Does not play until `start` is called.
    pub fn new(from: StyleMap, to: StyleMap, duration_ms: f32, delay_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms,
            easing,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Build the transition a `RevealSpec` prescribes for `direction`,
    /// starting from the element's current style.
    ///
    /// `delay_ms` is the effective delay (base delay plus stagger offset);
    /// the caller computes it because stagger is a group concern.
    pub fn reveal(spec: &RevealSpec, current: StyleMap, direction: Direction, delay_ms: f32) -> Self {
        let to = match direction {
            Direction::Forward => spec.target.clone(),
            Direction::Reverse => spec.initial.clone(),
        };
        Self::new(current, to, spec.duration_ms, delay_ms, spec.easing)
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Finished means the tween ran its full duration; a stopped transition
    /// is not finished.
    pub fn is_finished(&self) -> bool {
        !self.playing && self.elapsed_ms >= self.delay_ms + self.duration_ms
    }

    /// True once the delay has elapsed and the tween is moving.
    pub fn has_started(&self) -> bool {
        self.elapsed_ms > self.delay_ms
    }

    /// Eased progress in `[0, 1]`; 0 during the delay.
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = ((self.elapsed_ms - self.delay_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.easing.apply(t)
    }

    /// Current interpolated style.
    ///
    /// Returns `from` during the delay and `to` exactly (no interpolation
    /// residue) once the duration has fully elapsed.
    pub fn value(&self) -> StyleMap {
        if self.elapsed_ms <= self.delay_ms {
            return self.from.clone();
        }
        if self.elapsed_ms >= self.delay_ms + self.duration_ms {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.progress())
    }

    /// The endpoint this transition is heading to.
    pub fn endpoint(&self) -> &StyleMap {
        &self.to
    }

    /// Advance by `dt_ms`. Returns true while still playing.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.delay_ms + self.duration_ms {
            self.elapsed_ms = self.delay_ms + self.duration_ms;
            self.playing = false;
        }
        self.playing
    }
}
