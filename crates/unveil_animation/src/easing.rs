//! Easing functions
//!
//! CSS-compatible timing functions mapping linear progress in `[0, 1]` to
//! eased progress. The named variants mirror the CSS keywords; `CubicBezier`
//! takes the same control points as `cubic-bezier()`.

use serde::{Deserialize, Serialize};

/// An easing curve applied to transition progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// No easing.
    Linear,
    /// CSS `ease-in` - slow start, accelerating.
    EaseIn,
    /// CSS `ease-out` - fast start, decelerating.
    EaseOut,
    /// CSS `ease-in-out` - slow at both ends.
    EaseInOut,
    /// Custom curve; x control points must be in `[0, 1]`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Self::EaseOut
    }
}

impl Easing {
    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }

    /// Custom cubic bezier curve.
    ///
    /// # Panics
    ///
    /// Panics if `x1` or `x2` lie outside `[0, 1]`.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Whether the curve is solvable: custom control points must be finite
    /// with x values in `[0, 1]`, the same range `cubic_bezier` asserts.
    /// `CubicBezier` fields are public, so a literal can carry values the
    /// constructor would reject.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Linear | Self::EaseIn | Self::EaseOut | Self::EaseInOut => true,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                y1.is_finite()
                    && y2.is_finite()
                    && (0.0..=1.0).contains(x1)
                    && (0.0..=1.0).contains(x2)
            }
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }
    let t = solve_bezier_x(x1, x2, progress);
    bezier_axis(y1, y2, t)
}

/// Newton-Raphson solve for the curve parameter whose x equals `target_x`.
fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    let mut t = target_x;
    for _ in 0..8 {
        let x = bezier_axis(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            break;
        }
        let dx = bezier_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }
    t
}

/// One axis of the curve: 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_axis(p1: f32, p2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t2 * p2 + t2 * t
}

#[inline]
fn bezier_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}
