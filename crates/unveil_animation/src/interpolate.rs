//! Interpolatable value types
//!
//! Transitions interpolate each numeric style property independently; the
//! `Interpolate` trait is the seam that keeps the tween code generic over
//! scalars and whole style maps.

use unveil_core::StyleMap;

/// Trait for values that can be linearly interpolated.
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0).
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal.
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for StyleMap {
    /// Per-property lerp. Properties missing from `other` hold their value
    /// from `self`; properties only in `other` interpolate from identity.
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut out = self.clone();
        for (prop, to) in other.iter() {
            let from = self.get_or_identity(prop);
            out.set(prop, from.lerp(&to, t));
        }
        out
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        StyleMap::approx_eq(self, other, epsilon)
    }
}
