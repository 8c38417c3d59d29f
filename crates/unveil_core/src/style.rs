//! Animatable style model
//!
//! The coordinator only ever animates a small, fixed set of numeric style
//! properties. A `StyleMap` is the unit of exchange with the render surface:
//! specs declare an initial and a target map, transitions interpolate between
//! them property by property, and the surface applies whole maps.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A numeric style property the animator knows how to drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Horizontal offset from layout position, in pixels.
    TranslateX,
    /// Vertical offset from layout position, in pixels.
    TranslateY,
    /// Uniform scale factor (1.0 = identity).
    Scale,
}

impl StyleProperty {
    /// The value a property takes when nothing has been applied.
    pub fn identity(&self) -> f32 {
        match self {
            StyleProperty::Opacity | StyleProperty::Scale => 1.0,
            StyleProperty::TranslateX | StyleProperty::TranslateY => 0.0,
        }
    }
}

/// A property-to-value map describing a visual state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMap {
    values: FxHashMap<StyleProperty, f32>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, prop: StyleProperty, value: f32) -> Self {
        self.values.insert(prop, value);
        self
    }

    pub fn set(&mut self, prop: StyleProperty, value: f32) {
        self.values.insert(prop, value);
    }

    pub fn get(&self, prop: StyleProperty) -> Option<f32> {
        self.values.get(&prop).copied()
    }

    /// Value for `prop`, falling back to the property's identity.
    pub fn get_or_identity(&self, prop: StyleProperty) -> f32 {
        self.get(prop).unwrap_or_else(|| prop.identity())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn properties(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, f32)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    /// Overlay `other` on top of this map, overwriting shared properties.
    pub fn merge(&mut self, other: &StyleMap) {
        for (prop, value) in other.iter() {
            self.values.insert(prop, value);
        }
    }

    /// True if every value in this map is finite.
    pub fn is_finite(&self) -> bool {
        self.values.values().all(|v| v.is_finite())
    }

    /// True if both maps cover the same property set.
    pub fn same_properties(&self, other: &StyleMap) -> bool {
        self.len() == other.len() && self.properties().all(|p| other.get(p).is_some())
    }

    /// Per-property approximate equality.
    pub fn approx_eq(&self, other: &StyleMap, epsilon: f32) -> bool {
        self.same_properties(other)
            && self
                .iter()
                .all(|(p, v)| other.get(p).map(|o| (v - o).abs() < epsilon).unwrap_or(false))
    }
}

impl FromIterator<(StyleProperty, f32)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
