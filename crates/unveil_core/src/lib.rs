//! Unveil Core
//!
//! Foundational primitives for the Unveil reveal-animation coordinator:
//!
//! - **Geometry**: rectangles, the scrolling viewport, and visible-ratio math
//! - **Style Model**: the small set of animatable style properties and the
//!   `StyleMap` applied to rendering-surface nodes
//! - **Render Surface**: the two-primitive trait (read bounds, apply/read
//!   style) that decouples the coordinator from any concrete renderer
//! - **Preferences**: the persisted key-value preference store and the
//!   dark-mode theme state built on top of it
//!
//! # Example
//!
//! ```rust
//! use unveil_core::{MemorySurface, Rect, RenderSurface, StyleMap, StyleProperty};
//!
//! let mut surface = MemorySurface::new();
//! let node = surface.insert(Rect::new(0.0, 400.0, 800.0, 300.0));
//!
//! surface.apply_style(node, &StyleMap::new().with(StyleProperty::Opacity, 0.0));
//! assert_eq!(
//!     surface.style(node).and_then(|s| s.get(StyleProperty::Opacity)),
//!     Some(0.0)
//! );
//! ```

pub mod geometry;
pub mod prefs;
pub mod style;
pub mod surface;

pub use geometry::{Rect, Viewport};
pub use prefs::{MemoryPrefs, PreferenceStore, ThemeMode, ThemePreference, DARK_MODE_KEY};
pub use style::{StyleMap, StyleProperty};
pub use surface::{MemorySurface, NodeId, RenderSurface};
