//! Unveil Reveal
//!
//! Scroll-triggered reveal coordination: watches registered elements against
//! a scrolling viewport and drives their hidden/visible transitions, with
//! staggered cascades for element groups.
//!
//! The crate is the outward face of the workspace. The presentation layer
//! registers groups of surface nodes with a [`RevealSpec`] and a
//! [`Threshold`], then calls [`RevealCoordinator::tick`] from its frame loop;
//! everything else (observation, supersession, stagger fan-out, style
//! writes) happens inside.
//!
//! # Example
//!
//! ```rust
//! use unveil_animation::RevealSpec;
//! use unveil_core::{MemorySurface, Rect, Viewport};
//! use unveil_reveal::{Group, RevealCoordinator, Threshold};
//!
//! let mut surface = MemorySurface::new();
//! let section = surface.insert(Rect::new(0.0, 900.0, 800.0, 400.0));
//!
//! let mut coordinator = RevealCoordinator::new();
//! let handle = coordinator
//!     .register(
//!         &mut surface,
//!         Group::single(section),
//!         RevealSpec::fade_up(20.0),
//!         Threshold::default(),
//!     )
//!     .unwrap();
//!
//! let mut viewport = Viewport::new(800.0, 600.0);
//! viewport.scroll_to(800.0);
//! coordinator.tick(&mut surface, &viewport, 16.0);
//! # coordinator.unregister(handle);
//! ```

pub mod coordinator;
pub mod error;
pub mod observer;

pub use coordinator::{Group, GroupHandle, Phase, RevealCoordinator};
pub use error::{Result, RevealError};
pub use observer::{Crossing, SubscriptionId, Threshold, ViewportObserver};

pub use unveil_animation::{Direction, Easing, RevealSpec};
