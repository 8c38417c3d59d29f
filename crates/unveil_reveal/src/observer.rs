//! Viewport observation
//!
//! Watches registered nodes' bounding boxes against the viewport and emits
//! enter/leave crossings at configurable visible-ratio thresholds. The
//! observer holds no animation state; it only remembers which side of the
//! threshold each watch was last on, which is what debounces duplicate
//! crossings.

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use unveil_core::{NodeId, RenderSurface, Viewport};

/// Visible-ratio boundaries that define "entering" vs "leaving".
///
/// `enter` is the ratio an element must reach to count as entered; dropping
/// below `exit` counts as left. Both are fractions of the element's area in
/// `[0, 1]`. The default (0.2 both ways) matches triggering when an
/// element's top crosses 80% down the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub enter: f32,
    pub exit: f32,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            enter: 0.2,
            exit: 0.2,
        }
    }
}

impl Threshold {
    pub fn new(enter: f32, exit: f32) -> Self {
        Self { enter, exit }
    }

    /// Same ratio for both boundaries.
    pub fn ratio(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Both ratios in `[0, 1]` and `exit <= enter`. An exit boundary above
    /// the enter boundary would make every ratio between them count as both
    /// entered and left, re-firing crossings on a stationary viewport.
    pub fn is_valid(&self) -> bool {
        self.enter.is_finite()
            && self.exit.is_finite()
            && (0.0..=1.0).contains(&self.enter)
            && (0.0..=1.0).contains(&self.exit)
            && self.exit <= self.enter
    }
}

/// A threshold crossing emitted by the observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Visible ratio rose to or past `threshold.enter`.
    Enter,
    /// Visible ratio fell below `threshold.exit` after having entered.
    Leave,
}

new_key_type! {
    /// Handle to an active observation.
    pub struct SubscriptionId;
}

struct Watch {
    node: NodeId,
    threshold: Threshold,
    /// Last-known side of the threshold; crossings only fire on a change.
    inside: bool,
}

/// Watches node bounds against the viewport and reports crossings.
#[derive(Default)]
pub struct ViewportObserver {
    watches: SlotMap<SubscriptionId, Watch>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `node`. All watches begin outside the threshold.
    pub fn observe(&mut self, node: NodeId, threshold: Threshold) -> SubscriptionId {
        self.watches.insert(Watch {
            node,
            threshold,
            inside: false,
        })
    }

    /// Stop watching and release the subscription. Stale ids are ignored.
    pub fn unobserve(&mut self, id: SubscriptionId) {
        self.watches.remove(id);
    }

    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Re-measure every watch against the viewport and collect crossings in
    /// subscription order.
    ///
    /// A node the surface no longer knows about is skipped silently; it
    /// keeps its last-known side so a node that re-attaches resumes where
    /// it left off.
    pub fn update<S: RenderSurface>(
        &mut self,
        surface: &S,
        viewport: &Viewport,
    ) -> Vec<(SubscriptionId, Crossing)> {
        let mut crossings = Vec::new();
        for (id, watch) in self.watches.iter_mut() {
            let Some(bounds) = surface.bounds(watch.node) else {
                continue;
            };
            let ratio = viewport.visible_ratio(&bounds);

            if !watch.inside && ratio >= watch.threshold.enter {
                watch.inside = true;
                tracing::trace!(?id, ratio, "enter crossing");
                crossings.push((id, Crossing::Enter));
            } else if watch.inside && ratio < watch.threshold.exit {
                watch.inside = false;
                tracing::trace!(?id, ratio, "leave crossing");
                crossings.push((id, Crossing::Leave));
            }
        }
        crossings
    }
}
