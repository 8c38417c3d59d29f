//! Reveal coordination
//!
//! Owns the per-element visibility state machine and wires the observer to
//! the transition scheduler. One coordinator serves the whole page: the
//! presentation layer registers groups, then calls `tick` from its frame
//! loop and never touches animated style properties itself while a
//! registration is active.
//!
//! State machine per tracked element:
//!
//! ```text
//! Hidden --enter--> Entering --complete--> Visible
//!   ^                                         |
//!   |                                  leave (reverse_on_exit)
//!   +-- complete <-- Leaving <----------------+
//! ```
//!
//! With `reverse_on_exit` off, `Visible` is terminal: the element plays
//! forward once and ignores every later trigger.

use crate::error::{Result, RevealError};
use crate::observer::{Crossing, SubscriptionId, Threshold, ViewportObserver};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use unveil_animation::{Direction, RevealSpec, SchedulerHandle, Transition, TransitionId, TransitionScheduler};
use unveil_core::{NodeId, RenderSurface, StyleMap, Viewport};

new_key_type! {
    /// Handle to a registered reveal group.
    pub struct GroupHandle;
}

/// Visibility phase of a tracked element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Entering,
    Visible,
    Leaving,
}

/// An ordered set of elements revealed off one shared trigger.
///
/// The container is the node whose bounds drive the observer; the elements
/// transition together with staggered timing when it crosses the threshold,
/// never independently re-triggered per child.
#[derive(Clone, Debug)]
pub struct Group {
    container: NodeId,
    nodes: SmallVec<[NodeId; 8]>,
    stagger_ms: f32,
}

impl Group {
    /// A group triggered by `container`, initially with no elements.
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            nodes: SmallVec::new(),
            stagger_ms: 0.0,
        }
    }

    /// One element that is its own trigger.
    pub fn single(node: NodeId) -> Self {
        Self::new(node).element(node)
    }

    /// Append an element; stagger index follows insertion order.
    pub fn element(mut self, node: NodeId) -> Self {
        self.nodes.push(node);
        self
    }

    /// Append several elements in order.
    pub fn elements<I: IntoIterator<Item = NodeId>>(mut self, nodes: I) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Per-element delay offset within the cascade, in milliseconds.
    pub fn stagger(mut self, stagger_ms: f32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }
}

struct TrackedElement {
    node: NodeId,
    phase: Phase,
    stagger_index: usize,
    transition: Option<TransitionId>,
    /// Last style applied to the surface; superseding transitions start here.
    current: StyleMap,
}

struct GroupEntry {
    subscription: SubscriptionId,
    spec: RevealSpec,
    stagger_ms: f32,
    elements: Vec<TrackedElement>,
}

/// Registers element groups, watches their trigger, and drives reveals.
#[derive(Default)]
pub struct RevealCoordinator {
    observer: ViewportObserver,
    scheduler: TransitionScheduler,
    groups: SlotMap<GroupHandle, GroupEntry>,
    by_subscription: FxHashMap<SubscriptionId, GroupHandle>,
}

impl RevealCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared scheduler, for one-off tweens (hover emphasis
    /// and the like) that want to ride the same tick.
    pub fn scheduler_handle(&self) -> SchedulerHandle {
        self.scheduler.handle()
    }

    /// Register a group for reveal.
    ///
    /// All-or-nothing: the spec, threshold, and every node are validated
    /// before anything is observed or styled, so a failed registration
    /// leaves no partial state behind. On success each element gets
    /// `spec.initial` applied immediately and starts in `Phase::Hidden`.
    pub fn register<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        group: Group,
        spec: RevealSpec,
        threshold: Threshold,
    ) -> Result<GroupHandle> {
        spec.validate()?;
        if !threshold.is_valid() {
            return Err(RevealError::InvalidSpec(format!(
                "threshold ratios must be finite and within [0, 1], got enter {} exit {}",
                threshold.enter, threshold.exit
            )));
        }
        if !group.stagger_ms.is_finite() || group.stagger_ms < 0.0 {
            return Err(RevealError::InvalidSpec(format!(
                "stagger must be finite and non-negative, got {}",
                group.stagger_ms
            )));
        }
        if group.nodes.is_empty() || !surface.contains(group.container) {
            return Err(RevealError::InvalidTarget);
        }
        for node in &group.nodes {
            if !surface.contains(*node) {
                return Err(RevealError::InvalidTarget);
            }
        }

        let subscription = self.observer.observe(group.container, threshold);
        let elements = group
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                surface.apply_style(*node, &spec.initial);
                TrackedElement {
                    node: *node,
                    phase: Phase::Hidden,
                    stagger_index: i,
                    transition: None,
                    current: spec.initial.clone(),
                }
            })
            .collect::<Vec<_>>();

        let handle = self.groups.insert(GroupEntry {
            subscription,
            spec,
            stagger_ms: group.stagger_ms,
            elements,
        });
        self.by_subscription.insert(subscription, handle);
        tracing::debug!(?handle, elements = group.nodes.len(), "group registered");
        Ok(handle)
    }

    /// Tear down a group: stop its observer and cancel every in-flight
    /// transition, synchronously. No style writes happen for the group
    /// after this returns. Stale handles are ignored.
    pub fn unregister(&mut self, handle: GroupHandle) {
        let Some(entry) = self.groups.remove(handle) else {
            return;
        };
        self.observer.unobserve(entry.subscription);
        self.by_subscription.remove(&entry.subscription);
        for element in &entry.elements {
            if let Some(id) = element.transition {
                self.scheduler.remove(id);
            }
        }
        tracing::debug!(?handle, "group unregistered");
    }

    /// One cooperative step: re-measure the viewport, fan crossings out to
    /// group elements in registration order, advance all transitions by
    /// `dt_ms`, and write the resulting styles back to the surface.
    ///
    /// Returns true while any transition is still in flight.
    pub fn tick<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        viewport: &Viewport,
        dt_ms: f32,
    ) -> bool {
        // Crossings arrive in subscription order and are processed in
        // arrival order; no event is dropped.
        let crossings = self.observer.update(surface, viewport);
        for (subscription, crossing) in crossings {
            let Some(&handle) = self.by_subscription.get(&subscription) else {
                continue;
            };
            let Some(entry) = self.groups.get_mut(handle) else {
                continue;
            };
            for element in entry.elements.iter_mut() {
                Self::apply_crossing(&self.scheduler, entry.stagger_ms, &entry.spec, element, crossing);
            }
        }

        let active = self.scheduler.tick(dt_ms);

        // Write back interpolated styles and settle completed transitions.
        for (_, entry) in self.groups.iter_mut() {
            for element in entry.elements.iter_mut() {
                let Some(id) = element.transition else {
                    continue;
                };
                let Some(value) = self.scheduler.value(id) else {
                    element.transition = None;
                    continue;
                };
                // A transition still in its delay reports its unchanged
                // starting style; don't re-apply it every tick.
                if value != element.current {
                    surface.apply_style(element.node, &value);
                    element.current = value;
                }

                if self.scheduler.is_finished(id) {
                    self.scheduler.remove(id);
                    element.transition = None;
                    element.phase = match element.phase {
                        Phase::Entering => Phase::Visible,
                        Phase::Leaving => Phase::Hidden,
                        phase => phase,
                    };
                    tracing::debug!(node = ?element.node, phase = ?element.phase, "transition settled");
                }
            }
        }

        active
    }

    fn apply_crossing(
        scheduler: &TransitionScheduler,
        stagger_ms: f32,
        spec: &RevealSpec,
        element: &mut TrackedElement,
        crossing: Crossing,
    ) {
        let direction = match crossing {
            Crossing::Enter => match element.phase {
                Phase::Hidden | Phase::Leaving => Direction::Forward,
                // Already revealed or revealing.
                Phase::Entering | Phase::Visible => return,
            },
            Crossing::Leave => {
                if !spec.reverse_on_exit {
                    // Terminal-visible policy: play forward once, ignore
                    // all further triggers.
                    return;
                }
                match element.phase {
                    Phase::Entering | Phase::Visible => Direction::Reverse,
                    Phase::Hidden | Phase::Leaving => return,
                }
            }
        };

        // Supersede any in-flight transition; its completion never fires.
        if let Some(id) = element.transition.take() {
            scheduler.remove(id);
        }

        let delay = spec.delay_ms + element.stagger_index as f32 * stagger_ms;
        let transition = Transition::reveal(spec, element.current.clone(), direction, delay);
        element.transition = Some(scheduler.add(transition));
        element.phase = match direction {
            Direction::Forward => Phase::Entering,
            Direction::Reverse => Phase::Leaving,
        };
        tracing::debug!(
            node = ?element.node,
            ?direction,
            delay_ms = delay,
            "reveal transition started"
        );
    }

    /// Phase of the `index`th element of a group.
    pub fn phase(&self, handle: GroupHandle, index: usize) -> Option<Phase> {
        self.groups
            .get(handle)?
            .elements
            .get(index)
            .map(|e| e.phase)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// True when no transition is in flight.
    pub fn is_idle(&self) -> bool {
        !self.scheduler.has_active()
    }
}
