//! Transition scheduler
//!
//! Owns every in-flight transition and advances them each tick. Transitions
//! register when created through the coordinator (or directly, for one-off
//! tweens like hover emphasis) and are removed explicitly; a removed
//! transition can never produce another style value, which is what makes
//! supersession and teardown synchronous.
//!
//! Single-threaded by design: the host's frame loop calls `tick` and no
//! background thread exists. The `Arc`/`Weak` split lets detached handles
//! outlive the scheduler safely; handle operations on a dropped scheduler
//! are no-ops.

use crate::transition::Transition;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use unveil_core::StyleMap;

new_key_type! {
    /// Handle to a registered transition.
    pub struct TransitionId;
}

struct SchedulerInner {
    transitions: SlotMap<TransitionId, Transition>,
}

/// The scheduler that ticks all active transitions.
pub struct TransitionScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                transitions: SlotMap::with_key(),
            })),
        }
    }

    /// Get a weak handle for passing to components.
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register a transition and start it.
    pub fn add(&self, mut transition: Transition) -> TransitionId {
        transition.start();
        self.inner.lock().unwrap().transitions.insert(transition)
    }

    /// Cancel and remove a transition. Safe to call with a stale id.
    pub fn remove(&self, id: TransitionId) -> Option<Transition> {
        self.inner.lock().unwrap().transitions.remove(id)
    }

    /// Advance all transitions by `dt_ms`.
    ///
    /// Returns true if any transition is still playing and needs another
    /// tick. Finished transitions stay registered until removed so their
    /// exact endpoint value remains readable.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let mut any_playing = false;
        for (_, transition) in inner.transitions.iter_mut() {
            if transition.tick(dt_ms) {
                any_playing = true;
            }
        }
        tracing::trace!(
            active = any_playing,
            count = inner.transitions.len(),
            "scheduler tick"
        );
        any_playing
    }

    /// Current interpolated style of a transition.
    pub fn value(&self, id: TransitionId) -> Option<StyleMap> {
        self.inner
            .lock()
            .unwrap()
            .transitions
            .get(id)
            .map(|t| t.value())
    }

    /// Whether the transition ran to natural completion.
    pub fn is_finished(&self, id: TransitionId) -> bool {
        self.inner
            .lock()
            .unwrap()
            .transitions
            .get(id)
            .map(|t| t.is_finished())
            .unwrap_or(false)
    }

    pub fn has_active(&self) -> bool {
        self.inner
            .lock()
            .unwrap()
            .transitions
            .iter()
            .any(|(_, t)| t.is_playing())
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().transitions.len()
    }
}

impl Default for TransitionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the transition scheduler.
///
/// Won't keep the scheduler alive; every operation no-ops once the owner
/// drops it.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register and start a transition.
    pub fn add(&self, mut transition: Transition) -> Option<TransitionId> {
        self.inner.upgrade().map(|inner| {
            transition.start();
            inner.lock().unwrap().transitions.insert(transition)
        })
    }

    pub fn remove(&self, id: TransitionId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().transitions.remove(id);
        }
    }

    pub fn value(&self, id: TransitionId) -> Option<StyleMap> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().transitions.get(id).map(|t| t.value()))
    }

    pub fn is_finished(&self, id: TransitionId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .transitions
                    .get(id)
                    .map(|t| t.is_finished())
            })
            .unwrap_or(false)
    }

    /// Check if the scheduler is still alive.
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use unveil_core::StyleProperty;

    fn fade(duration_ms: f32) -> Transition {
        Transition::new(
            StyleMap::new().with(StyleProperty::Opacity, 0.0),
            StyleMap::new().with(StyleProperty::Opacity, 1.0),
            duration_ms,
            0.0,
            Easing::Linear,
        )
    }

    #[test]
    fn test_tick_advances_and_finishes() {
        let scheduler = TransitionScheduler::new();
        let id = scheduler.add(fade(100.0));

        assert!(scheduler.tick(50.0));
        let v = scheduler.value(id).unwrap();
        assert!((v.get(StyleProperty::Opacity).unwrap() - 0.5).abs() < 1e-6);

        assert!(!scheduler.tick(60.0));
        assert!(scheduler.is_finished(id));
        assert_eq!(
            scheduler.value(id).unwrap().get(StyleProperty::Opacity),
            Some(1.0)
        );
    }

    #[test]
    fn test_removed_transition_is_gone() {
        let scheduler = TransitionScheduler::new();
        let id = scheduler.add(fade(100.0));
        scheduler.remove(id);

        assert!(scheduler.value(id).is_none());
        assert!(!scheduler.is_finished(id));
        assert_eq!(scheduler.count(), 0);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = TransitionScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle.add(fade(100.0)).is_none());
    }

    #[test]
    fn test_handle_standalone_tween() {
        // Hover-emphasis style usage: a one-off tween driven through a handle.
        let scheduler = TransitionScheduler::new();
        let handle = scheduler.handle();

        let id = handle
            .add(Transition::new(
                StyleMap::new().with(StyleProperty::Scale, 1.0),
                StyleMap::new().with(StyleProperty::Scale, 1.05),
                150.0,
                0.0,
                Easing::EaseOut,
            ))
            .unwrap();

        scheduler.tick(200.0);
        assert!(handle.is_finished(id));
        assert_eq!(
            handle.value(id).unwrap().get(StyleProperty::Scale),
            Some(1.05)
        );
    }
}
