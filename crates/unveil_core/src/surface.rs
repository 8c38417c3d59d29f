//! Render surface abstraction
//!
//! The animation core never talks to a real renderer. It requires exactly two
//! primitives of whatever displays the content: read an element's bounding box
//! on demand, and apply/read back a style-property map. `RenderSurface` is
//! that seam; `MemorySurface` is the in-process implementation used by the
//! demos and the test suites.

use crate::geometry::Rect;
use crate::style::StyleMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a renderable node on a surface.
    pub struct NodeId;
}

/// The two-primitive contract a rendering surface must provide.
///
/// Implementations must make operations on detached nodes silent no-ops:
/// `bounds`/`style` return `None` and `apply_style` does nothing. The
/// coordinator relies on this when elements unmount before unregistration.
pub trait RenderSurface {
    /// Current bounding box of `node` in document coordinates, or `None` if
    /// the node is not (or no longer) attached.
    fn bounds(&self, node: NodeId) -> Option<Rect>;

    /// Apply a style map to `node`, overwriting the listed properties.
    fn apply_style(&mut self, node: NodeId, style: &StyleMap);

    /// Read back the node's current style map.
    fn style(&self, node: NodeId) -> Option<StyleMap>;

    /// Whether the node is currently attached.
    fn contains(&self, node: NodeId) -> bool {
        self.bounds(node).is_some()
    }
}

struct NodeState {
    rect: Rect,
    style: StyleMap,
}

/// In-memory render surface.
///
/// Keeps a write counter so tests can assert that nothing touches styles
/// after a teardown.
#[derive(Default)]
pub struct MemorySurface {
    nodes: SlotMap<NodeId, NodeState>,
    style_writes: u64,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a node with the given layout bounds.
    pub fn insert(&mut self, rect: Rect) -> NodeId {
        self.nodes.insert(NodeState {
            rect,
            style: StyleMap::new(),
        })
    }

    /// Detach a node. Subsequent observation and style writes are no-ops.
    pub fn remove(&mut self, node: NodeId) {
        self.nodes.remove(node);
    }

    /// Move a node (layout change).
    pub fn set_bounds(&mut self, node: NodeId, rect: Rect) {
        if let Some(state) = self.nodes.get_mut(node) {
            state.rect = rect;
        }
    }

    /// Total number of style writes applied so far.
    pub fn style_writes(&self) -> u64 {
        self.style_writes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl RenderSurface for MemorySurface {
    fn bounds(&self, node: NodeId) -> Option<Rect> {
        self.nodes.get(node).map(|s| s.rect)
    }

    fn apply_style(&mut self, node: NodeId, style: &StyleMap) {
        if let Some(state) = self.nodes.get_mut(node) {
            state.style.merge(style);
            self.style_writes += 1;
        }
    }

    fn style(&self, node: NodeId) -> Option<StyleMap> {
        self.nodes.get(node).map(|s| s.style.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperty;

    #[test]
    fn test_insert_and_bounds() {
        let mut surface = MemorySurface::new();
        let node = surface.insert(Rect::new(0.0, 100.0, 800.0, 300.0));

        assert!(surface.contains(node));
        assert_eq!(surface.bounds(node), Some(Rect::new(0.0, 100.0, 800.0, 300.0)));
    }

    #[test]
    fn test_apply_and_read_style() {
        let mut surface = MemorySurface::new();
        let node = surface.insert(Rect::new(0.0, 0.0, 10.0, 10.0));

        surface.apply_style(node, &StyleMap::new().with(StyleProperty::Opacity, 0.25));
        let style = surface.style(node).unwrap();
        assert_eq!(style.get(StyleProperty::Opacity), Some(0.25));
        assert_eq!(surface.style_writes(), 1);
    }

    #[test]
    fn test_detached_node_is_noop() {
        let mut surface = MemorySurface::new();
        let node = surface.insert(Rect::new(0.0, 0.0, 10.0, 10.0));
        surface.remove(node);

        assert!(!surface.contains(node));
        assert!(surface.style(node).is_none());

        // Writes to a detached node must not count or panic.
        surface.apply_style(node, &StyleMap::new().with(StyleProperty::Opacity, 1.0));
        assert_eq!(surface.style_writes(), 0);
    }
}
