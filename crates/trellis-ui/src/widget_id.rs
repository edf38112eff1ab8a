//! Handles for widgets and listeners.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use trellis_core::alloc::sparse_set::IndexSlot;

static NEXT_TREE: AtomicU32 = AtomicU32::new(1);

/// Identifies the tree a handle was issued by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TreeTag(u32);

impl TreeTag {
    pub(crate) fn next() -> Self {
        Self(NEXT_TREE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Stable handle to a widget.
///
/// Ids are unique across every tree in the process and are never reused: once
/// a widget is destroyed its id stops resolving, even if its storage slot is
/// recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId {
    tree: TreeTag,
    slot: IndexSlot,
}

impl WidgetId {
    pub(crate) fn new(tree: TreeTag, slot: IndexSlot) -> Self {
        Self { tree, slot }
    }

    pub(crate) fn tree(&self) -> TreeTag {
        self.tree
    }

    pub(crate) fn slot(&self) -> IndexSlot {
        self.slot
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WidgetId({}:{}v{})",
            self.tree.0,
            self.slot.index(),
            self.slot.generation()
        )
    }
}

/// Handle returned when registering a mouse listener, used to unregister it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_tags_are_distinct() {
        assert_ne!(TreeTag::next(), TreeTag::next());
    }

    #[test]
    fn test_ids_from_different_trees_differ() {
        let slot = IndexSlot::new(0, 0);
        let a = WidgetId::new(TreeTag::next(), slot);
        let b = WidgetId::new(TreeTag::next(), slot);
        assert_ne!(a, b);
        assert_eq!(a.slot(), b.slot());
    }

    #[test]
    fn test_listener_id_display() {
        assert_eq!(ListenerId::from_raw(7).to_string(), "ListenerId(7)");
        assert_eq!(ListenerId::from_raw(7).as_u64(), 7);
    }
}
