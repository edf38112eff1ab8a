//! Structural tests for the widget tree.
//!
//! Single parent, no cycles, top-level containers stay put, and rejected
//! operations leave the tree exactly as it was.

use trellis_core::geometry::Rect;
use trellis_ui::{Theme, TreeError, UiTree, WidgetKind};

#[test]
fn test_add_child_sets_parent() {
    let mut tree = UiTree::new();
    let root = tree.root();
    let child = tree.create_widget();

    tree.add_child(root, child).unwrap();
    assert_eq!(tree.get(child).unwrap().parent(), Some(root));
    assert_eq!(tree.get(root).unwrap().children().to_vec(), vec![child]);
}

#[test]
fn test_duplicate_add_is_rejected() {
    let mut tree = UiTree::new();
    let root = tree.root();
    let child = tree.create_widget();
    tree.add_child(root, child).unwrap();

    assert_eq!(
        tree.add_child(root, child),
        Err(TreeError::DuplicateChild {
            child,
            parent: root
        })
    );
    assert_eq!(tree.get(root).unwrap().children().len(), 1);
}

#[test]
fn test_second_parent_is_rejected() {
    let mut tree = UiTree::new();
    let first = tree.create_container();
    let second = tree.create_container();
    let child = tree.create_widget();
    tree.add_child(first, child).unwrap();

    let result = tree.add_child(second, child);
    assert_eq!(
        result,
        Err(TreeError::AlreadyParented {
            child,
            parent: first
        })
    );
    assert!(tree.get(second).unwrap().children().is_empty());
    assert_eq!(tree.get(child).unwrap().parent(), Some(first));
}

#[test]
fn test_reparent_after_remove() {
    let mut tree = UiTree::new();
    let first = tree.create_container();
    let second = tree.create_container();
    let child = tree.create_widget();
    tree.add_child(first, child).unwrap();

    assert!(tree.remove_child(first, child));
    assert_eq!(tree.get(child).unwrap().parent(), None);
    assert_eq!(tree.get(child).unwrap().bounds(), Rect::ZERO);
    tree.add_child(second, child).unwrap();
    assert_eq!(tree.get(child).unwrap().parent(), Some(second));
}

#[test]
fn test_remove_unknown_child_is_noop() {
    let mut tree = UiTree::new();
    let container = tree.create_container();
    let stranger = tree.create_widget();
    assert!(!tree.remove_child(container, stranger));
}

#[test]
fn test_non_container_parent_is_rejected() {
    let mut tree = UiTree::new();
    let leaf = tree.create_widget();
    let child = tree.create_widget();
    assert_eq!(tree.add_child(leaf, child), Err(TreeError::NotContainer(leaf)));
}

#[test]
fn test_cycle_is_rejected() {
    let mut tree = UiTree::new();
    let outer = tree.create_container();
    let inner = tree.create_container();
    tree.add_child(outer, inner).unwrap();

    assert_eq!(
        tree.add_child(inner, outer),
        Err(TreeError::Cycle {
            child: outer,
            parent: inner
        })
    );
    assert_eq!(
        tree.add_child(outer, outer),
        Err(TreeError::Cycle {
            child: outer,
            parent: outer
        })
    );
}

#[test]
fn test_root_cannot_be_parented_or_destroyed() {
    let mut tree = UiTree::new();
    let root = tree.root();
    let container = tree.create_container();

    assert_eq!(tree.add_child(container, root), Err(TreeError::TopLevel(root)));
    assert_eq!(tree.destroy(root), Err(TreeError::TopLevel(root)));
    assert!(tree.contains(root));
}

#[test]
fn test_destroy_removes_subtree() {
    let mut tree = UiTree::new();
    let root = tree.root();
    let panel = tree.create_panel();
    let label = tree.create_label("gone");
    tree.add_child(panel, label).unwrap();
    tree.add_child(root, panel).unwrap();
    tree.set_focused(Some(label));
    assert_eq!(tree.len(), 3);

    tree.destroy(panel).unwrap();
    assert_eq!(tree.len(), 1);
    assert!(!tree.contains(panel));
    assert!(!tree.contains(label));
    assert!(tree.get(root).unwrap().children().is_empty());
    assert_eq!(tree.focused(), None);
    assert_eq!(tree.destroy(panel), Err(TreeError::Missing(panel)));
}

#[test]
fn test_removing_focused_subtree_clears_focus() {
    let mut tree = UiTree::new();
    let root = tree.root();
    let child = tree.create_widget();
    tree.add_child(root, child).unwrap();
    tree.set_focused(Some(child));

    tree.remove_child(root, child);
    assert_eq!(tree.focused(), None);
    assert!(!tree.get(child).unwrap().is_focused());
}

#[test]
fn test_find_by_name_is_preorder_and_skips_start() {
    let mut tree = UiTree::new();
    let root = tree.root();
    let group = tree.create_container();
    let nested = tree.create_widget();
    let sibling = tree.create_widget();
    tree.set_name(root, "item");
    tree.set_name(group, "group");
    tree.set_name(nested, "item");
    tree.set_name(sibling, "item");
    tree.add_child(group, nested).unwrap();
    tree.add_child(root, group).unwrap();
    tree.add_child(root, sibling).unwrap();

    assert_eq!(tree.find(root, "item"), vec![nested, sibling]);
    assert_eq!(tree.find_first(root, "item"), Some(nested));
    assert_eq!(tree.find_first(root, "missing"), None);
    assert!(tree.find(group, "group").is_empty());
}

#[test]
fn test_added_subtree_takes_parent_theme() {
    let mut tree = UiTree::new();
    let root = tree.root();
    tree.set_theme(root, "Light");
    let panel = tree.create_panel();
    let label = tree.create_label("text");
    tree.add_child(panel, label).unwrap();
    tree.add_child(root, panel).unwrap();

    let light = Theme::light();
    match tree.get(label).unwrap().kind() {
        WidgetKind::Label(state) => assert_eq!(state.color(), light.text),
        other => panic!("expected a label, got {}", other.name()),
    }
    let panel_state = tree.get(panel).unwrap().as_container().unwrap();
    assert_eq!(panel_state.theme(), "Light");
}

#[test]
fn test_stale_id_is_ignored() {
    let mut tree = UiTree::new();
    let widget = tree.create_widget();
    let held = widget;
    tree.destroy(widget).unwrap();
    tree.set_name(held, "ignored");
    assert!(tree.get(held).is_none());
}
