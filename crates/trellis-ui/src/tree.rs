//! Widget arena and structural operations.
//!
//! Widgets are stored in a generational [`SparseSet`] and addressed by
//! [`WidgetId`]. The tree owns every widget; containers only hold ids of their
//! children. Structural changes are validated up front: a rejected operation
//! is logged, returned as a [`TreeError`] and leaves the tree untouched.

use crate::config::UiConfig;
use crate::constraint::{Constraint, Dimension};
use crate::dirty::DirtyFlags;
use crate::error::TreeError;
use crate::event::{MouseEvent, MouseEventType};
use crate::text::{MonospaceMeasurer, TextMeasurer};
use crate::theme::Theme;
use crate::widget::Widget;
use crate::widget_id::{ListenerId, TreeTag, WidgetId};
use crate::widgets::{ContainerState, WidgetKind};
use std::rc::Rc;
use trellis_core::alloc::sparse_set::SparseSet;
use trellis_core::geometry::{Insets, Rect};
use trellis_core::profiling::profile_function;

pub const ROOT_NAME: &str = "WindowRootContainer";

pub struct UiTree {
    tag: TreeTag,
    nodes: SparseSet<Widget>,
    root: WidgetId,
    /// Containers that are never parented: the root plus any overlays.
    top_level: Vec<WidgetId>,
    focused: Option<WidgetId>,
    next_listener: u64,
    pub(crate) config: UiConfig,
    pub(crate) measurer: Box<dyn TextMeasurer>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default(), MonospaceMeasurer::new())
    }

    pub fn with_config(config: UiConfig, measurer: impl TextMeasurer + 'static) -> Self {
        let tag = TreeTag::next();
        let mut nodes = SparseSet::new();
        let theme_name = config.default_theme.clone();
        let slot = nodes.push_with(|slot| {
            let mut widget = Widget::new(
                WidgetId::new(tag, slot),
                WidgetKind::Container(ContainerState::new(&theme_name)),
                Insets::ZERO,
            );
            widget.name = ROOT_NAME.to_string();
            widget
        });
        let root = WidgetId::new(tag, slot);

        Self {
            tag,
            nodes,
            root,
            top_level: vec![root],
            focused: None,
            next_listener: 1,
            config,
            measurer: Box::new(measurer),
        }
    }

    /// The container every window-level widget hangs off.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Number of live widgets, top-level containers included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        if id.tree() != self.tag {
            return None;
        }
        self.nodes.get(id.slot())
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        if id.tree() != self.tag {
            return None;
        }
        self.nodes.get_mut(id.slot())
    }

    fn require(&self, id: WidgetId) -> Result<&Widget, TreeError> {
        self.get(id).ok_or(TreeError::Missing(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.nodes.iter().map(|(_, widget)| widget)
    }

    pub fn top_level(&self) -> &[WidgetId] {
        &self.top_level
    }

    pub fn is_top_level(&self, id: WidgetId) -> bool {
        self.top_level.contains(&id)
    }

    fn reject<T>(&self, error: TreeError) -> Result<T, TreeError> {
        tracing::warn!("{}", error);
        Err(error)
    }

    fn insert(&mut self, kind: WidgetKind, padding: Insets) -> WidgetId {
        let tag = self.tag;
        let slot = self
            .nodes
            .push_with(|slot| Widget::new(WidgetId::new(tag, slot), kind, padding));
        WidgetId::new(tag, slot)
    }

    pub fn create_widget(&mut self) -> WidgetId {
        self.insert(WidgetKind::Plain, Insets::ZERO)
    }

    pub fn create_container(&mut self) -> WidgetId {
        let state = ContainerState::new(&self.config.default_theme);
        self.insert(WidgetKind::Container(state), Insets::ZERO)
    }

    /// Container with a themed background and the configured panel padding.
    pub fn create_panel(&mut self) -> WidgetId {
        let name = self.config.default_theme.clone();
        let state = ContainerState::panel(&Theme::by_name(&name), &name);
        let padding = self.config.panel_padding;
        self.insert(WidgetKind::Container(state), padding)
    }

    /// Container that is painted and routed on its own, outside the root.
    ///
    /// Top-level containers cannot be parented or destroyed.
    pub fn create_top_level(&mut self, name: impl Into<String>) -> WidgetId {
        let id = self.create_container();
        if let Some(widget) = self.get_mut(id) {
            widget.name = name.into();
        }
        self.top_level.push(id);
        id
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.get(node).and_then(Widget::parent);
        }
        false
    }

    /// Append `child` to `parent`'s children and relayout `parent`.
    ///
    /// The child takes on the parent's theme.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        profile_function!();
        let parent_widget = match self.require(parent) {
            Ok(widget) => widget,
            Err(error) => return self.reject(error),
        };
        let Some(parent_state) = parent_widget.as_container() else {
            return self.reject(TreeError::NotContainer(parent));
        };
        let theme = parent_state.theme().to_string();
        let child_widget = match self.require(child) {
            Ok(widget) => widget,
            Err(error) => return self.reject(error),
        };
        if self.is_top_level(child) {
            return self.reject(TreeError::TopLevel(child));
        }
        match child_widget.parent {
            Some(current) if current == parent => {
                return self.reject(TreeError::DuplicateChild { child, parent });
            }
            Some(current) => {
                return self.reject(TreeError::AlreadyParented {
                    child,
                    parent: current,
                });
            }
            None => {}
        }
        if self.is_ancestor(child, parent) {
            return self.reject(TreeError::Cycle { child, parent });
        }

        if let Some(state) = self.get_mut(parent).and_then(Widget::as_container_mut) {
            state.children.push(child);
        }
        if let Some(widget) = self.get_mut(child) {
            widget.parent = Some(parent);
        }
        self.apply_theme(child, &theme);
        self.relayout(parent);
        tracing::debug!("Added {} to {}", child, parent);
        Ok(())
    }

    /// Detach `child` from `parent`. Returns whether it was a child.
    ///
    /// The detached subtree stays in the arena and can be added elsewhere.
    pub fn remove_child(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        profile_function!();
        let Some(state) = self.get_mut(parent).and_then(Widget::as_container_mut) else {
            return false;
        };
        let Some(index) = state.children.iter().position(|c| *c == child) else {
            return false;
        };
        state.children.remove(index);

        if let Some(focused) = self.focused
            && self.is_ancestor(child, focused)
        {
            self.set_focused(None);
        }
        for id in self.subtree(child) {
            if let Some(widget) = self.get_mut(id) {
                widget.mouse_over = false;
                widget.pressed.clear();
            }
        }
        if let Some(widget) = self.get_mut(child) {
            widget.parent = None;
            widget.set_bounds(Rect::ZERO);
        }
        self.relayout(parent);
        tracing::debug!("Removed {} from {}", child, parent);
        true
    }

    /// Remove `id` and its whole subtree from the arena.
    ///
    /// Ids of destroyed widgets stop resolving.
    pub fn destroy(&mut self, id: WidgetId) -> Result<(), TreeError> {
        profile_function!();
        let widget = match self.require(id) {
            Ok(widget) => widget,
            Err(error) => return self.reject(error),
        };
        if self.is_top_level(id) {
            return self.reject(TreeError::TopLevel(id));
        }
        if let Some(parent) = widget.parent {
            self.remove_child(parent, id);
        }
        if let Some(focused) = self.focused
            && self.is_ancestor(id, focused)
        {
            self.focused = None;
        }

        let removed = self.subtree(id);
        for node in &removed {
            self.nodes.remove(node.slot());
        }
        tracing::debug!("Destroyed {} ({} widgets)", id, removed.len());
        Ok(())
    }

    /// `id` and all its descendants, pre-order.
    pub fn subtree(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        if !self.contains(id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(widget) = self.get(node) {
                stack.extend(widget.children().iter().rev());
            }
        }
        out
    }

    pub fn set_name(&mut self, id: WidgetId, name: impl Into<String>) {
        if let Some(widget) = self.get_mut(id) {
            widget.name = name.into();
        }
    }

    /// Descendants of `from` named `name`, pre-order. `from` itself is not
    /// a candidate.
    pub fn find(&self, from: WidgetId, name: &str) -> Vec<WidgetId> {
        self.subtree(from)
            .into_iter()
            .skip(1)
            .filter(|id| self.get(*id).is_some_and(|w| w.name == name))
            .collect()
    }

    pub fn find_first(&self, from: WidgetId, name: &str) -> Option<WidgetId> {
        self.find(from, name).into_iter().next()
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Move focus to `id`, or clear it. At most one widget holds focus.
    pub fn set_focused(&mut self, id: Option<WidgetId>) {
        let id = id.filter(|id| self.contains(*id));
        if self.focused == id {
            return;
        }
        if let Some(previous) = self.focused.take()
            && let Some(widget) = self.get_mut(previous)
        {
            widget.focused = false;
        }
        if let Some(next) = id
            && let Some(widget) = self.get_mut(next)
        {
            widget.focused = true;
        }
        self.focused = id;
        tracing::trace!("Focus moved to {:?}", id);
    }

    /// Give or take focus from a single widget. Taking it only clears focus
    /// if `id` holds it.
    pub fn set_widget_focused(&mut self, id: WidgetId, focused: bool) {
        if focused {
            self.set_focused(Some(id));
        } else if self.focused == Some(id) {
            self.set_focused(None);
        }
    }

    /// Place a widget. Parents do this during layout; hosts use it for
    /// top-level containers.
    pub fn set_bounds(&mut self, id: WidgetId, bounds: Rect<i32>) {
        let Some(widget) = self.get_mut(id) else {
            return;
        };
        if widget.bounds == bounds {
            return;
        }
        widget.set_bounds(bounds);
        self.relayout(id);
    }

    pub fn set_padding(&mut self, id: WidgetId, padding: Insets) {
        let Some(widget) = self.get_mut(id) else {
            return;
        };
        if widget.padding == padding {
            return;
        }
        widget.set_padding(padding);
        if widget.is_container() {
            self.relayout(id);
        } else if widget.as_label().is_some() {
            self.remeasure(id);
        }
    }

    /// Set min and max along one axis, keeping the preferred length.
    pub fn set_constraint(&mut self, id: WidgetId, dimension: Dimension, min: i32, max: i32) {
        let Some(widget) = self.get_mut(id) else {
            return;
        };
        let current = widget.constraints.get(dimension);
        let next = Constraint::new(min, max).with_preferred(current.preferred);
        if next == current {
            return;
        }
        *widget.constraints.get_mut(dimension) = next;
        self.relayout_around(id);
    }

    pub fn set_constraint_fixed(&mut self, id: WidgetId, dimension: Dimension, value: i32) {
        let c = Constraint::fixed(value);
        self.set_constraint(id, dimension, c.min, c.max);
    }

    pub fn set_constraint_minimum(&mut self, id: WidgetId, dimension: Dimension, value: i32) {
        let c = Constraint::minimum(value);
        self.set_constraint(id, dimension, c.min, c.max);
    }

    pub fn set_constraint_maximum(&mut self, id: WidgetId, dimension: Dimension, value: i32) {
        let c = Constraint::maximum(value);
        self.set_constraint(id, dimension, c.min, c.max);
    }

    pub fn set_constraint_auto(&mut self, id: WidgetId, dimension: Dimension) {
        self.set_constraint(id, dimension, 0, crate::constraint::UNBOUNDED);
    }

    pub fn set_preferred(&mut self, id: WidgetId, dimension: Dimension, preferred: Option<i32>) {
        let Some(widget) = self.get_mut(id) else {
            return;
        };
        let current = widget.constraints.get(dimension);
        let next = current.with_preferred(preferred);
        if next == current {
            return;
        }
        *widget.constraints.get_mut(dimension) = next;
        self.relayout_around(id);
    }

    /// Relayout the container `id` sits in, or `id` itself when it has no
    /// parent.
    fn relayout_around(&mut self, id: WidgetId) {
        match self.get(id).and_then(Widget::parent) {
            Some(parent) => self.relayout(parent),
            None => self.relayout(id),
        }
    }

    /// Register a mouse listener on `id`.
    pub fn add_mouse_listener<F>(
        &mut self,
        id: WidgetId,
        kind: MouseEventType,
        callback: F,
    ) -> Result<ListenerId, TreeError>
    where
        F: Fn(&mut UiTree, &MouseEvent) -> bool + 'static,
    {
        if !self.contains(id) {
            return self.reject(TreeError::Missing(id));
        }
        let listener = ListenerId::from_raw(self.next_listener);
        self.next_listener += 1;
        if let Some(widget) = self.get_mut(id) {
            widget.listeners.insert(kind, listener, Rc::new(callback));
        }
        Ok(listener)
    }

    /// Unregister a listener. Unknown ids are ignored.
    pub fn remove_mouse_listener(
        &mut self,
        id: WidgetId,
        kind: MouseEventType,
        listener: ListenerId,
    ) -> bool {
        self.get_mut(id)
            .is_some_and(|widget| widget.listeners.remove(kind, listener))
    }

    /// Flag `id`, propagating layout flags to every ancestor.
    pub fn mark_dirty(&mut self, id: WidgetId, flags: DirtyFlags) {
        if flags.is_empty() {
            return;
        }
        let Some(widget) = self.get_mut(id) else {
            return;
        };
        widget.dirty |= flags;
        if !flags.should_propagate_to_parent() {
            return;
        }

        let propagated = flags.propagation_flags();
        let mut current = widget.parent;
        while let Some(parent) = current {
            let Some(widget) = self.get_mut(parent) else {
                break;
            };
            widget.dirty |= propagated;
            current = widget.parent;
        }
    }

    pub(crate) fn clear_dirty(&mut self, id: WidgetId) {
        if let Some(widget) = self.get_mut(id) {
            widget.dirty = DirtyFlags::NONE;
        }
    }
}

impl Default for UiTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UiTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiTree")
            .field("root", &self.root)
            .field("widgets", &self.nodes.len())
            .field("focused", &self.focused)
            .finish()
    }
}
