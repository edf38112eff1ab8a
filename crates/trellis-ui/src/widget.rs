//! The node stored in the widget arena.

use crate::constraint::{Constraint, Dimension, SizeConstraints};
use crate::dirty::DirtyFlags;
use crate::event::{Listeners, MouseButton};
use crate::widget_id::WidgetId;
use crate::widgets::{ContainerState, LabelState, WidgetKind};
use trellis_core::alloc::HashMap;
use trellis_core::geometry::{Insets, Rect};

/// One widget in a [`UiTree`](crate::UiTree).
///
/// Read access is public; every mutation goes through the tree so that
/// layout, focus and theme invariants hold.
#[derive(Debug)]
pub struct Widget {
    pub(crate) id: WidgetId,
    pub(crate) name: String,
    pub(crate) bounds: Rect<i32>,
    pub(crate) padding: Insets,
    /// `bounds` shrunk by `padding`.
    pub(crate) content_area: Rect<i32>,
    pub(crate) constraints: SizeConstraints,
    pub(crate) focused: bool,
    pub(crate) mouse_over: bool,
    pub(crate) pressed: HashMap<MouseButton, bool>,
    pub(crate) listeners: Listeners,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) dirty: DirtyFlags,
    pub(crate) kind: WidgetKind,
}

impl Widget {
    pub(crate) fn new(id: WidgetId, kind: WidgetKind, padding: Insets) -> Self {
        Self {
            id,
            name: String::new(),
            bounds: Rect::ZERO,
            padding,
            content_area: Rect::ZERO,
            constraints: SizeConstraints::default(),
            focused: false,
            mouse_over: false,
            pressed: HashMap::new(),
            listeners: Listeners::default(),
            parent: None,
            dirty: DirtyFlags::NONE,
            kind,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outer rectangle in window coordinates.
    pub fn bounds(&self) -> Rect<i32> {
        self.bounds
    }

    pub fn content_area(&self) -> Rect<i32> {
        self.content_area
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn constraints(&self) -> SizeConstraints {
        self.constraints
    }

    pub fn constraint(&self, dimension: Dimension) -> Constraint {
        self.constraints.get(dimension)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_mouse_over(&self) -> bool {
        self.mouse_over
    }

    /// Whether `button` went down on this widget and has not been released.
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.pressed.get(&button).copied().unwrap_or(false)
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, WidgetKind::Container(_))
    }

    pub fn as_container(&self) -> Option<&ContainerState> {
        match &self.kind {
            WidgetKind::Container(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn as_container_mut(&mut self) -> Option<&mut ContainerState> {
        match &mut self.kind {
            WidgetKind::Container(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&LabelState> {
        match &self.kind {
            WidgetKind::Label(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn as_label_mut(&mut self) -> Option<&mut LabelState> {
        match &mut self.kind {
            WidgetKind::Label(state) => Some(state),
            _ => None,
        }
    }

    /// Children in paint order. Empty for non-containers.
    pub fn children(&self) -> &[WidgetId] {
        match &self.kind {
            WidgetKind::Container(state) => &state.children,
            _ => &[],
        }
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect<i32>) {
        self.bounds = bounds;
        self.content_area = bounds.inset(self.padding);
    }

    pub(crate) fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
        self.content_area = self.bounds.inset(padding);
    }
}
