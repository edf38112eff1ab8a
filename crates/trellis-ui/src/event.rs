//! Input events and mouse listener registries.

use crate::tree::UiTree;
use crate::widget_id::{ListenerId, WidgetId};
use indexmap::IndexMap;
use std::rc::Rc;
use trellis_core::alloc::HashMap;
use trellis_core::math::Vec2;

/// Mouse button, identified the way the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

impl MouseButton {
    /// Map a platform button code (1 left, 2 middle, 3 right).
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }
}

/// Input delivered to the tree by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    MouseMoved { position: Vec2 },
    MouseButtonDown { button: MouseButton, position: Vec2 },
    MouseButtonUp { button: MouseButton, position: Vec2 },
    /// Window resized to `width` x `height` pixels.
    Resized { width: i32, height: i32 },
}

impl UiEvent {
    /// Pointer position carried by mouse events.
    pub fn position(&self) -> Option<Vec2> {
        match self {
            UiEvent::MouseMoved { position }
            | UiEvent::MouseButtonDown { position, .. }
            | UiEvent::MouseButtonUp { position, .. } => Some(*position),
            UiEvent::Resized { .. } => None,
        }
    }
}

/// Kinds of mouse notification a widget can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventType {
    Down,
    Up,
    /// Down and up both landed on the widget.
    Click,
    /// Pointer moved into the widget.
    Enter,
    /// Pointer moved out of the widget.
    Exit,
}

/// What a listener is told when it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub widget: WidgetId,
    pub kind: MouseEventType,
    /// `None` for Enter and Exit.
    pub button: Option<MouseButton>,
    pub position: Vec2,
}

/// Mouse listener. Returning `true` stops the event from reaching widgets
/// further along the dispatch order.
///
/// Listeners get the tree mutably, so they may restructure it, including
/// destroying the widget they are attached to.
pub type MouseCallback = Rc<dyn Fn(&mut UiTree, &MouseEvent) -> bool>;

/// Listeners of one widget, per event type, in registration order.
#[derive(Default, Clone)]
pub struct Listeners {
    by_type: HashMap<MouseEventType, IndexMap<ListenerId, MouseCallback>>,
}

impl Listeners {
    pub fn insert(&mut self, kind: MouseEventType, id: ListenerId, callback: MouseCallback) {
        self.by_type.entry(kind).or_default().insert(id, callback);
    }

    /// Remove one listener. Unknown ids are ignored.
    pub fn remove(&mut self, kind: MouseEventType, id: ListenerId) -> bool {
        self.by_type
            .get_mut(&kind)
            .is_some_and(|listeners| listeners.shift_remove(&id).is_some())
    }

    /// Snapshot of the callbacks for `kind`, safe to run while the tree is
    /// being mutated.
    pub fn snapshot(&self, kind: MouseEventType) -> Vec<MouseCallback> {
        self.by_type
            .get(&kind)
            .map(|listeners| listeners.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, kind: MouseEventType) -> usize {
        self.by_type.get(&kind).map_or(0, IndexMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.values().all(IndexMap::is_empty)
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, listeners) in &self.by_type {
            map.entry(kind, &listeners.len());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> MouseCallback {
        Rc::new(|_, _| false)
    }

    #[test]
    fn test_button_codes() {
        assert_eq!(MouseButton::from_code(1), MouseButton::Left);
        assert_eq!(MouseButton::from_code(2), MouseButton::Middle);
        assert_eq!(MouseButton::from_code(3), MouseButton::Right);
        assert_eq!(MouseButton::from_code(8), MouseButton::Other(8));
    }

    #[test]
    fn test_event_position() {
        let position = Vec2::new(3.0, 4.0);
        assert_eq!(UiEvent::MouseMoved { position }.position(), Some(position));
        assert_eq!(
            UiEvent::Resized {
                width: 1,
                height: 1
            }
            .position(),
            None
        );
    }

    #[test]
    fn test_listener_registration_order() {
        let mut listeners = Listeners::default();
        listeners.insert(MouseEventType::Click, ListenerId::from_raw(2), noop());
        listeners.insert(MouseEventType::Click, ListenerId::from_raw(1), noop());
        assert_eq!(listeners.len(MouseEventType::Click), 2);
        assert_eq!(listeners.snapshot(MouseEventType::Click).len(), 2);
        assert_eq!(listeners.len(MouseEventType::Down), 0);
    }

    #[test]
    fn test_listener_removal() {
        let mut listeners = Listeners::default();
        let id = ListenerId::from_raw(5);
        listeners.insert(MouseEventType::Enter, id, noop());

        assert!(!listeners.remove(MouseEventType::Exit, id));
        assert!(listeners.remove(MouseEventType::Enter, id));
        assert!(!listeners.remove(MouseEventType::Enter, id));
        assert!(listeners.is_empty());
    }
}
