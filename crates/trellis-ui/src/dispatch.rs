//! Event routing through the widget tree.
//!
//! A container offers an event to its children in list order and stops at
//! the first child that consumes it; only then does the container handle the
//! event itself. Each widget tracks hover and per-button press state:
//!
//! - pointer motion updates hover and fires Enter/Exit on transitions
//! - button down over the widget marks the button pressed and fires Down
//! - button up over the widget fires Up, then Click if the button was
//!   pressed on this widget; the pressed mark is cleared either way, also on
//!   widgets the release never reached because a sibling consumed it
//!
//! Enter and Exit never consume an event.

use crate::event::{MouseButton, MouseEvent, MouseEventType, UiEvent};
use crate::tree::UiTree;
use crate::widget::Widget;
use crate::widget_id::WidgetId;
use trellis_core::math::Vec2;
use trellis_core::profiling::profile_function;

impl UiTree {
    /// Route `event` into the subtree at `id`. Returns whether a listener
    /// consumed it.
    pub fn process_event(&mut self, id: WidgetId, event: &UiEvent) -> bool {
        profile_function!();
        let Some(widget) = self.get(id) else {
            return false;
        };

        let is_container = widget.is_container();
        let children = widget.children().to_vec();
        let mut over_child = false;
        for (index, child) in children.iter().enumerate() {
            if self.process_event(*child, event) {
                // Widgets skipped by a consumed release still drop their press.
                if let UiEvent::MouseButtonUp { button, .. } = *event {
                    for skipped in &children[index + 1..] {
                        self.release_subtree(*skipped, button);
                    }
                    self.release(id, button);
                }
                return true;
            }
            over_child |= self.get(*child).is_some_and(Widget::is_mouse_over);
        }

        let consumed = self.handle_event(id, event);

        if is_container
            && matches!(event, UiEvent::MouseButtonDown { .. })
            && !over_child
            && self.get(id).is_some_and(Widget::is_mouse_over)
        {
            self.set_focused(Some(id));
        }
        consumed
    }

    fn handle_event(&mut self, id: WidgetId, event: &UiEvent) -> bool {
        match *event {
            UiEvent::MouseMoved { position } => {
                self.update_hover(id, position);
                false
            }
            UiEvent::MouseButtonDown { button, position } => {
                self.update_hover(id, position);
                let Some(widget) = self.get_mut(id) else {
                    return false;
                };
                if !widget.mouse_over {
                    return false;
                }
                widget.pressed.insert(button, true);
                self.fire(id, MouseEventType::Down, Some(button), position)
            }
            UiEvent::MouseButtonUp { button, position } => {
                self.update_hover(id, position);
                let Some(widget) = self.get(id) else {
                    return false;
                };
                let hovered = widget.mouse_over;
                let was_pressed = widget.is_pressed(button);

                let mut consumed = false;
                if hovered {
                    consumed |= self.fire(id, MouseEventType::Up, Some(button), position);
                    if was_pressed {
                        consumed |= self.fire(id, MouseEventType::Click, Some(button), position);
                    }
                }
                self.release(id, button);
                consumed
            }
            UiEvent::Resized { .. } => false,
        }
    }

    fn release(&mut self, id: WidgetId, button: MouseButton) {
        if let Some(widget) = self.get_mut(id) {
            widget.pressed.insert(button, false);
        }
    }

    /// Clear `button`'s pressed mark on `id` and its descendants without
    /// firing listeners.
    pub(crate) fn release_subtree(&mut self, id: WidgetId, button: MouseButton) {
        for node in self.subtree(id) {
            self.release(node, button);
        }
    }

    fn update_hover(&mut self, id: WidgetId, position: Vec2) {
        let Some(widget) = self.get_mut(id) else {
            return;
        };
        let inside = widget.bounds.contains_point(position.x, position.y);
        let was_inside = widget.mouse_over;
        widget.mouse_over = inside;

        if inside && !was_inside {
            self.fire(id, MouseEventType::Enter, None, position);
        } else if !inside && was_inside {
            self.fire(id, MouseEventType::Exit, None, position);
        }
    }

    /// Run every listener of `kind` on `id`. All listeners run even after
    /// one consumes the event.
    fn fire(
        &mut self,
        id: WidgetId,
        kind: MouseEventType,
        button: Option<MouseButton>,
        position: Vec2,
    ) -> bool {
        let Some(widget) = self.get(id) else {
            return false;
        };
        let callbacks = widget.listeners.snapshot(kind);
        if callbacks.is_empty() {
            return false;
        }

        let event = MouseEvent {
            widget: id,
            kind,
            button,
            position,
        };
        tracing::trace!("{:?} on {}", kind, id);
        let mut consumed = false;
        for callback in callbacks {
            consumed |= callback(self, &event);
        }
        consumed
    }
}
