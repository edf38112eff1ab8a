//! Paint walk.
//!
//! Parents paint before their children and children in list order, so later
//! siblings draw over earlier ones. Every draw call is clipped to the bounds
//! of the widget issuing it; widgets with an empty clip are skipped along with
//! their subtree.
//!
//! A second overlay walk in the same order follows the main walk. Anything
//! drawn there, such as the focus outline, sits above every widget of the
//! subtree.

use crate::draw_list::{RenderSurface, TextCommand};
use crate::theme::Theme;
use crate::tree::UiTree;
use crate::widget::Widget;
use crate::widget_id::WidgetId;
use crate::widgets::{ContainerState, LabelState, WidgetKind};
use trellis_core::geometry::Pos;
use trellis_core::profiling::profile_function;

impl UiTree {
    /// Bring dirty layout up to date and paint the subtree at `id`.
    pub fn render<S: RenderSurface + ?Sized>(&mut self, id: WidgetId, surface: &mut S) {
        profile_function!();
        self.refresh_layout(id);
        self.paint(id, surface);
        self.paint_overlay(id, surface);
    }

    /// Paint the subtree at `id` as it is currently laid out.
    pub fn paint<S: RenderSurface + ?Sized>(&self, id: WidgetId, surface: &mut S) {
        let Some(widget) = self.get(id) else {
            return;
        };
        if widget.bounds().is_empty() {
            return;
        }

        match widget.kind() {
            WidgetKind::Plain => {}
            WidgetKind::Container(state) => paint_container(widget, state, surface),
            WidgetKind::Label(state) => paint_label(widget, state, surface),
        }

        for child in widget.children() {
            self.paint(*child, surface);
        }
    }

    /// Paint the overlay layer of the subtree at `id`.
    pub fn paint_overlay<S: RenderSurface + ?Sized>(&self, id: WidgetId, surface: &mut S) {
        let Some(widget) = self.get(id) else {
            return;
        };
        if widget.bounds().is_empty() {
            return;
        }

        if let WidgetKind::Container(state) = widget.kind() {
            paint_focus_outline(widget, state, surface);
        }

        for child in widget.children() {
            self.paint_overlay(*child, surface);
        }
    }
}

fn paint_container<S: RenderSurface + ?Sized>(
    widget: &Widget,
    state: &ContainerState,
    surface: &mut S,
) {
    let Some(background) = state.background() else {
        return;
    };
    let bounds = widget.bounds();
    surface.fill_rounded_rect(bounds, bounds, background.radius, background.color);
}

fn paint_focus_outline<S: RenderSurface + ?Sized>(
    widget: &Widget,
    state: &ContainerState,
    surface: &mut S,
) {
    let Some(background) = state.background() else {
        return;
    };
    if !widget.is_focused() {
        return;
    }
    let bounds = widget.bounds();
    let accent = Theme::by_name(state.theme()).accent;
    surface.stroke_rounded_rect(bounds, bounds, background.radius, 1, accent);
}

fn paint_label<S: RenderSurface + ?Sized>(widget: &Widget, state: &LabelState, surface: &mut S) {
    let content = widget.content_area();
    if content.is_empty() || state.text().is_empty() {
        return;
    }

    let measured = state.measured();
    let origin = Pos::new(
        content.x + state.justify_offset(content.width),
        content.y + ((content.height - measured.height) / 2).max(0),
    );
    let command = TextCommand {
        origin,
        text: state.text().to_string(),
        font: state.font().to_string(),
        size: state.font_size(),
        color: state.color(),
    };
    if !surface.text(content, &command) {
        tracing::trace!("Skipped text of {}, font unavailable", widget.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::{DrawCommand, DrawList};
    use trellis_core::geometry::Rect;

    #[test]
    fn test_parent_paints_before_children() {
        let mut tree = UiTree::new();
        let root = tree.root();
        let panel = tree.create_panel();
        let label = tree.create_label("hi");
        tree.add_child(panel, label).unwrap();
        tree.add_child(root, panel).unwrap();
        tree.set_bounds(root, Rect::new(0, 0, 200, 100));

        let mut list = DrawList::new();
        tree.render(root, &mut list);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::FillRoundedRect { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_zero_area_widget_is_skipped() {
        let mut tree = UiTree::new();
        let panel = tree.create_panel();
        let mut list = DrawList::new();
        tree.render(panel, &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_focused_panel_gets_outline() {
        let mut tree = UiTree::new();
        let panel = tree.create_panel();
        tree.set_bounds(panel, Rect::new(0, 0, 50, 50));
        tree.set_focused(Some(panel));

        let mut list = DrawList::new();
        tree.paint(panel, &mut list);
        assert_eq!(list.len(), 1);
        tree.paint_overlay(panel, &mut list);
        assert!(matches!(
            list.commands()[1],
            DrawCommand::StrokeRoundedRect { thickness: 1, .. }
        ));
    }

    #[test]
    fn test_focus_outline_is_drawn_above_later_siblings() {
        let mut tree = UiTree::new();
        let root = tree.root();
        let first = tree.create_panel();
        let second = tree.create_panel();
        tree.add_child(root, first).unwrap();
        tree.add_child(root, second).unwrap();
        tree.set_bounds(root, Rect::new(0, 0, 200, 100));
        tree.set_focused(Some(first));

        let mut list = DrawList::new();
        tree.render(root, &mut list);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[1], DrawCommand::FillRoundedRect { .. }));
        match &list.commands()[2] {
            DrawCommand::StrokeRoundedRect { rect, .. } => {
                assert_eq!(*rect, tree.get(first).unwrap().bounds());
            }
            other => panic!("expected the focus outline, got {:?}", other),
        }
    }
}
