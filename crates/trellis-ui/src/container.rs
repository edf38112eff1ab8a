//! Container operations: layout application, arrangement setters and theme
//! propagation.

use crate::constraint::{Constraint, SizeConstraints};
use crate::layout::{self, Direction, LayoutInput, SpacingPolicy};
use crate::theme::Theme;
use crate::tree::UiTree;
use crate::widget::Widget;
use crate::widget_id::WidgetId;
use crate::widgets::WidgetKind;
use trellis_core::profiling::profile_function;

impl UiTree {
    /// Recompute child rectangles of `id` and of every container below it.
    ///
    /// Does nothing for widgets that are not containers. Clears dirty flags
    /// on the visited subtree.
    pub fn relayout(&mut self, id: WidgetId) {
        profile_function!();
        let Some(widget) = self.get(id) else {
            return;
        };
        let Some(state) = widget.as_container() else {
            self.clear_dirty(id);
            return;
        };

        let children = state.children.clone();
        let constraints: Vec<SizeConstraints> = children
            .iter()
            .map(|child| self.get(*child).map(Widget::constraints).unwrap_or_default())
            .collect();
        let output = layout::solve(&LayoutInput {
            content: widget.content_area(),
            direction: state.direction,
            policy: state.policy,
            gap: state.gap,
            children: &constraints,
        });

        if let Some(state) = self.get_mut(id).and_then(Widget::as_container_mut) {
            state.spacing = output.spacing;
        }
        self.clear_dirty(id);

        for (child, bounds) in children.iter().zip(output.bounds) {
            if let Some(widget) = self.get_mut(*child) {
                widget.set_bounds(bounds);
            }
            self.relayout(*child);
        }
    }

    /// Relayout containers flagged dirty since the last pass.
    pub(crate) fn refresh_layout(&mut self, id: WidgetId) {
        let Some(widget) = self.get(id) else {
            return;
        };
        if widget.is_container() && widget.dirty_flags().needs_layout() {
            tracing::trace!("Relayout of dirty container {}", id);
            self.relayout(id);
            return;
        }
        let children = widget.children().to_vec();
        for child in children {
            self.refresh_layout(child);
        }
    }

    fn container_mut(&mut self, id: WidgetId) -> Option<&mut crate::widgets::ContainerState> {
        self.get_mut(id).and_then(Widget::as_container_mut)
    }

    pub fn set_direction(&mut self, id: WidgetId, direction: Direction) {
        let Some(state) = self.container_mut(id) else {
            return;
        };
        if state.direction == direction {
            return;
        }
        state.direction = direction;
        self.relayout(id);
    }

    pub fn set_spacing_policy(&mut self, id: WidgetId, policy: SpacingPolicy) {
        let Some(state) = self.container_mut(id) else {
            return;
        };
        if state.policy == policy {
            return;
        }
        state.policy = policy;
        self.relayout(id);
    }

    /// Bounds on the gap between children. Negative values clamp to zero.
    pub fn set_spacing_constraint(&mut self, id: WidgetId, min: i32, max: i32) {
        let Some(state) = self.container_mut(id) else {
            return;
        };
        let gap = Constraint::new(min, max);
        if state.gap == gap {
            return;
        }
        state.gap = gap;
        self.relayout(id);
    }

    /// Theme `id` and everything below it.
    pub fn set_theme(&mut self, id: WidgetId, name: &str) {
        if !self.get(id).is_some_and(Widget::is_container) {
            return;
        }
        tracing::debug!("Theme of {} set to {}", id, name);
        self.apply_theme(id, name);
    }

    pub(crate) fn apply_theme(&mut self, id: WidgetId, name: &str) {
        let theme = Theme::by_name(name);
        for node in self.subtree(id) {
            let Some(widget) = self.get_mut(node) else {
                continue;
            };
            match &mut widget.kind {
                WidgetKind::Container(state) => state.apply_theme(name, &theme),
                WidgetKind::Label(state) => state.color = theme.text,
                WidgetKind::Plain => {}
            }
        }
    }
}
