//! Text labels.
//!
//! A label's preferred size is its measured text plus padding. Whenever the
//! text, font or padding changes it is re-measured and flags itself dirty, so
//! the container holding it redistributes space on the next render.

use crate::constraint::Dimension;
use crate::dirty::DirtyFlags;
use crate::theme::Theme;
use crate::tree::UiTree;
use crate::widget::Widget;
use crate::widget_id::WidgetId;
use crate::widgets::{Justification, LabelState, WidgetKind};

impl UiTree {
    pub fn create_label(&mut self, text: impl Into<String>) -> WidgetId {
        let theme = Theme::by_name(&self.config.default_theme);
        let padding = self.config.label_padding;
        let id = self.create_widget();
        if let Some(widget) = self.get_mut(id) {
            widget.kind = WidgetKind::Label(LabelState::new(text.into(), &theme));
            widget.set_padding(padding);
        }
        self.remeasure(id);
        id
    }

    fn label_mut(&mut self, id: WidgetId) -> Option<&mut LabelState> {
        self.get_mut(id).and_then(Widget::as_label_mut)
    }

    pub fn set_text(&mut self, id: WidgetId, text: impl Into<String>) {
        let text = text.into();
        let Some(label) = self.label_mut(id) else {
            return;
        };
        if label.text == text {
            return;
        }
        label.text = text;
        self.remeasure(id);
    }

    pub fn set_font(&mut self, id: WidgetId, font: impl Into<String>) {
        let font = font.into();
        let Some(label) = self.label_mut(id) else {
            return;
        };
        if label.font == font {
            return;
        }
        label.font = font;
        self.remeasure(id);
    }

    pub fn set_font_size(&mut self, id: WidgetId, size: f32) {
        let Some(label) = self.label_mut(id) else {
            return;
        };
        if label.font_size == size {
            return;
        }
        label.font_size = size;
        self.remeasure(id);
    }

    pub fn set_justification(&mut self, id: WidgetId, justification: Justification) {
        if let Some(label) = self.label_mut(id) {
            label.justification = justification;
        }
    }

    /// Measure the label's text and update its preferred size.
    ///
    /// On a measurement failure the previous preferred size is kept.
    pub(crate) fn remeasure(&mut self, id: WidgetId) {
        let Some(widget) = self.get(id) else {
            return;
        };
        let Some(label) = widget.as_label() else {
            return;
        };
        let padding = widget.padding();
        let measured = match self.measurer.measure(&label.font, label.font_size, &label.text) {
            Ok(size) => size,
            Err(error) => {
                tracing::warn!("Could not measure {}: {}", id, error);
                return;
            }
        };

        let Some(widget) = self.get_mut(id) else {
            return;
        };
        if let Some(label) = widget.as_label_mut() {
            label.measured = measured;
        }
        let width = widget.constraints.get_mut(Dimension::Width);
        *width = width.with_preferred(Some(measured.width + padding.horizontal()));
        let height = widget.constraints.get_mut(Dimension::Height);
        *height = height.with_preferred(Some(measured.height + padding.vertical()));
        self.mark_dirty(id, DirtyFlags::TEXT);
    }
}
