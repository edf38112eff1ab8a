//! Per-kind widget state.
//!
//! Every widget shares the fields in [`Widget`](crate::widget::Widget); what
//! differs between kinds lives here and is dispatched with a single `match`.

use crate::color::Color;
use crate::constraint::Constraint;
use crate::layout::{Direction, SpacingPolicy};
use crate::theme::Theme;
use crate::widget_id::WidgetId;
use trellis_core::geometry::Size;

#[derive(Debug, Clone)]
pub enum WidgetKind {
    /// Bare widget: bounds, listeners, no paint.
    Plain,
    Container(ContainerState),
    Label(LabelState),
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Plain => "Widget",
            WidgetKind::Container(state) if state.background.is_some() => "Panel",
            WidgetKind::Container(_) => "Container",
            WidgetKind::Label(_) => "Label",
        }
    }
}

/// Background a panel fills its bounds with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub color: Color,
    pub radius: i32,
}

#[derive(Debug, Clone)]
pub struct ContainerState {
    /// Paint and layout order.
    pub(crate) children: Vec<WidgetId>,
    pub(crate) direction: Direction,
    pub(crate) policy: SpacingPolicy,
    pub(crate) gap: Constraint,
    /// Gap resolved by the last layout pass.
    pub(crate) spacing: i32,
    pub(crate) theme: String,
    pub(crate) background: Option<Background>,
}

impl ContainerState {
    pub(crate) fn new(theme: &str) -> Self {
        Self {
            children: Vec::new(),
            direction: Direction::Row,
            policy: SpacingPolicy::Between,
            gap: Constraint::AUTO,
            spacing: 0,
            theme: theme.to_string(),
            background: None,
        }
    }

    pub(crate) fn panel(theme: &Theme, theme_name: &str) -> Self {
        Self {
            background: Some(Background {
                color: theme.surface,
                radius: theme.corner_radius,
            }),
            ..Self::new(theme_name)
        }
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn spacing_policy(&self) -> SpacingPolicy {
        self.policy
    }

    pub fn spacing_constraint(&self) -> Constraint {
        self.gap
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn background(&self) -> Option<Background> {
        self.background
    }

    pub(crate) fn apply_theme(&mut self, name: &str, theme: &Theme) {
        self.theme = name.to_string();
        if let Some(background) = &mut self.background {
            background.color = theme.surface;
            background.radius = theme.corner_radius;
        }
    }
}

/// Horizontal placement of text inside a label's content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
}

pub const DEFAULT_FONT: &str = "Sans";
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

#[derive(Debug, Clone)]
pub struct LabelState {
    pub(crate) text: String,
    pub(crate) font: String,
    pub(crate) font_size: f32,
    pub(crate) justification: Justification,
    pub(crate) color: Color,
    /// Text extent from the last successful measurement.
    pub(crate) measured: Size<i32>,
}

impl LabelState {
    pub(crate) fn new(text: String, theme: &Theme) -> Self {
        Self {
            text,
            font: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            justification: Justification::Left,
            color: theme.text,
            measured: Size::new(0, 0),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn justification(&self) -> Justification {
        self.justification
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn measured(&self) -> Size<i32> {
        self.measured
    }

    /// X offset of the text inside a content area `available` pixels wide.
    pub(crate) fn justify_offset(&self, available: i32) -> i32 {
        let slack = (available - self.measured.width).max(0);
        match self.justification {
            Justification::Left => 0,
            Justification::Center => slack / 2,
            Justification::Right => slack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_offset() {
        let mut label = LabelState::new("hi".into(), &Theme::dark());
        label.measured = Size::new(20, 10);
        assert_eq!(label.justify_offset(100), 0);
        label.justification = Justification::Center;
        assert_eq!(label.justify_offset(100), 40);
        label.justification = Justification::Right;
        assert_eq!(label.justify_offset(100), 80);
        assert_eq!(label.justify_offset(10), 0);
    }

    #[test]
    fn test_panel_takes_surface_colour() {
        let mut state = ContainerState::panel(&Theme::dark(), "Dark");
        assert_eq!(state.background.map(|b| b.color), Some(Theme::dark().surface));

        state.apply_theme("Light", &Theme::light());
        assert_eq!(state.theme(), "Light");
        assert_eq!(state.background.map(|b| b.color), Some(Theme::light().surface));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(WidgetKind::Plain.name(), "Widget");
        assert_eq!(
            WidgetKind::Container(ContainerState::new("Dark")).name(),
            "Container"
        );
        assert_eq!(
            WidgetKind::Container(ContainerState::panel(&Theme::dark(), "Dark")).name(),
            "Panel"
        );
    }
}
