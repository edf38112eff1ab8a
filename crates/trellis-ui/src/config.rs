//! Tunables for a widget tree and its window.

use crate::theme::DEFAULT_THEME;
use trellis_core::geometry::Insets;

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Theme the root container starts with.
    pub default_theme: String,
    /// Sidebar width is the window width divided by this.
    pub sidebar_fraction: i32,
    /// Sidebar slide speed in pixels per second.
    pub sidebar_speed: f64,
    /// Padding given to panels by the factory.
    pub panel_padding: Insets,
    /// Padding given to labels by the factory.
    pub label_padding: Insets,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: DEFAULT_THEME.to_string(),
            sidebar_fraction: 4,
            sidebar_speed: 1500.0,
            panel_padding: Insets::all(10),
            label_padding: Insets::symmetric(12, 6),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.default_theme = name.into();
        self
    }

    /// Values below one are raised to one.
    pub fn with_sidebar_fraction(mut self, fraction: i32) -> Self {
        self.sidebar_fraction = fraction.max(1);
        self
    }

    /// Negative speeds are treated as zero, which disables animation and
    /// snaps the sidebar open or closed.
    pub fn with_sidebar_speed(mut self, pixels_per_second: f64) -> Self {
        self.sidebar_speed = pixels_per_second.max(0.0);
        self
    }

    pub fn with_panel_padding(mut self, padding: Insets) -> Self {
        self.panel_padding = padding;
        self
    }

    pub fn with_label_padding(mut self, padding: Insets) -> Self {
        self.label_padding = padding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.default_theme, "Dark");
        assert_eq!(config.sidebar_fraction, 4);
        assert_eq!(config.panel_padding, Insets::all(10));
        assert_eq!(config.label_padding, Insets::new(12, 12, 6, 6));
    }

    #[test]
    fn test_setters_clamp() {
        let config = UiConfig::new()
            .with_sidebar_fraction(0)
            .with_sidebar_speed(-10.0)
            .with_theme("Light");
        assert_eq!(config.sidebar_fraction, 1);
        assert_eq!(config.sidebar_speed, 0.0);
        assert_eq!(config.default_theme, "Light");
    }
}
