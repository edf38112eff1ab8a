//! Named colour themes.
//!
//! Containers carry a theme *name*; the palette is looked up when a widget is
//! painted or re-themed. Unknown names fall back to the dark theme.

use crate::color::Color;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "Dark";

/// Colour role a widget paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Window clear colour.
    Background,
    /// Panel fill.
    Surface,
    Border,
    Text,
    /// Highlights such as the focused widget.
    Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub accent: Color,
    /// Corner radius for panels.
    pub corner_radius: i32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark",
            background: Color::from_hex(0x1E1E1E),
            surface: Color::from_hex(0x252526),
            border: Color::from_hex(0x2D2D2D),
            text: Color::from_hex(0xD4D4D4),
            accent: Color::from_hex(0x007ACC),
            corner_radius: 4,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light",
            background: Color::from_hex(0xFFFFFF),
            surface: Color::from_hex(0xE0E0E0),
            border: Color::from_hex(0xD1D1D1),
            text: Color::from_hex(0x000000),
            accent: Color::from_hex(0x0055FF),
            corner_radius: 4,
        }
    }

    /// Whether `name` resolves to a built-in theme.
    pub fn is_known(name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    /// Resolve a theme by name, case-insensitively.
    pub fn by_name(name: &str) -> Self {
        match Self::lookup(name) {
            Some(theme) => theme,
            None => {
                tracing::warn!("Unknown theme '{}', falling back to {}", name, DEFAULT_THEME);
                Self::dark()
            }
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("dark") {
            Some(Self::dark())
        } else if name.eq_ignore_ascii_case("light") {
            Some(Self::light())
        } else {
            None
        }
    }

    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Border => self.border,
            ColorRole::Text => self.text,
            ColorRole::Accent => self.accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
