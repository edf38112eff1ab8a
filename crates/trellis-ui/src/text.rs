//! Text measurement.
//!
//! Labels size themselves from the extent of their text. The tree asks a
//! [`TextMeasurer`] for that extent; real backends plug in their shaper, and
//! [`MonospaceMeasurer`] gives deterministic sizes for headless use.

use thiserror::Error;
use trellis_core::alloc::HashSet;
use trellis_core::geometry::Size;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("font '{font}' is not available")]
    UnknownFont { font: String },

    #[error("font size {size} is not usable")]
    InvalidSize { size: f32 },
}

pub trait TextMeasurer {
    /// Pixel extent of `text` set in `font` at `size`.
    fn measure(&self, font: &str, size: f32, text: &str) -> Result<Size<i32>, MeasureError>;
}

/// Fixed-advance measurer.
///
/// Every character advances by `size * advance`, every line is
/// `size * line_height` tall.
#[derive(Debug, Clone)]
pub struct MonospaceMeasurer {
    /// `None` accepts any font name.
    fonts: Option<HashSet<String>>,
    advance: f32,
    line_height: f32,
}

impl MonospaceMeasurer {
    pub fn new() -> Self {
        Self {
            fonts: None,
            advance: 0.6,
            line_height: 1.2,
        }
    }

    /// Only accept the listed font names.
    pub fn with_fonts<I, S>(mut self, fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fonts = Some(fonts.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_metrics(mut self, advance: f32, line_height: f32) -> Self {
        self.advance = advance;
        self.line_height = line_height;
        self
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, font: &str, size: f32, text: &str) -> Result<Size<i32>, MeasureError> {
        if let Some(fonts) = &self.fonts
            && !fonts.contains(font)
        {
            return Err(MeasureError::UnknownFont {
                font: font.to_string(),
            });
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(MeasureError::InvalidSize { size });
        }

        let lines = text.split('\n');
        let mut widest = 0usize;
        let mut count = 0usize;
        for line in lines {
            widest = widest.max(line.chars().count());
            count += 1;
        }

        let width = (widest as f32 * size * self.advance).round() as i32;
        let height = (count as f32 * size * self.line_height).round() as i32;
        Ok(Size::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_extent() {
        let measurer = MonospaceMeasurer::new();
        let size = measurer.measure("Mono", 10.0, "Hello").unwrap();
        assert_eq!(size, Size::new(30, 12));
    }

    #[test]
    fn test_multiline_uses_widest_line() {
        let measurer = MonospaceMeasurer::new();
        let size = measurer.measure("Mono", 10.0, "ab\nabcd").unwrap();
        assert_eq!(size, Size::new(24, 24));
    }

    #[test]
    fn test_unknown_font() {
        let measurer = MonospaceMeasurer::new().with_fonts(["Inter"]);
        assert!(measurer.measure("Inter", 12.0, "x").is_ok());
        assert_eq!(
            measurer.measure("Comic", 12.0, "x"),
            Err(MeasureError::UnknownFont {
                font: "Comic".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_size() {
        let measurer = MonospaceMeasurer::new();
        assert!(matches!(
            measurer.measure("Mono", 0.0, "x"),
            Err(MeasureError::InvalidSize { .. })
        ));
    }
}
