//! Render surface abstraction and a recording implementation.
//!
//! Widgets paint through [`RenderSurface`], which exposes the handful of
//! primitives the tree needs. Every call carries the clip rectangle of the
//! widget issuing it. [`DrawList`] records the calls in order, which is what
//! headless hosts and tests use; GPU backends encode the same calls directly.

use crate::color::Color;
use trellis_core::alloc::HashSet;
use trellis_core::geometry::{Pos, Rect};
use trellis_core::profiling::profile_function;

/// Drawing primitives the widget tree paints with.
///
/// `textured_quad` and `text` report whether the resource they need was
/// available. A `false` return means nothing was drawn; callers skip the
/// element and carry on.
pub trait RenderSurface {
    fn fill_rounded_rect(&mut self, clip: Rect<i32>, rect: Rect<i32>, radius: i32, color: Color);

    fn stroke_rounded_rect(
        &mut self,
        clip: Rect<i32>,
        rect: Rect<i32>,
        radius: i32,
        thickness: i32,
        color: Color,
    );

    /// Arc around `center`, angles in degrees.
    fn arc(&mut self, clip: Rect<i32>, arc: ArcCommand);

    fn textured_quad(&mut self, clip: Rect<i32>, texture: &str, dest: Rect<i32>, angle: f32)
    -> bool;

    fn text(&mut self, clip: Rect<i32>, text: &TextCommand) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcCommand {
    pub center: Pos<i32>,
    pub radius: i32,
    pub start_degrees: f32,
    pub end_degrees: f32,
    pub thickness: i32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// Top-left corner of the text box.
    pub origin: Pos<i32>,
    pub text: String,
    pub font: String,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRoundedRect {
        clip: Rect<i32>,
        rect: Rect<i32>,
        radius: i32,
        color: Color,
    },
    StrokeRoundedRect {
        clip: Rect<i32>,
        rect: Rect<i32>,
        radius: i32,
        thickness: i32,
        color: Color,
    },
    Arc {
        clip: Rect<i32>,
        arc: ArcCommand,
    },
    TexturedQuad {
        clip: Rect<i32>,
        texture: String,
        dest: Rect<i32>,
        angle: f32,
    },
    Text {
        clip: Rect<i32>,
        text: TextCommand,
    },
}

impl DrawCommand {
    pub fn clip(&self) -> Rect<i32> {
        match self {
            DrawCommand::FillRoundedRect { clip, .. }
            | DrawCommand::StrokeRoundedRect { clip, .. }
            | DrawCommand::Arc { clip, .. }
            | DrawCommand::TexturedQuad { clip, .. }
            | DrawCommand::Text { clip, .. } => *clip,
        }
    }
}

/// Records draw calls in submission order.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    textures: HashSet<String>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            textures: HashSet::new(),
        }
    }

    /// Make `name` available to [`RenderSurface::textured_quad`].
    pub fn register_texture(&mut self, name: impl Into<String>) {
        self.textures.insert(name.into());
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands, keeping registered textures.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded text, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        })
    }
}

impl RenderSurface for DrawList {
    fn fill_rounded_rect(&mut self, clip: Rect<i32>, rect: Rect<i32>, radius: i32, color: Color) {
        profile_function!();
        self.commands.push(DrawCommand::FillRoundedRect {
            clip,
            rect,
            radius,
            color,
        });
    }

    fn stroke_rounded_rect(
        &mut self,
        clip: Rect<i32>,
        rect: Rect<i32>,
        radius: i32,
        thickness: i32,
        color: Color,
    ) {
        self.commands.push(DrawCommand::StrokeRoundedRect {
            clip,
            rect,
            radius,
            thickness,
            color,
        });
    }

    fn arc(&mut self, clip: Rect<i32>, arc: ArcCommand) {
        self.commands.push(DrawCommand::Arc { clip, arc });
    }

    fn textured_quad(
        &mut self,
        clip: Rect<i32>,
        texture: &str,
        dest: Rect<i32>,
        angle: f32,
    ) -> bool {
        if !self.textures.contains(texture) {
            return false;
        }
        self.commands.push(DrawCommand::TexturedQuad {
            clip,
            texture: texture.to_string(),
            dest,
            angle,
        });
        true
    }

    fn text(&mut self, clip: Rect<i32>, text: &TextCommand) -> bool {
        profile_function!();
        self.commands.push(DrawCommand::Text {
            clip,
            text: text.clone(),
        });
        true
    }
}
