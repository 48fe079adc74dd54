//! The drawing surface controls paint onto.

use crate::layout::{Point, Rect};
use crate::types::Color;

/// Opaque handle to a texture owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Primitive drawing calls, all in absolute pixel coordinates.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, color: &Color);
    fn stroke_rect(&mut self, rect: Rect, color: &Color, thickness: f32);
    fn line(&mut self, from: Point, to: Point, color: &Color, thickness: f32);
    fn text(&mut self, origin: Point, text: &str, color: &Color);
    fn blit(&mut self, texture: TextureId, dest: Rect);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        thickness: f32,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        thickness: f32,
    },
    Text {
        origin: Point,
        text: String,
        color: Color,
    },
    Blit {
        texture: TextureId,
        dest: Rect,
    },
}

/// A painter that records its calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
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

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Painter for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &Color, thickness: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.clone(),
            thickness,
        });
    }

    fn line(&mut self, from: Point, to: Point, color: &Color, thickness: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: color.clone(),
            thickness,
        });
    }

    fn text(&mut self, origin: Point, text: &str, color: &Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            color: color.clone(),
        });
    }

    fn blit(&mut self, texture: TextureId, dest: Rect) {
        self.commands.push(DrawCommand::Blit { texture, dest });
    }
}
