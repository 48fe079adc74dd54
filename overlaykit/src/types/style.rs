use super::Color;

/// Presentation colours. Layout never looks at these.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Color>,
    pub border_width: f32,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = Some(color);
        self.border_width = width.max(0.0);
        self
    }
}
