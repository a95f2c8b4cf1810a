use super::{Border, Color, TextStyle};

/// Visual properties of an element. The foreground color is shared by the
/// element's own text and its border glyphs; children carry their own style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
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

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style = self.text_style.bold();
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style = self.text_style.dim();
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style = self.text_style.italic();
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style = self.text_style.underline();
        self
    }
}
