use palette::{IntoColor, Oklch, Srgb};

/// Color in one of two spaces. Oklch is the authoring space (perceptually
/// uniform lightness, so `lighten`/`darken` behave predictably); everything
/// collapses to sRGB at paint time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Color::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Raise perceptual lightness by `amount` (clamped to [0, 1]).
    pub fn lighten(self, amount: f32) -> Self {
        let (l, c, h) = self.to_oklch();
        Color::Oklch {
            l: (l + amount).clamp(0.0, 1.0),
            c,
            h,
        }
    }

    /// Lower perceptual lightness by `amount` (clamped to [0, 1]).
    pub fn darken(self, amount: f32) -> Self {
        let (l, c, h) = self.to_oklch();
        Color::Oklch {
            l: (l - amount).clamp(0.0, 1.0),
            c,
            h,
        }
    }

    fn to_oklch(self) -> (f32, f32, f32) {
        match self {
            Color::Oklch { l, c, h } => (l, c, h),
            Color::Rgb { r, g, b } => {
                let oklch: Oklch = Srgb::new(r, g, b).into_format::<f32>().into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }

    /// Resolve to the sRGB value sent to the terminal.
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Rgb { r, g, b } => Rgb::new(r, g, b),
            Color::Oklch { l, c, h } => {
                let srgb: Srgb = Oklch::new(l, c, h).into_color();
                let (r, g, b) = srgb.into_format::<u8>().into_components();
                Rgb::new(r, g, b)
            }
        }
    }
}

/// Concrete 24-bit color as it lands in a buffer cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(229, 229, 229);
    pub const BLACK: Rgb = Rgb::new(16, 16, 16);
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}
