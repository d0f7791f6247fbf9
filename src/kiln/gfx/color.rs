use crate::kiln::sys::SDL_Color;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Packs the channels as `a << 24 | b << 16 | g << 8 | r`.
    ///
    /// This is `SDL_PIXELFORMAT_ABGR8888`, the format [`Surface`](super::Surface)
    /// is created with. It is not ARGB.
    pub fn to_raw(self) -> u32 {
        let bytes: [u8; 4] = zerocopy::transmute!(SDL_Color::from(self));
        u32::from_le_bytes(bytes)
    }
}

impl From<Color> for SDL_Color {
    fn from(c: Color) -> Self {
        SDL_Color { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

impl From<SDL_Color> for Color {
    fn from(c: SDL_Color) -> Self {
        Color::new(c.r, c.g, c.b, c.a)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::new(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}
