//! Pixel-side types: colors, rectangles, surfaces and textures.

mod color;
mod rect;
mod surface;
mod texture;

pub use color::Color;
pub use rect::Rect;
pub use surface::Surface;
pub use texture::Texture;
