//! Windows and the renderers drawing into them.

mod renderer;
mod window;

pub use renderer::Renderer;
pub use window::{Window, WindowBuilder};
