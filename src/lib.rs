#![deny(unsafe_op_in_unsafe_fn)]

pub mod kiln {
    pub mod error;
    pub mod flags;
    pub mod gfx;
    pub mod init;
    pub mod sys; // raw SDL2 symbols; `headless` feature swaps out libSDL2
    pub mod video;
}

pub use crate::kiln::{error, flags, gfx, init, sys, video};
pub use crate::kiln::error::{Error, Result};

// Short, SDL-style alias with the everyday names in one place.
pub mod sdl {
    // Lifecycle
    pub use crate::kiln::init::{clear_error, get_error, init, init_default, quit, version, was_init, Version};
    // Flags
    pub use crate::kiln::flags::{Flag, Flags, InitFlag, RendererFlag, WindowFlag};
    // Owned handles
    pub use crate::kiln::gfx::{Surface, Texture};
    pub use crate::kiln::video::{Renderer, Window, WindowBuilder};
    // Values
    pub use crate::kiln::gfx::{Color, Rect};
    pub use crate::kiln::error::{Error, Result};
}
