//! Raw SDL2 surface used by the safe wrappers.
//!
//! - Opaque handle types and the `#[repr(C)]` records SDL2 passes by pointer.
//! - SDL2 constants for subsystems, window/renderer flags and pixel formats.
//! - One backend, picked at compile time: `native` (the default) links libSDL2,
//!   `headless` swaps in an in-process stand-in with the same functions.
//!
//! Everything callable here is `unsafe` and follows SDL2's own contracts.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

#[cfg(all(feature = "native", not(feature = "headless")))]
#[path = "native.rs"]
mod backend;

#[cfg(feature = "headless")]
#[path = "headless.rs"]
mod backend;

#[cfg(not(any(feature = "native", feature = "headless")))]
compile_error!("kiln-sdl needs a backend: enable `native` (libSDL2) or `headless`");

pub use backend::*;

// Opaque handles. Only ever seen behind a pointer.
#[repr(C)]
pub struct SDL_Window {
    _private: [u8; 0],
}
#[repr(C)]
pub struct SDL_Renderer {
    _private: [u8; 0],
}
#[repr(C)]
pub struct SDL_Surface {
    _private: [u8; 0],
}
#[repr(C)]
pub struct SDL_Texture {
    _private: [u8; 0],
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct SDL_Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct SDL_Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct SDL_version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

// SDL_Init subsystems
pub const SDL_INIT_TIMER: u32 = 0x0000_0001;
pub const SDL_INIT_AUDIO: u32 = 0x0000_0010;
pub const SDL_INIT_VIDEO: u32 = 0x0000_0020;
pub const SDL_INIT_JOYSTICK: u32 = 0x0000_0200;
pub const SDL_INIT_HAPTIC: u32 = 0x0000_1000;
pub const SDL_INIT_GAMECONTROLLER: u32 = 0x0000_2000;
pub const SDL_INIT_EVENTS: u32 = 0x0000_4000;
pub const SDL_INIT_SENSOR: u32 = 0x0000_8000;
pub const SDL_INIT_NOPARACHUTE: u32 = 0x0010_0000;
pub const SDL_INIT_EVERYTHING: u32 = SDL_INIT_TIMER
    | SDL_INIT_AUDIO
    | SDL_INIT_VIDEO
    | SDL_INIT_EVENTS
    | SDL_INIT_JOYSTICK
    | SDL_INIT_HAPTIC
    | SDL_INIT_GAMECONTROLLER
    | SDL_INIT_SENSOR;

// SDL_WindowFlags
pub const SDL_WINDOW_FULLSCREEN: u32 = 0x0000_0001;
pub const SDL_WINDOW_OPENGL: u32 = 0x0000_0002;
pub const SDL_WINDOW_SHOWN: u32 = 0x0000_0004;
pub const SDL_WINDOW_HIDDEN: u32 = 0x0000_0008;
pub const SDL_WINDOW_BORDERLESS: u32 = 0x0000_0010;
pub const SDL_WINDOW_RESIZABLE: u32 = 0x0000_0020;
pub const SDL_WINDOW_MINIMIZED: u32 = 0x0000_0040;
pub const SDL_WINDOW_MAXIMIZED: u32 = 0x0000_0080;
pub const SDL_WINDOW_MOUSE_GRABBED: u32 = 0x0000_0100;
pub const SDL_WINDOW_INPUT_FOCUS: u32 = 0x0000_0200;
pub const SDL_WINDOW_MOUSE_FOCUS: u32 = 0x0000_0400;
pub const SDL_WINDOW_FULLSCREEN_DESKTOP: u32 = SDL_WINDOW_FULLSCREEN | 0x0000_1000;
pub const SDL_WINDOW_FOREIGN: u32 = 0x0000_0800;
pub const SDL_WINDOW_ALLOW_HIGHDPI: u32 = 0x0000_2000;
pub const SDL_WINDOW_MOUSE_CAPTURE: u32 = 0x0000_4000;
pub const SDL_WINDOW_ALWAYS_ON_TOP: u32 = 0x0000_8000;
pub const SDL_WINDOW_SKIP_TASKBAR: u32 = 0x0001_0000;
pub const SDL_WINDOW_UTILITY: u32 = 0x0002_0000;
pub const SDL_WINDOW_TOOLTIP: u32 = 0x0004_0000;
pub const SDL_WINDOW_POPUP_MENU: u32 = 0x0008_0000;
pub const SDL_WINDOW_KEYBOARD_GRABBED: u32 = 0x0010_0000;
pub const SDL_WINDOW_VULKAN: u32 = 0x1000_0000;
pub const SDL_WINDOW_METAL: u32 = 0x2000_0000;

pub const SDL_WINDOWPOS_UNDEFINED: i32 = 0x1FFF_0000;
pub const SDL_WINDOWPOS_CENTERED: i32 = 0x2FFF_0000;

// SDL_RendererFlags
pub const SDL_RENDERER_SOFTWARE: u32 = 0x0000_0001;
pub const SDL_RENDERER_ACCELERATED: u32 = 0x0000_0002;
pub const SDL_RENDERER_PRESENTVSYNC: u32 = 0x0000_0004;
pub const SDL_RENDERER_TARGETTEXTURE: u32 = 0x0000_0008;

/// 32-bit pixels laid out R, G, B, A in memory on little-endian hosts.
pub const SDL_PIXELFORMAT_ABGR8888: u32 = 0x1676_2004;

#[cfg(all(test, feature = "headless"))]
mod tests {
    use super::*;

    #[test]
    fn headless_wins_over_the_default_backend() {
        // `native` is normally on too; the stand-in still answers.
        let mut v = SDL_version { major: 0, minor: 0, patch: 0 };
        unsafe { SDL_GetVersion(&mut v) };
        assert_eq!(v, HEADLESS_VERSION);
    }
}
