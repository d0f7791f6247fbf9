use core::ptr::NonNull;
use std::ffi::CString;

use crate::kiln::error::{self, Error, Result};
use crate::kiln::flags::{Flags, WindowFlag};
use crate::kiln::init::was_init;
use crate::kiln::sys;

/// An owned native window.
#[derive(Debug)]
pub struct Window {
    raw: NonNull<sys::SDL_Window>,
    width: i32,
    height: i32,
    name: String,
}

impl Window {
    pub fn new(
        name: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        flags: impl Into<Flags<WindowFlag>>,
    ) -> Result<Self> {
        if !was_init() {
            return Err(Error::NotInitialized);
        }
        let title = CString::new(name)?;
        let bits = flags.into().bits();
        let raw = unsafe { sys::SDL_CreateWindow(title.as_ptr(), x, y, width, height, bits) };
        let raw = error::non_null(raw, "SDL_CreateWindow")?;
        tracing::debug!(name, width, height, flags = bits, "window created");
        Ok(Self { raw, width, height, name: name.to_string() })
    }

    pub fn builder() -> WindowBuilder {
        WindowBuilder::default()
    }

    /// Requested width, as passed at creation.
    pub fn width(&self) -> i32 {
        self.width
    }
    pub fn height(&self) -> i32 {
        self.height
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The native handle itself. Ownership stays with `self`.
    pub fn raw(&self) -> *mut sys::SDL_Window {
        self.raw.as_ptr()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe { sys::SDL_DestroyWindow(self.raw.as_ptr()) };
        tracing::debug!(name = %self.name, "window destroyed");
    }
}

/// Window settings with sensible defaults: "kiln", undefined position, 640x480.
#[derive(Debug, Clone)]
pub struct WindowBuilder {
    title: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    flags: Flags<WindowFlag>,
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self {
            title: "kiln".to_string(),
            x: sys::SDL_WINDOWPOS_UNDEFINED,
            y: sys::SDL_WINDOWPOS_UNDEFINED,
            width: 640,
            height: 480,
            flags: Flags::default(),
        }
    }
}

impl WindowBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn centered(mut self) -> Self {
        self.x = sys::SDL_WINDOWPOS_CENTERED;
        self.y = sys::SDL_WINDOWPOS_CENTERED;
        self
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn flags(mut self, flags: impl Into<Flags<WindowFlag>>) -> Self {
        self.flags = flags.into();
        self
    }

    pub fn build(self) -> Result<Window> {
        Window::new(&self.title, self.x, self.y, self.width, self.height, self.flags)
    }
}

#[cfg(all(test, feature = "headless"))]
mod tests {
    use super::*;
    use crate::kiln::init;

    #[test]
    fn requires_init() {
        sys::headless_reset();
        let err = Window::new("t", 0, 0, 640, 480, Flags::<WindowFlag>::default()).unwrap_err();
        assert_eq!(err, Error::NotInitialized);
    }

    #[test]
    fn stores_requested_geometry() {
        sys::headless_reset();
        init::init_default().unwrap();
        let w = Window::new("t", 0, 0, 640, 480, WindowFlag::Hidden).unwrap();
        assert_eq!((w.width(), w.height(), w.name()), (640, 480, "t"));
        assert!(!w.raw().is_null());
        assert_eq!(sys::headless_window_title(w.raw()).as_deref(), Some("t"));
    }

    #[test]
    fn builder_defaults() {
        sys::headless_reset();
        init::init_default().unwrap();
        let w = Window::builder().build().unwrap();
        assert_eq!((w.name(), w.width(), w.height()), ("kiln", 640, 480));
        let w2 = Window::builder().title("two").centered().size(320, 200).flags([WindowFlag::Resizable]).build().unwrap();
        assert_eq!((w2.name(), w2.width(), w2.height()), ("two", 320, 200));
    }

    #[test]
    fn each_setter_touches_only_its_fields() {
        let b = Window::builder().position(3, 4);
        assert_eq!((b.x, b.y, b.width, b.height), (3, 4, 640, 480));
        let b = b.size(10, 20);
        assert_eq!((b.x, b.y, b.width, b.height), (3, 4, 10, 20));
        let b = b.title("x").flags(WindowFlag::Borderless);
        assert_eq!((b.title.as_str(), b.flags.bits()), ("x", sys::SDL_WINDOW_BORDERLESS));
        let b = b.centered();
        assert_eq!((b.x, b.y), (sys::SDL_WINDOWPOS_CENTERED, sys::SDL_WINDOWPOS_CENTERED));
    }

    #[test]
    fn nul_in_title_is_rejected() {
        sys::headless_reset();
        init::init_default().unwrap();
        let err = Window::new("a\0b", 0, 0, 10, 10, 0u32).unwrap_err();
        assert_eq!(err, Error::InteriorNul { position: 1 });
    }

    #[test]
    fn oversized_window_carries_native_message() {
        sys::headless_reset();
        init::init_default().unwrap();
        let err = Window::new("big", 0, 0, 20_000, 10, 0u32).unwrap_err();
        assert_eq!(
            err,
            Error::Native { call: "SDL_CreateWindow", message: "Window is too large.".into() }
        );
    }
}
