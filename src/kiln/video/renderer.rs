use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::kiln::error::{self, Result};
use crate::kiln::flags::{Flags, RendererFlag};
use crate::kiln::gfx::{Color, Rect, Texture};
use crate::kiln::sys;

use super::Window;

/// A 2D rendering context bound to one window.
///
/// Borrows the window for its whole life; SDL allows one renderer per window.
#[derive(Debug)]
pub struct Renderer<'w> {
    raw: NonNull<sys::SDL_Renderer>,
    _window: PhantomData<&'w Window>,
}

impl<'w> Renderer<'w> {
    /// `index` selects a render driver; -1 picks the first one matching `flags`.
    pub fn new(window: &'w Window, index: i32, flags: impl Into<Flags<RendererFlag>>) -> Result<Self> {
        let bits = flags.into().bits();
        let raw = unsafe { sys::SDL_CreateRenderer(window.raw(), index, bits) };
        let raw = error::non_null(raw, "SDL_CreateRenderer")?;
        tracing::debug!(window = window.name(), index, flags = bits, "renderer created");
        Ok(Self { raw, _window: PhantomData })
    }

    pub fn raw(&self) -> *mut sys::SDL_Renderer {
        self.raw.as_ptr()
    }

    /// Clears the render target with the current draw color.
    pub fn clear(&self) -> Result<()> {
        error::check(unsafe { sys::SDL_RenderClear(self.raw()) }, "SDL_RenderClear")
    }

    /// Shows everything drawn since the last present.
    pub fn present(&self) {
        unsafe { sys::SDL_RenderPresent(self.raw()) }
    }

    pub fn set_draw_color(&self, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        let status = unsafe { sys::SDL_SetRenderDrawColor(self.raw(), r, g, b, a) };
        error::check(status, "SDL_SetRenderDrawColor")
    }
    pub fn set_draw_color_opaque(&self, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_draw_color(r, g, b, 255)
    }
    pub fn set_color(&self, color: Color) -> Result<()> {
        self.set_draw_color(color.r, color.g, color.b, color.a)
    }

    /// Draws the `src` part of `texture` into the `dst` part of the target.
    /// Absent rects mean the whole texture and the whole target.
    pub fn copy(&self, texture: &Texture<'_>, src: impl Into<Rect>, dst: impl Into<Rect>) -> Result<()> {
        let (src, dst) = (src.into(), dst.into());
        let status = unsafe { sys::SDL_RenderCopy(self.raw(), texture.raw(), src.as_ptr(), dst.as_ptr()) };
        error::check(status, "SDL_RenderCopy")
    }
}

impl Drop for Renderer<'_> {
    fn drop(&mut self) {
        unsafe { sys::SDL_DestroyRenderer(self.raw.as_ptr()) };
    }
}

#[cfg(all(test, feature = "headless"))]
mod tests {
    use super::*;
    use crate::kiln::error::Error;
    use crate::kiln::gfx::Surface;
    use crate::kiln::init;

    fn window() -> Window {
        sys::headless_reset();
        init::init_default().unwrap();
        Window::new("t", 0, 0, 640, 480, 0u32).unwrap()
    }

    #[test]
    fn draw_color_reaches_the_library() {
        let w = window();
        let r = Renderer::new(&w, -1, Flags::<RendererFlag>::default()).unwrap();
        r.set_draw_color(16, 16, 16, 255).unwrap();
        assert_eq!(sys::headless_draw_color(r.raw()), Some([16, 16, 16, 255]));
        r.set_draw_color_opaque(1, 2, 3).unwrap();
        assert_eq!(sys::headless_draw_color(r.raw()), Some([1, 2, 3, 255]));
        r.set_color(Color::new(9, 8, 7, 6)).unwrap();
        assert_eq!(sys::headless_draw_color(r.raw()), Some([9, 8, 7, 6]));
    }

    #[test]
    fn one_renderer_per_window() {
        let w = window();
        let _first = Renderer::new(&w, -1, RendererFlag::Software).unwrap();
        let err = Renderer::new(&w, -1, RendererFlag::Software).unwrap_err();
        assert_eq!(
            err,
            Error::Native {
                call: "SDL_CreateRenderer",
                message: "Renderer already associated with window".into(),
            }
        );
    }

    #[test]
    fn bad_driver_index_is_reported() {
        let w = window();
        let err = Renderer::new(&w, 7, Flags::<RendererFlag>::default()).unwrap_err();
        assert!(matches!(err, Error::Native { call: "SDL_CreateRenderer", .. }));
    }

    #[test]
    fn dropping_renderer_frees_the_window_slot() {
        let w = window();
        drop(Renderer::new(&w, -1, Flags::<RendererFlag>::default()).unwrap());
        Renderer::new(&w, -1, Flags::<RendererFlag>::default()).unwrap();
    }

    #[test]
    fn texture_from_surface_and_copy() {
        let w = window();
        let r = Renderer::new(&w, -1, [RendererFlag::Accelerated, RendererFlag::PresentVsync]).unwrap();
        let surface = Surface::new(32, 32).unwrap();
        let tex = Texture::from_surface(&r, &surface).unwrap();
        drop(surface);
        r.copy(&tex, Rect::NONE, Rect::NONE).unwrap();
        r.copy(&tex, (0, 0, 16, 16), (100, 100, 32, 32)).unwrap();
        r.present();
    }

    #[test]
    fn empty_surface_cannot_become_a_texture() {
        let w = window();
        let r = Renderer::new(&w, -1, Flags::<RendererFlag>::default()).unwrap();
        let surface = Surface::new(0, 0).unwrap();
        let err = Texture::from_surface(&r, &surface).unwrap_err();
        assert_eq!(
            err,
            Error::Native {
                call: "SDL_CreateTextureFromSurface",
                message: "Texture dimensions can't be 0".into(),
            }
        );
    }
}
