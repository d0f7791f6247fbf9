use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::kiln::error::{self, Result};
use crate::kiln::sys;
use crate::kiln::video::Renderer;

use super::Surface;

/// A GPU-side image owned by the renderer that created it.
#[derive(Debug)]
pub struct Texture<'r> {
    raw: NonNull<sys::SDL_Texture>,
    _renderer: PhantomData<&'r Renderer<'r>>,
}

impl<'r> Texture<'r> {
    /// Uploads `surface` through `renderer`. The surface may be dropped afterwards.
    pub fn from_surface(renderer: &'r Renderer<'_>, surface: &Surface) -> Result<Self> {
        let raw = unsafe { sys::SDL_CreateTextureFromSurface(renderer.raw(), surface.raw()) };
        let raw = error::non_null(raw, "SDL_CreateTextureFromSurface")?;
        tracing::debug!(width = surface.width(), height = surface.height(), "texture created");
        Ok(Self { raw, _renderer: PhantomData })
    }

    pub fn raw(&self) -> *mut sys::SDL_Texture {
        self.raw.as_ptr()
    }
}

impl Drop for Texture<'_> {
    fn drop(&mut self) {
        unsafe { sys::SDL_DestroyTexture(self.raw.as_ptr()) };
    }
}
