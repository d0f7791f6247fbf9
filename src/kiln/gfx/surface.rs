use core::ptr::NonNull;

use crate::kiln::error::{self, Error, Result};
use crate::kiln::init::was_init;
use crate::kiln::sys;

use super::{Color, Rect};

/// An owned software pixel buffer in `SDL_PIXELFORMAT_ABGR8888`.
#[derive(Debug)]
pub struct Surface {
    raw: NonNull<sys::SDL_Surface>,
    width: i32,
    height: i32,
}

impl Surface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if !was_init() {
            return Err(Error::NotInitialized);
        }
        let raw = unsafe {
            sys::SDL_CreateRGBSurfaceWithFormat(0, width, height, 32, sys::SDL_PIXELFORMAT_ABGR8888)
        };
        let raw = error::non_null(raw, "SDL_CreateRGBSurfaceWithFormat")?;
        tracing::debug!(width, height, "surface created");
        Ok(Self { raw, width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }
    pub fn height(&self) -> i32 {
        self.height
    }
    pub fn raw(&self) -> *mut sys::SDL_Surface {
        self.raw.as_ptr()
    }

    /// Copies the `from` region of `self` onto the `to` region of `dst`.
    ///
    /// Either region may be a [`Rect`], an `(x, y, w, h)` tuple, an `Option` of
    /// those, or [`Rect::NONE`] for the whole surface.
    pub fn blit(&self, dst: &mut Surface, from: impl Into<Rect>, to: impl Into<Rect>) -> Result<()> {
        let from = from.into();
        // SDL writes the clipped destination back; keep that on a local copy.
        let mut to = to.into().raw();
        let to_ptr = to.as_mut().map_or(core::ptr::null_mut(), |r| r as *mut sys::SDL_Rect);
        let status = unsafe { sys::SDL_UpperBlit(self.raw(), from.as_ptr(), dst.raw(), to_ptr) };
        error::check(status, "SDL_UpperBlit")
    }

    /// Fills `rect` (or the whole surface when absent) with `color`.
    pub fn fill(&mut self, rect: impl Into<Rect>, color: Color) -> Result<()> {
        let rect = rect.into();
        let status = unsafe { sys::SDL_FillRect(self.raw(), rect.as_ptr(), color.to_raw()) };
        error::check(status, "SDL_FillRect")
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        unsafe { sys::SDL_FreeSurface(self.raw.as_ptr()) };
    }
}
