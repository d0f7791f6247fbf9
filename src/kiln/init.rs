//! Library lifecycle: start, stop, query, last error, version.
//!
//! Nothing here caches state. `was_init` asks the library every time, and
//! `init`/`quit` decide what to do from that answer.

use core::fmt;

use zerocopy::FromZeros;

use crate::kiln::error::{self, Result};
use crate::kiln::flags::{Flags, InitFlag};
use crate::kiln::sys;

/// Starts the library with `flags` unless it is already running.
///
/// A second call while running is a no-op, not an error.
pub fn init(flags: impl Into<Flags<InitFlag>>) -> Result<()> {
    if was_init() {
        tracing::debug!("SDL already initialized");
        return Ok(());
    }
    let bits = flags.into().bits();
    error::check(unsafe { sys::SDL_Init(bits) }, "SDL_Init")?;
    tracing::debug!(flags = bits, "SDL initialized");
    Ok(())
}

/// Starts the library with the default subsystems.
pub fn init_default() -> Result<()> {
    init(Flags::<InitFlag>::default())
}

/// Whether any subsystem is currently running.
pub fn was_init() -> bool {
    unsafe { sys::SDL_WasInit(0) != 0 }
}

/// Shuts the library down if it is running.
///
/// # Safety
///
/// No [`Window`](crate::video::Window), [`Renderer`](crate::video::Renderer) or
/// [`Texture`](crate::gfx::Texture) may be alive. Shutting video down destroys
/// them, and their `Drop` would then free the handles a second time.
pub unsafe fn quit() {
    if !was_init() {
        return;
    }
    // SAFETY: the caller has dropped every handle the shutdown destroys.
    unsafe { sys::SDL_Quit() };
    tracing::debug!("SDL shut down");
}

/// The library's last error message, empty if none is set.
///
/// The next failing call overwrites it; read it right after the failure.
pub fn get_error() -> String {
    error::last_error_string()
}

pub fn clear_error() {
    unsafe { sys::SDL_ClearError() };
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version of the library actually linked.
pub fn version() -> Version {
    let mut raw = sys::SDL_version::new_zeroed();
    unsafe { sys::SDL_GetVersion(&mut raw) };
    Version { major: raw.major, minor: raw.minor, patch: raw.patch }
}
