//! Error type shared by every wrapper.

use core::ffi::{c_int, CStr};
use core::ptr::NonNull;

use thiserror::Error;

use crate::kiln::sys;

/// Errors surfaced by the safe wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A wrapper was constructed before [`init`](crate::kiln::init::init).
    #[error("SDL is not initialized")]
    NotInitialized,
    /// A native call reported failure.
    ///
    /// `message` is the library's last-error text, read right after the call.
    #[error("{call} failed: {message}")]
    Native { call: &'static str, message: String },
    /// A string handed to SDL contained a NUL byte.
    #[error("string contains a nul byte at position {position}")]
    InteriorNul { position: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Builds a `Native` error from the library's current last-error string.
    ///
    /// SDL keeps one error string per process and the next failure replaces it,
    /// so call this before issuing any other native call.
    pub fn last(call: &'static str) -> Self {
        let message = last_error_string();
        tracing::warn!(call, %message, "native call failed");
        Error::Native { call, message }
    }
}

impl From<std::ffi::NulError> for Error {
    fn from(err: std::ffi::NulError) -> Self {
        Error::InteriorNul { position: err.nul_position() }
    }
}

pub(crate) fn last_error_string() -> String {
    let ptr = unsafe { sys::SDL_GetError() };
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

// Status-code convention: zero is success, anything else is failure.
pub(crate) fn check(status: c_int, call: &'static str) -> Result<()> {
    if status == 0 {
        Ok(())
    } else {
        Err(Error::last(call))
    }
}

// Handle convention: null is failure.
pub(crate) fn non_null<T>(ptr: *mut T, call: &'static str) -> Result<NonNull<T>> {
    NonNull::new(ptr).ok_or_else(|| Error::last(call))
}

#[cfg(all(test, feature = "headless"))]
mod tests {
    use super::*;

    #[test]
    fn check_maps_status_codes() {
        assert_eq!(check(0, "SDL_RenderClear"), Ok(()));
        unsafe { sys::SDL_RenderClear(core::ptr::null_mut()) };
        let err = check(-1, "SDL_RenderClear").unwrap_err();
        assert_eq!(
            err,
            Error::Native { call: "SDL_RenderClear", message: "Invalid renderer".into() }
        );
        assert_eq!(err.to_string(), "SDL_RenderClear failed: Invalid renderer");
    }

    #[test]
    fn non_null_captures_error_text() {
        sys::headless_reset();
        let ptr = unsafe { sys::SDL_CreateWindow(core::ptr::null(), 0, 0, 1, 1, 0) };
        let err = non_null(ptr, "SDL_CreateWindow").unwrap_err();
        assert_eq!(
            err,
            Error::Native {
                call: "SDL_CreateWindow",
                message: "Video subsystem has not been initialized".into(),
            }
        );
    }

    #[test]
    fn nul_error_keeps_position() {
        let err: Error = std::ffi::CString::new("ab\0c").unwrap_err().into();
        assert_eq!(err, Error::InteriorNul { position: 2 });
    }
}
