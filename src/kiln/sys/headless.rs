//! In-process stand-in for libSDL2.
//!
//! Exposes the same functions as the native backend with the same signatures.
//! State lives in a thread-local, so each thread sees its own library: its own
//! initialized subsystems, its own last-error string, its own handles. Handles
//! are real heap allocations tracked in a registry so that invalid or stale
//! pointers are rejected the way SDL rejects them. No pixels are touched.

use core::ffi::{c_char, c_int, CStr};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CString;

use super::{
    SDL_Rect, SDL_Renderer, SDL_Surface, SDL_Texture, SDL_Window, SDL_version, SDL_INIT_EVENTS,
    SDL_INIT_GAMECONTROLLER, SDL_INIT_JOYSTICK, SDL_INIT_NOPARACHUTE, SDL_INIT_VIDEO,
    SDL_PIXELFORMAT_ABGR8888,
};

/// Version reported by `SDL_GetVersion`.
pub const HEADLESS_VERSION: SDL_version = SDL_version { major: 2, minor: 30, patch: 0 };

const MAX_WINDOW_EXTENT: c_int = 16384;

struct WindowRecord {
    title: CString,
    renderer: Option<usize>,
}

struct RendererRecord {
    window: usize,
    draw_color: [u8; 4],
}

struct SurfaceRecord {
    width: c_int,
    height: c_int,
}

struct TextureRecord {
    renderer: usize,
}

#[derive(Default)]
struct State {
    subsystems: u32,
    error: CString,
    windows: HashMap<usize, Box<WindowRecord>>,
    renderers: HashMap<usize, Box<RendererRecord>>,
    surfaces: HashMap<usize, Box<SurfaceRecord>>,
    textures: HashMap<usize, Box<TextureRecord>>,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

fn with_state<R>(f: impl FnOnce(&mut State) -> R) -> R {
    STATE.with(|s| f(&mut s.borrow_mut()))
}

impl State {
    fn set_error(&mut self, msg: &str) {
        self.error = CString::new(msg).unwrap_or_default();
    }
}

// Box addresses double as handles; the boxes stay put while they live in the maps.
fn handle_of<T, H>(record: &T) -> *mut H {
    record as *const T as *mut H
}

pub unsafe fn SDL_Init(flags: u32) -> c_int {
    // NOPARACHUTE is a no-op hint, not a subsystem.
    let mut flags = flags & !SDL_INIT_NOPARACHUTE;
    if flags & SDL_INIT_VIDEO != 0 {
        flags |= SDL_INIT_EVENTS;
    }
    if flags & SDL_INIT_GAMECONTROLLER != 0 {
        flags |= SDL_INIT_JOYSTICK;
    }
    with_state(|s| s.subsystems |= flags);
    0
}

/// Video shutdown destroys every window along with its renderer and textures.
/// Surfaces are plain memory and outlive the library.
pub unsafe fn SDL_Quit() {
    with_state(|s| {
        s.subsystems = 0;
        s.textures.clear();
        s.renderers.clear();
        s.windows.clear();
    });
}

pub unsafe fn SDL_WasInit(flags: u32) -> u32 {
    with_state(|s| if flags == 0 { s.subsystems } else { s.subsystems & flags })
}

pub unsafe fn SDL_GetError() -> *const c_char {
    // The CString stays in the thread-local until the next error replaces it.
    with_state(|s| s.error.as_ptr())
}

pub unsafe fn SDL_ClearError() {
    with_state(|s| s.error = CString::default());
}

pub unsafe fn SDL_GetVersion(ver: *mut SDL_version) {
    if let Some(ver) = unsafe { ver.as_mut() } {
        *ver = HEADLESS_VERSION;
    }
}

pub unsafe fn SDL_Delay(_ms: u32) {}

pub unsafe fn SDL_CreateWindow(
    title: *const c_char,
    _x: c_int,
    _y: c_int,
    w: c_int,
    h: c_int,
    _flags: u32,
) -> *mut SDL_Window {
    let title = if title.is_null() {
        CString::default()
    } else {
        unsafe { CStr::from_ptr(title) }.to_owned()
    };
    with_state(|s| {
        if s.subsystems & SDL_INIT_VIDEO == 0 {
            s.set_error("Video subsystem has not been initialized");
            return core::ptr::null_mut();
        }
        if w > MAX_WINDOW_EXTENT || h > MAX_WINDOW_EXTENT {
            s.set_error("Window is too large.");
            return core::ptr::null_mut();
        }
        let record = Box::new(WindowRecord { title, renderer: None });
        let raw = handle_of::<_, SDL_Window>(&*record);
        s.windows.insert(raw as usize, record);
        raw
    })
}

pub unsafe fn SDL_DestroyWindow(window: *mut SDL_Window) {
    with_state(|s| {
        if s.windows.remove(&(window as usize)).is_none() {
            s.set_error("Invalid window");
        }
    });
}

pub unsafe fn SDL_CreateRenderer(window: *mut SDL_Window, index: c_int, _flags: u32) -> *mut SDL_Renderer {
    with_state(|s| {
        let key = window as usize;
        let Some(has_renderer) = s.windows.get(&key).map(|w| w.renderer.is_some()) else {
            s.set_error("Invalid window");
            return core::ptr::null_mut();
        };
        if !(-1..=0).contains(&index) {
            s.set_error("index must be -1 or in the range of 0 - 0");
            return core::ptr::null_mut();
        }
        if has_renderer {
            s.set_error("Renderer already associated with window");
            return core::ptr::null_mut();
        }
        let record = Box::new(RendererRecord { window: key, draw_color: [0, 0, 0, 255] });
        let raw = handle_of::<_, SDL_Renderer>(&*record);
        s.renderers.insert(raw as usize, record);
        if let Some(win) = s.windows.get_mut(&key) {
            win.renderer = Some(raw as usize);
        }
        raw
    })
}

pub unsafe fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer) {
    with_state(|s| {
        let key = renderer as usize;
        let Some(record) = s.renderers.remove(&key) else {
            s.set_error("Invalid renderer");
            return;
        };
        s.textures.retain(|_, t| t.renderer != key);
        if let Some(win) = s.windows.get_mut(&record.window) {
            win.renderer = None;
        }
    });
}

pub unsafe fn SDL_RenderClear(renderer: *mut SDL_Renderer) -> c_int {
    with_state(|s| {
        if !s.renderers.contains_key(&(renderer as usize)) {
            s.set_error("Invalid renderer");
            return -1;
        }
        0
    })
}

pub unsafe fn SDL_RenderPresent(renderer: *mut SDL_Renderer) {
    with_state(|s| {
        if !s.renderers.contains_key(&(renderer as usize)) {
            s.set_error("Invalid renderer");
        }
    });
}

pub unsafe fn SDL_SetRenderDrawColor(renderer: *mut SDL_Renderer, r: u8, g: u8, b: u8, a: u8) -> c_int {
    with_state(|s| {
        if let Some(record) = s.renderers.get_mut(&(renderer as usize)) {
            record.draw_color = [r, g, b, a];
            return 0;
        }
        s.set_error("Invalid renderer");
        -1
    })
}

pub unsafe fn SDL_RenderCopy(
    renderer: *mut SDL_Renderer,
    texture: *mut SDL_Texture,
    _srcrect: *const SDL_Rect,
    _dstrect: *const SDL_Rect,
) -> c_int {
    with_state(|s| {
        if !s.renderers.contains_key(&(renderer as usize)) {
            s.set_error("Invalid renderer");
            return -1;
        }
        match s.textures.get(&(texture as usize)).map(|t| t.renderer) {
            None => {
                s.set_error("Invalid texture");
                -1
            }
            Some(owner) if owner != renderer as usize => {
                s.set_error("Texture was not created with this renderer");
                -1
            }
            Some(_) => 0,
        }
    })
}

pub unsafe fn SDL_CreateRGBSurfaceWithFormat(
    _flags: u32,
    width: c_int,
    height: c_int,
    depth: c_int,
    format: u32,
) -> *mut SDL_Surface {
    with_state(|s| {
        if width < 0 {
            s.set_error("Parameter 'width' is invalid");
            return core::ptr::null_mut();
        }
        if height < 0 {
            s.set_error("Parameter 'height' is invalid");
            return core::ptr::null_mut();
        }
        if format != SDL_PIXELFORMAT_ABGR8888 || depth != 32 {
            s.set_error("Unknown pixel format");
            return core::ptr::null_mut();
        }
        let record = Box::new(SurfaceRecord { width, height });
        let raw = handle_of::<_, SDL_Surface>(&*record);
        s.surfaces.insert(raw as usize, record);
        raw
    })
}

pub unsafe fn SDL_FreeSurface(surface: *mut SDL_Surface) {
    with_state(|s| {
        s.surfaces.remove(&(surface as usize));
    });
}

pub unsafe fn SDL_UpperBlit(
    src: *mut SDL_Surface,
    _srcrect: *const SDL_Rect,
    dst: *mut SDL_Surface,
    _dstrect: *mut SDL_Rect,
) -> c_int {
    with_state(|s| {
        if !s.surfaces.contains_key(&(src as usize)) || !s.surfaces.contains_key(&(dst as usize)) {
            s.set_error("SDL_UpperBlit: passed a NULL surface");
            return -1;
        }
        0
    })
}

pub unsafe fn SDL_FillRect(dst: *mut SDL_Surface, _rect: *const SDL_Rect, _color: u32) -> c_int {
    with_state(|s| {
        if !s.surfaces.contains_key(&(dst as usize)) {
            s.set_error("Parameter 'dst' is invalid");
            return -1;
        }
        0
    })
}

pub unsafe fn SDL_CreateTextureFromSurface(
    renderer: *mut SDL_Renderer,
    surface: *mut SDL_Surface,
) -> *mut SDL_Texture {
    with_state(|s| {
        if !s.renderers.contains_key(&(renderer as usize)) {
            s.set_error("Invalid renderer");
            return core::ptr::null_mut();
        }
        match s.surfaces.get(&(surface as usize)).map(|r| (r.width, r.height)) {
            None => {
                s.set_error("SDL_CreateTextureFromSurface() passed NULL surface");
                return core::ptr::null_mut();
            }
            Some((w, h)) if w == 0 || h == 0 => {
                s.set_error("Texture dimensions can't be 0");
                return core::ptr::null_mut();
            }
            Some(_) => {}
        }
        let record = Box::new(TextureRecord { renderer: renderer as usize });
        let raw = handle_of::<_, SDL_Texture>(&*record);
        s.textures.insert(raw as usize, record);
        raw
    })
}

pub unsafe fn SDL_DestroyTexture(texture: *mut SDL_Texture) {
    with_state(|s| {
        if s.textures.remove(&(texture as usize)).is_none() {
            s.set_error("Invalid texture");
        }
    });
}

/// Drops all state of this thread's library, as if the process had just started.
pub fn headless_reset() {
    with_state(|s| *s = State::default());
}

/// Draw color last set on a live renderer.
pub fn headless_draw_color(renderer: *mut SDL_Renderer) -> Option<[u8; 4]> {
    with_state(|s| s.renderers.get(&(renderer as usize)).map(|r| r.draw_color))
}

/// Title a live window was created with.
pub fn headless_window_title(window: *mut SDL_Window) -> Option<String> {
    with_state(|s| s.windows.get(&(window as usize)).map(|w| w.title.to_string_lossy().into_owned()))
}

/// Number of live handles: windows, renderers, surfaces, textures.
pub fn headless_live_handles() -> (usize, usize, usize, usize) {
    with_state(|s| (s.windows.len(), s.renderers.len(), s.surfaces.len(), s.textures.len()))
}
