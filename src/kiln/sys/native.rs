// libSDL2 symbols. Signatures follow the SDL2 stable ABI.
use core::ffi::{c_char, c_int};

use super::{SDL_Rect, SDL_Renderer, SDL_Surface, SDL_Texture, SDL_Window, SDL_version};

#[link(name = "SDL2")]
extern "C" {
    pub fn SDL_Init(flags: u32) -> c_int;
    pub fn SDL_Quit();
    pub fn SDL_WasInit(flags: u32) -> u32;
    pub fn SDL_GetError() -> *const c_char;
    pub fn SDL_ClearError();
    pub fn SDL_GetVersion(ver: *mut SDL_version);
    pub fn SDL_Delay(ms: u32);

    pub fn SDL_CreateWindow(
        title: *const c_char,
        x: c_int,
        y: c_int,
        w: c_int,
        h: c_int,
        flags: u32,
    ) -> *mut SDL_Window;
    pub fn SDL_DestroyWindow(window: *mut SDL_Window);

    pub fn SDL_CreateRenderer(window: *mut SDL_Window, index: c_int, flags: u32) -> *mut SDL_Renderer;
    pub fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer);
    pub fn SDL_RenderClear(renderer: *mut SDL_Renderer) -> c_int;
    pub fn SDL_RenderPresent(renderer: *mut SDL_Renderer);
    pub fn SDL_SetRenderDrawColor(renderer: *mut SDL_Renderer, r: u8, g: u8, b: u8, a: u8) -> c_int;
    pub fn SDL_RenderCopy(
        renderer: *mut SDL_Renderer,
        texture: *mut SDL_Texture,
        srcrect: *const SDL_Rect,
        dstrect: *const SDL_Rect,
    ) -> c_int;

    pub fn SDL_CreateRGBSurfaceWithFormat(
        flags: u32,
        width: c_int,
        height: c_int,
        depth: c_int,
        format: u32,
    ) -> *mut SDL_Surface;
    pub fn SDL_FreeSurface(surface: *mut SDL_Surface);
    // `SDL_BlitSurface` is a macro over this symbol.
    pub fn SDL_UpperBlit(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *mut SDL_Rect,
    ) -> c_int;
    pub fn SDL_FillRect(dst: *mut SDL_Surface, rect: *const SDL_Rect, color: u32) -> c_int;

    pub fn SDL_CreateTextureFromSurface(
        renderer: *mut SDL_Renderer,
        surface: *mut SDL_Surface,
    ) -> *mut SDL_Texture;
    pub fn SDL_DestroyTexture(texture: *mut SDL_Texture);
}
