//! Opens a window and cycles its clear color for a couple of seconds.
//!
//! Needs libSDL2: `cargo run --bin clear_window --features demo`.
//! Set `RUST_LOG=kiln=debug` to see handle lifecycle logs.

use kiln::sdl::{self, Color, Renderer, RendererFlag, Window, WindowFlag};
use tracing_subscriber::EnvFilter;

const FRAMES: u32 = 120;

fn main() -> Result<(), kiln::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    sdl::init_default()?;
    tracing::info!(version = %sdl::version(), "SDL ready");

    {
        let window = Window::builder()
            .title("kiln clear")
            .centered()
            .size(640, 480)
            .flags([WindowFlag::Shown, WindowFlag::Resizable])
            .build()?;
        let renderer = Renderer::new(&window, -1, [RendererFlag::Accelerated, RendererFlag::PresentVsync])?;

        for frame in 0..FRAMES {
            let t = (frame * 255 / FRAMES) as u8;
            renderer.set_color(Color::rgb(16, t, 255 - t))?;
            renderer.clear()?;
            renderer.present();
            unsafe { kiln::sys::SDL_Delay(16) };
        }
    }

    // The window and renderer were dropped with the block above.
    unsafe { sdl::quit() };
    Ok(())
}
