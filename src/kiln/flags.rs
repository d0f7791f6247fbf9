//! Symbolic flags and their translation into SDL bitmasks.
//!
//! Every call site that takes flags accepts a [`Flags`]: either a prebuilt mask
//! or a list of symbols that gets OR-reduced. Order and repetition in the list
//! do not change the result.

use crate::kiln::sys;

/// A symbolic SDL flag with a fixed bit pattern.
pub trait Flag: Copy {
    fn bits(self) -> u32;
    /// What a call site uses when the caller passes no flags.
    fn default_flags() -> Flags<Self>;
}

/// Either a raw mask or an ordered list of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flags<F> {
    Mask(u32),
    List(Vec<F>),
}

impl<F: Flag> Flags<F> {
    pub fn bits(&self) -> u32 {
        match self {
            Flags::Mask(mask) => *mask,
            Flags::List(list) => list.iter().fold(0, |acc, f| acc | f.bits()),
        }
    }
}

impl<F: Flag> Default for Flags<F> {
    fn default() -> Self {
        F::default_flags()
    }
}

impl<F> From<u32> for Flags<F> {
    fn from(mask: u32) -> Self {
        Flags::Mask(mask)
    }
}
impl<F: Flag> From<F> for Flags<F> {
    fn from(flag: F) -> Self {
        Flags::List(vec![flag])
    }
}
impl<F> From<Vec<F>> for Flags<F> {
    fn from(list: Vec<F>) -> Self {
        Flags::List(list)
    }
}
impl<F: Copy> From<&[F]> for Flags<F> {
    fn from(list: &[F]) -> Self {
        Flags::List(list.to_vec())
    }
}
impl<F, const N: usize> From<[F; N]> for Flags<F> {
    fn from(list: [F; N]) -> Self {
        Flags::List(list.into())
    }
}

macro_rules! sdl_flags {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:expr;
        $($variant:ident => $bits:path),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name { $($variant),+ }

        impl Flag for $name {
            fn bits(self) -> u32 {
                match self { $($name::$variant => $bits),+ }
            }
            fn default_flags() -> Flags<Self> {
                $default
            }
        }
    };
}

sdl_flags! {
    /// Subsystems for [`init`](crate::kiln::init::init). Default: everything.
    InitFlag, default = Flags::List(vec![InitFlag::Everything]);
    Timer => sys::SDL_INIT_TIMER,
    Audio => sys::SDL_INIT_AUDIO,
    Video => sys::SDL_INIT_VIDEO,
    Joystick => sys::SDL_INIT_JOYSTICK,
    Haptic => sys::SDL_INIT_HAPTIC,
    GameController => sys::SDL_INIT_GAMECONTROLLER,
    Events => sys::SDL_INIT_EVENTS,
    Sensor => sys::SDL_INIT_SENSOR,
    NoParachute => sys::SDL_INIT_NOPARACHUTE,
    Everything => sys::SDL_INIT_EVERYTHING,
}

sdl_flags! {
    /// Window creation options. Default: no flags (mask 0).
    WindowFlag, default = Flags::Mask(0);
    Fullscreen => sys::SDL_WINDOW_FULLSCREEN,
    FullscreenDesktop => sys::SDL_WINDOW_FULLSCREEN_DESKTOP,
    OpenGl => sys::SDL_WINDOW_OPENGL,
    Vulkan => sys::SDL_WINDOW_VULKAN,
    Metal => sys::SDL_WINDOW_METAL,
    Shown => sys::SDL_WINDOW_SHOWN,
    Hidden => sys::SDL_WINDOW_HIDDEN,
    Borderless => sys::SDL_WINDOW_BORDERLESS,
    Resizable => sys::SDL_WINDOW_RESIZABLE,
    Minimized => sys::SDL_WINDOW_MINIMIZED,
    Maximized => sys::SDL_WINDOW_MAXIMIZED,
    MouseGrabbed => sys::SDL_WINDOW_MOUSE_GRABBED,
    KeyboardGrabbed => sys::SDL_WINDOW_KEYBOARD_GRABBED,
    InputFocus => sys::SDL_WINDOW_INPUT_FOCUS,
    MouseFocus => sys::SDL_WINDOW_MOUSE_FOCUS,
    MouseCapture => sys::SDL_WINDOW_MOUSE_CAPTURE,
    Foreign => sys::SDL_WINDOW_FOREIGN,
    AllowHighDpi => sys::SDL_WINDOW_ALLOW_HIGHDPI,
    AlwaysOnTop => sys::SDL_WINDOW_ALWAYS_ON_TOP,
    SkipTaskbar => sys::SDL_WINDOW_SKIP_TASKBAR,
    Utility => sys::SDL_WINDOW_UTILITY,
    Tooltip => sys::SDL_WINDOW_TOOLTIP,
    PopupMenu => sys::SDL_WINDOW_POPUP_MENU,
}

sdl_flags! {
    /// Renderer creation options. Default: accelerated.
    RendererFlag, default = Flags::List(vec![RendererFlag::Accelerated]);
    Software => sys::SDL_RENDERER_SOFTWARE,
    Accelerated => sys::SDL_RENDERER_ACCELERATED,
    PresentVsync => sys::SDL_RENDERER_PRESENTVSYNC,
    TargetTexture => sys::SDL_RENDERER_TARGETTEXTURE,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_per_call_site() {
        assert_eq!(Flags::<InitFlag>::default().bits(), sys::SDL_INIT_EVERYTHING);
        assert_eq!(Flags::<WindowFlag>::default().bits(), 0);
        assert_eq!(Flags::<RendererFlag>::default().bits(), sys::SDL_RENDERER_ACCELERATED);
    }

    #[test]
    fn mask_passes_through() {
        let flags: Flags<WindowFlag> = 0x24u32.into();
        assert_eq!(flags.bits(), 0x24);
    }

    #[test]
    fn list_is_or_reduced() {
        let flags: Flags<WindowFlag> = [WindowFlag::Shown, WindowFlag::Resizable].into();
        assert_eq!(flags.bits(), sys::SDL_WINDOW_SHOWN | sys::SDL_WINDOW_RESIZABLE);
        assert_eq!(Flags::<RendererFlag>::List(Vec::new()).bits(), 0);
    }

    #[test]
    fn fullscreen_desktop_contains_fullscreen() {
        let bits = WindowFlag::FullscreenDesktop.bits();
        assert_eq!(bits & WindowFlag::Fullscreen.bits(), WindowFlag::Fullscreen.bits());
        assert_eq!(bits, 0x1001);
    }

    const RENDERER_FLAGS: [RendererFlag; 4] = [
        RendererFlag::Software,
        RendererFlag::Accelerated,
        RendererFlag::PresentVsync,
        RendererFlag::TargetTexture,
    ];

    fn renderer_flag() -> impl Strategy<Value = RendererFlag> {
        (0..RENDERER_FLAGS.len()).prop_map(|i| RENDERER_FLAGS[i])
    }

    proptest! {
        #[test]
        fn translation_ignores_order(mut list in prop::collection::vec(renderer_flag(), 0..8)) {
            let forward = Flags::<RendererFlag>::from(list.clone()).bits();
            list.reverse();
            prop_assert_eq!(forward, Flags::<RendererFlag>::from(list).bits());
        }

        #[test]
        fn repeated_flags_are_harmless(list in prop::collection::vec(renderer_flag(), 1..8)) {
            let once = Flags::<RendererFlag>::from(list.clone()).bits();
            let twice = Flags::<RendererFlag>::from([list.clone(), list].concat()).bits();
            prop_assert_eq!(once, twice);
        }
    }
}
