use crate::kiln::sys::SDL_Rect;

/// A rectangle that may be absent.
///
/// Absent means "the whole surface" (or the whole render target) wherever a
/// region is expected, and is passed to SDL as a null pointer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rect {
    raw: Option<SDL_Rect>,
}

impl Rect {
    pub const NONE: Rect = Rect { raw: None };

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { raw: Some(SDL_Rect { x, y, w, h }) }
    }

    /// `(x, y, w, h)` when present, `None` when absent.
    pub fn as_tuple(&self) -> Option<(i32, i32, i32, i32)> {
        self.raw.map(|r| (r.x, r.y, r.w, r.h))
    }

    pub fn is_none(&self) -> bool {
        self.raw.is_none()
    }
    pub fn raw(&self) -> Option<SDL_Rect> {
        self.raw
    }
    /// Pointer for SDL calls; null when absent. Valid while `self` is.
    pub fn as_ptr(&self) -> *const SDL_Rect {
        self.raw.as_ref().map_or(core::ptr::null(), |r| r as *const SDL_Rect)
    }
}

impl From<SDL_Rect> for Rect {
    fn from(raw: SDL_Rect) -> Self {
        Self { raw: Some(raw) }
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, w, h): (i32, i32, i32, i32)) -> Self {
        Rect::new(x, y, w, h)
    }
}

impl<T: Into<Rect>> From<Option<T>> for Rect {
    fn from(value: Option<T>) -> Self {
        value.map_or(Rect::NONE, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_round_trip() {
        assert_eq!(Rect::new(1, 2, 3, 4).as_tuple(), Some((1, 2, 3, 4)));
        assert_eq!(Rect::from((1, 2, 3, 4)).as_tuple(), Some((1, 2, 3, 4)));
    }

    #[test]
    fn absent_rect_reads_as_none() {
        assert_eq!(Rect::NONE.as_tuple(), None);
        assert_eq!(Rect::default().as_tuple(), None);
        assert_eq!(Rect::from(None::<(i32, i32, i32, i32)>).as_tuple(), None);
        assert!(Rect::NONE.is_none());
    }

    #[test]
    fn absent_is_a_null_pointer_not_a_zero_rect() {
        assert!(Rect::NONE.as_ptr().is_null());
        let zero = Rect::new(0, 0, 0, 0);
        assert!(!zero.as_ptr().is_null());
        assert_eq!(unsafe { *zero.as_ptr() }, SDL_Rect::default());
    }

    #[test]
    fn option_of_rect_converts() {
        let r: Rect = Some(Rect::new(5, 6, 7, 8)).into();
        assert_eq!(r.raw(), Some(SDL_Rect { x: 5, y: 6, w: 7, h: 8 }));
    }
}
