//! Screen-space geometry with the exact memory layout of Win32 `RECT` and `POINT`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangle in screen coordinates, laid out like Win32 `RECT`.
///
/// Width and height are always derived from the edges. An inverted
/// rectangle reports negative extents rather than being clamped.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `right - left`
    pub const fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// `bottom - top`
    pub const fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Top-left corner
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns true when both extents are non-negative
    pub const fn is_well_ordered(&self) -> bool {
        self.right >= self.left && self.bottom >= self.top
    }

    /// Build the rectangle covered by `bounds`
    pub const fn from_bounds(bounds: Bounds) -> Self {
        Rect {
            left: bounds.x,
            top: bounds.y,
            right: bounds.x.wrapping_add(bounds.width),
            bottom: bounds.y.wrapping_add(bounds.height),
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Point in screen coordinates, laid out like Win32 `POINT`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position and size of a window area, as handed to callers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Window bounds: origin is the rectangle's top-left corner
    pub const fn from_rect(rect: &Rect) -> Self {
        Bounds {
            x: rect.left,
            y: rect.top,
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Content bounds: `origin` is the client top-left already translated
    /// to screen coordinates, `client` is the client rectangle in client
    /// coordinates.
    pub const fn from_client(origin: Point, client: &Rect) -> Self {
        Bounds {
            x: origin.x,
            y: origin.y,
            width: client.width(),
            height: client.height(),
        }
    }

    /// Returns true when the bounds cover no area
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Bounds::from_rect(&rect)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

#[cfg(windows)]
mod native {
    use super::{Point, Rect};
    use std::mem::{align_of, size_of};
    use winapi::shared::windef::{POINT, RECT};

    const _: () = assert!(size_of::<Rect>() == size_of::<RECT>());
    const _: () = assert!(align_of::<Rect>() == align_of::<RECT>());
    const _: () = assert!(size_of::<Point>() == size_of::<POINT>());
    const _: () = assert!(align_of::<Point>() == align_of::<POINT>());

    impl Rect {
        /// Pointer for OS calls that fill a `RECT` in place
        pub fn as_mut_raw(&mut self) -> *mut RECT {
            (self as *mut Rect).cast()
        }

        /// Pointer for OS calls that read a `RECT`
        pub fn as_raw(&self) -> *const RECT {
            (self as *const Rect).cast()
        }
    }

    impl Point {
        /// Pointer for OS calls that fill or translate a `POINT` in place
        pub fn as_mut_raw(&mut self) -> *mut POINT {
            (self as *mut Point).cast()
        }
    }

    impl From<RECT> for Rect {
        fn from(rect: RECT) -> Self {
            Rect::new(rect.left, rect.top, rect.right, rect.bottom)
        }
    }

    impl From<POINT> for Point {
        fn from(point: POINT) -> Self {
            Point::new(point.x, point.y)
        }
    }
}
