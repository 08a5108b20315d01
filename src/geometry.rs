//! Generic geometry primitives (points, sizes, rects, lines) used throughout the engine.
//!
//! These are intentionally dumb containers: the layout algorithm attaches meaning (e.g. "this
//! `Rect<f32>` is a padding box") by context, not by type.

use core::ops::Add;

/// An axis-aligned 2D point.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Point<T> {
    /// The x coordinate
    pub x: T,
    /// The y coordinate
    pub y: T,
}

impl Point<f32> {
    /// A point at the origin
    pub const ZERO: Point<f32> = Point { x: 0.0, y: 0.0 };
}

impl<T> Point<T> {
    /// Applies the function `f` to both the x and y values, returning a new `Point`
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Point<R> {
        Point { x: f(self.x), y: f(self.y) }
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Point<T>;
    fn add(self, rhs: Self) -> Self::Output {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

/// The width and height of a rectangular area.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Size<T> {
    /// The width of the area
    pub width: T,
    /// The height of the area
    pub height: T,
}

impl Size<f32> {
    /// A [`Size`] with zero width and height
    pub const ZERO: Size<f32> = Size { width: 0.0, height: 0.0 };
}

impl<T> Size<T> {
    /// Applies the function `f` to both the width and height, returning a new `Size`
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Size<R> {
        Size { width: f(self.width), height: f(self.height) }
    }

    /// Get a value for the given `AbsoluteAxis`
    pub fn get(&self, axis: AbsoluteAxis) -> &T {
        match axis {
            AbsoluteAxis::Horizontal => &self.width,
            AbsoluteAxis::Vertical => &self.height,
        }
    }

    /// Get a mutable reference to the value for the given `AbsoluteAxis`
    pub fn get_mut(&mut self, axis: AbsoluteAxis) -> &mut T {
        match axis {
            AbsoluteAxis::Horizontal => &mut self.width,
            AbsoluteAxis::Vertical => &mut self.height,
        }
    }

    /// Swap width and height
    pub fn transpose(self) -> Size<T> {
        Size { width: self.height, height: self.width }
    }
}

impl<T: Clone> Size<T> {
    /// Creates a new `Size` with the given value for both width and height
    pub fn splat(value: T) -> Self {
        Size { width: value.clone(), height: value }
    }
}

impl<U, T: Add<U, Output = U> + Copy> Add<Size<U>> for Size<T> {
    type Output = Size<U>;
    fn add(self, rhs: Size<U>) -> Self::Output {
        Size { width: self.width + rhs.width, height: self.height + rhs.height }
    }
}

/// A rectangle of values for the four sides (top/right/bottom/left) of a box
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Rect<T> {
    /// The left edge value
    pub left: T,
    /// The right edge value
    pub right: T,
    /// The top edge value
    pub top: T,
    /// The bottom edge value
    pub bottom: T,
}

impl<T: Clone> Rect<T> {
    /// Creates a new `Rect` with the given value for all four sides
    pub fn splat(value: T) -> Self {
        Rect { left: value.clone(), right: value.clone(), top: value.clone(), bottom: value }
    }
}

impl<T> Rect<T> {
    /// Applies the function `f` to all four sides, returning a new `Rect`
    pub fn map<R>(&self, f: impl Fn(&T) -> R) -> Rect<R> {
        Rect { left: f(&self.left), right: f(&self.right), top: f(&self.top), bottom: f(&self.bottom) }
    }
}

impl Rect<f32> {
    /// A [`Rect`] with zero for all four sides
    pub const ZERO: Rect<f32> = Rect { left: 0.0, right: 0.0, top: 0.0, bottom: 0.0 };

    /// Sum of the left and right values
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom values
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Sum of the two values for the given axis
    pub fn main_axis_sum(&self, direction: crate::style::FlexDirection) -> f32 {
        if direction.is_row() {
            self.horizontal()
        } else {
            self.vertical()
        }
    }

    /// Sum of the two values for the axis perpendicular to the given main axis
    pub fn cross_axis_sum(&self, direction: crate::style::FlexDirection) -> f32 {
        if direction.is_row() {
            self.vertical()
        } else {
            self.horizontal()
        }
    }

    /// `Size` made up of the `horizontal` and `vertical` sums
    pub fn sum_axes(&self) -> Size<f32> {
        Size { width: self.horizontal(), height: self.vertical() }
    }
}

/// A generic "start"/"end" pair along one axis. Used for main/cross-axis values before they're
/// resolved to physical left/right or top/bottom.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Line<T> {
    /// The value at the start of the axis
    pub start: T,
    /// The value at the end of the axis
    pub end: T,
}

impl<T> Line<T> {
    /// Applies the function `f` to both start and end, returning a new `Line`
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Line<R> {
        Line { start: f(self.start), end: f(self.end) }
    }
}

impl Line<f32> {
    /// Sum of start and end
    pub fn sum(&self) -> f32 {
        self.start + self.end
    }
}

/// Which physical axis ("horizontal" meaning left-right, "vertical" meaning top-bottom) a
/// computation applies to, independent of flex-direction or writing direction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AbsoluteAxis {
    /// The horizontal axis, mapping to `width`/`left`/`right`
    Horizontal,
    /// The vertical axis, mapping to `height`/`top`/`bottom`
    Vertical,
}

impl AbsoluteAxis {
    /// The other axis
    pub fn other(&self) -> AbsoluteAxis {
        match self {
            AbsoluteAxis::Horizontal => AbsoluteAxis::Vertical,
            AbsoluteAxis::Vertical => AbsoluteAxis::Horizontal,
        }
    }
}
