//! `flex-direction` and `flex-wrap`.

/// The direction of the main axis, and which edge the first child is placed against.
///
/// Spec §4.5: reversed variants invert placement on that axis — children are placed from the
/// far edge inward — but do not change which physical axis (row = horizontal, column = vertical)
/// is the main axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum FlexDirection {
    /// Children are laid out horizontally, left-to-right under LTR (start-to-end in general)
    #[default]
    Row,
    /// Children are laid out horizontally, right-to-left under LTR (end-to-start in general)
    RowReverse,
    /// Children are laid out vertically, top-to-bottom
    Column,
    /// Children are laid out vertically, bottom-to-top
    ColumnReverse,
}

impl FlexDirection {
    /// `true` for `Row`/`RowReverse`: the main axis is horizontal
    #[inline]
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    /// `true` for `Column`/`ColumnReverse`: the main axis is vertical
    #[inline]
    pub fn is_column(self) -> bool {
        matches!(self, FlexDirection::Column | FlexDirection::ColumnReverse)
    }

    /// `true` for the `*-reverse` variants
    #[inline]
    pub fn is_reverse(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }

    /// The cross axis's direction is never itself reversed by `flex-direction` (only
    /// `flex-wrap: wrap-reverse` reverses the cross axis, which is handled separately at the
    /// line-stacking stage)
    #[inline]
    pub fn cross_axis(self) -> AbsoluteAxis {
        if self.is_row() {
            AbsoluteAxis::Vertical
        } else {
            AbsoluteAxis::Horizontal
        }
    }

    /// The physical axis the main axis maps to
    #[inline]
    pub fn main_axis(self) -> AbsoluteAxis {
        if self.is_row() {
            AbsoluteAxis::Horizontal
        } else {
            AbsoluteAxis::Vertical
        }
    }
}

use crate::geometry::AbsoluteAxis;

/// Whether children may wrap onto multiple lines, and in which stacking order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum FlexWrap {
    /// Children never wrap; a single line is formed regardless of overflow
    #[default]
    NoWrap,
    /// Children wrap onto additional lines, stacked from the cross-start edge
    Wrap,
    /// Children wrap onto additional lines, stacked from the cross-end edge (spec §4.6: "lines
    /// are stacked in reverse cross-axis order at final placement time")
    WrapReverse,
}

impl FlexWrap {
    /// `true` unless `NoWrap`
    #[inline]
    pub fn is_wrapping(self) -> bool {
        !matches!(self, FlexWrap::NoWrap)
    }
}
