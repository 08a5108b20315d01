//! The axis resolver (spec §4.5): maps a (main-offset, cross-offset) pair — both measured from
//! their respective flex-start edges — to a physical `(x, y)` point, given `flex-direction` and
//! resolved writing direction.
//!
//! Main/cross distribution math (line forming, flex resolution, alignment) is all done in
//! logical main/cross terms and never needs to know about physical axes until the very end, when
//! a child's final position is written. This module is where that one conversion happens.

use crate::geometry::{AbsoluteAxis, Line, Point};
use crate::style::{Edge, FlexDirection, ResolvedDirection};

/// `true` if the main-axis flex-start edge coincides with the physical left (for a row) or top
/// (for a column) edge.
fn main_start_is_leading(flex_direction: FlexDirection, direction: ResolvedDirection) -> bool {
    match flex_direction {
        FlexDirection::Row => direction == ResolvedDirection::Ltr,
        FlexDirection::RowReverse => direction == ResolvedDirection::Rtl,
        FlexDirection::Column => true,
        FlexDirection::ColumnReverse => false,
    }
}

/// `true` if the cross-axis flex-start edge coincides with the physical left (for a column
/// container, where the cross axis is horizontal) or top (for a row container, where the cross
/// axis is vertical) edge.
///
/// Writing direction only ever flips the *horizontal* physical axis (spec §4.5: "only for axes
/// along the writing direction"); `wrap-reverse` flips whichever physical axis is the cross axis,
/// independent of writing direction.
fn cross_start_is_leading(flex_direction: FlexDirection, direction: ResolvedDirection, wrap_reverse: bool) -> bool {
    if flex_direction.is_row() {
        // cross axis is vertical; writing direction doesn't affect it
        !wrap_reverse
    } else {
        // cross axis is horizontal; writing direction can flip it, then wrap-reverse flips again
        (direction == ResolvedDirection::Ltr) != wrap_reverse
    }
}

/// Convert a single axis's (offset-from-flex-start, outer-size) into a physical coordinate along
/// that axis, given the total size available along that axis and whether flex-start is the
/// leading (left/top) edge.
fn resolve_offset(is_leading_start: bool, offset_from_start: f32, outer_size: f32, axis_total: f32) -> f32 {
    if is_leading_start {
        offset_from_start
    } else {
        axis_total - offset_from_start - outer_size
    }
}

/// Resolve a child's final physical location given its main/cross offsets (both measured from
/// their flex-start edge, spec §4.6/§4.8) and outer sizes, within a container of the given
/// content-box size.
pub(crate) fn physical_location(
    flex_direction: FlexDirection,
    direction: ResolvedDirection,
    wrap_reverse: bool,
    container_size: crate::geometry::Size<f32>,
    offset_main: f32,
    outer_main_size: f32,
    offset_cross: f32,
    outer_cross_size: f32,
) -> Point<f32> {
    let main_leading = main_start_is_leading(flex_direction, direction);
    let cross_leading = cross_start_is_leading(flex_direction, direction, wrap_reverse);

    let main_axis = flex_direction.main_axis();
    let (main_total, cross_total) = match main_axis {
        AbsoluteAxis::Horizontal => (container_size.width, container_size.height),
        AbsoluteAxis::Vertical => (container_size.height, container_size.width),
    };

    let main_coord = resolve_offset(main_leading, offset_main, outer_main_size, main_total);
    let cross_coord = resolve_offset(cross_leading, offset_cross, outer_cross_size, cross_total);

    match main_axis {
        AbsoluteAxis::Horizontal => Point { x: main_coord, y: cross_coord },
        AbsoluteAxis::Vertical => Point { x: cross_coord, y: main_coord },
    }
}

/// The physical start/end edge pair for the main axis — e.g. for a `row` container under LTR,
/// `start: Edge::Left, end: Edge::Right`. Used to read the right pair of margin-auto flags off a
/// child when resolving auto margins along the main axis (spec §4.7's "auto margins absorb free
/// space").
pub(crate) fn main_axis_edges(flex_direction: FlexDirection, direction: ResolvedDirection) -> Line<Edge> {
    let leading = main_start_is_leading(flex_direction, direction);
    match flex_direction.main_axis() {
        AbsoluteAxis::Horizontal => {
            if leading {
                Line { start: Edge::Left, end: Edge::Right }
            } else {
                Line { start: Edge::Right, end: Edge::Left }
            }
        }
        AbsoluteAxis::Vertical => {
            if leading {
                Line { start: Edge::Top, end: Edge::Bottom }
            } else {
                Line { start: Edge::Bottom, end: Edge::Top }
            }
        }
    }
}

/// The physical start/end edge pair for the cross axis, analogous to [`main_axis_edges`].
pub(crate) fn cross_axis_edges(flex_direction: FlexDirection, direction: ResolvedDirection, wrap_reverse: bool) -> Line<Edge> {
    let leading = cross_start_is_leading(flex_direction, direction, wrap_reverse);
    match flex_direction.cross_axis() {
        AbsoluteAxis::Horizontal => {
            if leading {
                Line { start: Edge::Left, end: Edge::Right }
            } else {
                Line { start: Edge::Right, end: Edge::Left }
            }
        }
        AbsoluteAxis::Vertical => {
            if leading {
                Line { start: Edge::Top, end: Edge::Bottom }
            } else {
                Line { start: Edge::Bottom, end: Edge::Top }
            }
        }
    }
}
