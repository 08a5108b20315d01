//! Flexure — a flexbox layout engine.
//!
//! Given a tree of styled boxes and an optional available width/height, this crate computes
//! each box's position and size in its parent's coordinate space, following the commonly
//! implemented subset of the CSS Flexible Box Layout spec: main-/cross-axis direction, wrapping,
//! justification, alignment, flexible grow/shrink/basis, percentages, min/max constraints,
//! margins (including `auto`), padding, border, gaps, absolute positioning, and writing direction.
//!
//! The crate does not render, paint, or hit-test anything, and does not shape or break text — a
//! leaf node with intrinsic content (e.g. a paragraph of text) supplies a [`MeasureFunc`] that the
//! engine calls during layout, the same way a host UI framework's text layer would.
//!
//! ```
//! use flexure::prelude::*;
//!
//! let mut tree = FlexureTree::new();
//!
//! let child_a = tree.new_leaf(Style { size: Size { width: Dimension::Length(10.0), ..Default::default() }, ..Default::default() });
//! let child_b = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() });
//!
//! let root = tree.new_with_children(
//!     Style {
//!         size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) },
//!         ..Default::default()
//!     },
//!     &[child_a, child_b],
//! );
//!
//! tree.compute_layout(root, Some(100.0), Some(100.0)).unwrap();
//! assert_eq!(tree.computed_width(child_b).unwrap(), 90.0);
//! ```

#![deny(missing_docs)]

mod compute;
pub mod error;
pub mod geometry;
pub mod style;
pub mod style_helpers;
pub mod tree;
mod util;

pub use error::{FlexureError, FlexureResult};
pub use geometry::{AbsoluteAxis, Line, Point, Rect, Size};
pub use style::{
    AlignContent, AlignItems, AlignSelf, AvailableSpace, Dimension, Direction, Display, Edge, FlexDirection, FlexWrap,
    Gutter, JustifyContent, LengthPercentage, LengthPercentageAuto, Overflow, Position, ResolvedDirection, Style,
};
pub use style_helpers::{auto, definite, length, percent, zero, FlexureAuto, FlexureMaxContent, FlexureMinContent, FlexureZero};
pub use tree::{BaselineFunc, FlexureTree, Layout, LayoutConfig, MeasureFunc, NodeId};
#[cfg(feature = "detailed_layout_info")]
pub use tree::{FlexLineInfo, MAX_DETAILED_LINES};

/// A glob import covering everything most callers need: the tree type, the style bag and its
/// enums, the geometry primitives, and the `length`/`percent`/`auto` style constructors.
pub mod prelude {
    pub use crate::style_helpers::{auto, definite, length, percent, zero};
    pub use crate::{
        AbsoluteAxis, AlignContent, AlignItems, AlignSelf, AvailableSpace, BaselineFunc, Dimension, Direction,
        Display, Edge, FlexDirection, FlexWrap, FlexureError, FlexureResult, FlexureTree, Gutter, JustifyContent,
        Layout, LayoutConfig, LengthPercentage, LengthPercentageAuto, Line, MeasureFunc, NodeId, Overflow, Point,
        Position, Rect, ResolvedDirection, Size, Style,
    };
}
