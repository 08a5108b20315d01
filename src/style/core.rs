//! `display`, `position`, `overflow`, `direction`, `Edge`, `Gutter` — the smaller enums.

/// Whether a node participates in flex layout at all.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Display {
    /// Lay the node out (and its children) using the flexbox algorithm
    #[default]
    Flex,
    /// Remove the node (and its subtree) from layout entirely; it and its descendants get a
    /// zero-sized, unpositioned layout result (spec §6 enum `Display`, supplemented behavior #5
    /// in SPEC_FULL.md)
    None,
}

/// How a node participates in its parent's flex formatting context.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Position {
    /// The node participates in normal flex flow (line forming, flex distribution, alignment)
    #[default]
    Relative,
    /// The node is removed from flex flow and positioned against its containing block's padding
    /// box using `inset`/`margin` (spec §4.9)
    Absolute,
}

/// Content overflow behavior. This engine does not clip or scroll content (painting is out of
/// scope, spec §1) — `Overflow` only affects whether an axis is treated as a valid "definite
/// available space" floor during min-content-style measurement (`Overflow::Visible` allows
/// content to be measured past the container's own size; the others do not inflate ancestors'
/// intrinsic size past their own definite size).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Overflow {
    /// Content may overflow the container's bounds without being clipped
    #[default]
    Visible,
    /// Content is conceptually clipped to the container; this engine does not paint, so this
    /// only suppresses the overflowing content from affecting the container's own intrinsic size
    Hidden,
    /// As `Hidden`, with the implication (left to the host) that a scrollbar may be shown
    Scroll,
}

impl Overflow {
    /// `Hidden`/`Scroll` containers do not let content grow their own auto-computed size past
    /// their definite available space; `Visible` containers do.
    pub fn is_scroll_container(&self) -> bool {
        matches!(self, Overflow::Hidden | Overflow::Scroll)
    }
}

/// The writing/inline direction, used to resolve logical `start`/`end` edges to physical
/// `left`/`right` (spec §4.5).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    /// Inherit from the parent node (the root defaults to LTR if unset, spec §6 enum `Direction`
    /// only lists LTR/RTL as the resolved values; `Inherit` is the style-level sentinel)
    #[default]
    Inherit,
    /// Left-to-right: logical `start` = physical left, `end` = physical right
    Ltr,
    /// Right-to-left: logical `start` = physical right, `end` = physical left
    Rtl,
}

/// A physical or logical edge of a box, used to index margin/padding/border/position.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Edge {
    /// The physical left edge
    Left,
    /// The physical top edge
    Top,
    /// The physical right edge
    Right,
    /// The physical bottom edge
    Bottom,
    /// The logical start edge (left under LTR, right under RTL) along the inline axis
    Start,
    /// The logical end edge (right under LTR, left under RTL) along the inline axis
    End,
    /// Sets all four physical edges at once; overridden per-edge by any more specific value that
    /// is also set (spec §4.2 resolution order)
    All,
}

/// A gap gutter: which axis of spacing between children is being set.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Gutter {
    /// The gap between columns (i.e. horizontal spacing between children in a row)
    Column,
    /// The gap between rows (i.e. vertical spacing between children in a column)
    Row,
    /// Sets both gutters at once
    All,
}
