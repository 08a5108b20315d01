//! The layout result struct and the small enums that parameterize a single layout pass.

use crate::geometry::{Point, Rect, Size};

/// Upper bound on the number of lines a flex container records diagnostics for, when the
/// `detailed_layout_info` feature is enabled. A container that wraps onto more lines than this
/// simply stops recording further ones; the layout itself is unaffected (this is diagnostics
/// only, spec SPEC_FULL.md supplemented feature #6).
#[cfg(feature = "detailed_layout_info")]
pub const MAX_DETAILED_LINES: usize = 8;

/// Per-line diagnostics recorded on a flex container's [`Layout`] when `detailed_layout_info` is
/// enabled: how many items landed on the line, and the line's resolved cross-axis extent.
#[cfg(feature = "detailed_layout_info")]
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct FlexLineInfo {
    /// Number of in-flow children placed on this line
    pub item_count: u16,
    /// The line's cross-axis size after `align-content` distribution
    pub cross_size: f32,
}

/// The computed position and size of a node after a layout pass (spec §3 "Layout result").
///
/// Holds both the float-precision values produced by the algorithm and (after the rounder runs,
/// spec §4.10) the pixel-grid-snapped values actually read back by `getComputed*`. Both live on
/// the same struct in this engine: `unrounded` and `final` layouts are two separate `Layout`
/// instances per node (see [`crate::tree::NodeData`]), each of this same shape.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Layout {
    /// The relative ordering of the node (used to tiebreak nodes with identical containing
    /// blocks, e.g. for z-ordering by a host renderer — not used by this engine internally beyond
    /// being plumbed through)
    pub order: u32,
    /// The node's offset from its parent's content-box origin
    pub location: Point<f32>,
    /// The node's outer (border-box) size
    pub size: Size<f32>,
    /// The node's resolved border widths
    pub border: Rect<f32>,
    /// The node's resolved padding
    pub padding: Rect<f32>,
    /// The node's resolved margin (for in-flow children only; always zero for the root)
    pub margin: Rect<f32>,
    /// The size last used to measure this node's content (spec §3: "the last computed content
    /// dimensions") — for a flex container, the union of its children's bounding box; for a leaf,
    /// whatever its measure function returned
    pub content_size: Size<f32>,
    /// Per-line item counts and cross sizes, feature-gated diagnostics (SPEC_FULL.md supplemented
    /// feature #6). Always empty for a leaf, and for a container when the feature is disabled.
    #[cfg(feature = "detailed_layout_info")]
    pub lines: arrayvec::ArrayVec<FlexLineInfo, MAX_DETAILED_LINES>,
}

impl Layout {
    /// A zeroed-out `Layout`, with the given `order`. Used for `Display::None` subtrees and as
    /// the starting point before a real computation fills in the rest.
    pub fn with_order(order: u32) -> Self {
        Layout { order, ..Default::default() }
    }

    /// Content-box size: outer size minus border and padding on both axes.
    pub fn content_box_size(&self) -> Size<f32> {
        Size {
            width: self.size.width - self.border.horizontal() - self.padding.horizontal(),
            height: self.size.height - self.border.vertical() - self.padding.vertical(),
        }
    }
}

/// Whether a single compute pass should produce a full [`Layout`] (positions included) or just
/// measure a size for the parent's benefit.
///
/// Spec §4.11's state machine needs this distinction: a container probing a child's hypothetical
/// main size (§4.6) must not commit that child's final position, because the child's cross size
/// may still change once the parent's own cross size (and therefore stretch target) is known.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunMode {
    /// Compute and write the node's final `Layout`, recursing into children to do the same
    PerformLayout,
    /// Compute only the node's size; do not write position/children layout
    ComputeSize,
}

/// Distinguishes "this container is being asked how big it inherently wants to be" from "this
/// container has been given a definite box and must fill/fit it".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SizingMode {
    /// The container's own size is itself being determined from its content
    ContentSize,
    /// The container has already been assigned a size by its parent
    InherentSize,
}

/// The result of measuring or laying out a node: its size, plus (if it has one) the offset of its
/// first baseline from its own top edge, for the benefit of a baseline-aligning parent (spec
/// §4.8).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SizeAndBaselines {
    /// The computed size
    pub size: Size<f32>,
    /// The offset of the first baseline from the top of the node, if one could be determined
    pub first_baselines: Point<Option<f32>>,
}

impl From<Size<f32>> for SizeAndBaselines {
    fn from(size: Size<f32>) -> Self {
        SizeAndBaselines { size, first_baselines: Point { x: None, y: None } }
    }
}
