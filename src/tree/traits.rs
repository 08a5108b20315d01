//! The interface the compute layer needs from a tree implementation.
//!
//! Splitting this out means `crate::compute` never has to know about `slotmap`, arenas, or how
//! measure functions are stored — it only needs an `impl LayoutTree`. [`FlexureTree`] is the one
//! implementation this crate ships, but a host could provide its own (e.g. to lay out a tree it
//! already owns in some other representation) the same way the reference crate's
//! `PartialLayoutTree` is meant to be implemented externally.

use crate::geometry::Size;
use crate::style::{AvailableSpace, Style};
use crate::tree::cache::Cache;
use crate::tree::layout::Layout;
use crate::tree::node_id::NodeId;
use crate::tree::ResolvedDirection;
use crate::util::sys::ChildrenVec;

/// Everything the compute algorithms need to read from or write to a node tree.
pub(crate) trait LayoutTree {
    /// The node's style
    fn style(&self, node: NodeId) -> &Style;

    /// The node's writing direction, already resolved against ancestors (spec §4.5)
    fn resolved_direction(&self, node: NodeId) -> ResolvedDirection;

    /// The number of children a node has (always `0` for a node with a measure function, spec
    /// invariant 1)
    fn child_count(&self, node: NodeId) -> usize;

    /// The `index`-th child, in insertion order
    fn child(&self, node: NodeId, index: usize) -> NodeId;

    /// All children, in insertion order
    fn children(&self, node: NodeId) -> ChildrenVec<NodeId>;

    /// Mutable access to the node's (not-yet-rounded) computed layout
    fn unrounded_layout_mut(&mut self, node: NodeId) -> &mut Layout;

    /// Read access to the node's (not-yet-rounded) computed layout
    fn unrounded_layout(&self, node: NodeId) -> &Layout;

    /// Mutable access to the node's pixel-grid-rounded final layout
    fn final_layout_mut(&mut self, node: NodeId) -> &mut Layout;

    /// Mutable access to the node's measurement cache
    fn cache_mut(&mut self, node: NodeId) -> &mut Cache;

    /// Invoke the node's measure function, if it has one. Returns `None` for a node with
    /// children (which per spec invariant 1 never carries a measure function) or a leaf with no
    /// measure function set (in which case it measures as zero-sized content).
    fn measure_node(&mut self, node: NodeId, known_dimensions: Size<Option<f32>>, available_space: Size<AvailableSpace>) -> Option<Size<f32>>;

    /// Invoke the node's baseline function, if it has one, else derive a reasonable default
    /// baseline (the node's bottom margin edge, matching CSS's fallback of "use the bottom edge
    /// of the box" for non-text content without an explicit baseline, spec §4.8).
    fn measure_baseline(&mut self, node: NodeId, size: Size<f32>) -> Option<f32>;
}
