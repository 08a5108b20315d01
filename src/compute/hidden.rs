//! `display: none` handling (SPEC_FULL.md supplemented feature #5).

use crate::tree::{Layout, LayoutTree, NodeId, SizeAndBaselines};

/// Lay out a `display: none` node (and, recursively, its descendants) as a zero-sized, unordered
/// box. Descendants still get a *defined* (if empty) `Layout` rather than a stale or missing one,
/// so a host reading `getComputedWidth` on a hidden descendant always sees `0` rather than garbage
/// left over from before the node was hidden.
pub(crate) fn compute_hidden_layout(tree: &mut impl LayoutTree, node: NodeId) -> SizeAndBaselines {
    *tree.unrounded_layout_mut(node) = Layout::with_order(0);
    tree.cache_mut(node).clear();

    for i in 0..tree.child_count(node) {
        let child = tree.child(node, i);
        compute_hidden_layout(tree, child);
    }

    SizeAndBaselines::from(crate::geometry::Size::ZERO)
}
