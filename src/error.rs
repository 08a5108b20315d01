//! Errors raised by tree mutation (layout itself never fails, see spec §7).

use crate::tree::NodeId;
use core::fmt;

/// An error that occurred while manipulating or querying the node tree.
///
/// Layout computation itself is infallible (an invariant violation such as a cycle is absorbed
/// as a zero-sized result rather than surfaced here) — these variants are all raised at mutation
/// or query time, before or after `compute_layout` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlexureError {
    /// The supplied `NodeId` does not (or no longer) identify a node in this tree.
    #[error("Invalid node {0:?}")]
    InvalidNodeId(NodeId),
    /// The supplied child index was out of bounds for the node's current child count.
    #[error("Child index {index} is out of bounds, node {parent:?} has {child_count} children")]
    ChildIndexOutOfBounds {
        /// The node whose children were being indexed
        parent: NodeId,
        /// The index that was requested
        index: usize,
        /// The number of children the node actually has
        child_count: usize,
    },
    /// An attempt was made to give a node both a measure function and children, or to insert a
    /// child into a node that already carries a measure function (spec invariant 1: "a node with
    /// a measure callback has zero children").
    #[error("Node {0:?} has a measure function set and cannot have children")]
    NodeHasMeasureFunc(NodeId),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Convenience alias for fallible tree operations.
pub type FlexureResult<T> = Result<T, FlexureError>;
