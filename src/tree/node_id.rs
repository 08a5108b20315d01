//! The public node handle.

use slotmap::{DefaultKey, Key, KeyData};

/// An opaque handle to a node in a [`FlexureTree`](crate::tree::FlexureTree).
///
/// `NodeId` is a thin wrapper around a `slotmap` key: cheap to copy, and safe against
/// use-after-free (a stale `NodeId` from a removed node simply fails to resolve rather than
/// aliasing whatever node reused its slot), satisfying spec invariant 2's requirement that a
/// removed/re-parented node's old references are invalidated rather than silently wrong.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u64);

impl core::fmt::Debug for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<DefaultKey> for NodeId {
    fn from(key: DefaultKey) -> Self {
        NodeId(key.data().as_ffi())
    }
}

impl From<NodeId> for DefaultKey {
    fn from(node_id: NodeId) -> Self {
        KeyData::from_ffi(node_id.0).into()
    }
}
