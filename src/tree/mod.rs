//! Tree storage and the interface the compute layer consumes (spec §3 "Tree", §4.3).

mod cache;
mod layout;
mod node_id;
mod traits;
#[allow(clippy::module_inception)]
mod tree;

pub use cache::Cache;
pub use layout::{Layout, RunMode, SizeAndBaselines, SizingMode};
#[cfg(feature = "detailed_layout_info")]
pub use layout::{FlexLineInfo, MAX_DETAILED_LINES};
pub use node_id::NodeId;
pub use tree::{BaselineFunc, FlexureTree, LayoutConfig, MeasureFunc};
pub(crate) use traits::LayoutTree;

pub use crate::style::ResolvedDirection;
