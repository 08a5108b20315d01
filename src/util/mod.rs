//! Internal utilities: numeric algebra, collection aliases, and (behind the `debug` feature)
//! tracing helpers for the recursive descent.

pub mod resolve;
pub mod sys;

pub use resolve::{MaybeMath, MaybeResolve, ResolveOrZero};

/// Tracing helpers, compiled in only when the `debug` feature is enabled (spec ambient-stack
/// note: gated the same way the reference crate gates its own `NODE_LOGGER`).
#[cfg(feature = "debug")]
pub(crate) mod debug {
    use crate::geometry::Size;
    use crate::style::AvailableSpace;
    use crate::tree::{NodeId, RunMode, SizingMode};

    /// Emit a `trace!`-level line when entering a node's layout computation.
    pub(crate) fn log_node_entry(
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        run_mode: RunMode,
        sizing_mode: SizingMode,
    ) {
        log::trace!(
            "layout {node:?} known={known_dimensions:?} avail={available_space:?} run={run_mode:?} sizing={sizing_mode:?}"
        );
    }

    /// Emit a `trace!`-level line when a cache lookup hits.
    pub(crate) fn log_cache_hit(node: NodeId, size: Size<f32>) {
        log::trace!("  cache hit {node:?} -> {size:?}");
    }

    /// Emit a `trace!`-level line with the freshly computed result for a node.
    pub(crate) fn log_result(node: NodeId, size: Size<f32>) {
        log::trace!("  result {node:?} -> {size:?}");
    }
}
