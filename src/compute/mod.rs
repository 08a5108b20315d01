//! The compute layer: the driver (§4.11), dispatched out to the one algorithm this crate
//! implements (flexbox, §4.6–§4.9), plus the leaf and hidden fallbacks.

pub(crate) mod common;
mod flexbox;
mod hidden;
mod leaf;

pub(crate) use flexbox::compute_flexbox_layout;
pub(crate) use hidden::compute_hidden_layout;

use crate::geometry::{Point, Size};
use crate::style::{AvailableSpace, Display};
use crate::tree::{LayoutTree, NodeId, RunMode, SizeAndBaselines, SizingMode};
use crate::util::sys::round;

/// Entry point used by a parent that wants its child's final layout (positions included).
pub(crate) fn perform_node_layout(
    tree: &mut impl LayoutTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    sizing_mode: SizingMode,
) -> SizeAndBaselines {
    compute_node_layout(tree, node, known_dimensions, parent_size, available_space, RunMode::PerformLayout, sizing_mode)
}

/// Entry point used by a parent that only needs to know a child's size (e.g. while forming flex
/// lines, spec §4.6, or measuring a hypothetical main size) without committing its position yet.
pub(crate) fn measure_node_size(
    tree: &mut impl LayoutTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    sizing_mode: SizingMode,
) -> Size<f32> {
    compute_node_layout(tree, node, known_dimensions, parent_size, available_space, RunMode::ComputeSize, sizing_mode).size
}

/// The cached, dispatching core of the driver (spec §4.11): check the cache, and on a miss,
/// dispatch to the algorithm selected by the node's `display` style and whether it has children,
/// then store the result.
fn compute_node_layout(
    tree: &mut impl LayoutTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    run_mode: RunMode,
    sizing_mode: SizingMode,
) -> SizeAndBaselines {
    #[cfg(feature = "debug")]
    crate::util::debug::log_node_entry(node, known_dimensions, available_space, run_mode, sizing_mode);

    let has_children = tree.child_count(node) > 0;

    // A childless node always answers from its "final layout" cache slot: there is exactly one
    // possible shape for it (determined solely by its own style + the measure function), so
    // there is no distinction between "just measuring" and "laying out for real".
    let cache_run_mode = if !has_children { RunMode::PerformLayout } else { run_mode };

    if let Some(cached) = tree.cache_mut(node).get(known_dimensions, available_space, cache_run_mode) {
        #[cfg(feature = "debug")]
        crate::util::debug::log_cache_hit(node, cached.size);
        return cached;
    }

    let display_mode = tree.style(node).display;
    let result = match (display_mode, has_children) {
        (Display::None, _) => compute_hidden_layout(tree, node),
        (Display::Flex, true) => match run_mode {
            RunMode::PerformLayout => {
                compute_flexbox_layout(tree, node, known_dimensions, parent_size, available_space, sizing_mode)
            }
            RunMode::ComputeSize => {
                flexbox::measure_size(tree, node, known_dimensions, parent_size, available_space, sizing_mode).into()
            }
        },
        (Display::Flex, false) => match run_mode {
            RunMode::PerformLayout => {
                leaf::perform_layout(tree, node, known_dimensions, parent_size, available_space, sizing_mode)
            }
            RunMode::ComputeSize => {
                leaf::measure_size(tree, node, known_dimensions, parent_size, available_space, sizing_mode).into()
            }
        },
    };

    tree.cache_mut(node).store(known_dimensions, available_space, cache_run_mode, result);

    #[cfg(feature = "debug")]
    crate::util::debug::log_result(node, result.size);

    result
}

/// Snaps the whole subtree rooted at `node` to the pixel grid, writing into each node's final
/// layout (spec §4.10).
///
/// Always rounds based on absolute (root-relative) coordinates, and always derives width/height
/// from the *difference* of two rounded edges rather than rounding the width directly — this is
/// what guarantees adjacent siblings with touching edges round to touching pixels (spec §8
/// property 2, "Pixel-grid closure"), rather than each independently rounding to a value that
/// leaves (or overlaps) a sub-pixel seam.
pub(crate) fn round_layout(tree: &mut impl LayoutTree, node: NodeId, cumulative_x: f32, cumulative_y: f32) {
    let unrounded = *tree.unrounded_layout(node);
    let abs_x = cumulative_x + unrounded.location.x;
    let abs_y = cumulative_y + unrounded.location.y;

    let mut rounded = unrounded;
    rounded.location.x = round(unrounded.location.x);
    rounded.location.y = round(unrounded.location.y);
    rounded.size.width = round(abs_x + unrounded.size.width) - round(abs_x);
    rounded.size.height = round(abs_y + unrounded.size.height) - round(abs_y);
    rounded.border = unrounded.border.map(|v| round(*v));
    rounded.padding = unrounded.padding.map(|v| round(*v));
    rounded.margin = unrounded.margin.map(|v| round(*v));
    rounded.content_size = unrounded.content_size.map(|v| round(v));

    *tree.final_layout_mut(node) = rounded;

    for i in 0..tree.child_count(node) {
        let child = tree.child(node, i);
        round_layout(tree, child, abs_x, abs_y);
    }
}

/// Used by the rounder and by callers that just need a zeroed baseline `Point`.
pub(crate) const NO_BASELINES: Point<Option<f32>> = Point { x: None, y: None };
