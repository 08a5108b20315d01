//! Measures and lays out childless nodes: either by reading their own `width`/`height`/min/max
//! style, or — for a node with a measure function attached (spec §3) — by delegating to it for
//! whichever axes aren't otherwise pinned down.
//!
//! `width`/`height` (and their min/max counterparts) apply to the border box, matching the
//! reference crate's (and Yoga's) default box model: border and padding are reserved space that
//! both a style-given size and a measured content size are expanded by, never shrunk into.

use crate::geometry::Size;
use crate::style::AvailableSpace;
use crate::tree::{LayoutTree, NodeId, SizeAndBaselines, SizingMode};
use crate::util::{MaybeMath, MaybeResolve, ResolveOrZero};

/// Compute a leaf's border-box size, honoring its own style and (if present) its measure
/// function for axes that style leaves undetermined.
pub(crate) fn compute_size(
    tree: &mut impl LayoutTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    _sizing_mode: SizingMode,
) -> Size<f32> {
    let style = tree.style(node).clone();
    let direction = tree.resolved_direction(node);

    let border = style.border(direction).resolve_or_zero(parent_size.width);
    let padding = style.padding(direction).resolve_or_zero(parent_size.width);
    let box_reserved = border.sum_axes() + padding.sum_axes();

    let style_size = style.size.maybe_resolve(parent_size);
    let style_min = style.min_size.maybe_resolve(parent_size);
    let style_max = style.max_size.maybe_resolve(parent_size);

    // A dimension the parent has already pinned down (e.g. via cross-axis stretch) always takes
    // priority over the node's own style size.
    let outer_size = Size { width: known_dimensions.width.or(style_size.width), height: known_dimensions.height.or(style_size.height) }
        .maybe_clamp(style_min, style_max);

    if let (Some(width), Some(height)) = (outer_size.width, outer_size.height) {
        return Size { width, height }.maybe_max(box_reserved.map(Some));
    }

    let content_box_available = Size {
        width: match outer_size.width {
            Some(w) => AvailableSpace::Definite((w - box_reserved.width).max(0.0)),
            None => shrink_available_space(available_space.width, box_reserved.width),
        },
        height: match outer_size.height {
            Some(h) => AvailableSpace::Definite((h - box_reserved.height).max(0.0)),
            None => shrink_available_space(available_space.height, box_reserved.height),
        },
    };
    let content_box_known = Size {
        width: outer_size.width.map(|w| (w - box_reserved.width).max(0.0)),
        height: outer_size.height.map(|h| (h - box_reserved.height).max(0.0)),
    };

    let measured_content = tree.measure_node(node, content_box_known, content_box_available).unwrap_or(Size::ZERO);

    let final_content = Size {
        width: content_box_known.width.unwrap_or(measured_content.width),
        height: content_box_known.height.unwrap_or(measured_content.height),
    };

    let final_outer = final_content + box_reserved;
    final_outer.maybe_clamp(style_min, style_max).maybe_max(box_reserved.map(Some))
}

fn shrink_available_space(available: AvailableSpace, reserved: f32) -> AvailableSpace {
    match available {
        AvailableSpace::Definite(v) => AvailableSpace::Definite((v - reserved).max(0.0)),
        other => other,
    }
}

/// `RunMode::ComputeSize`
pub(crate) fn measure_size(
    tree: &mut impl LayoutTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    sizing_mode: SizingMode,
) -> Size<f32> {
    compute_size(tree, node, known_dimensions, parent_size, available_space, sizing_mode)
}

/// `RunMode::PerformLayout`: same sizing as [`measure_size`], plus writing border/padding into
/// the node's own `Layout` record (a leaf's location is always set by its parent, never here).
pub(crate) fn perform_layout(
    tree: &mut impl LayoutTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    sizing_mode: SizingMode,
) -> SizeAndBaselines {
    let size = compute_size(tree, node, known_dimensions, parent_size, available_space, sizing_mode);

    let style = tree.style(node).clone();
    let direction = tree.resolved_direction(node);
    let border = style.border(direction).resolve_or_zero(parent_size.width);
    let padding = style.padding(direction).resolve_or_zero(parent_size.width);

    let layout = tree.unrounded_layout_mut(node);
    layout.size = size;
    layout.border = border;
    layout.padding = padding;
    layout.content_size = Size {
        width: size.width - border.horizontal() - padding.horizontal(),
        height: size.height - border.vertical() - padding.vertical(),
    };

    SizeAndBaselines::from(size)
}
