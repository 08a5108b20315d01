//! The flexbox algorithm (spec §4.5–§4.9): axis resolution, line forming, flexible-length
//! resolution, cross-axis alignment (including baseline), and absolute-child placement.
//!
//! Organized as a pipeline, one function per stage, mirroring the reference crate's
//! `compute::flexbox` module: [`generate_anonymous_flex_items`] builds the per-item working set,
//! [`determine_flex_base_size`]/[`determine_hypothetical_cross_size`] measure each item twice (main
//! axis first, cross axis once main sizes are known), [`collect_flex_lines`] wraps,
//! [`resolve_flexible_lengths`] runs the grow/shrink freeze loop per line, and the rest of
//! [`compute`] distributes space on both axes and commits final positions.

use crate::compute::common::alignment::{compute_alignment_offset, AlignmentOffsets, ContentDistribution};
use crate::compute::common::axis::{cross_axis_edges, main_axis_edges, physical_location};
use crate::compute::{compute_hidden_layout, measure_node_size, perform_node_layout, NO_BASELINES};
use crate::geometry::{AbsoluteAxis, Line, Point, Rect, Size};
use crate::style::{
    AlignContent, AlignItems, AvailableSpace, Display, Edge, FlexDirection, Position, ResolvedDirection, Style,
};
use crate::tree::{LayoutTree, NodeId, RunMode, SizeAndBaselines, SizingMode};
use crate::util::sys::{new_vec_with_capacity, Vec};
use crate::util::MaybeMath;

/// `RunMode::PerformLayout`
pub(crate) fn compute_flexbox_layout(
    tree: &mut impl LayoutTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    sizing_mode: SizingMode,
) -> SizeAndBaselines {
    compute(tree, node, known_dimensions, parent_size, available_space, RunMode::PerformLayout, sizing_mode)
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
    compute(tree, node, known_dimensions, parent_size, available_space, RunMode::ComputeSize, sizing_mode).size
}

/// A single in-flow child, tracked through the pipeline. Most fields are filled in incrementally
/// by successive stages rather than all at once, the way the reference crate's own `FlexItem`
/// accumulates state.
struct FlexItem {
    node: NodeId,
    style: Style,
    align_self: AlignItems,

    margin: Rect<f32>,
    margin_is_auto: Rect<bool>,
    padding: Rect<f32>,
    border: Rect<f32>,

    min_size: Size<Option<f32>>,
    max_size: Size<Option<f32>>,

    /// Flex base size (spec §4.7): resolved `flex-basis`, or the item's own main-axis style size,
    /// or (failing both) its content-based main size. Already border-box and unclamped.
    flex_base_size: f32,
    /// `flex_base_size` clamped to the item's own min/max main size — the starting point flex
    /// resolution grows or shrinks from.
    hypothetical_main_size: f32,
    hypothetical_outer_main_size: f32,

    target_main_size: f32,
    outer_target_main_size: f32,
    frozen: bool,

    hypothetical_cross_size: f32,
    hypothetical_outer_cross_size: f32,
    outer_target_cross_size: f32,

    /// Offset of this item's first baseline from its own top (border-box) edge.
    baseline: f32,

    /// Offset from the line/container's main-start edge to this item's margin-box leading edge.
    offset_main: f32,
    /// Offset from the line's cross-start edge to this item's margin-box leading edge.
    offset_cross: f32,
}

/// The whole-algorithm entry point shared by [`compute_flexbox_layout`] and [`measure_size`].
fn compute(
    tree: &mut impl LayoutTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    run_mode: RunMode,
    _sizing_mode: SizingMode,
) -> SizeAndBaselines {
    let style = tree.style(node).clone();
    let direction = tree.resolved_direction(node);
    let flex_direction = style.flex_direction;
    let main_axis = flex_direction.main_axis();
    let cross_axis = main_axis.other();

    let border = style.border(direction).resolve_or_zero(parent_size.width);
    let padding = style.padding(direction).resolve_or_zero(parent_size.width);
    let box_reserved = border.sum_axes() + padding.sum_axes();

    let style_size = style.size.maybe_resolve(parent_size);
    let style_min = style.min_size.maybe_resolve(parent_size);
    let style_max = style.max_size.maybe_resolve(parent_size);

    let node_outer_size = Size { width: known_dimensions.width.or(style_size.width), height: known_dimensions.height.or(style_size.height) }
        .maybe_clamp(style_min, style_max);

    let container_content_box_size = Size {
        width: node_outer_size.width.map(|w| (w - box_reserved.width).max(0.0)),
        height: node_outer_size.height.map(|h| (h - box_reserved.height).max(0.0)),
    };
    let content_available_space = Size {
        width: match node_outer_size.width {
            Some(w) => AvailableSpace::Definite((w - box_reserved.width).max(0.0)),
            None => shrink_available_space(available_space.width, box_reserved.width),
        },
        height: match node_outer_size.height {
            Some(h) => AvailableSpace::Definite((h - box_reserved.height).max(0.0)),
            None => shrink_available_space(available_space.height, box_reserved.height),
        },
    };

    let gap_style = style.gap();
    let gap = Size {
        width: gap_style.width.resolve(container_content_box_size.width.unwrap_or(0.0)),
        height: gap_style.height.resolve(container_content_box_size.height.unwrap_or(0.0)),
    };
    let main_gap = *gap.get(main_axis);
    let cross_gap = *gap.get(cross_axis);

    let align_items = style.align_items.unwrap_or(AlignItems::Stretch);
    let align_content = style.align_content.unwrap_or(AlignContent::Stretch);
    let justify_content = style.justify_content.unwrap_or_default();

    let mut items = generate_anonymous_flex_items(tree, node, align_items, container_content_box_size);

    if items.is_empty() {
        let outer_size = Size { width: node_outer_size.width.unwrap_or(box_reserved.width), height: node_outer_size.height.unwrap_or(box_reserved.height) }
            .maybe_clamp(style_min, style_max)
            .maybe_max(box_reserved.map(Some));

        if run_mode == RunMode::PerformLayout {
            commit_container_layout(tree, node, outer_size, border, padding, Size::ZERO);
            if tree.child_count(node) > 0 {
                place_absolute_children(tree, node, direction, outer_size, border, padding, align_items, justify_content);
            }
        }
        return SizeAndBaselines::from(outer_size);
    }

    determine_flex_base_size(tree, flex_direction, main_axis, container_content_box_size, content_available_space, &mut items);

    let container_main_known = container_content_box_size.get(main_axis).copied();
    let main_avail_for_wrap = container_main_known.or_else(|| (*content_available_space.get(main_axis)).into_option());
    let lines = collect_flex_lines(&items, style.flex_wrap.is_wrapping(), main_avail_for_wrap, main_gap);

    for &(start, end) in &lines {
        if let Some(main_size) = container_main_known {
            resolve_flexible_lengths(&mut items[start..end], flex_direction, main_size, main_gap);
        } else {
            for item in &mut items[start..end] {
                item.target_main_size = item.hypothetical_main_size;
                item.outer_target_main_size = item.hypothetical_outer_main_size;
            }
        }
    }

    determine_hypothetical_cross_size(tree, flex_direction, main_axis, cross_axis, container_content_box_size, &mut items);
    calculate_baselines(tree, flex_direction, &mut items);

    let mut line_metrics: Vec<LineCrossMetrics> = lines.iter().map(|&(s, e)| compute_line_cross_metrics(&items[s..e], flex_direction)).collect();

    if lines.len() == 1 {
        if let Some(definite_cross) = container_content_box_size.get(cross_axis) {
            line_metrics[0].cross_size = *definite_cross;
        }
    }

    let content_cross_total: f32 =
        line_metrics.iter().map(|m| m.cross_size).sum::<f32>() + cross_gap * lines.len().saturating_sub(1) as f32;

    let outer_cross = match node_outer_size.get(cross_axis) {
        Some(v) => *v,
        None => {
            let inner = (content_cross_total + box_reserved.get(cross_axis)).maybe_clamp(*style_min.get(cross_axis), *style_max.get(cross_axis));
            inner.max(*box_reserved.get(cross_axis))
        }
    };
    let inner_cross = (outer_cross - box_reserved.get(cross_axis)).max(0.0);

    let cross_free_space = inner_cross - content_cross_total;
    let mut cross_sizes: Vec<f32> = line_metrics.iter().map(|m| m.cross_size).collect();
    let line_distribution = handle_align_content(align_content, cross_free_space, &mut cross_sizes, cross_gap);

    let mut line_offsets = new_vec_with_capacity(lines.len());
    let mut cursor = line_distribution.leading;
    for &size in &cross_sizes {
        line_offsets.push(cursor);
        cursor += size + line_distribution.between;
    }

    let wrap_reverse = style.flex_wrap == crate::style::FlexWrap::WrapReverse;
    let Line { start: cross_start_edge, end: cross_end_edge } = cross_axis_edges(flex_direction, direction, wrap_reverse);

    for (line_idx, &(start, end)) in lines.iter().enumerate() {
        let line_cross_size = cross_sizes[line_idx];
        let max_ascent = line_metrics[line_idx].max_ascent;
        align_items_in_line(&mut items[start..end], flex_direction, line_cross_size, max_ascent, cross_start_edge, cross_end_edge);
    }

    let mut content_main_extent: f32 = 0.0;
    for &(start, end) in &lines {
        let main_size = (&items[start..end]).iter().map(|i| i.outer_target_main_size).sum::<f32>() + main_gap * (end - start).saturating_sub(1) as f32;
        content_main_extent = content_main_extent.max(main_size);
    }

    let outer_main = match node_outer_size.get(main_axis) {
        Some(v) => *v,
        None => {
            let inner = (content_main_extent + box_reserved.get(main_axis)).maybe_clamp(*style_min.get(main_axis), *style_max.get(main_axis));
            inner.max(*box_reserved.get(main_axis))
        }
    };
    let inner_main = (outer_main - box_reserved.get(main_axis)).max(0.0);

    let Line { start: main_start_edge, end: main_end_edge } = main_axis_edges(flex_direction, direction);
    for &(start, end) in &lines {
        let line_items = &mut items[start..end];
        let main_free_space = inner_main - (line_items.iter().map(|i| i.outer_target_main_size).sum::<f32>() + main_gap * line_items.len().saturating_sub(1) as f32);
        justify_line(line_items, flex_direction, justify_content, main_free_space, main_gap, main_start_edge, main_end_edge);
    }

    let outer_size = match main_axis {
        AbsoluteAxis::Horizontal => Size { width: outer_main, height: outer_cross },
        AbsoluteAxis::Vertical => Size { width: outer_cross, height: outer_main },
    };

    let mut content_extent = Size::ZERO;
    for item in &items {
        let (item_main, item_cross) = (item.offset_main + item.outer_target_main_size, item.offset_cross + item.outer_target_cross_size);
        let (w, h) = match main_axis {
            AbsoluteAxis::Horizontal => (item_main, item_cross),
            AbsoluteAxis::Vertical => (item_cross, item_main),
        };
        content_extent.width = content_extent.width.max(w);
        content_extent.height = content_extent.height.max(h);
    }

    let container_content_size = content_extent;

    let mut first_baselines = NO_BASELINES;
    if flex_direction.is_row() {
        if let Some(first_line_items) = lines.first().map(|&(s, e)| &items[s..e]) {
            if let Some(first) = first_line_items.first() {
                first_baselines.y = Some(first.offset_cross + first.baseline);
            }
        }
    }

    if run_mode == RunMode::PerformLayout {
        commit_container_layout(tree, node, outer_size, border, padding, container_content_size);

        #[cfg(feature = "detailed_layout_info")]
        {
            let mut recorded = arrayvec::ArrayVec::new();
            for (&(start, end), &final_cross_size) in lines.iter().zip(cross_sizes.iter()) {
                if recorded.is_full() {
                    break;
                }
                recorded.push(crate::tree::FlexLineInfo { item_count: (end - start) as u16, cross_size: final_cross_size });
            }
            tree.unrounded_layout_mut(node).lines = recorded;
        }

        for (line_idx, &(start, end)) in lines.iter().enumerate() {
            for item_idx in start..end {
                let item = &items[item_idx];
                let known = Size { width: Some(item.target_main_and_cross(flex_direction, AbsoluteAxis::Horizontal)), height: Some(item.target_main_and_cross(flex_direction, AbsoluteAxis::Vertical)) };
                let child_available = Size { width: AvailableSpace::Definite(known.width.unwrap()), height: AvailableSpace::Definite(known.height.unwrap()) };

                let result = perform_node_layout(tree, item.node, known, container_content_box_size, child_available, SizingMode::InherentSize);

                let outer_main_size = item.outer_target_main_size;
                let outer_cross_size = item.outer_target_cross_size;
                let location = physical_location(flex_direction, direction, wrap_reverse, outer_size, item.offset_main, outer_main_size, item.offset_cross, outer_cross_size);

                let layout = tree.unrounded_layout_mut(item.node);
                layout.location = Point { x: location.x - padding.left - border.left, y: location.y - padding.top - border.top };
                layout.margin = item.margin;
                let _ = (line_idx, result);
            }
        }

        place_absolute_children(tree, node, direction, outer_size, border, padding, align_items, justify_content);
    }

    SizeAndBaselines { size: outer_size, first_baselines }
}

impl FlexItem {
    /// The item's own already-resolved border-box target size along the given physical axis
    /// (used only for re-deriving the `known_dimensions` passed to the final recursive layout
    /// call, once both the main and cross passes have committed a target size for this item).
    fn target_main_and_cross(&self, flex_direction: FlexDirection, axis: AbsoluteAxis) -> f32 {
        if axis == flex_direction.main_axis() {
            self.target_main_size
        } else {
            self.outer_target_cross_size - self.margin.cross_axis_sum(flex_direction)
        }
    }
}

fn shrink_available_space(available: AvailableSpace, reserved: f32) -> AvailableSpace {
    match available {
        AvailableSpace::Definite(v) => AvailableSpace::Definite((v - reserved).max(0.0)),
        other => other,
    }
}

fn rect_edge_bool(rect: &Rect<bool>, edge: Edge) -> bool {
    match edge {
        Edge::Left => rect.left,
        Edge::Right => rect.right,
        Edge::Top => rect.top,
        Edge::Bottom => rect.bottom,
        _ => unreachable!("physical-only edge expected"),
    }
}

/// Build the per-item working set for every in-flow (non-absolute, non-`display: none`) child.
/// `display: none` children still get their own subtree zeroed via [`compute_hidden_layout`];
/// absolutely positioned children are skipped here entirely and handled later by
/// [`place_absolute_children`].
fn generate_anonymous_flex_items(
    tree: &mut impl LayoutTree,
    node: NodeId,
    parent_align_items: AlignItems,
    container_content_box_size: Size<Option<f32>>,
) -> Vec<FlexItem> {
    let mut items = new_vec_with_capacity(tree.child_count(node));

    for i in 0..tree.child_count(node) {
        let child = tree.child(node, i);
        let style = tree.style(child).clone();

        if style.display == Display::None {
            compute_hidden_layout(tree, child);
            continue;
        }
        if style.position == Position::Absolute {
            continue;
        }

        let child_direction = tree.resolved_direction(child);
        let margin_raw = style.margin(child_direction);
        let margin_is_auto =
            Rect { left: margin_raw.left.is_auto(), right: margin_raw.right.is_auto(), top: margin_raw.top.is_auto(), bottom: margin_raw.bottom.is_auto() };
        let margin = margin_raw.resolve_or_zero(container_content_box_size.width);
        let padding = style.padding(child_direction).resolve_or_zero(container_content_box_size.width);
        let border = style.border(child_direction).resolve_or_zero(container_content_box_size.width);

        let min_size = style.min_size.maybe_resolve(container_content_box_size);
        let max_size = style.max_size.maybe_resolve(container_content_box_size);
        let align_self = style.align_self.resolve(parent_align_items);

        items.push(FlexItem {
            node: child,
            style,
            align_self,
            margin,
            margin_is_auto,
            padding,
            border,
            min_size,
            max_size,
            flex_base_size: 0.0,
            hypothetical_main_size: 0.0,
            hypothetical_outer_main_size: 0.0,
            target_main_size: 0.0,
            outer_target_main_size: 0.0,
            frozen: false,
            hypothetical_cross_size: 0.0,
            hypothetical_outer_cross_size: 0.0,
            outer_target_cross_size: 0.0,
            baseline: 0.0,
            offset_main: 0.0,
            offset_cross: 0.0,
        });
    }

    items
}

/// Spec §4.6: each item's flex base size, and the hypothetical main size it's clamped to.
fn determine_flex_base_size(
    tree: &mut impl LayoutTree,
    flex_direction: FlexDirection,
    main_axis: AbsoluteAxis,
    container_content_box_size: Size<Option<f32>>,
    content_available_space: Size<AvailableSpace>,
    items: &mut [FlexItem],
) {
    for item in items.iter_mut() {
        let main_reference = *container_content_box_size.get(main_axis);
        let basis_definite = item.style.flex_basis.resolve_to_option(main_reference);
        let style_size = item.style.size.maybe_resolve(container_content_box_size);
        let style_main_value = *style_size.get(main_axis);

        let basis = if let Some(b) = basis_definite {
            b
        } else if let Some(s) = style_main_value {
            s
        } else {
            let mut avail = content_available_space;
            *avail.get_mut(main_axis) = AvailableSpace::MaxContent;
            let measured = measure_node_size(tree, item.node, Size { width: None, height: None }, container_content_box_size, avail, SizingMode::ContentSize);
            *measured.get(main_axis)
        };

        item.flex_base_size = basis;

        let min = *item.min_size.get(main_axis);
        let max = *item.max_size.get(main_axis);
        let floor = item.padding.main_axis_sum(flex_direction) + item.border.main_axis_sum(flex_direction);
        let clamped = basis.maybe_clamp(min, max).max(floor);

        item.hypothetical_main_size = clamped;
        item.hypothetical_outer_main_size = clamped + item.margin.main_axis_sum(flex_direction);
    }
}

/// Spec §4.6: line forming. Greedily packs items onto a line in document order, starting a new
/// line whenever the next item wouldn't fit and wrapping is enabled and the container's main-axis
/// available space is itself definite (an indefinite main axis has nothing to wrap against, so the
/// whole content forms a single line, matching the reference crate's behavior for shrink-to-fit
/// containers).
fn collect_flex_lines(items: &[FlexItem], can_wrap: bool, available_main: Option<f32>, gap: f32) -> Vec<(usize, usize)> {
    let mut lines = new_vec_with_capacity(1);

    let Some(available) = (if can_wrap { available_main } else { None }) else {
        lines.push((0, items.len()));
        return lines;
    };

    let mut start = 0;
    let mut used = 0.0_f32;
    for (i, item) in items.iter().enumerate() {
        let additional = if i == start { item.hypothetical_outer_main_size } else { gap + item.hypothetical_outer_main_size };
        if i > start && used + additional > available + 0.01 {
            lines.push((start, i));
            start = i;
            used = item.hypothetical_outer_main_size;
        } else {
            used += additional;
        }
    }
    lines.push((start, items.len()));
    lines
}

/// Spec §4.7: the flex grow/shrink freeze loop, run independently per line.
fn resolve_flexible_lengths(items: &mut [FlexItem], flex_direction: FlexDirection, container_main_size: f32, gap: f32) {
    let n = items.len();
    if n == 0 {
        return;
    }
    let gaps_total = gap * (n - 1) as f32;
    let main_axis = flex_direction.main_axis();

    let sum_hypothetical_outer: f32 = items.iter().map(|i| i.hypothetical_outer_main_size).sum();
    let initial_free_space = container_main_size - sum_hypothetical_outer - gaps_total;
    let growing = initial_free_space > 0.0;

    for item in items.iter_mut() {
        item.target_main_size = item.hypothetical_main_size;
        let unfrozen_by_factor = if growing { item.style.flex_grow == 0.0 } else { item.style.flex_shrink == 0.0 };
        let already_clamped_away =
            (growing && item.hypothetical_main_size > item.flex_base_size) || (!growing && item.hypothetical_main_size < item.flex_base_size);
        item.frozen = unfrozen_by_factor || already_clamped_away;
    }

    // Bounded by item count: each round either converges (total_violation == 0) or freezes at
    // least one more item, so this cannot loop more than `n` times in practice.
    for _round in 0..=n {
        if items.iter().all(|i| i.frozen) {
            break;
        }

        let used_outer: f32 = items.iter().map(|i| i.target_main_size + i.margin.main_axis_sum(flex_direction)).sum();
        let remaining_free_space = container_main_size - used_outer - gaps_total;

        if remaining_free_space.abs() > 0.0001 {
            if growing {
                let total_grow: f32 = items.iter().filter(|i| !i.frozen).map(|i| i.style.flex_grow).sum();
                if total_grow > 0.0 {
                    for item in items.iter_mut().filter(|i| !i.frozen) {
                        let ratio = item.style.flex_grow / total_grow;
                        item.target_main_size = item.hypothetical_main_size + remaining_free_space * ratio;
                    }
                }
            } else {
                let total_scaled_shrink: f32 = items.iter().filter(|i| !i.frozen).map(|i| i.style.flex_shrink * i.flex_base_size).sum();
                if total_scaled_shrink > 0.0 {
                    for item in items.iter_mut().filter(|i| !i.frozen) {
                        let scaled_shrink = item.style.flex_shrink * item.flex_base_size;
                        let ratio = scaled_shrink / total_scaled_shrink;
                        item.target_main_size = item.hypothetical_main_size + remaining_free_space * ratio;
                    }
                }
            }
        }

        let mut total_violation = 0.0_f32;
        for item in items.iter_mut().filter(|i| !i.frozen) {
            let min = *item.min_size.get(main_axis);
            let max = *item.max_size.get(main_axis);
            let floor = item.padding.main_axis_sum(flex_direction) + item.border.main_axis_sum(flex_direction);
            let unclamped = item.target_main_size;
            let clamped = unclamped.maybe_clamp(min, max).max(floor);
            total_violation += clamped - unclamped;
            item.target_main_size = clamped;
        }

        if total_violation == 0.0 {
            for item in items.iter_mut().filter(|i| !i.frozen) {
                item.frozen = true;
            }
            break;
        } else if total_violation > 0.0 {
            for item in items.iter_mut().filter(|i| !i.frozen) {
                let min = *item.min_size.get(main_axis);
                let floor = item.padding.main_axis_sum(flex_direction) + item.border.main_axis_sum(flex_direction);
                let effective_min = min.unwrap_or(floor).max(floor);
                if item.target_main_size <= effective_min + 0.0001 {
                    item.frozen = true;
                }
            }
        } else {
            for item in items.iter_mut().filter(|i| !i.frozen) {
                if let Some(max) = *item.max_size.get(main_axis) {
                    if item.target_main_size >= max - 0.0001 {
                        item.frozen = true;
                    }
                }
            }
        }
    }

    for item in items.iter_mut() {
        item.outer_target_main_size = item.target_main_size + item.margin.main_axis_sum(flex_direction);
    }
}

/// Spec §4.8: each item's hypothetical cross size, measured now that its main size is final.
fn determine_hypothetical_cross_size(
    tree: &mut impl LayoutTree,
    flex_direction: FlexDirection,
    main_axis: AbsoluteAxis,
    cross_axis: AbsoluteAxis,
    container_content_box_size: Size<Option<f32>>,
    items: &mut [FlexItem],
) {
    for item in items.iter_mut() {
        let style_size = item.style.size.maybe_resolve(container_content_box_size);
        let cross_style_value = *style_size.get(cross_axis);

        let basis = if let Some(c) = cross_style_value {
            c
        } else {
            let mut known = Size { width: None, height: None };
            *known.get_mut(main_axis) = Some(item.target_main_size);
            let mut avail = Size::splat(AvailableSpace::MaxContent);
            *avail.get_mut(main_axis) = AvailableSpace::Definite(item.target_main_size);
            let measured = measure_node_size(tree, item.node, known, container_content_box_size, avail, SizingMode::ContentSize);
            *measured.get(cross_axis)
        };

        let min = *item.min_size.get(cross_axis);
        let max = *item.max_size.get(cross_axis);
        let floor = item.padding.cross_axis_sum(flex_direction) + item.border.cross_axis_sum(flex_direction);
        let clamped = basis.maybe_clamp(min, max).max(floor);

        item.hypothetical_cross_size = clamped;
        item.hypothetical_outer_cross_size = clamped + item.margin.cross_axis_sum(flex_direction);
    }
}

/// Spec §4.8: baseline alignment only meaningfully differs from `flex-start` when the cross axis
/// is vertical (i.e. a `row`/`row-reverse` container) — the engine degrades `Baseline` to
/// `FlexStart` for column containers rather than claiming a cross-axis-agnostic baseline model
/// (documented simplification, see DESIGN.md).
fn calculate_baselines(tree: &mut impl LayoutTree, flex_direction: FlexDirection, items: &mut [FlexItem]) {
    if !flex_direction.is_row() {
        return;
    }
    for item in items.iter_mut() {
        let size = Size { width: item.target_main_size, height: item.hypothetical_cross_size };
        item.baseline = tree.measure_baseline(item.node, size).unwrap_or(size.height);
    }
}

struct LineCrossMetrics {
    cross_size: f32,
    max_ascent: f32,
}

fn compute_line_cross_metrics(items: &[FlexItem], flex_direction: FlexDirection) -> LineCrossMetrics {
    let has_baseline = flex_direction.is_row() && items.iter().any(|i| i.align_self == AlignItems::Baseline);

    if !has_baseline {
        let cross_size = items.iter().map(|i| i.hypothetical_outer_cross_size).fold(0.0_f32, f32::max);
        return LineCrossMetrics { cross_size, max_ascent: 0.0 };
    }

    let max_ascent = items
        .iter()
        .map(|i| if i.align_self == AlignItems::Baseline { i.baseline + i.margin.top } else { i.hypothetical_outer_cross_size })
        .fold(0.0_f32, f32::max);
    let max_descent = items
        .iter()
        .map(|i| if i.align_self == AlignItems::Baseline { (i.hypothetical_outer_cross_size - i.baseline - i.margin.top).max(0.0) } else { 0.0 })
        .fold(0.0_f32, f32::max);
    let non_baseline_max = items.iter().filter(|i| i.align_self != AlignItems::Baseline).map(|i| i.hypothetical_outer_cross_size).fold(0.0_f32, f32::max);

    LineCrossMetrics { cross_size: (max_ascent + max_descent).max(non_baseline_max), max_ascent }
}

/// Spec §4.8: distribute the container's cross-axis free space across lines (`align-content`).
/// `Stretch` grows each line's cross size instead of shifting offsets.
fn handle_align_content(align_content: AlignContent, free_space: f32, line_cross_sizes: &mut [f32], gap: f32) -> AlignmentOffsets {
    if align_content == AlignContent::Stretch && free_space > 0.0 && !line_cross_sizes.is_empty() {
        let extra = free_space / line_cross_sizes.len() as f32;
        for size in line_cross_sizes.iter_mut() {
            *size += extra;
        }
        return AlignmentOffsets { leading: 0.0, between: gap };
    }

    let distribution = Option::<ContentDistribution>::from(align_content).unwrap_or(ContentDistribution::Start);
    compute_alignment_offset(free_space, line_cross_sizes.len(), gap, distribution)
}

/// Spec §4.8: position each item within its line on the cross axis, honoring `align-self`
/// (including `stretch`, which only applies when the item's own cross-axis style size is `auto`)
/// and cross-axis auto margins (which, per CSS, absorb the line's entire free space and suppress
/// alignment for that item).
fn align_items_in_line(items: &mut [FlexItem], flex_direction: FlexDirection, line_cross_size: f32, max_ascent: f32, cross_start_edge: Edge, cross_end_edge: Edge) {
    let cross_axis = flex_direction.cross_axis();

    for item in items.iter_mut() {
        let auto_before = rect_edge_bool(&item.margin_is_auto, cross_start_edge);
        let auto_after = rect_edge_bool(&item.margin_is_auto, cross_end_edge);

        if auto_before || auto_after {
            let free = (line_cross_size - item.hypothetical_outer_cross_size).max(0.0);
            let (before, _after) = match (auto_before, auto_after) {
                (true, true) => (free / 2.0, free / 2.0),
                (true, false) => (free, 0.0),
                (false, true) => (0.0, free),
                (false, false) => (0.0, 0.0),
            };
            item.outer_target_cross_size = item.hypothetical_outer_cross_size;
            item.offset_cross = before;
            continue;
        }

        let style_cross_auto = item.style.size.get(cross_axis).is_auto();

        if item.align_self == AlignItems::Stretch && style_cross_auto {
            let min = *item.min_size.get(cross_axis);
            let max = *item.max_size.get(cross_axis);
            let floor = item.padding.cross_axis_sum(flex_direction) + item.border.cross_axis_sum(flex_direction);
            let target = (line_cross_size - item.margin.cross_axis_sum(flex_direction)).maybe_clamp(min, max).max(floor);
            item.outer_target_cross_size = target + item.margin.cross_axis_sum(flex_direction);
            item.offset_cross = 0.0;
        } else {
            item.outer_target_cross_size = item.hypothetical_outer_cross_size;
            item.offset_cross = match item.align_self {
                AlignItems::FlexStart | AlignItems::Stretch => 0.0,
                AlignItems::FlexEnd => line_cross_size - item.outer_target_cross_size,
                AlignItems::Center => (line_cross_size - item.outer_target_cross_size) / 2.0,
                AlignItems::Baseline => max_ascent - item.baseline - item.margin.top,
            };
        }
    }
}

/// Spec §4.7/§4.8's main-axis counterpart: distribute the line's main-axis free space
/// (`justify-content`), with main-axis auto margins absorbing free space first, exactly as
/// `align_items_in_line` does for the cross axis.
fn justify_line(items: &mut [FlexItem], flex_direction: FlexDirection, justify_content: JustifyContentOrDefault, free_space: f32, gap: f32, main_start_edge: Edge, main_end_edge: Edge) {
    let auto_margin_count = items
        .iter()
        .flat_map(|i| [rect_edge_bool(&i.margin_is_auto, main_start_edge), rect_edge_bool(&i.margin_is_auto, main_end_edge)])
        .filter(|&b| b)
        .count();

    if auto_margin_count > 0 && free_space > 0.0 {
        let extra_per_auto = free_space / auto_margin_count as f32;
        let mut cursor = 0.0_f32;
        for (idx, item) in items.iter_mut().enumerate() {
            if idx > 0 {
                cursor += gap;
            }
            if rect_edge_bool(&item.margin_is_auto, main_start_edge) {
                cursor += extra_per_auto;
            }
            item.offset_main = cursor;
            cursor += item.outer_target_main_size;
            if rect_edge_bool(&item.margin_is_auto, main_end_edge) {
                cursor += extra_per_auto;
            }
        }
        return;
    }

    let distribution = ContentDistribution::from(justify_content);
    let offsets = compute_alignment_offset(free_space, items.len(), gap, distribution);
    let mut cursor = offsets.leading;
    for (idx, item) in items.iter_mut().enumerate() {
        if idx > 0 {
            cursor += offsets.between;
        }
        item.offset_main = cursor;
        cursor += item.outer_target_main_size;
    }
}

type JustifyContentOrDefault = crate::style::JustifyContent;

fn commit_container_layout(tree: &mut impl LayoutTree, node: NodeId, size: Size<f32>, border: Rect<f32>, padding: Rect<f32>, content_size: Size<f32>) {
    let layout = tree.unrounded_layout_mut(node);
    layout.size = size;
    layout.border = border;
    layout.padding = padding;
    layout.content_size = content_size;
}

/// Collapsed two-value-plus-center reading of `justify-content`/`align-items` used only for
/// placing an absolutely positioned child whose size is known but whose insets are not (spec
/// §4.9 rule 3): the distribution keywords (`space-between`/`space-around`/`space-evenly`) have
/// no meaning for a single item and fall back to `Start`, matching the reference crate's
/// `AlignContent`-to-`AlignItems`-style collapse for this same case.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum FallbackKind {
    Start,
    End,
    Center,
}

impl From<JustifyContentOrDefault> for FallbackKind {
    fn from(value: JustifyContentOrDefault) -> Self {
        match value {
            JustifyContentOrDefault::FlexStart => FallbackKind::Start,
            JustifyContentOrDefault::FlexEnd => FallbackKind::End,
            JustifyContentOrDefault::Center => FallbackKind::Center,
            _ => FallbackKind::Start,
        }
    }
}

impl From<AlignItems> for FallbackKind {
    fn from(value: AlignItems) -> Self {
        match value {
            AlignItems::FlexStart => FallbackKind::Start,
            AlignItems::FlexEnd => FallbackKind::End,
            AlignItems::Center => FallbackKind::Center,
            AlignItems::Stretch | AlignItems::Baseline => FallbackKind::Start,
        }
    }
}

/// Spec §4.9: "`auto` margins on absolute children, when size and both insets are set, split
/// remaining space equally." Negative leftover behaves like the in-flow `auto`-margin rule
/// (spec §4.7): it does not shrink the margins below zero, it just leaves them at zero.
fn split_auto_margins(start: &mut f32, end: &mut f32, start_is_auto: bool, end_is_auto: bool, leftover: f32) {
    let leftover = leftover.max(0.0);
    match (start_is_auto, end_is_auto) {
        (true, true) => {
            *start = leftover / 2.0;
            *end = leftover / 2.0;
        }
        (true, false) => *start = leftover,
        (false, true) => *end = leftover,
        (false, false) => {}
    }
}

/// The offset (from the containing block's physical left/top, before the padding-box adjustment
/// applied by the caller) that places a `size`-sized, margin-boxed item per `kind`, given whether
/// the axis's flex-start edge coincides with that physical left/top edge.
fn fallback_offset(kind: FallbackKind, leading_is_start: bool, total: f32, size: f32, margin_before: f32, margin_after: f32) -> f32 {
    let at_leading = margin_before;
    let at_trailing = total - size - margin_after;
    let at_center = (total - size) / 2.0;
    match kind {
        FallbackKind::Start => {
            if leading_is_start {
                at_leading
            } else {
                at_trailing
            }
        }
        FallbackKind::End => {
            if leading_is_start {
                at_trailing
            } else {
                at_leading
            }
        }
        FallbackKind::Center => at_center,
    }
}

/// Spec §4.9: position absolutely positioned children against the container's padding box.
///
/// Rule 3 ("if size set and neither inset set: place at `align-self`/`justify-content` of the
/// container") is implemented on each axis independently: the main axis follows the container's
/// `justify-content` (collapsed to its two-value flex-start/flex-end/center reading — the
/// distribution keywords have no single-item meaning), the cross axis follows the item's
/// resolved `align-self`. When *one* inset is set on an axis (rule 2) or *both* are (rule 1),
/// that axis's position is fully determined by insets and this fallback does not apply.
fn place_absolute_children(
    tree: &mut impl LayoutTree,
    node: NodeId,
    direction: ResolvedDirection,
    container_outer_size: Size<f32>,
    border: Rect<f32>,
    padding: Rect<f32>,
    align_items: AlignItems,
    justify_content: JustifyContentOrDefault,
) {
    let style = tree.style(node).clone();
    let flex_direction = style.flex_direction;
    let containing_block =
        Size { width: container_outer_size.width - border.horizontal(), height: container_outer_size.height - border.vertical() };

    for i in 0..tree.child_count(node) {
        let child = tree.child(node, i);
        let child_style = tree.style(child).clone();
        if child_style.position != Position::Absolute {
            continue;
        }
        if child_style.display == Display::None {
            compute_hidden_layout(tree, child);
            continue;
        }

        let child_direction = tree.resolved_direction(child);
        let inset = child_style.inset(child_direction);
        let margin_raw = child_style.margin(child_direction);
        let margin_is_auto = Rect {
            left: margin_raw.left.is_auto(),
            right: margin_raw.right.is_auto(),
            top: margin_raw.top.is_auto(),
            bottom: margin_raw.bottom.is_auto(),
        };
        let mut margin = margin_raw.resolve_or_zero(Some(containing_block.width));

        let left = inset.left.resolve_to_option(containing_block.width);
        let right = inset.right.resolve_to_option(containing_block.width);
        let top = inset.top.resolve_to_option(containing_block.height);
        let bottom = inset.bottom.resolve_to_option(containing_block.height);

        let style_size = child_style.size.maybe_resolve(Size { width: Some(containing_block.width), height: Some(containing_block.height) });

        let known_width = style_size.width.or_else(|| match (left, right) {
            (Some(l), Some(r)) => Some((containing_block.width - l - r - margin.horizontal()).max(0.0)),
            _ => None,
        });
        let known_height = style_size.height.or_else(|| match (top, bottom) {
            (Some(t), Some(b)) => Some((containing_block.height - t - b - margin.vertical()).max(0.0)),
            _ => None,
        });

        let known_dimensions = Size { width: known_width, height: known_height };
        let available_space = Size {
            width: AvailableSpace::from_option(known_width.or(Some(containing_block.width))),
            height: AvailableSpace::from_option(known_height.or(Some(containing_block.height))),
        };

        let result = perform_node_layout(
            tree,
            child,
            known_dimensions,
            Size { width: Some(containing_block.width), height: Some(containing_block.height) },
            available_space,
            SizingMode::InherentSize,
        );
        let size = result.size;

        // Spec §4.9 final rule: when both insets and the size are set, any `auto` margins on
        // that axis split whatever space insets + size didn't already claim, equally between
        // them (mirroring the in-flow `auto`-margin behavior in `justify_line`/`align_items_in_line`).
        if let (Some(l), Some(r)) = (left, right) {
            if style_size.width.is_some() {
                split_auto_margins(&mut margin.left, &mut margin.right, margin_is_auto.left, margin_is_auto.right, containing_block.width - l - r - size.width);
            }
        }
        if let (Some(t), Some(b)) = (top, bottom) {
            if style_size.height.is_some() {
                split_auto_margins(&mut margin.top, &mut margin.bottom, margin_is_auto.top, margin_is_auto.bottom, containing_block.height - t - b - size.height);
            }
        }

        let Line { start: main_start_edge, end: _main_end_edge } = main_axis_edges(flex_direction, direction);
        let Line { start: cross_start_edge, end: _cross_end_edge } = cross_axis_edges(flex_direction, direction, false);
        let child_align_self = child_style.align_self.resolve(align_items);
        let main_is_horizontal = flex_direction.main_axis() == AbsoluteAxis::Horizontal;

        let x = match (left, right) {
            (Some(l), _) => l + margin.left,
            (None, Some(r)) => (containing_block.width - r - size.width - margin.right).max(0.0),
            (None, None) if style_size.width.is_some() => {
                let (kind, start_edge) =
                    if main_is_horizontal { (FallbackKind::from(justify_content), main_start_edge) } else { (FallbackKind::from(child_align_self), cross_start_edge) };
                fallback_offset(kind, start_edge == Edge::Left, containing_block.width, size.width, margin.left, margin.right)
            }
            (None, None) => margin.left,
        };
        let y = match (top, bottom) {
            (Some(t), _) => t + margin.top,
            (None, Some(b)) => (containing_block.height - b - size.height - margin.bottom).max(0.0),
            (None, None) if style_size.height.is_some() => {
                let (kind, start_edge) =
                    if main_is_horizontal { (FallbackKind::from(child_align_self), cross_start_edge) } else { (FallbackKind::from(justify_content), main_start_edge) };
                fallback_offset(kind, start_edge == Edge::Top, containing_block.height, size.height, margin.top, margin.bottom)
            }
            (None, None) => margin.top,
        };

        let layout = tree.unrounded_layout_mut(child);
        layout.location = Point { x: x - padding.left, y: y - padding.top };
        layout.margin = margin;
    }
}
