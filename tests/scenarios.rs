//! End-to-end scenarios with literal expected output, covering one representative case per
//! major algorithm stage: wrapping, main-axis justification, flex-grow rounding, percentage
//! resolution against both size and position, absolute insets, gaps, and fractional rounding.

use flexure::prelude::*;

#[test]
fn wrapped_row_packs_lines_at_cross_start_without_growing_past_explicit_height() {
    let mut tree = FlexureTree::new();

    let mut children = Vec::new();
    for _ in 0..5 {
        children.push(tree.new_leaf(Style {
            size: Size { width: Dimension::Length(50.0), height: Dimension::Length(10.0) },
            ..Default::default()
        }));
    }

    let container = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            align_content: Some(AlignContent::FlexStart),
            size: Size { width: Dimension::Length(140.0), height: Dimension::Length(120.0) },
            ..Default::default()
        },
        &children,
    );

    tree.compute_layout(container, None, None).unwrap();

    let expected = [(0.0, 0.0), (50.0, 0.0), (0.0, 10.0), (50.0, 10.0), (0.0, 20.0)];
    for (child, (x, y)) in children.iter().zip(expected) {
        let layout = tree.layout(*child).unwrap();
        assert_eq!(layout.location.x, x);
        assert_eq!(layout.location.y, y);
    }

    let root_layout = tree.layout(container).unwrap();
    assert_eq!(root_layout.size.height, 120.0);
}

#[test]
fn justify_content_space_between_distributes_evenly_and_stretches_cross_axis() {
    let mut tree = FlexureTree::new();

    let mut children = Vec::new();
    for _ in 0..3 {
        children.push(tree.new_leaf(Style {
            size: Size { width: Dimension::Length(10.0), ..Default::default() },
            ..Default::default()
        }));
    }

    let container = tree.new_with_children(
        Style {
            justify_content: Some(JustifyContent::SpaceBetween),
            size: Size { width: Dimension::Length(102.0), height: Dimension::Length(102.0) },
            ..Default::default()
        },
        &children,
    );

    tree.compute_layout(container, None, None).unwrap();

    let expected_x = [0.0, 46.0, 92.0];
    for (child, x) in children.iter().zip(expected_x) {
        let layout = tree.layout(*child).unwrap();
        assert_eq!(layout.location.x, x);
        assert_eq!(layout.size.height, 102.0);
    }
}

#[test]
fn equal_flex_grow_gives_the_rounding_pivot_its_extra_pixel() {
    let mut tree = FlexureTree::new();

    let mut children = Vec::new();
    for _ in 0..3 {
        children.push(tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }));
    }

    let container = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) }, ..Default::default() },
        &children,
    );

    tree.compute_layout(container, None, None).unwrap();

    let widths: Vec<f32> = children.iter().map(|c| tree.layout(*c).unwrap().size.width).collect();
    assert_eq!(widths, vec![33.0, 34.0, 33.0]);
    assert_eq!(widths.iter().sum::<f32>(), 100.0);
}

#[test]
fn absolute_child_percentage_size_and_inset_resolve_against_the_same_containing_block() {
    let mut tree = FlexureTree::new();

    let mut child_style = Style {
        position: Position::Absolute,
        size: Size { width: Dimension::Percent(0.45), height: Dimension::Percent(0.55) },
        ..Default::default()
    };
    child_style.set_inset(Edge::Left, LengthPercentageAuto::Percent(0.1));
    child_style.set_inset(Edge::Top, LengthPercentageAuto::Percent(0.2));
    let child = tree.new_leaf(child_style);

    let container = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(400.0), height: Dimension::Length(400.0) }, ..Default::default() },
        &[child],
    );

    tree.compute_layout(container, None, None).unwrap();

    let layout = tree.layout(child).unwrap();
    assert_eq!(layout.location.x, 40.0);
    assert_eq!(layout.location.y, 80.0);
    assert_eq!(layout.size.width, 180.0);
    assert_eq!(layout.size.height, 220.0);
}

#[test]
fn absolute_child_right_inset_alone_determines_position() {
    let mut tree = FlexureTree::new();

    let mut child_style = Style {
        position: Position::Absolute,
        size: Size { width: Dimension::Length(10.0), height: Dimension::Length(10.0) },
        ..Default::default()
    };
    child_style.set_inset(Edge::Right, LengthPercentageAuto::Length(10.0));
    let child = tree.new_leaf(child_style);

    let container = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) }, ..Default::default() },
        &[child],
    );

    tree.compute_layout(container, None, None).unwrap();

    let layout = tree.layout(child).unwrap();
    assert_eq!(layout.location.x, 80.0);
    assert_eq!(layout.location.y, 0.0);
    assert_eq!(layout.size.width, 10.0);
    assert_eq!(layout.size.height, 10.0);
}

#[test]
fn column_gap_is_excluded_from_the_space_distributed_by_flex_grow() {
    let mut tree = FlexureTree::new();

    let mut children = Vec::new();
    for _ in 0..3 {
        children.push(tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }));
    }

    let mut container_style =
        Style { size: Size { width: Dimension::Length(80.0), height: auto() }, ..Default::default() };
    container_style.set_gap(Gutter::Column, LengthPercentage::Length(10.0));
    let container = tree.new_with_children(container_style, &children);

    tree.compute_layout(container, None, None).unwrap();

    let expected_x = [0.0, 30.0, 60.0];
    for (child, x) in children.iter().zip(expected_x) {
        let layout = tree.layout(*child).unwrap();
        assert_eq!(layout.location.x, x);
        assert_eq!(layout.size.width, 20.0);
    }
}

#[test]
fn fractional_parent_size_still_rounds_children_to_a_gapless_partition() {
    let mut tree = FlexureTree::new();

    let basis_grow = [(50.3, 0.7), (0.0, 1.6), (10.7, 1.1)];
    let mut children = Vec::new();
    for (basis, grow) in basis_grow {
        children.push(tree.new_leaf(Style {
            flex_basis: Dimension::Length(basis),
            flex_grow: grow,
            ..Default::default()
        }));
    }

    let container = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Column,
            size: Size { width: Dimension::Length(87.4), height: Dimension::Length(113.4) },
            ..Default::default()
        },
        &children,
    );

    tree.compute_layout(container, None, None).unwrap();

    let root_layout = tree.layout(container).unwrap();
    assert_eq!(root_layout.size.width, 87.0);
    assert_eq!(root_layout.size.height, 113.0);

    let heights: Vec<f32> = children.iter().map(|c| tree.layout(*c).unwrap().size.height).collect();
    assert_eq!(heights.iter().sum::<f32>(), 113.0);

    // Pixel-grid closure: each child's rounded bottom edge is the next child's rounded top edge.
    let mut cumulative = 0.0;
    for child in &children {
        let layout = tree.layout(*child).unwrap();
        assert_eq!(layout.location.y, cumulative);
        cumulative += layout.size.height;
    }
}
