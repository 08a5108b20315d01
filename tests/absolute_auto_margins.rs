use flexure::prelude::*;

#[test]
fn absolute_child_with_both_insets_and_auto_margins_splits_leftover_equally() {
    let mut tree = FlexureTree::new();

    let mut child_style = Style {
        position: Position::Absolute,
        size: Size { width: Dimension::Length(20.0), height: Dimension::Length(20.0) },
        ..Default::default()
    };
    child_style.set_inset(Edge::Left, LengthPercentageAuto::Length(0.0));
    child_style.set_inset(Edge::Right, LengthPercentageAuto::Length(0.0));
    child_style.set_margin(Edge::Left, LengthPercentageAuto::Auto);
    child_style.set_margin(Edge::Right, LengthPercentageAuto::Auto);
    let child = tree.new_leaf(child_style);

    let root = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) }, ..Default::default() },
        &[child],
    );

    tree.compute_layout(root, None, None).unwrap();

    // containing block is 100 wide; both insets are 0, size is 20, so 80px of leftover space
    // splits into a 40px margin on each side.
    let layout = tree.layout(child).unwrap();
    assert_eq!(layout.size.width, 20.0);
    assert_eq!(layout.location.x, 40.0);
}

#[test]
fn absolute_child_with_one_auto_margin_takes_all_the_leftover_space() {
    let mut tree = FlexureTree::new();

    let mut child_style = Style {
        position: Position::Absolute,
        size: Size { width: Dimension::Length(20.0), height: Dimension::Length(10.0) },
        ..Default::default()
    };
    child_style.set_inset(Edge::Left, LengthPercentageAuto::Length(0.0));
    child_style.set_inset(Edge::Right, LengthPercentageAuto::Length(0.0));
    child_style.set_margin(Edge::Left, LengthPercentageAuto::Auto);
    let child = tree.new_leaf(child_style);

    let root = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) }, ..Default::default() },
        &[child],
    );

    tree.compute_layout(root, None, None).unwrap();

    let layout = tree.layout(child).unwrap();
    assert_eq!(layout.size.width, 20.0);
    assert_eq!(layout.location.x, 80.0);
}
