use flexure::prelude::*;

#[test]
fn justify_content_column_min_height_and_margin_top() {
    let mut tree = FlexureTree::new();

    let mut node0_style = Style {
        size: Size { width: Dimension::Length(20.0), height: Dimension::Length(20.0) },
        ..Default::default()
    };
    node0_style.set_margin(Edge::Top, LengthPercentageAuto::Length(10.0));
    let node0 = tree.new_leaf(node0_style);

    let node = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Column,
            justify_content: Some(JustifyContent::Center),
            min_size: Size { height: Dimension::Length(50.0), ..Default::default() },
            ..Default::default()
        },
        &[node0],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 20.0);
    assert_eq!(layout.size.height, 50.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 20.0);
    assert_eq!(layout.size.height, 20.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 20.0);
}
