use flexure::prelude::*;

#[test]
fn wrap_nodes_with_content_sizing_overflowing_margin() {
    let mut tree = FlexureTree::new();

    let node000 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(40.0), height: Dimension::Length(40.0) },
        ..Default::default()
    });
    let node00 = tree.new_with_children(Style { flex_direction: FlexDirection::Column, ..Default::default() }, &[node000]);

    let node010 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(40.0), height: Dimension::Length(40.0) },
        ..Default::default()
    });
    let mut node01_style = Style { flex_direction: FlexDirection::Column, ..Default::default() };
    node01_style.set_margin(Edge::Right, LengthPercentageAuto::Length(10.0));
    let node01 = tree.new_with_children(node01_style, &[node010]);

    let node0 = tree.new_with_children(
        Style { flex_wrap: FlexWrap::Wrap, size: Size { width: Dimension::Length(85.0), height: auto() }, ..Default::default() },
        &[node00, node01],
    );

    let node = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Column,
            size: Size { width: Dimension::Length(500.0), height: Dimension::Length(500.0) },
            ..Default::default()
        },
        &[node0],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 500.0);
    assert_eq!(layout.size.height, 500.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 85.0);
    assert_eq!(layout.size.height, 80.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node00).unwrap();
    assert_eq!(layout.size.width, 40.0);
    assert_eq!(layout.size.height, 40.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node000).unwrap();
    assert_eq!(layout.size.width, 40.0);
    assert_eq!(layout.size.height, 40.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node01).unwrap();
    assert_eq!(layout.size.width, 40.0);
    assert_eq!(layout.size.height, 40.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 40.0);

    let layout = tree.layout(node010).unwrap();
    assert_eq!(layout.size.width, 40.0);
    assert_eq!(layout.size.height, 40.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);
}
