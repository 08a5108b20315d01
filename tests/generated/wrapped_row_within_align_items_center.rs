use flexure::prelude::*;

#[test]
fn wrapped_row_within_align_items_center() {
    let mut tree = FlexureTree::new();

    let node00 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(150.0), height: Dimension::Length(80.0) },
        ..Default::default()
    });
    let node01 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(80.0), height: Dimension::Length(80.0) },
        ..Default::default()
    });
    let node0 = tree.new_with_children(Style { flex_wrap: FlexWrap::Wrap, ..Default::default() }, &[node00, node01]);

    let node = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Column,
            align_items: Some(AlignItems::Center),
            size: Size { width: Dimension::Length(200.0), height: Dimension::Length(200.0) },
            ..Default::default()
        },
        &[node0],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 200.0);
    assert_eq!(layout.size.height, 200.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 200.0);
    assert_eq!(layout.size.height, 160.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node00).unwrap();
    assert_eq!(layout.size.width, 150.0);
    assert_eq!(layout.size.height, 80.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node01).unwrap();
    assert_eq!(layout.size.width, 80.0);
    assert_eq!(layout.size.height, 80.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 80.0);
}
