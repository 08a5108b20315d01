use flexure::prelude::*;

#[test]
fn flex_direction_row_reverse() {
    let mut tree = FlexureTree::new();

    let node0 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(10.0), ..Default::default() },
        ..Default::default()
    });
    let node1 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(10.0), ..Default::default() },
        ..Default::default()
    });
    let node2 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(10.0), ..Default::default() },
        ..Default::default()
    });
    let node = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::RowReverse,
            size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) },
            ..Default::default()
        },
        &[node0, node1, node2],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 100.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 10.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 90.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node1).unwrap();
    assert_eq!(layout.size.width, 10.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 80.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node2).unwrap();
    assert_eq!(layout.size.width, 10.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 70.0);
    assert_eq!(layout.location.y, 0.0);
}
