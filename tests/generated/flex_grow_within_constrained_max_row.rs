use flexure::prelude::*;

#[test]
fn flex_grow_within_constrained_max_row() {
    let mut tree = FlexureTree::new();

    let node00 = tree.new_leaf(Style { flex_shrink: 1.0, flex_basis: Dimension::Length(100.0), ..Default::default() });
    let node01 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(50.0), height: auto() },
        ..Default::default()
    });
    let node0 = tree.new_with_children(
        Style {
            size: Size { width: auto(), height: Dimension::Length(100.0) },
            max_size: Size { width: Dimension::Length(100.0), height: auto() },
            ..Default::default()
        },
        &[node00, node01],
    );
    let node = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Column,
            size: Size { width: Dimension::Length(200.0), height: auto() },
            ..Default::default()
        },
        &[node0],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 200.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 100.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node00).unwrap();
    assert_eq!(layout.size.width, 67.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node01).unwrap();
    assert_eq!(layout.size.width, 33.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 67.0);
    assert_eq!(layout.location.y, 0.0);
}
