use flexure::prelude::*;

#[test]
fn align_content_space_around_single_line() {
    let mut tree = FlexureTree::new();

    let mut leaf = |tree: &mut FlexureTree| {
        tree.new_leaf(Style {
            size: Size { width: Dimension::Length(50.0), height: Dimension::Length(10.0) },
            ..Default::default()
        })
    };
    let node0 = leaf(&mut tree);
    let node1 = leaf(&mut tree);
    let node2 = leaf(&mut tree);
    let node3 = leaf(&mut tree);
    let node4 = leaf(&mut tree);
    let node5 = leaf(&mut tree);

    let node = tree.new_with_children(
        Style {
            align_content: Some(AlignContent::SpaceAround),
            size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) },
            ..Default::default()
        },
        &[node0, node1, node2, node3, node4, node5],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 100.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 17.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node1).unwrap();
    assert_eq!(layout.size.width, 16.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 17.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node2).unwrap();
    assert_eq!(layout.size.width, 17.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 33.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node3).unwrap();
    assert_eq!(layout.size.width, 17.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 50.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node4).unwrap();
    assert_eq!(layout.size.width, 16.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 67.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node5).unwrap();
    assert_eq!(layout.size.width, 17.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 83.0);
    assert_eq!(layout.location.y, 0.0);
}
