use flexure::prelude::*;

#[test]
fn simple_child() {
    let mut tree = FlexureTree::new();

    let node000 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(10.0), height: Dimension::Length(10.0) },
        ..Default::default()
    });
    let node00 = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(10.0), height: Dimension::Length(10.0) }, ..Default::default() },
        &[node000],
    );
    let node010 = tree.new_leaf(Style {
        align_self: AlignSelf::Center,
        size: Size { width: Dimension::Length(10.0), height: Dimension::Length(10.0) },
        ..Default::default()
    });
    let node011 = tree.new_leaf(Style {
        align_self: AlignSelf::Center,
        size: Size { width: Dimension::Length(10.0), height: Dimension::Length(10.0) },
        ..Default::default()
    });
    let node01 = tree.new_with_children(Style::default(), &[node010, node011]);
    let node0 = tree.new_with_children(
        Style { size: Size { width: Dimension::Percent(1.0), height: Dimension::Percent(1.0) }, ..Default::default() },
        &[node00, node01],
    );
    let node = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) }, ..Default::default() },
        &[node0],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 100.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 100.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node00).unwrap();
    assert_eq!(layout.size.width, 10.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node000).unwrap();
    assert_eq!(layout.size.width, 10.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node01).unwrap();
    assert_eq!(layout.size.width, 20.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 10.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node010).unwrap();
    assert_eq!(layout.size.width, 10.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 45.0);

    let layout = tree.layout(node011).unwrap();
    assert_eq!(layout.size.width, 10.0);
    assert_eq!(layout.size.height, 10.0);
    assert_eq!(layout.location.x, 10.0);
    assert_eq!(layout.location.y, 45.0);
}
