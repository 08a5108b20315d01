use flexure::prelude::*;

#[test]
fn absolute_layout_align_items_and_justify_content_flex_end() {
    let mut tree = FlexureTree::new();

    let node0 = tree.new_leaf(Style {
        position: Position::Absolute,
        size: Size { width: Dimension::Length(60.0), height: Dimension::Length(40.0) },
        ..Default::default()
    });
    let node = tree.new_with_children(
        Style {
            align_items: Some(AlignItems::FlexEnd),
            justify_content: Some(JustifyContent::FlexEnd),
            size: Size { width: Dimension::Length(110.0), height: Dimension::Length(100.0) },
            ..Default::default()
        },
        &[node0],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 110.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 60.0);
    assert_eq!(layout.size.height, 40.0);
    assert_eq!(layout.location.x, 50.0);
    assert_eq!(layout.location.y, 60.0);
}
