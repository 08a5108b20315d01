use flexure::prelude::*;

#[test]
fn justify_content_min_width_with_padding_child_width_greater_than_parent() {
    let mut tree = FlexureTree::new();

    let node000 = tree.new_leaf(Style {
        align_content: Some(AlignContent::Stretch),
        size: Size { width: Dimension::Length(300.0), height: Dimension::Length(100.0) },
        ..Default::default()
    });

    let mut node00_style = Style {
        align_content: Some(AlignContent::Stretch),
        justify_content: Some(JustifyContent::Center),
        min_size: Size { width: Dimension::Length(400.0), height: auto() },
        ..Default::default()
    };
    node00_style.set_padding(Edge::Left, LengthPercentage::Length(100.0));
    node00_style.set_padding(Edge::Right, LengthPercentage::Length(100.0));
    let node00 = tree.new_with_children(node00_style, &[node000]);

    let node0 = tree.new_with_children(Style { align_content: Some(AlignContent::Stretch), ..Default::default() }, &[node00]);

    let node = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Column,
            align_content: Some(AlignContent::Stretch),
            size: Size { width: Dimension::Length(1000.0), height: Dimension::Length(1584.0) },
            ..Default::default()
        },
        &[node0],
    );

    tree.compute_layout(node, None, None).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 1000.0);
    assert_eq!(layout.size.height, 1584.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node0).unwrap();
    assert_eq!(layout.size.width, 1000.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node00).unwrap();
    assert_eq!(layout.size.width, 500.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node000).unwrap();
    assert_eq!(layout.size.width, 300.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.location.x, 100.0);
    assert_eq!(layout.location.y, 0.0);
}
