use flexure::prelude::*;

#[test]
fn percentage_moderate_complexity2() {
    let mut tree = FlexureTree::new();

    let node00 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(20.0), height: Dimension::Length(20.0) },
        ..Default::default()
    });

    let mut node0_style = Style {
        flex_direction: FlexDirection::Column,
        size: Size { width: Dimension::Percent(0.5), height: auto() },
        ..Default::default()
    };
    node0_style.set_padding(Edge::All, LengthPercentage::Percent(0.1));
    let node0 = tree.new_with_children(node0_style, &[node00]);

    let node = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Column,
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
    assert_eq!(layout.size.width, 100.0);
    assert_eq!(layout.size.height, 60.0);
    assert_eq!(layout.location.x, 0.0);
    assert_eq!(layout.location.y, 0.0);

    let layout = tree.layout(node00).unwrap();
    assert_eq!(layout.size.width, 20.0);
    assert_eq!(layout.size.height, 20.0);
    assert_eq!(layout.location.x, 20.0);
    assert_eq!(layout.location.y, 20.0);
}
