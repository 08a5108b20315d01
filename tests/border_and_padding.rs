use flexure::prelude::*;

const EDGES: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

#[test]
fn border_on_a_single_axis_doesnt_increase_size() {
    for edge in EDGES {
        let mut tree = FlexureTree::new();
        let mut style = Style::default();
        style.set_border(edge, LengthPercentage::Length(10.0));
        let node = tree.new_leaf(style);

        tree.compute_layout(node, Some(100.0), Some(100.0)).unwrap();

        let layout = tree.layout(node).unwrap();
        assert_eq!(layout.size.width * layout.size.height, 0.0);
    }
}

#[test]
fn padding_on_a_single_axis_doesnt_increase_size() {
    for edge in EDGES {
        let mut tree = FlexureTree::new();
        let mut style = Style::default();
        style.set_padding(edge, LengthPercentage::Length(10.0));
        let node = tree.new_leaf(style);

        tree.compute_layout(node, Some(100.0), Some(100.0)).unwrap();

        let layout = tree.layout(node).unwrap();
        assert_eq!(layout.size.width * layout.size.height, 0.0);
    }
}

#[test]
fn border_and_padding_on_a_single_axis_doesnt_increase_size() {
    for edge in EDGES {
        let mut tree = FlexureTree::new();
        let mut style = Style::default();
        style.set_border(edge, LengthPercentage::Length(10.0));
        style.set_padding(edge, LengthPercentage::Length(10.0));
        let node = tree.new_leaf(style);

        tree.compute_layout(node, Some(100.0), Some(100.0)).unwrap();

        let layout = tree.layout(node).unwrap();
        assert_eq!(layout.size.width * layout.size.height, 0.0);
    }
}

#[test]
fn vertical_border_and_padding_percentage_values_use_available_space_correctly() {
    let mut tree = FlexureTree::new();

    let mut style = Style::default();
    style.set_padding(Edge::Left, LengthPercentage::Percent(1.0));
    style.set_padding(Edge::Top, LengthPercentage::Percent(1.0));
    let node = tree.new_leaf(style);

    tree.compute_layout(node, Some(200.0), Some(100.0)).unwrap();

    let layout = tree.layout(node).unwrap();
    assert_eq!(layout.size.width, 200.0);
    assert_eq!(layout.size.height, 200.0);
}
