use flexure::prelude::*;

fn main() {
    let mut tree = FlexureTree::new();

    // left
    let child_t1 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(5.0), height: Dimension::Length(5.0) },
        ..Default::default()
    });

    let div1 = tree.new_with_children(
        Style {
            size: Size { width: Dimension::Percent(0.5), height: Dimension::Percent(1.0) },
            ..Default::default()
        },
        &[child_t1],
    );

    // right
    let child_t2 = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(5.0), height: Dimension::Length(5.0) },
        ..Default::default()
    });

    let div2 = tree.new_with_children(
        Style {
            size: Size { width: Dimension::Percent(0.5), height: Dimension::Percent(1.0) },
            ..Default::default()
        },
        &[child_t2],
    );

    let container = tree.new_with_children(
        Style { size: Size { width: Dimension::Percent(1.0), height: Dimension::Percent(1.0) }, ..Default::default() },
        &[div1, div2],
    );

    tree.compute_layout(container, Some(100.0), Some(100.0)).unwrap();

    println!("node: {:#?}", tree.layout(container).unwrap());
    println!("div1: {:#?}", tree.layout(div1).unwrap());
    println!("div2: {:#?}", tree.layout(div2).unwrap());
    println!("child1: {:#?}", tree.layout(child_t1).unwrap());
    println!("child2: {:#?}", tree.layout(child_t2).unwrap());
}
