//! Spec §8 properties 5 and 6: re-running layout on an unmutated tree reproduces the same
//! output, and mutating a descendant then relaying out matches a fresh tree built with the
//! final property set directly.

use flexure::prelude::*;

fn three_child_row(tree: &mut FlexureTree, widths: [f32; 3]) -> (NodeId, Vec<NodeId>) {
    let children: Vec<NodeId> = widths
        .iter()
        .map(|w| {
            tree.new_leaf(Style {
                size: Size { width: Dimension::Length(*w), height: Dimension::Length(10.0) },
                ..Default::default()
            })
        })
        .collect();

    let container = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Row,
            size: Size { width: Dimension::Length(200.0), height: Dimension::Auto },
            ..Default::default()
        },
        &children,
    );

    (container, children)
}

#[test]
fn repeated_layout_on_unmutated_tree_is_byte_identical() {
    let mut tree = FlexureTree::new();
    let (container, children) = three_child_row(&mut tree, [30.0, 40.0, 50.0]);

    tree.compute_layout(container, None, None).unwrap();
    let first: Vec<Layout> = children.iter().map(|c| *tree.layout(*c).unwrap()).collect();
    let first_root = *tree.layout(container).unwrap();

    tree.compute_layout(container, None, None).unwrap();
    let second: Vec<Layout> = children.iter().map(|c| *tree.layout(*c).unwrap()).collect();
    let second_root = *tree.layout(container).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_root, second_root);
}

#[test]
fn mutating_a_descendant_then_relaying_out_matches_a_fresh_tree_with_the_final_style() {
    let mut mutated = FlexureTree::new();
    let (container, children) = three_child_row(&mut mutated, [30.0, 40.0, 50.0]);
    mutated.compute_layout(container, None, None).unwrap();

    // Mutate a leaf deep in the tree, forcing cache invalidation up to the root.
    mutated
        .with_style_mut(children[1], |style| {
            style.size.width = Dimension::Length(90.0);
        })
        .unwrap();
    mutated.compute_layout(container, None, None).unwrap();

    let mut fresh = FlexureTree::new();
    let (fresh_container, _fresh_children) = three_child_row(&mut fresh, [30.0, 90.0, 50.0]);
    fresh.compute_layout(fresh_container, None, None).unwrap();

    assert_eq!(*mutated.layout(container).unwrap(), *fresh.layout(fresh_container).unwrap());
    for i in 0..3 {
        assert_eq!(*mutated.layout(children[i]).unwrap(), *fresh.layout(_fresh_children[i]).unwrap());
    }
}

#[test]
fn reparenting_a_child_invalidates_both_old_and_new_owner() {
    let mut tree = FlexureTree::new();

    let leaf = tree.new_leaf(Style {
        size: Size { width: Dimension::Length(20.0), height: Dimension::Length(20.0) },
        ..Default::default()
    });

    let old_parent = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) }, ..Default::default() },
        &[leaf],
    );
    let new_parent = tree.new_with_children(
        Style { size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) }, ..Default::default() },
        &[],
    );

    tree.compute_layout(old_parent, None, None).unwrap();
    tree.compute_layout(new_parent, None, None).unwrap();

    tree.add_child(new_parent, leaf).unwrap();

    assert_eq!(tree.child_count(old_parent), 0);
    assert_eq!(tree.child_count(new_parent), 1);
    assert_eq!(tree.parent(leaf), Some(new_parent));

    tree.compute_layout(new_parent, None, None).unwrap();
    assert_eq!(tree.layout(leaf).unwrap().location, Point { x: 0.0, y: 0.0 });
}
