//! Demonstrates leaves with intrinsic content: a text-like leaf whose size depends on the width
//! it is offered (wrapping at a fixed character width) and an image-like leaf with a fixed
//! aspect ratio, both driven through `MeasureFunc` rather than an explicit `size` style.

use flexure::prelude::*;

const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit";
const CHAR_WIDTH: f32 = 10.0;
const CHAR_HEIGHT: f32 = 10.0;

fn measure_text(known_dimensions: Size<Option<f32>>, available_space: Size<AvailableSpace>) -> Size<f32> {
    if let Size { width: Some(width), height: Some(height) } = known_dimensions {
        return Size { width, height };
    }

    let chars_per_line = match available_space.width {
        AvailableSpace::Definite(width) => (width / CHAR_WIDTH).floor().max(1.0) as usize,
        AvailableSpace::MinContent => 1,
        AvailableSpace::MaxContent => LOREM_IPSUM.len(),
    };

    let lines = (LOREM_IPSUM.len() as f32 / chars_per_line as f32).ceil().max(1.0);
    let width = known_dimensions.width.unwrap_or_else(|| (chars_per_line.min(LOREM_IPSUM.len())) as f32 * CHAR_WIDTH);
    let height = known_dimensions.height.unwrap_or(lines * CHAR_HEIGHT);

    Size { width, height }
}

fn measure_image(known_dimensions: Size<Option<f32>>, _available_space: Size<AvailableSpace>) -> Size<f32> {
    const ASPECT_RATIO: f32 = 400.0 / 300.0;

    match (known_dimensions.width, known_dimensions.height) {
        (Some(width), Some(height)) => Size { width, height },
        (Some(width), None) => Size { width, height: width / ASPECT_RATIO },
        (None, Some(height)) => Size { width: height * ASPECT_RATIO, height },
        (None, None) => Size { width: 400.0, height: 300.0 },
    }
}

fn print_subtree(tree: &FlexureTree, node: NodeId, depth: usize) {
    let layout = tree.layout(node).unwrap();
    println!(
        "{:indent$}{:?} x={} y={} width={} height={}",
        "",
        node,
        layout.location.x,
        layout.location.y,
        layout.size.width,
        layout.size.height,
        indent = depth * 2,
    );
    for i in 0..tree.child_count(node) {
        let child = tree.get_child(node, i).unwrap();
        print_subtree(tree, child, depth + 1);
    }
}

fn main() {
    let mut tree = FlexureTree::new();

    let text_node = tree.new_leaf_with_measure(Style::default(), MeasureFunc::Raw(measure_text));
    let image_node = tree.new_leaf_with_measure(Style::default(), MeasureFunc::Raw(measure_image));

    let root = tree.new_with_children(
        Style { flex_direction: FlexDirection::Column, ..Default::default() },
        &[text_node, image_node],
    );

    tree.compute_layout(root, Some(400.0), None).unwrap();
    print_subtree(&tree, root, 0);
}
