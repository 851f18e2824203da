// Tree layout geometry tests

use stepviz::layout::tree::{
    cubic_curve, layout, subtree_width, MIN_SPACING, NODE_SIZE, PADDING,
};

fn pos(lay: &stepviz::layout::tree::TreeLayout, i: usize) -> (f64, f64) {
    lay.positions[i].expect("node should be placed")
}

#[test]
fn width_is_zero_for_absent_or_out_of_bounds() {
    let nodes: Vec<Option<i32>> = vec![Some(1), None, Some(3)];
    assert_eq!(subtree_width(&nodes, 1), 0.0);
    assert_eq!(subtree_width(&nodes, 99), 0.0);
    assert_eq!(subtree_width::<i32>(&[], 0), 0.0);
}

#[test]
fn width_has_minimum_for_existing_nodes() {
    let nodes: Vec<Option<i32>> = vec![Some(1), Some(2), Some(3), Some(4)];
    for i in 0..nodes.len() {
        let w = subtree_width(&nodes, i);
        assert!(w >= NODE_SIZE + MIN_SPACING, "node {} width {}", i, w);
    }
    // A parent must span both children plus spacing
    assert!(
        subtree_width(&nodes, 0)
            >= subtree_width(&nodes, 1) + subtree_width(&nodes, 2) + MIN_SPACING
    );
}

#[test]
fn equal_subtrees_place_children_symmetrically() {
    let nodes: Vec<Option<i32>> = vec![Some(1), Some(2), Some(3)];
    let lay = layout(&nodes);
    let (px, py) = pos(&lay, 0);
    let (lx, ly) = pos(&lay, 1);
    let (rx, ry) = pos(&lay, 2);

    assert!(ly > py && ry > py, "children sit one level below the parent");
    assert_eq!(ly, ry);
    assert!(
        (px - lx - (rx - px)).abs() < 1e-9,
        "equal widths give symmetric offsets: {} vs {}",
        px - lx,
        rx - px
    );
}

#[test]
fn example_tree_positions_and_edges() {
    // root 5, left 3, right 8, 3's right child 4 (slot 3 is null)
    let nodes: Vec<Option<i32>> = vec![Some(5), Some(3), Some(8), None, Some(4)];
    let lay = layout(&nodes);

    assert_eq!(lay.edges, vec![(0, 1), (0, 2), (1, 4)]);
    assert!(lay.positions[3].is_none());

    let (rx, ry) = pos(&lay, 0);
    let (lx, ly) = pos(&lay, 1);
    let (rrx, rry) = pos(&lay, 2);
    let (cx, cy) = pos(&lay, 4);

    // Root above both children, between them horizontally
    assert!(ry < ly && ry < rry);
    assert!(lx < rx && rx < rrx);

    // Node 4 is the lone right child of node 1: below and to the right
    assert!(cy > ly);
    assert!(cx > lx);
}

#[test]
fn layout_is_shifted_clear_of_the_left_edge() {
    let nodes: Vec<Option<i32>> = vec![Some(5), Some(3), Some(8), None, Some(4)];
    let lay = layout(&nodes);

    for (x, _) in lay.positions.iter().flatten() {
        assert!(x - NODE_SIZE / 2.0 >= PADDING - 1e-9, "x {} clips", x);
        assert!(x + NODE_SIZE / 2.0 <= lay.width - PADDING + 1e-9);
    }
    assert!(lay.width > 0.0 && lay.height > 0.0);
}

#[test]
fn empty_and_all_null_trees_yield_empty_layouts() {
    let lay = layout::<i32>(&[]);
    assert!(lay.is_empty());
    assert_eq!(lay.width, 0.0);

    let lay = layout(&vec![None::<i32>, None, None]);
    assert!(lay.is_empty());
    assert!(lay.edges.is_empty());
}

#[test]
fn single_node_tree() {
    let lay = layout(&[Some(42)]);
    assert!(lay.edges.is_empty());
    let (x, _) = pos(&lay, 0);
    assert!((x - lay.width / 2.0).abs() < 1e-9, "lone root is centered");
}

#[test]
fn cubic_curve_hits_its_endpoints_and_midline() {
    let from = (10.0, 30.0);
    let to = (50.0, 100.0);
    let points = cubic_curve(from, to, 16);

    assert_eq!(points.len(), 17);
    assert_eq!(points[0], from);
    assert_eq!(points[16], to);

    // Both control points sit on the vertical midpoint, so the curve
    // crosses it exactly halfway
    let mid = points[8];
    assert!((mid.1 - 65.0).abs() < 1e-9);
}
