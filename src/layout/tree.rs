//! Binary-tree layout over the implicit heap-array encoding.
//!
//! Nodes arrive as a flat `Vec<Option<T>>` where index `i`'s children sit at
//! `2i+1` and `2i+2` and a `None` slot means "no node". Layout happens in two
//! passes: a recursive subtree-width computation (so sibling subtrees never
//! overlap) and a placement pass that centers each pair of subtrees under
//! their parent. All coordinates are abstract canvas units; the tree pane
//! scales them onto whatever terminal area it gets.

use rustc_hash::FxHashMap;

/// Node diameter in canvas units.
pub const NODE_SIZE: f64 = 40.0;
pub const NODE_RADIUS: f64 = NODE_SIZE / 2.0;
/// Minimum horizontal gap between sibling subtrees.
pub const MIN_SPACING: f64 = 20.0;
/// Vertical distance between tree levels.
pub const LEVEL_HEIGHT: f64 = 70.0;
pub const TOP_MARGIN: f64 = 10.0;
/// Padding added on every side of the bounding box.
pub const PADDING: f64 = 20.0;

/// Computed positions for one tree element.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    /// Center position per node slot; `None` for absent nodes.
    pub positions: Vec<Option<(f64, f64)>>,
    /// (parent, child) index pairs for every edge to an existing child.
    pub edges: Vec<(usize, usize)>,
    pub width: f64,
    pub height: f64,
}

impl TreeLayout {
    fn empty() -> Self {
        TreeLayout {
            positions: Vec::new(),
            edges: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.positions.iter().all(|p| p.is_none())
    }
}

/// Minimum horizontal space the subtree rooted at `i` needs.
///
/// 0 when `i` is out of bounds or the slot is absent; otherwise at least
/// `NODE_SIZE + MIN_SPACING`, growing to fit both child subtrees.
pub fn subtree_width<T>(nodes: &[Option<T>], i: usize) -> f64 {
    width_memo(nodes, i, &mut FxHashMap::default())
}

fn width_memo<T>(nodes: &[Option<T>], i: usize, memo: &mut FxHashMap<usize, f64>) -> f64 {
    if i >= nodes.len() || nodes[i].is_none() {
        return 0.0;
    }
    if let Some(w) = memo.get(&i) {
        return *w;
    }
    let children = width_memo(nodes, 2 * i + 1, memo) + width_memo(nodes, 2 * i + 2, memo);
    let w = (NODE_SIZE + MIN_SPACING).max(children + MIN_SPACING);
    memo.insert(i, w);
    w
}

fn place<T>(
    nodes: &[Option<T>],
    i: usize,
    x: f64,
    y: f64,
    memo: &mut FxHashMap<usize, f64>,
    positions: &mut [Option<(f64, f64)>],
) {
    positions[i] = Some((x, y));

    let left = 2 * i + 1;
    let right = 2 * i + 2;
    let lw = width_memo(nodes, left, memo);
    let rw = width_memo(nodes, right, memo);
    if lw + rw <= 0.0 {
        return;
    }

    let child_y = y + LEVEL_HEIGHT;
    if lw > 0.0 {
        // Center the subtree pair under the parent; a lone child shifts by
        // half its own width toward its side.
        let dx = if rw > 0.0 {
            (lw + rw) / 2.0 - lw / 2.0
        } else {
            lw / 2.0
        };
        place(nodes, left, x - dx, child_y, memo, positions);
    }
    if rw > 0.0 {
        let dx = if lw > 0.0 {
            (lw + rw) / 2.0 - rw / 2.0
        } else {
            rw / 2.0
        };
        place(nodes, right, x + dx, child_y, memo, positions);
    }
}

/// Compute positions, edges and canvas size for a heap-array tree.
///
/// An empty or all-absent `nodes` array yields an empty layout.
pub fn layout<T>(nodes: &[Option<T>]) -> TreeLayout {
    let mut memo = FxHashMap::default();
    let root_width = width_memo(nodes, 0, &mut memo);
    if root_width <= 0.0 {
        return TreeLayout::empty();
    }

    let mut positions: Vec<Option<(f64, f64)>> = vec![None; nodes.len()];
    place(
        nodes,
        0,
        root_width / 2.0,
        NODE_RADIUS + TOP_MARGIN,
        &mut memo,
        &mut positions,
    );

    // Bounding box over placed nodes, then shift x so nothing clips.
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for &(x, y) in positions.iter().flatten() {
        min_x = min_x.min(x - NODE_RADIUS);
        max_x = max_x.max(x + NODE_RADIUS);
        max_y = max_y.max(y + NODE_RADIUS);
    }
    let shift = PADDING - min_x;
    for pos in positions.iter_mut().flatten() {
        pos.0 += shift;
    }

    let mut edges = Vec::new();
    for i in 0..positions.len() {
        if positions[i].is_none() {
            continue;
        }
        for child in [2 * i + 1, 2 * i + 2] {
            if child < positions.len() && positions[child].is_some() {
                edges.push((i, child));
            }
        }
    }

    TreeLayout {
        positions,
        edges,
        width: (max_x - min_x) + 2.0 * PADDING,
        height: max_y + PADDING,
    }
}

/// Sample a cubic curve from `from` to `to` with both control points at the
/// vertical midpoint, yielding `samples + 1` points including the endpoints.
pub fn cubic_curve(from: (f64, f64), to: (f64, f64), samples: usize) -> Vec<(f64, f64)> {
    let samples = samples.max(1);
    let mid_y = (from.1 + to.1) / 2.0;
    let (p0, p3) = (from, to);
    let p1 = (from.0, mid_y);
    let p2 = (to.0, mid_y);

    (0..=samples)
        .map(|s| {
            let t = s as f64 / samples as f64;
            let u = 1.0 - t;
            let x = u * u * u * p0.0
                + 3.0 * u * u * t * p1.0
                + 3.0 * u * t * t * p2.0
                + t * t * t * p3.0;
            let y = u * u * u * p0.1
                + 3.0 * u * u * t * p1.1
                + 3.0 * u * t * t * p2.1
                + t * t * t * p3.1;
            (x, y)
        })
        .collect()
}
