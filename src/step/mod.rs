//! The step data model: declarative snapshots consumed by the renderer.
//!
//! A step sequence is authored ahead of time (usually as a JSON file, see
//! [`load`]) and is read-only for the lifetime of the view; the only mutable
//! state in the program is the [`player::StepPlayer`]'s current index.

pub mod load;
pub mod player;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value held in an array cell, stack slot, matrix cell or tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Numeric view used for bar-chart scaling. Non-numeric values scale as 0.
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Int(n) => *n as f64,
            Scalar::Float(f) => *f,
            Scalar::Text(_) | Scalar::Bool(_) => 0.0,
        }
    }

    /// Whether this value marks a queen cell in a board matrix.
    pub fn is_queen(&self) -> bool {
        matches!(self, Scalar::Int(1)) || matches!(self, Scalar::Text(s) if s == "Q")
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Semantic highlight tag. Purely cosmetic; the theme maps each tag to a
/// fixed color. Unrecognized tags in authored content deserialize as
/// `Default` rather than failing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Active,
    Comparing,
    Found,
    Visited,
    Swapped,
    Inactive,
    // serde requires the `other` fallback to be the last variant
    #[default]
    #[serde(other)]
    Default,
}

/// A highlight addressed by flat index (arrays, stacks, tree node slots).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub index: usize,
    #[serde(default)]
    pub style: StyleTag,
}

/// A highlight addressed by matrix cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellHighlight {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub style: StyleTag,
}

/// Resolve the style for `index`. First match wins; an index that matches
/// nothing (including out-of-range annotations) resolves to `Default`.
pub fn style_for(highlights: &[Highlight], index: usize) -> StyleTag {
    highlights
        .iter()
        .find(|h| h.index == index)
        .map(|h| h.style)
        .unwrap_or_default()
}

/// Resolve the style for a matrix cell, first match wins.
pub fn style_for_cell(highlights: &[CellHighlight], row: usize, col: usize) -> StyleTag {
    highlights
        .iter()
        .find(|h| h.row == row && h.col == col)
        .map(|h| h.style)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayElement {
    pub values: Vec<Scalar>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// Render values as a bar chart instead of a cell strip.
    #[serde(default)]
    pub bars: bool,
    /// Pointers owned by this array; when empty, the first array of a step
    /// falls back to the step-level pointer elements.
    #[serde(default)]
    pub pointers: Vec<PointerElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointerElement {
    pub index: usize,
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Annotates the inclusive index range `[left, right]` of an array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketElement {
    pub left: usize,
    pub right: usize,
    #[serde(default)]
    pub value: Option<Scalar>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackElement {
    /// Bottom-to-top: the last item is the top of the stack.
    pub items: Vec<Scalar>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNode {
    pub value: Scalar,
    #[serde(default)]
    pub style: Option<StyleTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedListElement {
    pub nodes: Vec<ListNode>,
    /// Pointer annotations addressed by node index.
    #[serde(default)]
    pub pointers: Vec<PointerElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixElement {
    pub rows: usize,
    pub cols: usize,
    /// Row-major, `rows * cols` entries; missing trailing cells render blank.
    pub values: Vec<Scalar>,
    #[serde(default)]
    pub highlights: Vec<CellHighlight>,
}

/// A tree node slot: either a bare value or a value with its own style.
/// Highlights by index take precedence over the per-node style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Plain(Scalar),
    Styled {
        value: Scalar,
        #[serde(default)]
        style: StyleTag,
    },
}

impl TreeNode {
    pub fn value(&self) -> &Scalar {
        match self {
            TreeNode::Plain(v) => v,
            TreeNode::Styled { value, .. } => value,
        }
    }

    pub fn style(&self) -> Option<StyleTag> {
        match self {
            TreeNode::Plain(_) => None,
            TreeNode::Styled { style, .. } => Some(*style),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeElement {
    /// Implicit binary-heap layout: node `i`'s children live at `2i+1` and
    /// `2i+2`; a `null` slot means "no node there".
    pub nodes: Vec<Option<TreeNode>>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// One visual element of a step, discriminated by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    Array(ArrayElement),
    Pointer(PointerElement),
    Bracket(BracketElement),
    Stack(StackElement),
    LinkedList(LinkedListElement),
    Matrix(MatrixElement),
    Tree(TreeElement),
}

/// An immutable snapshot in the visualization sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmStep {
    pub elements: Vec<Element>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "isComplete")]
    pub is_complete: bool,
    /// Watch variables in authoring order (`preserve_order` keeps the JSON
    /// object order intact).
    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

/// The on-disk step document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSequence {
    #[serde(default)]
    pub title: Option<String>,
    pub steps: Vec<AlgorithmStep>,
}
