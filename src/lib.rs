//! # Introduction
//!
//! stepviz plays back pre-baked algorithm visualizations in the terminal.
//! A step file holds an ordered sequence of immutable [`step::AlgorithmStep`]
//! snapshots, each a declarative list of visual elements (arrays, stacks,
//! linked lists, matrices, binary trees) with semantic highlights, pointer
//! and bracket annotations, a description and a variables watch list. The
//! sequence is navigated forward and backward through a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! JSON file → StepSequence → StepPlayer → Step panel → element panes
//! ```
//!
//! 1. [`step`] — the data model, JSON loading, and the step player; the
//!    player's index is the only mutable state in the program.
//! 2. [`layout`] — pure geometry for the binary-tree pane: recursive
//!    subtree widths, centered placement, bounding box, edge curves.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Steps are read-only once loaded. Annotation data is authored externally,
//! so rendering never fails on it: out-of-range indices are not matched,
//! unknown style tags resolve to the default color, and absent tree nodes
//! mean "no subtree".

pub mod layout;
pub mod step;
pub mod ui;
