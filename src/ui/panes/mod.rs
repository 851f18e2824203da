//! Element pane rendering modules
//!
//! One module per element kind plus the composing step panel and the status
//! bar. Each renderer is a stateless function from a declarative element
//! value to widgets on the frame; annotation data is externally authored, so
//! every renderer ignores out-of-range references instead of failing.
//!
//! - [`array`]: cell strip / bar chart with pointer rows and brackets
//! - [`stack`]: bottom-to-top item stack with top marker
//! - [`list`]: linked list chain with NULL sentinel
//! - [`matrix`]: board grid with queen glyphs
//! - [`tree`]: heap-array binary tree on a Braille canvas
//! - [`panel`]: composes the above for one step, plus description/variables
//! - [`status`]: status bar with keybindings and playback state
//!
//! The [`utils`] module holds the pure geometry and formatting helpers the
//! panes share.

pub mod array;
pub mod list;
pub mod matrix;
pub mod panel;
pub mod stack;
pub mod status;
pub mod tree;
pub mod utils;

// Re-export render functions for convenience
pub use panel::render_step_panel;
pub use status::render_status_bar;
