//! Terminal UI: the step panel, element panes, theme, and application loop.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
