use ratatui::style::Color;

use crate::step::StyleTag;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_normal: Color,
    pub status_bg: Color,

    // Highlight palette, one color per style tag
    pub cell_default: Color,
    pub cell_active: Color,
    pub cell_comparing: Color,
    pub cell_found: Color,
    pub cell_visited: Color,
    pub cell_swapped: Color,
    pub cell_inactive: Color,
}

impl Theme {
    /// Resolve a style tag to its display color. Total: every tag maps to a
    /// fixed color, and absence of a highlight resolves to `Default` before
    /// it ever reaches here.
    pub fn style_color(&self, tag: StyleTag) -> Color {
        match tag {
            StyleTag::Default => self.cell_default,
            StyleTag::Active => self.cell_active,
            StyleTag::Comparing => self.cell_comparing,
            StyleTag::Found => self.cell_found,
            StyleTag::Visited => self.cell_visited,
            StyleTag::Swapped => self.cell_swapped,
            StyleTag::Inactive => self.cell_inactive,
        }
    }

    /// Resolve a pointer's named color. Pointer colors come from authored
    /// content, so anything unrecognized falls back to `secondary`.
    pub fn pointer_color(&self, name: Option<&str>) -> Color {
        match name {
            Some("red") => Color::Rgb(243, 139, 168),
            Some("green") => Color::Rgb(166, 227, 161),
            Some("blue") => Color::Rgb(137, 180, 250),
            Some("yellow") => Color::Rgb(249, 226, 175),
            Some("orange") => Color::Rgb(250, 179, 135),
            Some("purple") => Color::Rgb(203, 166, 247),
            Some("cyan") => Color::Rgb(148, 226, 213),
            Some("pink") => Color::Rgb(245, 194, 231),
            _ => self.secondary,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    status_bg: Color::Rgb(50, 50, 70),        // Slightly lighter BG for the status bar

    cell_default: Color::Rgb(69, 71, 90),      // Surface grey
    cell_active: Color::Rgb(249, 226, 175),    // Yellow
    cell_comparing: Color::Rgb(250, 179, 135), // Orange
    cell_found: Color::Rgb(166, 227, 161),     // Green
    cell_visited: Color::Rgb(137, 180, 250),   // Blue
    cell_swapped: Color::Rgb(243, 139, 168),   // Red/pink
    cell_inactive: Color::Rgb(88, 91, 112),    // Dimmed grey
};
