//! Matrix pane rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::utils::center;
use crate::step::{style_for_cell, MatrixElement, StyleTag};
use crate::ui::theme::DEFAULT_THEME;

const CELL_W: usize = 3;

/// Rows this matrix needs including its border, saturating for authored
/// dimensions that exceed any real terminal.
pub fn matrix_block_height(el: &MatrixElement) -> u16 {
    u16::try_from(el.rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Render a `rows × cols` grid. A cell holding `1` or `"Q"` draws a queen
/// glyph (board visualizations), everything else a placeholder dot; cells
/// past the end of `values` stay blank.
pub fn render_matrix_pane(frame: &mut Frame, area: Rect, el: &MatrixElement) {
    let block = Block::default()
        .title(" Matrix ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    // Dimensions are authored content; cap them at the visible area and use
    // checked indexing so oversized declarations degrade instead of panic.
    let visible_rows = el.rows.min(area.height as usize);
    let visible_cols = el.cols.min(area.width as usize);

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..visible_rows {
        let spans: Vec<Span> = (0..visible_cols)
            .map(|col| {
                let value = row
                    .checked_mul(el.cols)
                    .and_then(|i| i.checked_add(col))
                    .and_then(|i| el.values.get(i));
                let is_queen = value.is_some_and(|v| v.is_queen());
                let glyph = match value {
                    Some(_) if is_queen => "♛",
                    Some(_) => "·",
                    None => " ",
                };
                let tag = style_for_cell(&el.highlights, row, col);
                let mut style = if is_queen {
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.comment)
                };
                if tag != StyleTag::Default {
                    style = style.bg(DEFAULT_THEME.style_color(tag)).fg(Color::Black);
                }
                Span::styled(center(glyph, CELL_W), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
