//! Stack pane rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::utils::center;
use crate::step::{style_for, StackElement};
use crate::ui::theme::DEFAULT_THEME;

const SLOT_W: usize = 9;

/// Rows this stack needs including its border.
pub fn stack_block_height(el: &StackElement) -> u16 {
    el.items.len().max(1) as u16 + 3
}

/// Render a stack element, top of stack first. Items are stored bottom-to-
/// top, so the last item is the top.
pub fn render_stack_pane(frame: &mut Frame, area: Rect, el: &StackElement) {
    let block = Block::default()
        .title(" Stack ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut lines: Vec<Line> = Vec::new();

    if el.items.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        let top = el.items.len() - 1;
        for (i, item) in el.items.iter().enumerate().rev() {
            let color = DEFAULT_THEME.style_color(style_for(&el.highlights, i));
            let mut spans = vec![Span::styled(
                center(&item.to_string(), SLOT_W),
                Style::default().bg(color).fg(Color::Black),
            )];
            if i == top {
                spans.push(Span::styled(
                    " ← top",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            "═".repeat(SLOT_W),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
