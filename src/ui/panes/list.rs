//! Linked-list pane rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::step::LinkedListElement;
use crate::ui::theme::DEFAULT_THEME;

const ARROW: &str = " → ";

/// Rows this list needs including its border: one for the node chain plus an
/// annotation row when any in-range pointer exists.
pub fn list_block_height(el: &LinkedListElement) -> u16 {
    let has_pointers = el.pointers.iter().any(|p| p.index < el.nodes.len());
    if has_pointers {
        4
    } else {
        3
    }
}

/// Render a linked list as a single chain of cells joined by arrow glyphs
/// and terminated by a NULL sentinel, with pointer labels aligned over the
/// node they reference.
pub fn render_list_pane(frame: &mut Frame, area: Rect, el: &LinkedListElement) {
    let block = Block::default()
        .title(" Linked List ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut lines: Vec<Line> = Vec::new();

    if el.nodes.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    // Node chain; record each node's starting column for the pointer row.
    let mut offsets = Vec::with_capacity(el.nodes.len());
    let mut node_spans: Vec<Span> = Vec::new();
    let mut col = 0usize;
    for node in &el.nodes {
        let text = format!("[ {} ]", node.value);
        offsets.push(col);
        col += text.chars().count();
        let color = DEFAULT_THEME.style_color(node.style.unwrap_or_default());
        node_spans.push(Span::styled(
            text,
            Style::default().bg(color).fg(Color::Black),
        ));
        node_spans.push(Span::styled(
            ARROW,
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        col += ARROW.chars().count();
    }
    node_spans.push(Span::styled(
        "NULL",
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    // Pointer annotation row, left to right; overlapping labels are skipped.
    let mut placed: Vec<(usize, String, &Option<String>)> = el
        .pointers
        .iter()
        .filter(|p| p.index < el.nodes.len())
        .map(|p| (offsets[p.index], format!("↓{}", p.label), &p.color))
        .collect();
    placed.sort_by_key(|(offset, _, _)| *offset);

    if !placed.is_empty() {
        let mut spans: Vec<Span> = Vec::new();
        let mut cursor = 0usize;
        for (offset, text, color) in placed {
            if offset < cursor {
                continue;
            }
            spans.push(Span::raw(" ".repeat(offset - cursor)));
            cursor = offset + text.chars().count();
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(DEFAULT_THEME.pointer_color(color.as_deref()))
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(node_spans));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
