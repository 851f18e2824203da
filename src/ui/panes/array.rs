//! Array pane rendering: value strip, bar mode, pointer rows and brackets.
//!
//! Geometry is a pure function of the fixed cell width. All annotation data
//! (highlights, pointers, brackets) is externally authored, so out-of-range
//! indices are skipped rather than reported.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::utils::{bar_rows, bracket_line, center, BAR_HEIGHT, CELL_W};
use crate::step::{style_for, ArrayElement, BracketElement, PointerElement, StyleTag};
use crate::ui::theme::DEFAULT_THEME;

/// Distinct pointer labels in first-seen order, each with its in-range
/// pointers. Grouping by label keeps multiple named pointers ("left",
/// "right") on separate rows so they never collide.
fn pointer_groups<'a>(
    pointers: &'a [PointerElement],
    len: usize,
) -> Vec<(&'a str, Vec<&'a PointerElement>)> {
    let mut groups: Vec<(&str, Vec<&PointerElement>)> = Vec::new();
    for p in pointers.iter().filter(|p| p.index < len) {
        match groups.iter_mut().find(|(label, _)| *label == p.label) {
            Some((_, members)) => members.push(p),
            None => groups.push((p.label.as_str(), vec![p])),
        }
    }
    groups
}

fn valid_brackets<'a>(
    brackets: &'a [BracketElement],
    len: usize,
) -> impl Iterator<Item = &'a BracketElement> {
    brackets
        .iter()
        .filter(move |b| b.left <= b.right && b.right < len)
}

/// Rows this array needs including its border, so the panel can size it.
pub fn array_block_height(
    el: &ArrayElement,
    pointers: &[PointerElement],
    brackets: &[BracketElement],
) -> u16 {
    let n = el.values.len();
    if n == 0 {
        return 2;
    }
    let bars = if el.bars { BAR_HEIGHT } else { 0 };
    let rows = bars
        + 1 // value strip
        + 1 // index row
        + pointer_groups(pointers, n).len()
        + valid_brackets(brackets, n).count();
    rows as u16 + 2
}

/// Render one array element with its resolved pointers and brackets.
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    el: &ArrayElement,
    pointers: &[PointerElement],
    brackets: &[BracketElement],
) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let n = el.values.len();
    let mut lines: Vec<Line> = Vec::new();

    if n > 0 {
        if el.bars {
            let heights = bar_rows(&el.values, BAR_HEIGHT);
            for row in (1..=BAR_HEIGHT).rev() {
                let spans: Vec<Span> = (0..n)
                    .map(|i| {
                        if heights[i] >= row {
                            let color = DEFAULT_THEME.style_color(style_for(&el.highlights, i));
                            Span::styled(center("████", CELL_W), Style::default().fg(color))
                        } else {
                            Span::raw(" ".repeat(CELL_W))
                        }
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
        }

        // Contiguous value strip, color-resolved per index
        let value_spans: Vec<Span> = el
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let tag = style_for(&el.highlights, i);
                let fg = if tag == StyleTag::Inactive {
                    DEFAULT_THEME.comment
                } else {
                    Color::Black
                };
                Span::styled(
                    center(&v.to_string(), CELL_W),
                    Style::default().bg(DEFAULT_THEME.style_color(tag)).fg(fg),
                )
            })
            .collect();
        lines.push(Line::from(value_spans));

        // Index row for positional reference
        let index_spans: Vec<Span> = (0..n)
            .map(|i| {
                Span::styled(
                    center(&i.to_string(), CELL_W),
                    Style::default().fg(DEFAULT_THEME.comment),
                )
            })
            .collect();
        lines.push(Line::from(index_spans));

        for (label, members) in pointer_groups(pointers, n) {
            let spans: Vec<Span> = (0..n)
                .map(|i| match members.iter().find(|p| p.index == i) {
                    Some(p) => Span::styled(
                        center(&format!("↑{}", label), CELL_W),
                        Style::default()
                            .fg(DEFAULT_THEME.pointer_color(p.color.as_deref()))
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::raw(" ".repeat(CELL_W)),
                })
                .collect();
            lines.push(Line::from(spans));
        }

        for bracket in valid_brackets(brackets, n) {
            let (indent, text) =
                bracket_line(bracket.left, bracket.right, bracket.value.as_ref(), CELL_W);
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(text, Style::default().fg(DEFAULT_THEME.secondary)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
