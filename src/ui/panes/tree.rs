//! Tree pane rendering
//!
//! Positions come from [`crate::layout::tree`]; this module only maps them
//! onto a Braille canvas: cubic-curve connectors between parents and
//! existing children, one circle per node colored by its resolved style, and
//! the node value printed at the center. `active` and `found` nodes get a
//! halo ring as the terminal stand-in for a glow.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::layout::tree::{cubic_curve, layout, NODE_RADIUS};
use crate::step::{StyleTag, TreeElement};
use crate::ui::theme::DEFAULT_THEME;

const CURVE_SAMPLES: usize = 16;

/// Render a heap-array tree element. Empty or all-absent nodes draw an empty
/// canvas rather than failing.
pub fn render_tree_pane(frame: &mut Frame, area: Rect, el: &TreeElement) {
    let block = Block::default()
        .title(" Tree ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let lay = layout(&el.nodes);
    if lay.is_empty() {
        frame.render_widget(Paragraph::new(Vec::<Line>::new()).block(block), area);
        return;
    }

    // Canvas y grows upward, layout y grows downward; flip on the way in.
    let height = lay.height;
    let inner_cols = area.width.saturating_sub(2).max(1) as f64;
    let char_w = lay.width / inner_cols;

    // Highlight by index wins over the node's own style.
    let styled_nodes: Vec<(f64, f64, StyleTag, String)> = el
        .nodes
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| {
            let node = slot.as_ref()?;
            let (x, y) = lay.positions.get(i).copied().flatten()?;
            let tag = el
                .highlights
                .iter()
                .find(|h| h.index == i)
                .map(|h| h.style)
                .or_else(|| node.style())
                .unwrap_or_default();
            Some((x, y, tag, node.value().to_string()))
        })
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, lay.width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for &(parent, child) in &lay.edges {
                let (Some(p), Some(c)) = (
                    lay.positions.get(parent).copied().flatten(),
                    lay.positions.get(child).copied().flatten(),
                ) else {
                    continue;
                };
                let points = cubic_curve(
                    (p.0, p.1 + NODE_RADIUS),
                    (c.0, c.1 - NODE_RADIUS),
                    CURVE_SAMPLES,
                );
                for pair in points.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].0,
                        y1: height - pair[0].1,
                        x2: pair[1].0,
                        y2: height - pair[1].1,
                        color: DEFAULT_THEME.comment,
                    });
                }
            }

            ctx.layer();

            for (x, y, tag, _) in &styled_nodes {
                let color = DEFAULT_THEME.style_color(*tag);
                if matches!(tag, StyleTag::Active | StyleTag::Found) {
                    ctx.draw(&Circle {
                        x: *x,
                        y: height - *y,
                        radius: NODE_RADIUS + 4.0,
                        color,
                    });
                }
                ctx.draw(&Circle {
                    x: *x,
                    y: height - *y,
                    radius: NODE_RADIUS,
                    color,
                });
            }

            ctx.layer();

            for (x, y, _, text) in &styled_nodes {
                let offset = char_w * text.chars().count() as f64 / 2.0;
                ctx.print(
                    x - offset,
                    height - y,
                    Line::from(Span::styled(
                        text.clone(),
                        Style::default()
                            .fg(DEFAULT_THEME.fg)
                            .add_modifier(Modifier::BOLD),
                    )),
                );
            }
        });

    frame.render_widget(canvas, area);
}
