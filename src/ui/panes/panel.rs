//! Step panel: composes the element renderers for the current step.
//!
//! Element order is fixed: arrays first (each paired with its own pointers
//! and brackets, the first array falling back to the step-level pointer and
//! bracket elements), then at most one each of stack, linked list, matrix
//! and tree. Below the visualization sit the description line with its
//! completion marker and the variables watch strip.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::array::{array_block_height, render_array_pane};
use super::list::{list_block_height, render_list_pane};
use super::matrix::{matrix_block_height, render_matrix_pane};
use super::stack::{render_stack_pane, stack_block_height};
use super::tree::render_tree_pane;
use super::utils::format_var_value;
use crate::step::{
    AlgorithmStep, ArrayElement, BracketElement, Element, LinkedListElement, MatrixElement,
    PointerElement, StackElement, TreeElement,
};
use crate::ui::theme::DEFAULT_THEME;

/// Render the visualization panel for the current step, or the start prompt
/// when playback has not begun.
pub fn render_step_panel(frame: &mut Frame, area: Rect, title: &str, step: Option<&AlgorithmStep>) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(step) = step else {
        render_start_prompt(frame, inner);
        return;
    };

    // Pull the step's elements apart; extra stack/list/matrix/tree elements
    // beyond the first of each kind are ignored.
    let mut arrays: Vec<&ArrayElement> = Vec::new();
    let mut step_pointers: Vec<PointerElement> = Vec::new();
    let mut step_brackets: Vec<BracketElement> = Vec::new();
    let mut stack_el: Option<&StackElement> = None;
    let mut list_el: Option<&LinkedListElement> = None;
    let mut matrix_el: Option<&MatrixElement> = None;
    let mut tree_el: Option<&TreeElement> = None;

    for element in &step.elements {
        match element {
            Element::Array(a) => arrays.push(a),
            Element::Pointer(p) => step_pointers.push(p.clone()),
            Element::Bracket(b) => step_brackets.push(b.clone()),
            Element::Stack(s) => stack_el = stack_el.or(Some(s)),
            Element::LinkedList(l) => list_el = list_el.or(Some(l)),
            Element::Matrix(m) => matrix_el = matrix_el.or(Some(m)),
            Element::Tree(t) => tree_el = tree_el.or(Some(t)),
        }
    }

    // An array's own pointers win; step-level pointers and brackets attach
    // to the first array only.
    let pointers_for = |i: usize, a: &ArrayElement| -> Vec<PointerElement> {
        if !a.pointers.is_empty() {
            a.pointers.clone()
        } else if i == 0 {
            step_pointers.clone()
        } else {
            Vec::new()
        }
    };
    let brackets_for = |i: usize| -> &[BracketElement] {
        if i == 0 {
            &step_brackets
        } else {
            &[]
        }
    };

    let mut constraints: Vec<Constraint> = Vec::new();
    for (i, a) in arrays.iter().enumerate() {
        constraints.push(Constraint::Length(array_block_height(
            a,
            &pointers_for(i, a),
            brackets_for(i),
        )));
    }
    if let Some(s) = stack_el {
        constraints.push(Constraint::Length(stack_block_height(s)));
    }
    if let Some(l) = list_el {
        constraints.push(Constraint::Length(list_block_height(l)));
    }
    if let Some(m) = matrix_el {
        constraints.push(Constraint::Length(matrix_block_height(m)));
    }
    if tree_el.is_some() {
        constraints.push(Constraint::Min(12));
    }
    constraints.push(Constraint::Min(0)); // filler pushes the text down
    constraints.push(Constraint::Length(2)); // description + variables

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut idx = 0;
    for (i, a) in arrays.iter().enumerate() {
        render_array_pane(frame, chunks[idx], a, &pointers_for(i, a), brackets_for(i));
        idx += 1;
    }
    if let Some(s) = stack_el {
        render_stack_pane(frame, chunks[idx], s);
        idx += 1;
    }
    if let Some(l) = list_el {
        render_list_pane(frame, chunks[idx], l);
        idx += 1;
    }
    if let Some(m) = matrix_el {
        render_matrix_pane(frame, chunks[idx], m);
        idx += 1;
    }
    if let Some(t) = tree_el {
        render_tree_pane(frame, chunks[idx], t);
    }

    render_step_text(frame, chunks[chunks.len() - 1], step);
}

fn render_start_prompt(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..area.height.saturating_sub(1) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press Enter to start",
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_step_text(frame: &mut Frame, area: Rect, step: &AlgorithmStep) {
    let marker = if step.is_complete {
        Span::styled(
            "✓ ",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary))
    };
    let description = Line::from(vec![
        marker,
        Span::styled(
            step.description.clone().unwrap_or_default(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]);

    let mut var_spans: Vec<Span> = Vec::new();
    for (name, value) in &step.variables {
        if !var_spans.is_empty() {
            var_spans.push(Span::styled(
                " │ ",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        var_spans.push(Span::styled(
            name.clone(),
            Style::default().fg(DEFAULT_THEME.primary),
        ));
        var_spans.push(Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)));
        var_spans.push(Span::styled(
            format_var_value(value),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }

    let lines = vec![description, Line::from(var_spans)];
    frame.render_widget(Paragraph::new(lines), area);
}
