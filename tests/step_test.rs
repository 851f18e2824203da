// Step model, player, and formatting tests

use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;
use stepviz::step::player::StepPlayer;
use stepviz::step::{
    style_for, style_for_cell, AlgorithmStep, CellHighlight, Element, Highlight, MatrixElement,
    Scalar, StepSequence, StyleTag, TreeNode,
};
use stepviz::ui::panes::matrix::{matrix_block_height, render_matrix_pane};
use stepviz::ui::panes::utils::{bar_rows, bracket_line, center, format_var_value, CELL_W};
use stepviz::ui::theme::DEFAULT_THEME;

const SAMPLE: &str = r#"{
    "title": "demo",
    "steps": [
        {
            "elements": [
                {"type": "array", "values": [3, 1, 4, 1, 5],
                 "highlights": [{"index": 2, "style": "active"}]},
                {"type": "pointer", "index": 0, "label": "lo", "color": "blue"},
                {"type": "bracket", "left": 1, "right": 3, "value": "window"},
                {"type": "stack", "items": [1, 2]},
                {"type": "linkedList", "nodes": [{"value": 1}, {"value": 2, "style": "visited"}]},
                {"type": "matrix", "rows": 2, "cols": 2, "values": [1, 0, "Q", 0]},
                {"type": "tree", "nodes": [5, 3, 8, null, {"value": 4, "style": "found"}]}
            ],
            "description": "scan the window",
            "isComplete": false,
            "variables": {"i": 3, "nums": [1, 2, 3]}
        },
        {
            "elements": [],
            "description": "done",
            "isComplete": true
        }
    ]
}"#;

#[test]
fn parses_every_element_kind() {
    let seq: StepSequence = serde_json::from_str(SAMPLE).expect("sample should parse");
    assert_eq!(seq.title.as_deref(), Some("demo"));
    assert_eq!(seq.steps.len(), 2);

    let step = &seq.steps[0];
    assert_eq!(step.elements.len(), 7);
    assert!(!step.is_complete);
    assert!(seq.steps[1].is_complete);

    match &step.elements[0] {
        Element::Array(a) => {
            assert_eq!(a.values.len(), 5);
            assert!(!a.bars);
            assert_eq!(a.highlights[0].style, StyleTag::Active);
        }
        other => panic!("expected array, got {:?}", other),
    }

    match &step.elements[6] {
        Element::Tree(t) => {
            assert_eq!(t.nodes.len(), 5);
            assert!(t.nodes[3].is_none());
            let styled = t.nodes[4].as_ref().expect("node 4 exists");
            assert_eq!(styled.style(), Some(StyleTag::Found));
            assert_eq!(styled.value(), &Scalar::Int(4));
            let plain = t.nodes[0].as_ref().expect("root exists");
            assert!(matches!(plain, TreeNode::Plain(Scalar::Int(5))));
        }
        other => panic!("expected tree, got {:?}", other),
    }
}

#[test]
fn variables_keep_authoring_order() {
    let seq: StepSequence = serde_json::from_str(SAMPLE).expect("sample should parse");
    let names: Vec<&str> = seq.steps[0].variables.keys().map(String::as_str).collect();
    assert_eq!(names, ["i", "nums"]);

    let formatted: Vec<String> = seq.steps[0]
        .variables
        .iter()
        .map(|(name, value)| format!("{} = {}", name, format_var_value(value)))
        .collect();
    assert_eq!(formatted, ["i = 3", "nums = [1, 2, 3]"]);
}

#[test]
fn unknown_style_tags_fall_back_to_default() {
    let highlight: Highlight =
        serde_json::from_value(json!({"index": 0, "style": "sparkle"})).expect("parse");
    assert_eq!(highlight.style, StyleTag::Default);

    let missing: Highlight = serde_json::from_value(json!({"index": 0})).expect("parse");
    assert_eq!(missing.style, StyleTag::Default);

    // Known tags still round-trip through their lowercase names
    assert_eq!(
        serde_json::to_value(StyleTag::Default).expect("serialize"),
        json!("default")
    );
    let active: StyleTag = serde_json::from_value(json!("active")).expect("parse");
    assert_eq!(active, StyleTag::Active);
}

#[test]
fn style_resolver_is_total_over_the_palette() {
    let cases = [
        (StyleTag::Default, DEFAULT_THEME.cell_default),
        (StyleTag::Active, DEFAULT_THEME.cell_active),
        (StyleTag::Comparing, DEFAULT_THEME.cell_comparing),
        (StyleTag::Found, DEFAULT_THEME.cell_found),
        (StyleTag::Visited, DEFAULT_THEME.cell_visited),
        (StyleTag::Swapped, DEFAULT_THEME.cell_swapped),
        (StyleTag::Inactive, DEFAULT_THEME.cell_inactive),
    ];
    for (tag, expected) in cases {
        assert_eq!(DEFAULT_THEME.style_color(tag), expected, "{:?}", tag);
    }

    // Pointer colors are a separate authored namespace with its own fallback
    assert_eq!(
        DEFAULT_THEME.pointer_color(Some("chartreuse")),
        DEFAULT_THEME.secondary
    );
    assert_eq!(DEFAULT_THEME.pointer_color(None), DEFAULT_THEME.secondary);
}

#[test]
fn highlight_resolution_is_first_match_wins() {
    let highlights = vec![
        Highlight {
            index: 2,
            style: StyleTag::Active,
        },
        Highlight {
            index: 2,
            style: StyleTag::Found,
        },
    ];
    assert_eq!(style_for(&highlights, 2), StyleTag::Active);
    assert_eq!(style_for(&highlights, 0), StyleTag::Default);
}

#[test]
fn out_of_range_highlights_never_match_a_cell() {
    // values=[3,1,4,1,5] with a highlight at index 9: every rendered cell
    // resolves to default
    let highlights = vec![Highlight {
        index: 9,
        style: StyleTag::Swapped,
    }];
    for i in 0..5 {
        assert_eq!(style_for(&highlights, i), StyleTag::Default);
    }
}

#[test]
fn cell_highlights_resolve_by_row_and_col() {
    let highlights = vec![
        CellHighlight {
            row: 1,
            col: 0,
            style: StyleTag::Comparing,
        },
        CellHighlight {
            row: 1,
            col: 0,
            style: StyleTag::Found,
        },
    ];
    assert_eq!(style_for_cell(&highlights, 1, 0), StyleTag::Comparing);
    assert_eq!(style_for_cell(&highlights, 0, 1), StyleTag::Default);
}

#[test]
fn oversized_matrix_degrades_instead_of_panicking() {
    // Hostile authored dimensions: usize::MAX * usize::MAX would overflow
    // the flat index, and rows does not fit in a u16
    let el = MatrixElement {
        rows: usize::MAX,
        cols: usize::MAX,
        values: vec![Scalar::Int(1)],
        highlights: vec![CellHighlight {
            row: 0,
            col: 0,
            style: StyleTag::Active,
        }],
    };
    assert_eq!(matrix_block_height(&el), u16::MAX);

    let backend = TestBackend::new(24, 10);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| render_matrix_pane(frame, frame.area(), &el))
        .expect("oversized matrix should render clipped, not panic");
}

#[test]
fn queen_sentinels() {
    assert!(Scalar::Int(1).is_queen());
    assert!(Scalar::Text("Q".to_string()).is_queen());
    assert!(!Scalar::Int(0).is_queen());
    assert!(!Scalar::Text("X".to_string()).is_queen());
}

#[test]
fn bar_rows_scale_linearly_with_a_minimum() {
    let values = vec![Scalar::Int(1), Scalar::Int(2), Scalar::Int(4)];
    assert_eq!(bar_rows(&values, 4), vec![1, 2, 4]);

    // All zeros: no division by zero, everything at the minimum height
    let zeros = vec![Scalar::Int(0), Scalar::Int(0), Scalar::Int(0)];
    assert_eq!(bar_rows(&zeros, 6), vec![1, 1, 1]);

    // Negative values clamp to the minimum too
    let mixed = vec![Scalar::Int(-3), Scalar::Int(6)];
    assert_eq!(bar_rows(&mixed, 6), vec![1, 6]);

    // Non-numeric values scale as zero but still draw one row
    let text = vec![Scalar::Text("a".to_string()), Scalar::Int(2)];
    assert_eq!(bar_rows(&text, 6), vec![1, 6]);
}

#[test]
fn bracket_geometry_follows_the_cell_grid() {
    let value = Scalar::Int(7);
    let (indent, line) = bracket_line(1, 3, Some(&value), CELL_W);
    assert_eq!(indent, CELL_W);
    assert_eq!(line.chars().count(), 3 * CELL_W);
    assert!(line.starts_with('└') && line.ends_with('┘'));
    assert!(line.contains('7'));

    let (indent, line) = bracket_line(0, 0, None, CELL_W);
    assert_eq!(indent, 0);
    assert_eq!(line.chars().count(), CELL_W);
}

#[test]
fn center_pads_and_truncates_by_chars() {
    assert_eq!(center("ab", 4), " ab ");
    assert_eq!(center("abc", 4), "abc ");
    assert_eq!(center("abcdef", 4), "abcd");
    assert_eq!(center("", 3), "   ");
}

#[test]
fn format_var_value_shapes() {
    assert_eq!(format_var_value(&json!(3)), "3");
    assert_eq!(format_var_value(&json!("left")), "left");
    assert_eq!(format_var_value(&json!(true)), "true");
    assert_eq!(format_var_value(&json!([1, 2, 3])), "[1, 2, 3]");
    assert_eq!(format_var_value(&json!(["a", "b"])), "[a, b]");
    assert_eq!(format_var_value(&json!([[1], [2]])), "[[1], [2]]");
    assert_eq!(format_var_value(&json!(null)), "null");
}

fn empty_step(description: &str) -> AlgorithmStep {
    AlgorithmStep {
        elements: Vec::new(),
        description: Some(description.to_string()),
        is_complete: false,
        variables: serde_json::Map::new(),
    }
}

#[test]
fn player_walks_the_sequence_within_bounds() {
    let steps = vec![empty_step("a"), empty_step("b"), empty_step("c")];
    let mut player = StepPlayer::new(steps);

    assert!(!player.started());
    assert!(player.current().is_none());
    assert!(!player.step_backward(), "cannot go back before start");

    // First forward starts playback at step 0
    assert!(player.step_forward());
    assert_eq!(player.position(), Some(0));

    assert!(player.step_forward());
    assert!(player.step_forward());
    assert_eq!(player.position(), Some(2));
    assert!(player.at_end());
    assert!(!player.step_forward(), "refuses past the last step");
    assert_eq!(player.position(), Some(2));

    assert!(player.step_backward());
    assert!(player.step_backward());
    assert_eq!(player.position(), Some(0));
    assert!(!player.step_backward(), "refuses before the first step");

    assert!(player.jump_to_end());
    assert!(player.at_end());
    assert!(player.restart());
    assert_eq!(player.position(), Some(0));
}

#[test]
fn empty_player_refuses_everything() {
    let mut player = StepPlayer::new(Vec::new());
    assert!(player.is_empty());
    assert!(!player.start());
    assert!(!player.step_forward());
    assert!(!player.jump_to_end());
    assert!(player.current().is_none());
    assert!(!player.at_end());
}

#[test]
fn step_documents_round_trip() {
    let seq: StepSequence = serde_json::from_str(SAMPLE).expect("parse");
    let text = serde_json::to_string(&seq).expect("serialize");
    let again: StepSequence = serde_json::from_str(&text).expect("reparse");
    assert_eq!(again.steps.len(), seq.steps.len());
    match (&again.steps[0].elements[6], &seq.steps[0].elements[6]) {
        (Element::Tree(a), Element::Tree(b)) => assert_eq!(a.nodes.len(), b.nodes.len()),
        _ => panic!("tree element lost in round trip"),
    }
}
