//! Shared helpers for cell geometry and value formatting.
//!
//! Everything here is a pure function of its inputs so the geometry can be
//! exercised in tests without a terminal.

use crate::step::Scalar;

/// Fixed character width of one array cell; bracket and pointer geometry is
/// a pure function of this and the index range.
pub const CELL_W: usize = 5;

/// Number of rows a bar chart occupies.
pub const BAR_HEIGHT: usize = 6;

/// Center `text` in a field of `width` characters, truncating if needed.
pub fn center(text: &str, width: usize) -> String {
    pad_center(text, width, ' ')
}

pub fn pad_center(text: &str, width: usize, fill: char) -> String {
    let truncated: String = text.chars().take(width).collect();
    let len = truncated.chars().count();
    let pad = width - len;
    let left = pad / 2;
    let mut out = String::new();
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(&truncated);
    out.extend(std::iter::repeat(fill).take(pad - left));
    out
}

/// Bar height in rows for each value, scaled linearly against the maximum.
///
/// Every bar renders at least one row; a zero or degenerate maximum (all
/// values zero or negative) clamps everything to the minimum instead of
/// dividing by zero.
pub fn bar_rows(values: &[Scalar], height: usize) -> Vec<usize> {
    let max = values.iter().map(Scalar::as_f64).fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| {
            if max <= 0.0 {
                1
            } else {
                let scaled = (v.as_f64().max(0.0) / max * height as f64).round() as usize;
                scaled.clamp(1, height)
            }
        })
        .collect()
}

/// Underline spanning cells `[left, right]` inclusive, with the bracket's
/// value centered in the run. Returns the character indent from the start of
/// the strip plus the line itself.
pub fn bracket_line(
    left: usize,
    right: usize,
    value: Option<&Scalar>,
    cell_w: usize,
) -> (usize, String) {
    let span = (right - left + 1) * cell_w;
    if span < 2 {
        return (left * cell_w, "└┘".to_string());
    }
    let label = value.map(|v| format!(" {} ", v)).unwrap_or_default();
    let mut line = String::from("└");
    line.push_str(&pad_center(&label, span - 2, '─'));
    line.push('┘');
    (left * cell_w, line)
}

/// Format one watch variable for the variables strip: arrays become a
/// bracketed comma-joined list, strings print bare, everything else uses its
/// plain JSON form.
pub fn format_var_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(format_var_value).collect();
            format!("[{}]", parts.join(", "))
        }
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
