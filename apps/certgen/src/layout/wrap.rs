//! Greedy word-wrap for proportional-width text.
//!
//! The engine splits a paragraph into lines against an injected
//! width-measurement capability ([`TextMeasure`]), so it has no dependency on
//! the PDF backend. The commit test is `measure(candidate) + x <= max_width`:
//! the absolute left-edge offset is part of the width budget, which means the
//! same text wraps earlier when drawn further right (task bullets at
//! `margin + indent` vs. the narrative at `margin`).
//!
//! Drawing is the caller's job: line `i` of the result belongs at
//! `y - i * line_height`. The returned `end_y` already includes one extra
//! `line_separation` after the block.

/// Fixed visual indent prefix. Part of the measured string, so it consumes
/// width budget on the first line only.
pub const INDENT_PREFIX: &str = "    ";

/// Width-measurement capability: rendered horizontal extent of a string in
/// the active font and size, in points.
pub trait TextMeasure {
    fn width(&self, text: &str) -> f64;
}

// Measuring with a plain closure is handy in tests and keeps the seam open
// for backends that are not a font at all.
impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Wrap geometry for one text block.
#[derive(Debug, Clone, Copy)]
pub struct WrapParams {
    /// Right-edge x coordinate a line's rendered text must not cross.
    pub max_width: f64,
    /// Vertical advance per emitted line, in points.
    pub line_height: f64,
    /// Extra gap after the whole block, distinct from `line_height`.
    pub line_separation: f64,
}

/// Result of wrapping one text block.
#[derive(Debug, Clone)]
pub struct WrappedBlock {
    /// Committed lines, in order. Trailing spaces are kept as-is.
    pub lines: Vec<String>,
    /// Cursor position after the last line plus one `line_separation`.
    pub end_y: f64,
}

/// Wraps `text` into lines starting at the left edge `x`, cursor `y`.
///
/// Words are whitespace-delimited and never split mid-word. The accumulator
/// starts as the indent prefix plus the first word, so a single-word input is
/// always exactly one line regardless of width. An overflowing word starts
/// the next line unconditionally; there is no re-check that the new line
/// itself fits. The final accumulator is pushed regardless of content; empty
/// input yields the bare indent line.
pub fn wrap_block(
    text: &str,
    x: f64,
    y: f64,
    params: &WrapParams,
    measure: &dyn TextMeasure,
) -> WrappedBlock {
    let mut words = text.split_whitespace();
    let mut lines: Vec<String> = Vec::new();

    let mut current = match words.next() {
        Some(first) => format!("{INDENT_PREFIX}{first} "),
        None => INDENT_PREFIX.to_string(),
    };

    for word in words {
        let candidate = format!("{current}{word} ");
        if measure.width(&candidate) + x <= params.max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, format!("{word} ")));
        }
    }
    lines.push(current);

    let end_y = y - lines.len() as f64 * params.line_height - params.line_separation;
    WrappedBlock { lines, end_y }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
