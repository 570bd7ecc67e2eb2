use crate::typography::loader::TextMeasure;

const ELLIPSIS: &str = "...";

/// Text wrapped and, if needed, truncated to a box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FittedText {
    pub lines: Vec<String>,
    pub truncated: bool,
}

impl FittedText {
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

/// Greedy word wrap.
///
/// Words join the current line while it stays within `max_width_px`; a word that
/// alone exceeds the width gets a line of its own, unbroken.
pub fn wrap_to_width(text: &str, font: &mut impl TextMeasure, max_width_px: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if font.text_width(&candidate) <= max_width_px {
            current = candidate;
        } else if current.is_empty() {
            lines.push(word.to_string());
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn block_height(lines: &[String], line_height: f32) -> f32 {
    lines.len() as f32 * line_height
}

/// `line` with a trailing ellipsis, shortened by whole words (or characters, for a
/// single word) until it fits `max_width_px`.
fn with_ellipsis(line: &str, font: &mut impl TextMeasure, max_width_px: f32) -> String {
    let mut head = line.trim_end().to_string();
    loop {
        let candidate = format!("{head}{ELLIPSIS}");
        if head.is_empty() || font.text_width(&candidate) <= max_width_px {
            return candidate;
        }
        match head.rfind(' ') {
            Some(i) => head.truncate(i),
            None => {
                head.pop();
            }
        }
        let kept = head.trim_end().len();
        head.truncate(kept);
    }
}

/// Wrap to `max_width_px`, then drop trailing lines until the block fits `max_height_px`.
///
/// Each dropped line marks the new last line with a trailing ellipsis that stays
/// within the width.
pub fn fit_to_box(
    text: &str,
    font: &mut impl TextMeasure,
    max_width_px: f32,
    max_height_px: f32,
) -> FittedText {
    let mut lines = wrap_to_width(text, font, max_width_px);
    let line_height = font.line_height();
    let mut truncated = false;
    while !lines.is_empty() && block_height(&lines, line_height) > max_height_px {
        lines.pop();
        truncated = true;
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, font, max_width_px);
        }
    }
    FittedText { lines, truncated }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
