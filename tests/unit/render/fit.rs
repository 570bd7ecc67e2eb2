use super::*;

/// Monospace stand-in: every char is `advance` wide.
struct Mono {
    advance: f32,
    line_height: f32,
}

impl TextMeasure for Mono {
    fn text_width(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&mut self) -> f32 {
        self.line_height
    }
}

fn mono() -> Mono {
    Mono {
        advance: 10.0,
        line_height: 12.0,
    }
}

#[test]
fn wraps_greedily() {
    let lines = wrap_to_width("aaa bbb ccc ddd", &mut mono(), 70.0);
    assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
}

#[test]
fn lone_long_word_gets_its_own_line() {
    let lines = wrap_to_width("hi supercalifragilistic yo", &mut mono(), 50.0);
    assert_eq!(lines, vec!["hi", "supercalifragilistic", "yo"]);
}

#[test]
fn wrapped_lines_respect_width() {
    let text = "the quick brown fox jumps over the lazy dog while a very long \
                wordthatcannotfitanywhere sits in the middle of it all";
    let mut m = mono();
    for max in [40.0, 80.0, 150.0, 500.0] {
        for line in wrap_to_width(text, &mut m, max) {
            let w = m.text_width(&line);
            assert!(w <= max || !line.contains(' '), "{line:?} at {max}");
        }
    }
}

#[test]
fn empty_and_whitespace_text_yield_no_lines() {
    assert!(wrap_to_width("", &mut mono(), 100.0).is_empty());
    assert!(wrap_to_width("   \n  ", &mut mono(), 100.0).is_empty());
    let fitted = fit_to_box("", &mut mono(), 100.0, 100.0);
    assert!(fitted.lines.is_empty() && !fitted.truncated);
}

#[test]
fn truncates_with_ellipsis_and_never_overflows() {
    let text = "word ".repeat(60);
    let mut m = mono();
    let fitted = fit_to_box(&text, &mut m, 100.0, 40.0);
    assert!(fitted.truncated);
    assert_eq!(fitted.lines.len(), 3);
    assert!(fitted.lines.len() as f32 * 12.0 <= 40.0);
    assert_eq!(fitted.lines.last().unwrap(), "word...");
    for line in &fitted.lines {
        assert!(m.text_width(line) <= 100.0, "{line:?}");
    }
}

#[test]
fn ellipsis_shortens_a_lone_long_word() {
    let fitted = fit_to_box("abcdefghijklmnop qr", &mut mono(), 100.0, 12.0);
    assert!(fitted.truncated);
    assert_eq!(fitted.lines, vec!["abcdefg...".to_string()]);
}

#[test]
fn fitting_text_that_fits_is_idempotent() {
    let mut m = mono();
    let first = fit_to_box("alpha beta gamma delta", &mut m, 110.0, 100.0);
    assert!(!first.truncated);
    let second = fit_to_box(&first.joined(), &mut m, 110.0, 100.0);
    assert_eq!(first, second);
}

#[test]
fn box_shorter_than_one_line_empties() {
    let fitted = fit_to_box("one two", &mut mono(), 100.0, 5.0);
    assert!(fitted.truncated);
    assert!(fitted.lines.is_empty());
}
