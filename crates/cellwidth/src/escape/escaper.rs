//! The escaping pass.

use std::fmt::Write;

use super::spec::{EscapeSpec, InvalidUtf8};
use super::value::Value;
use crate::tabs::tab_positions;
use crate::width::RuneWidth;

/// Escapes raw cell bytes and measures the result.
///
/// `raw` is split on `\n`. Each line is escaped per `spec`, scanned for tabs
/// and measured from `start_offset` with the spec's tab size. The lines are
/// rejoined with `\n` in the returned [`Value`], whose width is that of the
/// widest line.
///
/// Never fails: invalid UTF-8 is escaped or replaced according to
/// [`EscapeSpec::invalid_utf8`].
///
/// # Example
///
/// ```rust
/// use cellwidth::{escape, EscapeSpec, TabPosition, WidthProfile};
///
/// let value = escape(b"a\nb\tc", &EscapeSpec::default(), &WidthProfile::Standard, 0);
/// assert_eq!(value.tabs(), &[vec![], vec![TabPosition::new(1, 1)]]);
/// assert_eq!(value.width(), 9);
/// ```
pub fn escape<W: RuneWidth + ?Sized>(
    raw: &[u8],
    spec: &EscapeSpec,
    widths: &W,
    start_offset: usize,
) -> Value {
    let mut buf = String::with_capacity(raw.len());
    let mut lines = Vec::new();

    for (i, line) in raw.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        let start = buf.len();
        escape_line(line, spec, &mut buf);
        lines.push(tab_positions(&buf[start..], widths));
    }

    let value = Value::from_lines(buf, lines, spec.tab_stops(), start_offset);
    tracing::trace!(
        bytes = raw.len(),
        lines = value.line_count(),
        width = value.width(),
        "escaped cell"
    );
    value
}

impl EscapeSpec {
    /// Escapes `raw` using this spec's own width profile.
    pub fn escape(&self, raw: &[u8], start_offset: usize) -> Value {
        escape(raw, self, &self.widths(), start_offset)
    }
}

fn escape_line(line: &[u8], spec: &EscapeSpec, out: &mut String) {
    for chunk in line.utf8_chunks() {
        for c in chunk.valid().chars() {
            escape_char(c, spec, out);
        }

        let invalid = chunk.invalid();
        if invalid.is_empty() {
            continue;
        }
        match spec.invalid_utf8() {
            InvalidUtf8::Hex => {
                for b in invalid {
                    let _ = write!(out, "\\x{b:02x}");
                }
            }
            InvalidUtf8::Replace => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
}

fn escape_char(c: char, spec: &EscapeSpec, out: &mut String) {
    if let Some(text) = spec.mapping(c) {
        out.push_str(text);
    } else if spec.controls() && c != '\t' && c.is_control() {
        push_control(c, out);
    } else {
        out.push(c);
    }
}

fn push_control(c: char, out: &mut String) {
    match c {
        '\r' => out.push_str("\\r"),
        '\x07' => out.push_str("\\a"),
        '\x08' => out.push_str("\\b"),
        '\x0b' => out.push_str("\\v"),
        '\x0c' => out.push_str("\\f"),
        c if c.is_ascii() => {
            let _ = write!(out, "\\x{:02x}", u32::from(c));
        }
        c => {
            let _ = write!(out, "\\u{:04x}", u32::from(c));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabPosition;
    use crate::width::WidthProfile;

    fn esc(raw: &[u8]) -> Value {
        EscapeSpec::default().escape(raw, 0)
    }

    #[test]
    fn empty_input_has_one_empty_line() {
        let value = esc(b"");
        assert!(value.is_empty());
        assert_eq!(value.tabs(), &[Vec::<TabPosition>::new()]);
        assert_eq!(value.width(), 0);
    }

    #[test]
    fn plain_text_round_trips() {
        let raw = "hello \u{8888} world".as_bytes();
        let value = esc(raw);
        assert_eq!(value.buf(), raw);
        assert_eq!(value.width(), 14);
    }

    #[test]
    fn tabs_are_preserved() {
        let value = esc("\u{8888}\t\u{8888}".as_bytes());
        assert_eq!(value.as_str(), "\u{8888}\t\u{8888}");
        assert_eq!(value.tabs(), &[vec![TabPosition::new(3, 2)]]);
        assert_eq!(value.width(), 10);
    }

    #[test]
    fn named_control_escapes() {
        let value = esc(b"\r\x07\x08\x0b\x0c");
        assert_eq!(value.as_str(), "\\r\\a\\b\\v\\f");
        assert_eq!(value.width(), 10);
    }

    #[test]
    fn other_controls_use_hex() {
        assert_eq!(esc(b"a\x00b\x1b").as_str(), "a\\x00b\\x1b");
        assert_eq!(esc(b"\x7f").as_str(), "\\x7f");
        // U+0085 NEXT LINE is a C1 control.
        assert_eq!(esc("\u{0085}".as_bytes()).as_str(), "\\u0085");
    }

    #[test]
    fn controls_can_be_disabled() {
        let spec = EscapeSpec::builder().controls(false).build().unwrap();
        assert_eq!(spec.escape(b"a\rb", 0).as_str(), "a\rb");
    }

    #[test]
    fn invalid_utf8_as_hex() {
        let value = esc(b"a\xffb\xc3");
        assert_eq!(value.as_str(), "a\\xffb\\xc3");
        assert_eq!(value.width(), 10);
    }

    #[test]
    fn invalid_utf8_replaced() {
        let spec = EscapeSpec::builder()
            .invalid_utf8(InvalidUtf8::Replace)
            .build()
            .unwrap();
        let value = spec.escape(b"a\xffb", 0);
        assert_eq!(value.as_str(), "a\u{FFFD}b");
        assert_eq!(value.width(), 3);
    }

    #[test]
    fn truncated_sequence_is_one_replacement() {
        let spec = EscapeSpec::builder()
            .invalid_utf8(InvalidUtf8::Replace)
            .build()
            .unwrap();
        // First two bytes of U+8888, cut short.
        assert_eq!(spec.escape(b"a\xe8\xa2b", 0).as_str(), "a\u{FFFD}b");
        assert_eq!(spec.escape(b"\xe8\xa2", 0).as_str(), "\u{FFFD}");
        // Hex mode still reports every byte.
        assert_eq!(esc(b"\xe8\xa2").as_str(), "\\xe8\\xa2");
    }

    #[test]
    fn huge_start_offset_saturates() {
        let value = esc(b"\t");
        assert_eq!(value.width_at(usize::MAX), 0);
        assert_eq!(EscapeSpec::default().escape(b"\t", usize::MAX - 3).width(), 3);
    }

    #[test]
    fn explicit_mapping_beats_control_rule() {
        let spec = EscapeSpec::builder().escape('\r', "<CR>").build().unwrap();
        assert_eq!(spec.escape(b"x\r", 0).as_str(), "x<CR>");
    }

    #[test]
    fn replacements_are_not_rescanned() {
        // 'a' becomes "b" and 'b' becomes "c"; a single pass means "ab" -> "bc".
        let spec = EscapeSpec::builder()
            .escape('a', "b")
            .escape('b', "c")
            .build()
            .unwrap();
        assert_eq!(spec.escape(b"ab", 0).as_str(), "bc");
    }

    #[test]
    fn adjacent_substitutions_apply_left_to_right() {
        let spec = EscapeSpec::builder()
            .escape('\\', "\\\\")
            .escape('|', "\\|")
            .build()
            .unwrap();
        assert_eq!(spec.escape(b"\\|\r", 0).as_str(), "\\\\\\|\\r");
    }

    #[test]
    fn mapped_tab_is_not_a_tab_stop() {
        let spec = EscapeSpec::builder().escape('\t', "\\t").build().unwrap();
        let value = spec.escape(b"a\tb", 0);
        assert_eq!(value.as_str(), "a\\tb");
        assert_eq!(value.tabs(), &[Vec::<TabPosition>::new()]);
        assert_eq!(value.width(), 4);
    }

    #[test]
    fn multi_line_widths() {
        let value = esc(b"a\nb\tc");
        assert_eq!(value.as_str(), "a\nb\tc");
        assert_eq!(value.tabs(), &[vec![], vec![TabPosition::new(1, 1)]]);
        assert_eq!(value.line_widths(), &[1, 9]);
        assert_eq!(value.width(), 9);
    }

    #[test]
    fn trailing_newline_adds_empty_line() {
        let value = esc(b"abc\n");
        assert_eq!(value.line_count(), 2);
        assert_eq!(value.line_widths(), &[3, 0]);
    }

    #[test]
    fn crlf_keeps_escaped_carriage_return() {
        let value = esc(b"ab\r\ncd");
        assert_eq!(value.as_str(), "ab\\r\ncd");
        assert_eq!(value.line_widths(), &[4, 2]);
    }

    #[test]
    fn start_offset_shifts_cursor_not_stops() {
        let spec = EscapeSpec::builder().tab_size(4).build().unwrap();
        assert_eq!(spec.escape(b"\t", 1).width(), 3);
        assert_eq!(spec.escape(b"\t", 4).width(), 4);
    }

    #[test]
    fn custom_width_function() {
        let narrow = |_: char| 1usize;
        let value = escape(
            "\u{8888}\t".as_bytes(),
            &EscapeSpec::default(),
            &narrow,
            0,
        );
        assert_eq!(value.tabs(), &[vec![TabPosition::new(3, 1)]]);
        assert_eq!(value.width(), 8);
    }

    #[test]
    fn cjk_profile_from_spec() {
        let spec = EscapeSpec::builder()
            .widths(WidthProfile::Cjk)
            .build()
            .unwrap();
        assert_eq!(spec.escape("±".as_bytes(), 0).width(), 2);
        assert_eq!(EscapeSpec::default().escape("±".as_bytes(), 0).width(), 1);
    }
}
