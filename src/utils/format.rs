use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn text_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

/// Longest prefix of `value` that fits in `max_len` display cells.
///
/// At least one character is taken when `value` is non-empty, so a caller
/// chunking a string always makes progress even if a wide glyph does not fit.
pub fn take_width(value: &str, max_len: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in value.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_len {
            if idx == 0 {
                return &value[..ch.len_utf8()];
            }
            return &value[..idx];
        }
        width += ch_width;
    }
    value
}

/// Replaces control characters other than `\n` so every character measures
/// at least one display cell. Tabs become a space, the rest U+FFFD.
pub fn sanitize_controls(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            '\n' => '\n',
            '\t' => ' ',
            ch if ch.is_control() => char::REPLACEMENT_CHARACTER,
            ch => ch,
        })
        .collect()
}

pub fn ljust(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(value));
    format!("{value}{}", " ".repeat(pad))
}

pub fn rjust(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(value));
    format!("{}{value}", " ".repeat(pad))
}

/// Odd padding puts the extra space on the trailing side.
pub fn center(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(value));
    let left = pad / 2;
    format!("{}{value}{}", " ".repeat(left), " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_counts_display_cells() {
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("表"), 2);
    }

    #[test]
    fn take_width_stops_at_budget() {
        assert_eq!(take_width("abcdef", 4), "abcd");
        assert_eq!(take_width("ab", 4), "ab");
        assert_eq!(take_width("表表表", 5), "表表");
    }

    #[test]
    fn take_width_always_makes_progress() {
        assert_eq!(take_width("表x", 1), "表");
        assert_eq!(take_width("", 3), "");
    }

    #[test]
    fn sanitize_controls_keeps_newlines() {
        assert_eq!(sanitize_controls("a\tb\u{1b}[0m\nc"), "a b\u{fffd}[0m\nc");
        assert_eq!(text_width(&sanitize_controls("\u{7}\r")), 2);
    }

    #[test]
    fn padding_never_truncates() {
        assert_eq!(ljust("ab", 4), "ab  ");
        assert_eq!(rjust("ab", 4), "  ab");
        assert_eq!(ljust("abcdef", 4), "abcdef");
    }

    #[test]
    fn center_biases_trailing() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("PID", 8), "  PID   ");
    }
}
