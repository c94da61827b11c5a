//! Caret bookkeeping between the DOM and the core.
//!
//! `HTMLInputElement` reports selection offsets in UTF-16 code units; the
//! core completes on character offsets.

use termfolio_core::Selection;

/// Character offset of the UTF-16 offset `units` in `value`.
pub fn chars_from_utf16(value: &str, units: u32) -> usize {
    let mut seen = 0u32;
    for (i, c) in value.chars().enumerate() {
        if seen >= units {
            return i;
        }
        seen += c.len_utf16() as u32;
    }
    value.chars().count()
}

/// UTF-16 offset of the character offset `chars` in `value`.
pub fn utf16_from_chars(value: &str, chars: usize) -> u32 {
    value
        .chars()
        .take(chars)
        .map(|c| c.len_utf16() as u32)
        .sum()
}

/// Current selection of `input`, in characters.
pub fn selection_of(input: &web_sys::HtmlInputElement) -> Selection {
    let value = input.value();
    let start = input.selection_start().ok().flatten();
    let end = input.selection_end().ok().flatten();
    match (start, end) {
        (Some(start), Some(end)) => Selection {
            start: chars_from_utf16(&value, start),
            end: chars_from_utf16(&value, end),
        },
        _ => Selection::end_of(&value),
    }
}

/// Place the caret of `input` at character offset `chars`.
pub fn place_caret(input: &web_sys::HtmlInputElement, chars: usize) {
    let at = utf16_from_chars(&input.value(), chars);
    let _ = input.set_selection_range(at, at);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_match() {
        assert_eq!(chars_from_utf16("help", 2), 2);
        assert_eq!(utf16_from_chars("help", 4), 4);
    }

    #[test]
    fn test_astral_chars_take_two_units() {
        let value = "a🦀b";
        assert_eq!(utf16_from_chars(value, 2), 3);
        assert_eq!(chars_from_utf16(value, 3), 2);
        assert_eq!(chars_from_utf16(value, 99), 3);
    }
}
