//! Inline styling of terminal text.
//!
//! A line is split on single spaces and each word is classified on its own.
//! Spaces and unstyled words are kept verbatim, so concatenating the spans
//! always gives back the original line.

use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+").expect("url pattern is valid"));

static COMMAND_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("command word pattern is valid"));

/// A styled piece of a line, borrowing from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span<'a> {
    /// Plain text, spaces included.
    Text(&'a str),
    /// An `http://` or `https://` address; opened on Ctrl/Cmd+click.
    Link(&'a str),
    /// A `--flag` style option.
    Flag(&'a str),
    /// A leading alphabetic word, such as the command names in `help`.
    Command(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Span::Text(s) | Span::Link(s) | Span::Flag(s) | Span::Command(s) => s,
        }
    }
}

/// Split `line` into styled spans. Adjacent plain words are merged.
pub fn spans(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut plain_from = 0;
    let mut offset = 0;

    for (index, word) in line.split(' ').enumerate() {
        if let Some(span) = classify(word, index) {
            if plain_from < offset {
                spans.push(Span::Text(&line[plain_from..offset]));
            }
            spans.push(span);
            plain_from = offset + word.len();
        }
        offset += word.len() + 1;
    }
    if plain_from < line.len() {
        spans.push(Span::Text(&line[plain_from..]));
    }
    spans
}

fn classify(word: &str, index: usize) -> Option<Span<'_>> {
    if word.starts_with("--") {
        Some(Span::Flag(word))
    } else if URL.is_match(word) {
        Some(Span::Link(word))
    } else if index == 0 && COMMAND_WORD.is_match(word) {
        Some(Span::Command(word))
    } else {
        None
    }
}

/// Whether `line` has anything worth styling.
pub fn is_plain(line: &str) -> bool {
    matches!(spans(line).as_slice(), [] | [Span::Text(_)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(line: &str) -> String {
        spans(line).iter().map(Span::text).collect()
    }

    #[test]
    fn test_links_are_split_out() {
        assert_eq!(
            spans("  GitHub:   https://github.com/ada"),
            vec![
                Span::Text("  GitHub:   "),
                Span::Link("https://github.com/ada"),
            ]
        );
        assert_eq!(
            spans("see http://a.dev/x and more"),
            vec![
                Span::Command("see"),
                Span::Text(" "),
                Span::Link("http://a.dev/x"),
                Span::Text(" and more"),
            ]
        );
    }

    #[test]
    fn test_leading_word_and_flags() {
        assert_eq!(
            spans("theme --list"),
            vec![Span::Command("theme"), Span::Text(" "), Span::Flag("--list")]
        );
        // Only the first word can be a command, and only if purely alphabetic
        assert_eq!(spans("v1.0 about"), vec![Span::Text("v1.0 about")]);
        assert_eq!(spans(" about"), vec![Span::Text(" about")]);
    }

    #[test]
    fn test_spans_preserve_text() {
        for line in ["", " ", "a  b", "  ascii   art  ", "https://x.io", "mail: ada@x.io"] {
            assert_eq!(joined(line), line);
        }
        assert!(spans("").is_empty());
    }

    #[test]
    fn test_is_plain() {
        assert!(is_plain(""));
        assert!(is_plain("  |  |"));
        assert!(!is_plain("about - who I am"));
        assert!(!is_plain("site https://ada.dev"));
    }

    #[test]
    fn test_scheme_must_lead_the_word() {
        assert_eq!(spans("(https://x.io)"), vec![Span::Text("(https://x.io)")]);
        assert_eq!(spans("ftp://x.io"), vec![Span::Text("ftp://x.io")]);
    }
}
