//! Tab completion for the command line.
//!
//! Completion works on the whitespace-delimited token immediately left of the
//! caret. Candidates come from a suggestion source (normally
//! [`Interpreter::suggestions`](crate::commands::Interpreter::suggestions)):
//!
//! - Single match: replace the token and append a space
//! - Multiple matches: extend to the longest common prefix, or surface the
//!   candidate list when that is enabled
//! - Ghost text hints while typing
//!
//! Caret and selection positions are character offsets. Any inconsistent
//! editor state (caret past the end, active selection) is a no-op.

// ============================================================================
// Public Types
// ============================================================================

/// Outcome of a Tab press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The input was rewritten; place the caret at `caret`.
    Replaced { value: String, caret: usize },
    /// No unambiguous extension; show these candidates.
    Candidates(Vec<String>),
    /// Leave the input untouched.
    NoOp,
}

/// Current editor selection, in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// A collapsed selection (plain caret).
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Caret at the end of `value`.
    pub fn end_of(value: &str) -> Self {
        Self::caret(value.chars().count())
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Complete the token left of the caret.
///
/// `show_candidates` enables the [`Completion::Candidates`] outcome when
/// several candidates share no prefix beyond the token.
pub fn complete<F>(value: &str, selection: Selection, suggest: F, show_candidates: bool) -> Completion
where
    F: FnOnce(&str) -> Vec<String>,
{
    if !selection.is_collapsed() {
        return Completion::NoOp;
    }
    let Some(caret) = byte_offset(value, selection.start) else {
        return Completion::NoOp;
    };

    let (left, right) = value.split_at(caret);
    let token_start = left
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let token = &left[token_start..];
    if token.is_empty() {
        return Completion::NoOp;
    }

    let candidates = suggest(token);
    let insertion = match candidates.as_slice() {
        [] => return Completion::NoOp,
        [only] => format!("{} ", only),
        _ => {
            let common = common_prefix(&candidates);
            if common.chars().count() > token.chars().count() {
                common
            } else if show_candidates {
                return Completion::Candidates(candidates);
            } else {
                return Completion::NoOp;
            }
        }
    };

    let prefix = &left[..token_start];
    let caret = prefix.chars().count() + insertion.chars().count();
    Completion::Replaced {
        value: format!("{}{}{}", prefix, insertion, right),
        caret,
    }
}

/// Ghost text hint: the remainder of the first candidate that strictly
/// extends the last token of `value`.
pub fn hint<F>(value: &str, suggest: F) -> Option<String>
where
    F: FnOnce(&str) -> Vec<String>,
{
    if value.is_empty() || value.ends_with(char::is_whitespace) {
        return None;
    }
    let token = value.split_whitespace().last()?;
    let token_lower = token.to_lowercase();
    let typed = token.chars().count();

    suggest(token)
        .into_iter()
        .find(|cand| *cand != token_lower)
        .map(|cand| cand.chars().skip(typed).collect())
}

/// Candidates listed under the input while typing.
///
/// Only non-empty when there is more than one candidate to choose from.
pub fn live_suggestions<F>(value: &str, suggest: F) -> Vec<String>
where
    F: FnOnce(&str) -> Vec<String>,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let candidates = suggest(trimmed);
    if candidates.len() > 1 {
        candidates
    } else {
        Vec::new()
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Byte offset of character `index`, or `None` when out of bounds.
fn byte_offset(s: &str, index: usize) -> Option<usize> {
    if index == s.chars().count() {
        return Some(s.len());
    }
    s.char_indices().nth(index).map(|(i, _)| i)
}

/// Longest common prefix of all candidates (case-sensitive).
fn common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut len = first.chars().count();
    for s in rest {
        len = first
            .chars()
            .zip(s.chars())
            .take(len)
            .take_while(|(a, b)| a == b)
            .count();
    }

    first.chars().take(len).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn source(names: &'static [&'static str]) -> impl Fn(&str) -> Vec<String> {
        move |prefix: &str| {
            let prefix = prefix.to_lowercase();
            names
                .iter()
                .filter(|n| n.starts_with(&prefix))
                .map(|n| n.to_string())
                .collect()
        }
    }

    const NAMES: &[&str] = &["help", "--help", "projects", "contact", "clear", "cat", "theme"];

    fn tab(value: &str) -> Completion {
        complete(value, Selection::end_of(value), source(NAMES), false)
    }

    #[test]
    fn test_single_match_appends_space() {
        assert_eq!(
            tab("pro"),
            Completion::Replaced {
                value: "projects ".to_string(),
                caret: 9
            }
        );
    }

    #[test]
    fn test_lcp_equal_to_token_is_noop() {
        let only_c = source(&["cat", "clear"]);
        assert_eq!(complete("c", Selection::caret(1), only_c, false), Completion::NoOp);
    }

    #[test]
    fn test_lcp_extends_token() {
        let cl = source(&["clear", "clean"]);
        assert_eq!(
            complete("c", Selection::caret(1), cl, false),
            Completion::Replaced {
                value: "clea".to_string(),
                caret: 4
            }
        );
    }

    #[test]
    fn test_candidates_when_enabled() {
        let got = complete("c", Selection::caret(1), source(NAMES), true);
        assert_eq!(
            got,
            Completion::Candidates(vec![
                "contact".to_string(),
                "clear".to_string(),
                "cat".to_string()
            ])
        );
    }

    #[test]
    fn test_completes_token_left_of_caret() {
        // caret right after "the"
        let value = "sudo the x";
        assert_eq!(
            complete(value, Selection::caret(8), source(NAMES), false),
            Completion::Replaced {
                value: "sudo theme  x".to_string(),
                caret: 11
            }
        );
    }

    #[test]
    fn test_noop_cases() {
        assert_eq!(tab(""), Completion::NoOp);
        assert_eq!(tab("help "), Completion::NoOp);
        assert_eq!(tab("zzz"), Completion::NoOp);
        assert_eq!(
            complete("pro", Selection { start: 0, end: 3 }, source(NAMES), false),
            Completion::NoOp
        );
        assert_eq!(complete("pro", Selection::caret(10), source(NAMES), false), Completion::NoOp);
    }

    #[test]
    fn test_multibyte_offsets() {
        let value = "é pro";
        assert_eq!(
            complete(value, Selection::end_of(value), source(NAMES), false),
            Completion::Replaced {
                value: "é projects ".to_string(),
                caret: 11
            }
        );
    }

    #[test]
    fn test_hint() {
        assert_eq!(hint("pro", source(NAMES)), Some("jects".to_string()));
        assert_eq!(hint("th", source(NAMES)), Some("eme".to_string()));
        assert_eq!(hint("theme", source(NAMES)), None);
        assert_eq!(hint("pro ", source(NAMES)), None);
        assert_eq!(hint("", source(NAMES)), None);
    }

    #[test]
    fn test_live_suggestions() {
        assert_eq!(live_suggestions("  c ", source(NAMES)).len(), 3);
        assert!(live_suggestions("pro", source(NAMES)).is_empty());
        assert!(live_suggestions("   ", source(NAMES)).is_empty());
    }

    #[test]
    fn test_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(common_prefix(&strings), "hel");
        assert_eq!(common_prefix(&[]), "");
    }
}
