//! Terminal line types for the session log.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::timers::Millis;

/// Origin of a line in the session log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Echo of a submitted command, rendered after its prompt.
    Input,
    /// Command output.
    Output,
    /// Boot and welcome messages.
    System,
}

/// A single line in a session's log.
#[derive(Clone, Debug)]
pub struct TerminalLine {
    /// Unique ID for keyed rendering.
    pub id: String,
    pub kind: LineKind,
    pub content: String,
    /// Milliseconds since the epoch at which the line was produced.
    pub timestamp: Millis,
    /// Prompt shown before input lines.
    pub prompt: Option<String>,
}

// Global counter for generating unique IDs across all sessions
static LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl TerminalLine {
    fn new(kind: LineKind, content: String, timestamp: Millis, prompt: Option<String>) -> Self {
        let seq = LINE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tag = match kind {
            LineKind::Input => "input",
            LineKind::Output => "output",
            LineKind::System => "system",
        };
        Self {
            id: format!("{}-{}", tag, seq),
            kind,
            content,
            timestamp,
            prompt,
        }
    }

    pub fn input(prompt: impl Into<String>, content: impl Into<String>, timestamp: Millis) -> Self {
        Self::new(
            LineKind::Input,
            content.into(),
            timestamp,
            Some(prompt.into()),
        )
    }

    pub fn output(content: impl Into<String>, timestamp: Millis) -> Self {
        Self::new(LineKind::Output, content.into(), timestamp, None)
    }

    pub fn system(content: impl Into<String>, timestamp: Millis) -> Self {
        Self::new(LineKind::System, content.into(), timestamp, None)
    }

    /// Text of the line as it appears in the taskbar preview.
    ///
    /// Input lines carry their prompt; everything else is the bare content.
    pub fn preview_text(&self) -> String {
        match (self.kind, &self.prompt) {
            (LineKind::Input, Some(prompt)) => format!("{} {}", prompt, self.content),
            _ => self.content.clone(),
        }
    }
}

impl PartialEq for TerminalLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.kind == other.kind
            && self.content == other.content
            && self.timestamp == other.timestamp
            && self.prompt == other.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constructors() {
        let input = TerminalLine::input("me@host:~$", "help", 10);
        assert_eq!(input.kind, LineKind::Input);
        assert_eq!(input.prompt.as_deref(), Some("me@host:~$"));

        let output = TerminalLine::output("hello", 11);
        assert_eq!(output.kind, LineKind::Output);
        assert!(output.prompt.is_none());

        assert_eq!(TerminalLine::system("boot", 0).kind, LineKind::System);
    }

    #[test]
    fn test_unique_ids() {
        let a = TerminalLine::output("same", 1);
        let b = TerminalLine::output("same", 1);
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
        assert!(a.id.starts_with("output-"));
    }

    #[test]
    fn test_preview_text() {
        assert_eq!(
            TerminalLine::input("me@host:~$", "ls -la", 0).preview_text(),
            "me@host:~$ ls -la"
        );
        assert_eq!(TerminalLine::output("total 24", 0).preview_text(), "total 24");
    }
}
