//! Command execution result type.

/// Result of executing a command.
///
/// Commands produce output lines and may ask the session to clear its log or
/// to terminate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<String>,
    /// The output describes a failure
    pub error: bool,
    /// Discard the whole line log
    pub clear: bool,
    /// End the interactive session after a grace delay
    pub exit: bool,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create an error-flagged result.
    pub fn error<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            error: true,
            ..Self::output(lines)
        }
    }

    /// Create a result that clears the screen.
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    /// Create a result that ends the session after showing `lines`.
    pub fn exit<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exit: true,
            ..Self::output(lines)
        }
    }

    /// Create an empty result (no output, no flags).
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_flags() {
        let out = CommandResult::output(["a", "b"]);
        assert_eq!(out.output, vec!["a", "b"]);
        assert!(!out.error && !out.clear && !out.exit);

        assert!(CommandResult::error(["x"]).error);
        assert!(CommandResult::exit(["bye"]).exit);

        let clear = CommandResult::clear();
        assert!(clear.clear);
        assert!(clear.output.is_empty());

        assert_eq!(CommandResult::empty(), CommandResult::default());
    }
}
