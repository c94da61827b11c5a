//! Error types for the core library.
//!
//! One enum per domain:
//!
//! - [`CommandError`] - faults raised inside command handlers
//! - [`ThemeError`] - theme selection and persistence
//! - [`StorageError`] - the key/value store behind the theme preference
//! - [`DatasetError`] - bundled TOML documents that fail to parse

use thiserror::Error;

/// Faults raised by a command handler.
///
/// The interpreter never lets these escape: they are rendered as a single
/// `Error executing command: ...` line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Switching the theme failed.
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Theme selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// No theme is registered under the key.
    #[error("unknown theme '{0}'")]
    Unknown(String),
    /// The preference could not be persisted.
    #[error("could not save theme preference: {0}")]
    Storage(#[from] StorageError),
}

/// Persistent key/value storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage backend is reachable (e.g. localStorage disabled).
    #[error("storage not available")]
    Unavailable,
    /// The backend rejected the write.
    #[error("failed to write '{0}'")]
    WriteFailed(String),
}

/// Bundled data documents that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The TOML document is malformed or does not match the schema.
    #[error("invalid {document} data: {message}")]
    Parse {
        document: &'static str,
        message: String,
    },
    /// The document parsed but contains no usable entries.
    #[error("{0} data is empty")]
    Empty(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_error_wraps_storage() {
        let err: ThemeError = StorageError::Unavailable.into();
        assert_eq!(
            err.to_string(),
            "could not save theme preference: storage not available"
        );
    }

    #[test]
    fn test_command_error_is_transparent_over_theme() {
        let err: CommandError = ThemeError::Unknown("neon".to_string()).into();
        assert_eq!(err.to_string(), "unknown theme 'neon'");
    }
}
