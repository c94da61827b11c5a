//! Core logic for the termfolio desktop.
//!
//! This crate provides:
//! - [`Interpreter`] with the built-in command table and [`CommandResult`]
//! - [`Session`] line log, history and input editing
//! - [`autocomplete`] tab completion and ghost-text hints
//! - [`WindowFrame`] geometry and window state machine
//! - [`Desktop`], the owner of all windows, driven by [`Desktop::tick`]
//! - [`ThemeStore`] with pluggable [`ThemeStorage`] persistence
//! - [`launcher`] catalogue and [`format`] inline styling for the front end
//!
//! Nothing here touches the DOM or a clock, so everything is testable on the
//! host target.

pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod desktop;
pub mod error;
pub mod format;
pub mod launcher;
pub mod models;
pub mod session;
pub mod theme;
pub mod timers;
pub mod window;

pub use autocomplete::{Completion, Selection};
pub use commands::{Builtin, Command, CommandContext, CommandResult, Interpreter};
pub use desktop::{Desktop, Preview, TerminalWindow, WindowId};
pub use error::{CommandError, DatasetError, StorageError, ThemeError};
pub use format::Span;
pub use launcher::LauncherEntry;
pub use models::{LineKind, Point, Portfolio, Rect, Size, TerminalLine, Viewport};
pub use session::{HistoryDirection, Session, SubmitOutcome};
pub use theme::{MemoryStorage, SubscriptionId, Theme, ThemeCatalog, ThemeStorage, ThemeStore};
pub use timers::Millis;
pub use window::{ResizeEdge, WindowFrame, WindowStateKind};
