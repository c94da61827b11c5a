//! Front-end configuration.
//!
//! Constants for the browser shell only. Everything the desktop model needs
//! (delays, geometry, caps, boot messages) lives in `termfolio_core::config`.

// =============================================================================
// Mount Configuration
// =============================================================================

/// ID of the element the application is mounted into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Scheduler Configuration
// =============================================================================

/// Interval at which due desktop timers are checked (milliseconds).
pub const TICK_INTERVAL_MS: u32 = 50;

/// Delay between a theme switch and the page reload that applies it
/// (milliseconds). Long enough for the switch message to be read.
pub const THEME_RELOAD_DELAY_MS: u32 = 600;

// =============================================================================
// Boot Sequence Configuration
// =============================================================================

/// Boot animation timing (milliseconds).
pub mod boot_delays {
    /// Per-character delay for `[ OK ]` lines.
    pub const OK_CHAR: u32 = 30;
    /// Per-character delay for every other line.
    pub const CHAR: u32 = 50;
    /// Pause after a finished `[ OK ]` line.
    pub const OK_PAUSE: u32 = 150;
    /// Pause after every other finished line.
    pub const PAUSE: u32 = 500;
    /// Pause for an empty line.
    pub const EMPTY_LINE: u32 = 200;
    /// Hold after the last line before the prompt appears.
    pub const COMPLETE: u32 = 1000;
}

/// Marker that selects the faster `[ OK ]` boot timing and styling.
pub const BOOT_OK_MARKER: &str = "[ OK ]";

// =============================================================================
// Logging Configuration
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// List every candidate when Tab cannot extend the current token.
pub const SHOW_TAB_CANDIDATES: bool = false;

/// Show the candidate list under the input while typing.
pub const SHOW_LIVE_SUGGESTIONS: bool = true;

/// Delay before the taskbar preview panel hides after the pointer leaves
/// (milliseconds).
pub const PREVIEW_HIDE_DELAY_MS: u32 = 120;

/// Trailing characters of a window's preview text shown in the panel.
pub const PREVIEW_MAX_CHARS: usize = 600;

/// Prefix of the CSS custom properties a theme palette is written to.
pub const PALETTE_VAR_PREFIX: &str = "--term-";
