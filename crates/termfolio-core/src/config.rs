//! Core configuration.
//!
//! Centralizes the constants shared by the interpreter, sessions, window
//! manager and desktop controller. Bundled data documents are loaded at
//! compile time using `include_str!`.

// =============================================================================
// Bundled Data (loaded at compile time)
// =============================================================================

/// Portfolio record consumed by the command handlers.
pub const PORTFOLIO_TOML: &str = include_str!("../assets/portfolio.toml");

/// Theme palettes, in the order they are offered to the user.
pub const THEMES_TOML: &str = include_str!("../assets/themes.toml");

// =============================================================================
// Theme Configuration
// =============================================================================

/// Storage key holding the selected theme name.
pub const THEME_STORAGE_KEY: &str = "terminal-theme";

/// Theme used when nothing (or something unrecognized) is persisted.
pub const DEFAULT_THEME: &str = "ubuntu";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of lines kept in one session's log.
pub const MAX_TERMINAL_LINES: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Number of trailing lines projected into the taskbar preview.
pub const PREVIEW_LINES: usize = 6;

/// Maximum number of candidates returned by command suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Column width the command name is padded to in `help` output.
pub const HELP_NAME_WIDTH: usize = 12;

/// Number of skills shown by `neofetch`.
pub const NEOFETCH_SKILLS: usize = 6;

/// Messages typed out by the renderer while a session boots.
pub const BOOT_MESSAGES: &[&str] = &[
    "Initializing Portfolio System...",
    "Loading kernel modules...",
    "Starting portfolio services...",
    "[ OK ] Portfolio data loaded",
    "[ OK ] Project database mounted",
    "[ OK ] Contact information loaded",
    "[ OK ] Skills matrix initialized",
    "[ OK ] Command processor ready",
    "Establishing secure connection...",
    "",
    "System ready. Type --help for available commands.",
];

// =============================================================================
// Timer Configuration (milliseconds)
// =============================================================================

/// Timer delays for window and session transitions.
pub mod delays {
    /// Grace period between an `exit` command and the window closing.
    pub const SESSION_EXIT: u64 = 2000;
    /// Fade-out before a minimized window is fully hidden.
    pub const MINIMIZE_FADE: u64 = 200;
    /// Exit transition before a closed window is removed.
    pub const CLOSE_FADE: u64 = 200;
}

// =============================================================================
// Window Geometry (pixels)
// =============================================================================

/// Window sizing and layout constants.
pub mod window {
    /// Default window width on spawn.
    pub const DEFAULT_WIDTH: i32 = 800;
    /// Default window height on spawn.
    pub const DEFAULT_HEIGHT: i32 = 500;
    /// Spawn position used when the caller supplies none.
    pub const DEFAULT_X: i32 = 200;
    /// Spawn position used when the caller supplies none.
    pub const DEFAULT_Y: i32 = 100;

    /// Origin of the first cascaded desktop window.
    pub const CASCADE_ORIGIN: i32 = 70;
    /// Offset between consecutive cascaded windows.
    pub const CASCADE_STEP: i32 = 30;

    /// Height of the taskbar strip reserved at the bottom of the viewport.
    pub const TASKBAR_HEIGHT: i32 = 48;

    /// Viewport width below which the compact layout is forced.
    pub const COMPACT_MAX_WIDTH: i32 = 640;
    /// Viewport height below which the compact layout is forced.
    pub const COMPACT_MAX_HEIGHT: i32 = 480;
}
