//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuFileText as FileText, LuFolder as Folder, LuLayoutGrid as Grid,
        LuList as List, LuMail as Mail, LuMinimize2 as Restore, LuMinus as Minimize,
        LuPalette as Palette, LuPlus as Plus, LuSearch as Search, LuSquare as Maximize,
        LuTerminal as Terminal, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckLg as Check, BsDashLg as Minimize, BsEnvelope as Mail,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsFullscreenExit as Restore,
        BsGrid as Grid, BsListUl as List, BsPalette as Palette, BsPerson as User,
        BsPlusLg as Plus, BsSearch as Search, BsSquare as Maximize, BsTerminal as Terminal,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(TERMINAL, Terminal);
themed_icon!(CLOSE, Close);
themed_icon!(MINIMIZE, Minimize);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(RESTORE, Restore);
themed_icon!(PLUS, Plus);
themed_icon!(GRID, Grid);
themed_icon!(SEARCH, Search);
themed_icon!(PALETTE, Palette);
themed_icon!(CHECK, Check);
themed_icon!(USER, User);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(MAIL, Mail);
themed_icon!(LIST, List);
