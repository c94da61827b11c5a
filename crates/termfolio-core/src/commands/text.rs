//! Canned response pools for the playful commands.
//!
//! `sudo` and `fortune` pick uniformly from these; callers should treat their
//! output as "one of" the entries rather than a specific line.

/// Responses to any `sudo` invocation.
pub const SUDO_RESPONSES: &[&str] = &[
    "Nice try! 😄 This is a portfolio, not a real terminal.",
    "sudo: permission denied. You're not in the sudoers file.",
    "With great power comes great responsibility... but not here!",
    "sudo make me a sandwich? How about we just talk about my projects instead!",
    "Access denied! But you can access my GitHub without sudo.",
];

/// Quotes and jokes returned by `fortune`.
pub const FORTUNES: &[&str] = &[
    "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"Experience is the name everyone gives to their mistakes.\" - Oscar Wilde",
    "\"Programming isn't about what you know; it's about what you can figure out.\" - Chris Pine",
    "\"The best error message is the one that never shows up.\" - Thomas Fuchs",
    "Fun fact: I can debug code faster than I can explain why it works! 🐛",
    "Coffee + Code = ❤️ (The universal developer equation)",
    "I speak fluent Rust, but I'm still learning human. 😄",
    "My code doesn't always work, but when it does, I have no idea why.",
    "Debugging: Being the detective in a crime movie where you're also the murderer. 🕵️",
];

/// Left column of the `neofetch` block.
pub const NEOFETCH_ART: &[&str] = &[
    "       ██████       ",
    "     ██████████     ",
    "   ██████████████   ",
    "  ████████████████  ",
    " ██████████████████ ",
    " ██████████████████ ",
    " ██████████████████ ",
    " ██████████████████ ",
    " ██████████████████ ",
    "  ████████████████  ",
    "   ██████████████   ",
    "     ██████████     ",
    "       ██████       ",
];

/// Navigation tips appended to `help`.
pub const HELP_TIPS: &[&str] = &[
    "Navigation tips:",
    "  • Use TAB for autocompletion",
    "  • Use ↑/↓ arrows for command history",
    "  • Type a command followed by --help for more info",
];

/// Files `cat` understands besides the numbered project files.
pub const STATIC_FILES: &[&str] = &["about.txt", "resume.pdf", "readme.md"];
