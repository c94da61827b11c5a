//! Command table and interpreter.
//!
//! This module provides:
//! - [`Builtin`], the closed set of command behaviors
//! - [`Command`], a registered name bound to a builtin
//! - [`Interpreter`], which parses a raw line, dispatches it and absorbs
//!   handler faults into a [`CommandResult`]
//!
//! # Architecture
//!
//! The table is built once when the interpreter is constructed and never
//! changes afterwards. Several names may share one builtin (`help` and
//! `--help`). The interpreter itself holds no session state, so a single
//! instance is shared by every open terminal.

mod execute;
mod result;
mod text;

pub use result::CommandResult;
pub use text::{FORTUNES, SUDO_RESPONSES};

use std::sync::Arc;

use rand::RngCore;

use crate::config::MAX_SUGGESTIONS;
use crate::models::Portfolio;
use crate::theme::{ThemeCatalog, ThemeStore};

// =============================================================================
// Builtins
// =============================================================================

/// Behavior bound to a registered command name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    About,
    Projects,
    Contact,
    Resume,
    Clear,
    Exit,
    Sudo,
    Ls,
    Cat,
    Fortune,
    Neofetch,
    Theme,
    /// Easter egg, not listed by `help`.
    Gui,
}

/// Registration order: `(name, builtin, hidden)`.
const REGISTRY: &[(&str, Builtin, bool)] = &[
    ("help", Builtin::Help, false),
    ("--help", Builtin::Help, false),
    ("about", Builtin::About, false),
    ("projects", Builtin::Projects, false),
    ("contact", Builtin::Contact, false),
    ("resume", Builtin::Resume, false),
    ("clear", Builtin::Clear, false),
    ("exit", Builtin::Exit, false),
    ("sudo", Builtin::Sudo, false),
    ("ls", Builtin::Ls, false),
    ("cat", Builtin::Cat, false),
    ("fortune", Builtin::Fortune, false),
    ("neofetch", Builtin::Neofetch, false),
    ("theme", Builtin::Theme, false),
    ("gui", Builtin::Gui, true),
];

impl Builtin {
    fn description(self, portfolio: &Portfolio, themes: &ThemeCatalog) -> String {
        match self {
            Self::Help => "Show available commands".to_string(),
            Self::About => format!("Display information about {}", portfolio.name),
            Self::Projects => "List all projects".to_string(),
            Self::Contact => "Show contact information".to_string(),
            Self::Resume => "Display resume information".to_string(),
            Self::Clear => "Clear the terminal screen".to_string(),
            Self::Exit => "Exit the terminal".to_string(),
            Self::Sudo => "Execute commands as superuser (just for fun)".to_string(),
            Self::Ls => "List directory contents".to_string(),
            Self::Cat => "Display file contents".to_string(),
            Self::Fortune => "Display a random quote or fun fact".to_string(),
            Self::Neofetch => "Display system information".to_string(),
            Self::Theme => format!(
                "Change terminal theme ({})",
                themes.keys().collect::<Vec<_>>().join(", ")
            ),
            Self::Gui => "Switch to GUI mode (hidden)".to_string(),
        }
    }
}

// =============================================================================
// Command Descriptor
// =============================================================================

/// A registered command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: String,
    /// Hidden commands run normally but are left out of `help`.
    pub hidden: bool,
    pub builtin: Builtin,
}

/// Collaborators a handler may touch besides the portfolio.
pub struct CommandContext<'a> {
    pub themes: &'a mut ThemeStore,
    /// Source for `sudo` and `fortune` picks.
    pub rng: &'a mut dyn RngCore,
}

// =============================================================================
// Interpreter
// =============================================================================

/// Parses raw lines and runs them against the command table.
#[derive(Clone, Debug)]
pub struct Interpreter {
    portfolio: Arc<Portfolio>,
    commands: Vec<Command>,
}

impl Interpreter {
    /// Build the command table for `portfolio`.
    ///
    /// The catalog only feeds the `theme` description.
    pub fn new(portfolio: Arc<Portfolio>, themes: &ThemeCatalog) -> Self {
        let commands = REGISTRY
            .iter()
            .map(|&(name, builtin, hidden)| Command {
                name,
                description: builtin.description(&portfolio, themes),
                hidden,
                builtin,
            })
            .collect();

        Self {
            portfolio,
            commands,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Every registered command, hidden ones included, in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Commands shown by `help`.
    pub fn list_commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().filter(|c| !c.hidden)
    }

    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Parse and run one input line.
    ///
    /// Never fails: unknown names and handler faults come back as
    /// error-flagged output.
    pub fn execute(&self, line: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            return CommandResult::empty();
        };
        let name = first.to_lowercase();
        let args: Vec<String> = parts.map(str::to_string).collect();

        let Some(command) = self.lookup(&name) else {
            log::debug!("unknown command: {}", name);
            return CommandResult::error([
                format!("command not found: {}", name),
                "Type 'help' to see available commands.".to_string(),
            ]);
        };

        log::debug!("dispatch {} ({} args)", command.name, args.len());
        match execute::run(command.builtin, &args, self, ctx) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("{} failed: {}", command.name, e);
                CommandResult::error([format!("Error executing command: {}", e)])
            }
        }
    }

    /// Registered names starting with `prefix`, case-insensitive.
    ///
    /// Hidden commands are included. At most [`MAX_SUGGESTIONS`] names are
    /// returned, in registration order.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.commands
            .iter()
            .filter(|c| c.name.starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .map(|c| c.name.to_string())
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::fixtures;
    use crate::theme::MemoryStorage;

    pub(super) struct Harness {
        pub interpreter: Interpreter,
        pub themes: ThemeStore,
        pub rng: StdRng,
    }

    impl Harness {
        pub fn new() -> Self {
            let catalog = ThemeCatalog::bundled().unwrap();
            let interpreter = Interpreter::new(Arc::new(fixtures::sample()), &catalog);
            Self {
                interpreter,
                themes: ThemeStore::load(catalog, Box::new(MemoryStorage::new())),
                rng: StdRng::seed_from_u64(7),
            }
        }

        pub fn run(&mut self, line: &str) -> CommandResult {
            let mut ctx = CommandContext {
                themes: &mut self.themes,
                rng: &mut self.rng,
            };
            self.interpreter.execute(line, &mut ctx)
        }
    }

    #[test]
    fn test_every_registered_name_succeeds_bare() {
        let mut h = Harness::new();
        let names: Vec<_> = h.interpreter.commands().iter().map(|c| c.name).collect();
        for name in names {
            let result = h.run(name);
            assert!(!result.error, "{} should not be an error: {:?}", name, result.output);
        }
    }

    #[test]
    fn test_unknown_command() {
        let mut h = Harness::new();
        for line in ["foo", "rm -rf /", "HELPME", "cd projects"] {
            let result = h.run(line);
            assert!(result.error);
            assert!(result.output[0].starts_with("command not found: "));
            assert_eq!(result.output[1], "Type 'help' to see available commands.");
        }
        assert_eq!(h.run("FOO").output[0], "command not found: foo");
    }

    #[test]
    fn test_empty_line_is_noop() {
        let mut h = Harness::new();
        assert_eq!(h.run(""), CommandResult::empty());
        assert_eq!(h.run("   \t "), CommandResult::empty());
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let mut h = Harness::new();
        assert_eq!(h.run("HELP"), h.run("help"));
        assert_eq!(h.run("  About  "), h.run("about"));
    }

    #[test]
    fn test_clear_flag() {
        let mut h = Harness::new();
        let result = h.run("clear");
        assert!(result.clear);
        assert!(result.output.is_empty());
        assert!(!result.error);
    }

    #[test]
    fn test_list_commands_skips_hidden() {
        let h = Harness::new();
        let names: Vec<_> = h.interpreter.list_commands().map(|c| c.name).collect();
        assert!(!names.contains(&"gui"));
        assert_eq!(names.first(), Some(&"help"));
        assert_eq!(names.len(), REGISTRY.len() - 1);
    }

    #[test]
    fn test_suggestions() {
        let h = Harness::new();
        assert_eq!(h.interpreter.suggestions("pro"), vec!["projects"]);
        assert_eq!(h.interpreter.suggestions("c"), vec!["contact", "clear", "cat"]);
        assert_eq!(h.interpreter.suggestions("G"), vec!["gui"]);
        assert_eq!(h.interpreter.suggestions("--"), vec!["--help"]);
        assert!(h.interpreter.suggestions("zzz").is_empty());
        assert_eq!(h.interpreter.suggestions("").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_theme_description_lists_catalog() {
        let h = Harness::new();
        let theme = h.interpreter.lookup("theme").unwrap();
        assert_eq!(
            theme.description,
            "Change terminal theme (ubuntu, dracula, nord, kali, monokai, solarized)"
        );
        assert_eq!(
            h.interpreter.lookup("about").unwrap().description,
            "Display information about Ada"
        );
    }
}
