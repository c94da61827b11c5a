//! Application launcher catalogue.
//!
//! Each entry is a shortcut for one command run in the primary terminal
//! through [`Desktop::launch`](crate::Desktop::launch).

/// One launchable application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LauncherEntry {
    pub name: &'static str,
    pub command: &'static str,
    pub category: &'static str,
}

/// Every application, in display order.
pub const ENTRIES: &[LauncherEntry] = &[
    LauncherEntry { name: "Terminal", command: "clear", category: "System" },
    LauncherEntry { name: "About Me", command: "about", category: "Portfolio" },
    LauncherEntry { name: "Projects", command: "projects", category: "Portfolio" },
    LauncherEntry { name: "Resume", command: "resume", category: "Portfolio" },
    LauncherEntry { name: "Contact", command: "contact", category: "Portfolio" },
    LauncherEntry { name: "Help", command: "help", category: "System" },
];

/// Entries whose name, command or category contains `query`, ignoring case.
///
/// A blank query matches everything.
pub fn search(query: &str) -> Vec<&'static LauncherEntry> {
    let query = query.trim().to_lowercase();
    ENTRIES
        .iter()
        .filter(|entry| {
            query.is_empty()
                || [entry.name, entry.command, entry.category]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(query: &str) -> Vec<&'static str> {
        search(query).into_iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_blank_query_lists_everything() {
        assert_eq!(search("").len(), ENTRIES.len());
        assert_eq!(search("   ").len(), ENTRIES.len());
    }

    #[test]
    fn test_search_matches_any_field() {
        assert_eq!(names("RES"), ["Resume"]);
        assert_eq!(names("clear"), ["Terminal"]);
        assert_eq!(names("system"), ["Terminal", "Help"]);
        assert!(names("zzz").is_empty());
    }

    #[test]
    fn test_entries_are_registered_commands() {
        use std::sync::Arc;

        use crate::commands::Interpreter;
        use crate::models::fixtures;
        use crate::theme::ThemeCatalog;

        let interpreter = Interpreter::new(Arc::new(fixtures::sample()), &ThemeCatalog::bundled().unwrap());
        for entry in ENTRIES {
            assert!(
                interpreter.lookup(entry.command).is_some(),
                "{} is not registered",
                entry.command
            );
        }
    }
}
