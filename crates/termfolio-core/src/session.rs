//! Per-window terminal session.
//!
//! A [`Session`] owns the line log, the command history and the text being
//! edited. It runs submitted lines through the shared interpreter and records
//! the result; everything about *when* a session ends (the exit grace delay)
//! is left to the desktop that owns it.

use std::collections::VecDeque;

use crate::commands::{CommandContext, CommandResult, Interpreter};
use crate::config::{MAX_COMMAND_HISTORY, MAX_TERMINAL_LINES, PREVIEW_LINES};
use crate::models::{Portfolio, TerminalLine};
use crate::timers::Millis;

/// Direction of a history step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Towards older entries.
    Up,
    /// Towards newer entries and finally back to an empty input.
    Down,
}

/// What a submission did, for the owner to react to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub error: bool,
    pub cleared: bool,
    /// The session asked to terminate.
    pub exit_requested: bool,
}

/// Line log, history and input of one terminal.
#[derive(Clone, Debug)]
pub struct Session {
    lines: VecDeque<TerminalLine>,
    current_input: String,
    history: VecDeque<String>,
    /// `None` while not browsing history.
    history_index: Option<usize>,
    booting: bool,
    prompt: String,
}

impl Session {
    /// A fresh session, still booting.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            lines: VecDeque::new(),
            current_input: String::new(),
            history: VecDeque::new(),
            history_index: None,
            booting: true,
            prompt: prompt.into(),
        }
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &TerminalLine> {
        self.lines.iter()
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn history_index(&self) -> Option<usize> {
        self.history_index
    }

    pub fn is_booting(&self) -> bool {
        self.booting
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Replace the edited text (renderer input events).
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.current_input = value.into();
    }

    /// End the boot sequence and greet the user.
    ///
    /// The welcome banner is only written into an empty log, and only once.
    pub fn finish_boot(&mut self, portfolio: &Portfolio, now: Millis) {
        if !self.booting {
            return;
        }
        self.booting = false;
        if self.lines.is_empty() {
            let banner = [
                format!(
                    "Welcome to {}'s Portfolio v{}",
                    portfolio.name, portfolio.identity.version
                ),
                "Type --help to see available commands".to_string(),
                String::new(),
            ];
            for content in banner {
                self.push_line(TerminalLine::system(content, now));
            }
        }
    }

    /// Run `line` and record it.
    ///
    /// Ignored while booting. A `clear` result wipes the log instead of
    /// echoing; everything else echoes the line with the prompt followed by
    /// the output.
    pub fn submit(
        &mut self,
        line: &str,
        interpreter: &Interpreter,
        ctx: &mut CommandContext<'_>,
        now: Millis,
    ) -> SubmitOutcome {
        if self.booting {
            return SubmitOutcome::default();
        }

        let result = interpreter.execute(line, ctx);
        self.record(line, &result, now);

        SubmitOutcome {
            error: result.error,
            cleared: result.clear,
            exit_requested: result.exit,
        }
    }

    fn record(&mut self, line: &str, result: &CommandResult, now: Millis) {
        if result.clear {
            self.lines.clear();
        } else {
            self.push_line(TerminalLine::input(self.prompt.clone(), line, now));
            for (i, content) in result.output.iter().enumerate() {
                self.push_line(TerminalLine::output(content.clone(), now + i as Millis));
            }
        }

        if !line.trim().is_empty() {
            self.history.push_back(line.to_string());
            if self.history.len() > MAX_COMMAND_HISTORY {
                self.history.pop_front();
            }
        }
        self.history_index = None;
        self.current_input.clear();
    }

    fn push_line(&mut self, line: TerminalLine) {
        self.lines.push_back(line);
        while self.lines.len() > MAX_TERMINAL_LINES {
            self.lines.pop_front();
        }
    }

    /// Step through history, replacing the current input.
    ///
    /// Movement past either end is a no-op, as is navigating an empty
    /// history.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        let Some(last) = self.history.len().checked_sub(1) else {
            return;
        };

        let next = match (self.history_index, direction) {
            (None, HistoryDirection::Up) => Some(last),
            (Some(i), HistoryDirection::Up) => Some(i.saturating_sub(1)),
            (Some(i), HistoryDirection::Down) if i < last => Some(i + 1),
            (Some(_), HistoryDirection::Down) => None,
            (None, HistoryDirection::Down) => return,
        };

        self.history_index = next;
        self.current_input = next.map(|i| self.history[i].clone()).unwrap_or_default();
    }

    /// Last few lines as plain text, for the taskbar.
    pub fn preview(&self) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(PREVIEW_LINES);
        self.lines
            .iter()
            .skip(skip)
            .map(TerminalLine::preview_text)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::{LineKind, fixtures};
    use crate::theme::{MemoryStorage, ThemeCatalog, ThemeStore};

    struct Fixture {
        session: Session,
        interpreter: Interpreter,
        themes: ThemeStore,
        rng: StdRng,
        portfolio: Portfolio,
    }

    impl Fixture {
        fn new() -> Self {
            let portfolio = fixtures::sample();
            let catalog = ThemeCatalog::bundled().unwrap();
            let mut session = Session::new(portfolio.prompt());
            session.finish_boot(&portfolio, 0);
            Self {
                session,
                interpreter: Interpreter::new(Arc::new(portfolio.clone()), &catalog),
                themes: ThemeStore::load(catalog, Box::new(MemoryStorage::new())),
                rng: StdRng::seed_from_u64(3),
                portfolio,
            }
        }

        fn submit(&mut self, line: &str) -> SubmitOutcome {
            let mut ctx = CommandContext {
                themes: &mut self.themes,
                rng: &mut self.rng,
            };
            self.session.submit(line, &self.interpreter, &mut ctx, 1_000)
        }

        fn kinds(&self) -> Vec<LineKind> {
            self.session.lines().map(|l| l.kind).collect()
        }
    }

    #[test]
    fn test_boot_writes_welcome_once() {
        let mut f = Fixture::new();
        assert!(!f.session.is_booting());
        assert_eq!(f.kinds(), vec![LineKind::System; 3]);
        assert_eq!(
            f.session.lines().next().unwrap().content,
            "Welcome to Ada's Portfolio v1.0.0"
        );

        f.session.finish_boot(&f.portfolio, 5);
        assert_eq!(f.session.lines().len(), 3);
    }

    #[test]
    fn test_submit_ignored_while_booting() {
        let mut f = Fixture::new();
        f.session = Session::new("p$");
        f.submit("help");
        assert_eq!(f.session.lines().len(), 0);
        assert_eq!(f.session.history().len(), 0);
    }

    #[test]
    fn test_submit_echoes_then_outputs() {
        let mut f = Fixture::new();
        f.session.set_input("projects");
        let outcome = f.submit("projects");
        assert!(!outcome.error);

        let lines: Vec<_> = f.session.lines().skip(3).collect();
        assert_eq!(lines[0].kind, LineKind::Input);
        assert_eq!(lines[0].content, "projects");
        assert_eq!(lines[0].prompt.as_deref(), Some("ada@folio:~$"));
        assert!(lines[1..].iter().all(|l| l.kind == LineKind::Output));
        assert_eq!(lines[1].content, "Projects Portfolio:");

        assert_eq!(f.session.history().collect::<Vec<_>>(), ["projects"]);
        assert_eq!(f.session.current_input(), "");
    }

    #[test]
    fn test_empty_submit_echoes_without_history() {
        let mut f = Fixture::new();
        f.submit("");
        f.submit("   ");
        assert_eq!(f.session.history().len(), 0);
        assert_eq!(f.session.lines().len(), 5);
        assert!(f.session.lines().skip(3).all(|l| l.kind == LineKind::Input));
    }

    #[test]
    fn test_unknown_command_flags_error() {
        let mut f = Fixture::new();
        let outcome = f.submit("nope");
        assert!(outcome.error);
        assert_eq!(f.session.history().collect::<Vec<_>>(), ["nope"]);
    }

    #[test]
    fn test_clear_wipes_log_but_records_history() {
        let mut f = Fixture::new();
        f.submit("about");
        let outcome = f.submit("clear");
        assert!(outcome.cleared);
        assert_eq!(f.session.lines().len(), 0);
        assert_eq!(f.session.history().collect::<Vec<_>>(), ["about", "clear"]);
    }

    #[test]
    fn test_exit_appends_and_requests_exit() {
        let mut f = Fixture::new();
        let outcome = f.submit("exit");
        assert!(outcome.exit_requested);
        assert_eq!(
            f.session.lines().last().unwrap().content,
            "Connection to ada-folio closed."
        );
    }

    #[test]
    fn test_history_navigation_boundaries() {
        let mut f = Fixture::new();
        f.submit("help");
        f.submit("about");
        f.submit("ls");

        f.session.navigate_history(HistoryDirection::Down);
        assert_eq!(f.session.history_index(), None);
        assert_eq!(f.session.current_input(), "");

        f.session.navigate_history(HistoryDirection::Up);
        assert_eq!(f.session.current_input(), "ls");
        f.session.navigate_history(HistoryDirection::Up);
        f.session.navigate_history(HistoryDirection::Up);
        assert_eq!(f.session.current_input(), "help");
        f.session.navigate_history(HistoryDirection::Up);
        f.session.navigate_history(HistoryDirection::Up);
        assert_eq!(f.session.current_input(), "help");
        assert_eq!(f.session.history_index(), Some(0));

        f.session.navigate_history(HistoryDirection::Down);
        assert_eq!(f.session.current_input(), "about");
        f.session.navigate_history(HistoryDirection::Down);
        f.session.navigate_history(HistoryDirection::Down);
        assert_eq!(f.session.history_index(), None);
        assert_eq!(f.session.current_input(), "");
        f.session.navigate_history(HistoryDirection::Down);
        assert_eq!(f.session.current_input(), "");
    }

    #[test]
    fn test_navigation_with_empty_history() {
        let mut f = Fixture::new();
        f.session.set_input("draft");
        f.session.navigate_history(HistoryDirection::Up);
        assert_eq!(f.session.current_input(), "draft");
        assert_eq!(f.session.history_index(), None);
    }

    #[test]
    fn test_submit_resets_history_index() {
        let mut f = Fixture::new();
        f.submit("help");
        f.session.navigate_history(HistoryDirection::Up);
        assert_eq!(f.session.history_index(), Some(0));
        f.submit("help");
        assert_eq!(f.session.history_index(), None);
        assert_eq!(f.session.history().len(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut f = Fixture::new();
        for i in 0..MAX_COMMAND_HISTORY + 5 {
            f.submit(&format!("cmd{}", i));
        }
        assert_eq!(f.session.history().len(), MAX_COMMAND_HISTORY);
        assert_eq!(f.session.history().next(), Some("cmd5"));
        let newest = format!("cmd{}", MAX_COMMAND_HISTORY + 4);
        assert_eq!(f.session.history().last(), Some(newest.as_str()));
    }

    #[test]
    fn test_log_is_bounded() {
        let mut f = Fixture::new();
        for _ in 0..MAX_TERMINAL_LINES {
            f.submit("fortune");
        }
        assert_eq!(f.session.lines().len(), MAX_TERMINAL_LINES);
        assert_eq!(f.session.lines().last().unwrap().kind, LineKind::Output);
    }

    #[test]
    fn test_preview_projection() {
        let mut f = Fixture::new();
        assert_eq!(
            f.session.preview(),
            vec![
                "Welcome to Ada's Portfolio v1.0.0",
                "Type --help to see available commands",
                ""
            ]
        );

        f.submit("projects 1");
        f.submit("foo");
        let preview = f.session.preview();
        assert_eq!(preview.len(), PREVIEW_LINES);
        assert_eq!(
            preview[PREVIEW_LINES - 5..],
            [
                "ada@folio:~$ projects 1",
                "Usage: projects",
                "ada@folio:~$ foo",
                "command not found: foo",
                "Type 'help' to see available commands."
            ]
        );
    }
}
