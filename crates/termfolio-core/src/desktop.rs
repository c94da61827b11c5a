//! Desktop controller.
//!
//! The [`Desktop`] is the single owner of every open terminal window. It keeps
//! them in rendering order (last is topmost), tracks which one has keyboard
//! focus, and holds the collaborators shared by all sessions: the
//! interpreter, the theme store, the random source and the timer queue.
//!
//! # Time
//!
//! The desktop never reads a clock. Operations that start a timed transition
//! take the caller's `now`, and [`Desktop::tick`] fires whatever is due.
//! Removing a window cancels all of its pending tasks first, so a late task
//! can never touch a window that no longer exists.

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;

use crate::autocomplete::{self, Completion, Selection};
use crate::commands::{CommandContext, Interpreter};
use crate::config::delays::{CLOSE_FADE, MINIMIZE_FADE, SESSION_EXIT};
use crate::config::window::{CASCADE_ORIGIN, CASCADE_STEP};
use crate::error::DatasetError;
use crate::models::{Point, Portfolio, Rect, Viewport};
use crate::session::{HistoryDirection, Session, SubmitOutcome};
use crate::theme::{ThemeCatalog, ThemeStorage, ThemeStore};
use crate::timers::{Millis, TimerQueue};
use crate::window::{ResizeEdge, WindowFrame, WindowStateKind};

// ============================================================================
// Window Handle
// ============================================================================

/// Identifier of an open window, unique for the desktop's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u32);

impl WindowId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for WindowId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One terminal window: chrome state plus its session.
#[derive(Clone, Debug)]
pub struct TerminalWindow {
    id: WindowId,
    frame: WindowFrame,
    session: Session,
}

impl TerminalWindow {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn frame(&self) -> &WindowFrame {
        &self.frame
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> WindowStateKind {
        self.frame.state()
    }

    fn can_focus(&self) -> bool {
        !self.frame.is_minimized() && !self.frame.is_closing()
    }
}

/// Taskbar entry for one window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub id: WindowId,
    pub title: String,
    pub minimized: bool,
    pub lines: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    /// Minimize fade finished.
    HideMinimized,
    /// Close transition finished; drop the window.
    FinishClose,
    /// Exit grace period finished; close the window.
    ExitSession,
}

// ============================================================================
// Desktop
// ============================================================================

/// Owner of all windows and their shared collaborators.
pub struct Desktop {
    windows: Vec<TerminalWindow>,
    active: Option<WindowId>,
    next_id: u32,
    viewport: Viewport,
    portfolio: Arc<Portfolio>,
    interpreter: Interpreter,
    themes: ThemeStore,
    rng: StdRng,
    timers: TimerQueue<WindowId, Task>,
}

impl Desktop {
    pub fn new(portfolio: Arc<Portfolio>, themes: ThemeStore, rng: StdRng, viewport: Viewport) -> Self {
        let interpreter = Interpreter::new(Arc::clone(&portfolio), themes.catalog());
        Self {
            windows: Vec::new(),
            active: None,
            next_id: 1,
            viewport,
            portfolio,
            interpreter,
            themes,
            rng,
            timers: TimerQueue::new(),
        }
    }

    /// A desktop over the bundled portfolio and theme catalog.
    pub fn bundled(
        storage: Box<dyn ThemeStorage>,
        rng: StdRng,
        viewport: Viewport,
    ) -> Result<Self, DatasetError> {
        let portfolio = Arc::new(Portfolio::bundled()?);
        let themes = ThemeStore::load(ThemeCatalog::bundled()?, storage);
        Ok(Self::new(portfolio, themes, rng, viewport))
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Windows in rendering order, topmost last.
    pub fn windows(&self) -> &[TerminalWindow] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&TerminalWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut TerminalWindow> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.active
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn themes(&self) -> &ThemeStore {
        &self.themes
    }

    /// Mutable theme store, e.g. to subscribe to changes.
    pub fn themes_mut(&mut self) -> &mut ThemeStore {
        &mut self.themes
    }

    /// Title shown in every window's title bar.
    pub fn window_title(&self) -> String {
        let identity = &self.portfolio.identity;
        format!("{}@{}: ~", identity.user, identity.host)
    }

    /// Box to draw window `id` in, if it exists.
    pub fn layout(&self, id: WindowId) -> Option<Rect> {
        self.window(id).map(|w| w.frame.layout(self.viewport))
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_due()
    }

    // ------------------------------------------------------------------------
    // Window Lifecycle
    // ------------------------------------------------------------------------

    /// Open a new booting terminal, cascaded from the existing ones.
    pub fn open_window(&mut self) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;

        let offset = CASCADE_ORIGIN + CASCADE_STEP * self.windows.len() as i32;
        self.windows.push(TerminalWindow {
            id,
            frame: WindowFrame::new(Point::new(offset, offset)),
            session: Session::new(self.portfolio.prompt()),
        });
        self.active = Some(id);
        log::info!("opened terminal {}", id);
        id
    }

    /// Raise `id` to the top and give it keyboard focus.
    ///
    /// Minimized and closing windows cannot take focus; they are left where
    /// they are and `false` is returned.
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            return false;
        };
        if !self.windows[index].can_focus() {
            return false;
        }
        let window = self.windows.remove(index);
        self.windows.push(window);
        self.active = Some(id);
        true
    }

    /// Click-to-focus. Like [`bring_to_front`](Self::bring_to_front), but
    /// returns `false` without touching anything when `id` is already the
    /// topmost, active window.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let topmost = self.windows.last().map(|w| w.id);
        if topmost == Some(id) && self.active == Some(id) {
            return false;
        }
        self.bring_to_front(id)
    }

    /// Minimize a visible window, or restore a minimized one.
    pub fn toggle_minimize(&mut self, id: WindowId, now: Millis) {
        let Some(window) = self.window(id) else {
            return;
        };
        if window.frame.is_closing() {
            return;
        }
        if window.frame.is_minimized() {
            self.restore_from_taskbar(id);
        } else {
            self.minimize(id, now);
        }
    }

    fn minimize(&mut self, id: WindowId, now: Millis) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        window.frame.minimize();
        self.timers.schedule(id, Task::HideMinimized, now, MINIMIZE_FADE);
        if self.active == Some(id) {
            self.active = self.topmost_visible();
        }
        log::debug!("minimized terminal {}", id);
    }

    /// Un-minimize `id` and bring it to the front.
    pub fn restore_from_taskbar(&mut self, id: WindowId) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        if window.frame.is_closing() {
            return;
        }
        window.frame.restore();
        self.timers.cancel_matching(id, |t| *t == Task::HideMinimized);
        self.bring_to_front(id);
    }

    /// Flip maximized state. Returns the new value, or `None` if `id` is gone,
    /// minimized or closing.
    pub fn toggle_maximize(&mut self, id: WindowId) -> Option<bool> {
        let window = self.window_mut(id)?;
        if !window.can_focus() {
            return None;
        }
        let maximized = window.frame.toggle_maximize();
        self.bring_to_front(id);
        Some(maximized)
    }

    /// Start closing `id`. A window already closing is left alone.
    pub fn close(&mut self, id: WindowId, now: Millis) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        if !window.frame.begin_close() {
            return;
        }
        self.timers.schedule(id, Task::FinishClose, now, CLOSE_FADE);
        if self.active == Some(id) {
            self.active = self.topmost_visible();
        }
        log::debug!("closing terminal {}", id);
    }

    fn remove_window(&mut self, id: WindowId) {
        let cancelled = self.timers.cancel_owner(id);
        self.windows.retain(|w| w.id != id);
        if self.active == Some(id) {
            self.active = self.topmost_visible();
        }
        log::info!("closed terminal {} ({} pending tasks cancelled)", id, cancelled);
    }

    /// Topmost window that can take focus.
    fn topmost_visible(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.can_focus())
            .map(|w| w.id)
    }

    // ------------------------------------------------------------------------
    // Pointer Interaction
    // ------------------------------------------------------------------------

    /// Title-bar press on `id`.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> bool {
        if !self.bring_to_front(id) {
            return false;
        }
        let viewport = self.viewport;
        self.window_mut(id)
            .is_some_and(|w| w.frame.begin_drag(pointer, viewport))
    }

    /// Edge or corner press on `id`.
    pub fn begin_resize(&mut self, id: WindowId, edge: ResizeEdge, pointer: Point) -> bool {
        if !self.bring_to_front(id) {
            return false;
        }
        let viewport = self.viewport;
        self.window_mut(id)
            .is_some_and(|w| w.frame.begin_resize(edge, pointer, viewport))
    }

    /// Feed a pointer move to whichever window is being dragged or resized.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let viewport = self.viewport;
        self.windows
            .iter_mut()
            .filter(|w| w.frame.is_interacting())
            .fold(false, |changed, w| w.frame.pointer_move(pointer, viewport) || changed)
    }

    pub fn pointer_up(&mut self) {
        for window in &mut self.windows {
            window.frame.pointer_up();
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!("viewport {}x{}", viewport.width, viewport.height);
            self.viewport = viewport;
        }
    }

    // ------------------------------------------------------------------------
    // Session Routing
    // ------------------------------------------------------------------------

    /// Whether `id` currently receives keystrokes.
    pub fn accepts_keyboard(&self, id: WindowId) -> bool {
        self.active == Some(id)
            && self
                .window(id)
                .is_some_and(|w| !w.frame.is_minimized() && !w.frame.is_closing())
    }

    fn focused_session(&mut self, id: WindowId) -> Option<&mut Session> {
        if !self.accepts_keyboard(id) {
            return None;
        }
        self.window_mut(id).map(|w| &mut w.session)
    }

    /// Submit `line` to the session of `id`.
    ///
    /// Returns `None` when the window does not have keyboard focus. An exit
    /// request closes the window after the grace period.
    pub fn submit(&mut self, id: WindowId, line: &str, now: Millis) -> Option<SubmitOutcome> {
        if !self.accepts_keyboard(id) {
            return None;
        }
        let window = self.windows.iter_mut().find(|w| w.id == id)?;
        let mut ctx = CommandContext {
            themes: &mut self.themes,
            rng: &mut self.rng,
        };
        let outcome = window.session.submit(line, &self.interpreter, &mut ctx, now);

        if outcome.exit_requested {
            log::info!("terminal {} exiting", id);
            self.timers.schedule(id, Task::ExitSession, now, SESSION_EXIT);
        }
        Some(outcome)
    }

    pub fn set_input(&mut self, id: WindowId, value: &str) {
        if let Some(session) = self.focused_session(id) {
            session.set_input(value);
        }
    }

    pub fn navigate_history(&mut self, id: WindowId, direction: HistoryDirection) {
        if let Some(session) = self.focused_session(id) {
            session.navigate_history(direction);
        }
    }

    /// Tab completion on the input of `id`.
    ///
    /// A [`Completion::Replaced`] result has already been written to the
    /// session; the caller only has to move the caret.
    pub fn complete(&mut self, id: WindowId, selection: Selection, show_candidates: bool) -> Completion {
        if !self.accepts_keyboard(id) {
            return Completion::NoOp;
        }
        let interpreter = &self.interpreter;
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return Completion::NoOp;
        };

        let completion = autocomplete::complete(
            window.session.current_input(),
            selection,
            |token| interpreter.suggestions(token),
            show_candidates,
        );
        if let Completion::Replaced { value, .. } = &completion {
            window.session.set_input(value.clone());
        }
        completion
    }

    /// Ghost text for the input of `id`.
    pub fn hint(&self, id: WindowId) -> Option<String> {
        let session = &self.window(id)?.session;
        autocomplete::hint(session.current_input(), |t| self.interpreter.suggestions(t))
    }

    /// Candidates shown under the input of `id` while typing.
    pub fn live_suggestions(&self, id: WindowId) -> Vec<String> {
        self.window(id)
            .map(|w| {
                autocomplete::live_suggestions(w.session.current_input(), |t| {
                    self.interpreter.suggestions(t)
                })
            })
            .unwrap_or_default()
    }

    /// The boot animation of `id` has finished.
    pub fn finish_boot(&mut self, id: WindowId, now: Millis) {
        let portfolio = Arc::clone(&self.portfolio);
        if let Some(window) = self.window_mut(id) {
            window.session.finish_boot(&portfolio, now);
        }
    }

    /// Run `command` in the primary terminal, as the launcher does.
    ///
    /// The primary terminal is the focused window, else the topmost visible
    /// one, else the topmost minimized one (restored first). With no usable
    /// window a new one is opened. A window still booting skips the rest of
    /// its boot so the command is not dropped.
    pub fn launch(&mut self, command: &str, now: Millis) -> Option<(WindowId, SubmitOutcome)> {
        let minimized = || {
            self.windows
                .iter()
                .rev()
                .find(|w| w.frame.is_minimized() && !w.frame.is_closing())
                .map(|w| w.id)
        };
        let id = match self.active.filter(|&id| self.accepts_keyboard(id)) {
            Some(id) => id,
            None => match self.topmost_visible().or_else(minimized) {
                Some(id) => {
                    self.restore_from_taskbar(id);
                    id
                }
                None => self.open_window(),
            },
        };

        if self.window(id).is_some_and(|w| w.session.is_booting()) {
            self.finish_boot(id, now);
        }
        log::debug!("launching {:?} in terminal {}", command, id);
        self.submit(id, command, now).map(|outcome| (id, outcome))
    }

    // ------------------------------------------------------------------------
    // Timers & Projections
    // ------------------------------------------------------------------------

    /// Fire every task due at `now`. Returns how many fired.
    pub fn tick(&mut self, now: Millis) -> usize {
        let due = self.timers.take_due(now);
        let fired = due.len();

        for (id, task) in due {
            if self.window(id).is_none() {
                log::debug!("dropping {:?} for missing terminal {}", task, id);
                continue;
            }
            log::debug!("terminal {}: {:?}", id, task);
            match task {
                Task::HideMinimized => {
                    if let Some(window) = self.window_mut(id) {
                        window.frame.hide();
                    }
                }
                Task::FinishClose => self.remove_window(id),
                Task::ExitSession => self.close(id, now),
            }
        }
        fired
    }

    /// Taskbar entries in rendering order.
    pub fn previews(&self) -> Vec<Preview> {
        self.windows
            .iter()
            .map(|w| Preview {
                id: w.id,
                title: format!("Terminal {}", w.id),
                minimized: w.frame.is_minimized(),
                lines: w.session.preview(),
            })
            .collect()
    }
}

impl fmt::Debug for Desktop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Desktop")
            .field("windows", &self.windows.iter().map(|w| w.id).collect::<Vec<_>>())
            .field("active", &self.active)
            .field("viewport", &self.viewport)
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::models::{LineKind, fixtures};
    use crate::theme::MemoryStorage;

    fn desktop() -> Desktop {
        let themes = ThemeStore::load(ThemeCatalog::bundled().unwrap(), Box::new(MemoryStorage::new()));
        Desktop::new(
            Arc::new(fixtures::sample()),
            themes,
            StdRng::seed_from_u64(11),
            Viewport::new(1280, 800),
        )
    }

    fn booted(d: &mut Desktop) -> WindowId {
        let id = d.open_window();
        d.finish_boot(id, 0);
        id
    }

    #[test]
    fn test_open_cascades_and_focuses() {
        let mut d = desktop();
        let a = d.open_window();
        let b = d.open_window();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(WindowId::from(2), b);
        assert_eq!(d.active_id(), Some(b));
        assert_eq!(d.window(a).unwrap().frame().bounds().origin, Point::new(70, 70));
        assert_eq!(d.window(b).unwrap().frame().bounds().origin, Point::new(100, 100));
        assert!(d.window(b).unwrap().session().is_booting());
    }

    #[test]
    fn test_bring_to_front_reorders() {
        let mut d = desktop();
        let a = d.open_window();
        let b = d.open_window();
        let c = d.open_window();

        assert!(d.bring_to_front(a));
        let order: Vec<_> = d.windows().iter().map(|w| w.id()).collect();
        assert_eq!(order, vec![b, c, a]);
        assert_eq!(d.active_id(), Some(a));
        assert!(!d.bring_to_front(WindowId(99)));
    }

    #[test]
    fn test_keyboard_only_reaches_active_window() {
        let mut d = desktop();
        let a = booted(&mut d);
        let b = booted(&mut d);

        assert!(d.submit(a, "help", 10).is_none());
        assert!(d.submit(b, "help", 10).is_some());
        assert_eq!(d.window(a).unwrap().session().lines().len(), 3);

        d.set_input(a, "ignored");
        assert_eq!(d.window(a).unwrap().session().current_input(), "");
    }

    #[test]
    fn test_focus_raises_active_window_that_is_not_topmost() {
        let mut d = desktop();
        let a = d.open_window();
        let b = d.open_window();
        assert!(!d.focus(b));

        // Closing `c` hands focus back to `a`, which is still under `c`
        d.bring_to_front(a);
        let c = d.open_window();
        d.close(c, 0);
        assert_eq!(d.active_id(), Some(a));
        assert_ne!(d.windows().last().unwrap().id(), a);
        assert!(d.focus(a));
        assert_eq!(d.windows().last().unwrap().id(), a);
        assert!(!d.focus(a));
    }

    #[test]
    fn test_minimize_hides_after_fade_and_restores() {
        let mut d = desktop();
        let a = booted(&mut d);
        d.submit(a, "about", 0);
        let before: Vec<_> = d.window(a).unwrap().session().lines().cloned().collect();

        d.toggle_minimize(a, 100);
        assert_eq!(d.active_id(), None);
        assert!(!d.window(a).unwrap().frame().is_hidden());
        assert!(d.submit(a, "help", 150).is_none());

        d.tick(299);
        assert!(!d.window(a).unwrap().frame().is_hidden());
        d.tick(300);
        assert!(d.window(a).unwrap().frame().is_hidden());

        d.restore_from_taskbar(a);
        let w = d.window(a).unwrap();
        assert!(!w.frame().is_minimized() && !w.frame().is_hidden());
        assert_eq!(d.active_id(), Some(a));
        let after: Vec<_> = w.session().lines().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_restore_before_fade_cancels_hide() {
        let mut d = desktop();
        let a = booted(&mut d);
        d.toggle_minimize(a, 0);
        d.toggle_minimize(a, 50);
        assert_eq!(d.next_deadline(), None);
        d.tick(1_000);
        assert!(!d.window(a).unwrap().frame().is_hidden());
    }

    #[test]
    fn test_close_removes_after_fade() {
        let mut d = desktop();
        let a = booted(&mut d);
        let b = booted(&mut d);

        d.close(b, 0);
        assert_eq!(d.window(b).unwrap().state(), WindowStateKind::Closing);
        assert_eq!(d.active_id(), Some(a));

        // A second request while closing is ignored
        d.close(b, 100);
        d.tick(200);
        assert!(d.window(b).is_none());
        assert_eq!(d.tick(300), 0);
    }

    #[test]
    fn test_closing_window_cancels_its_timers() {
        let mut d = desktop();
        let a = booted(&mut d);
        d.submit(a, "exit", 0);
        d.toggle_minimize(a, 0);
        d.restore_from_taskbar(a);
        d.close(a, 10);

        d.tick(210);
        assert!(d.window(a).is_none());
        assert_eq!(d.next_deadline(), None);
    }

    #[test]
    fn test_exit_closes_after_grace_period() {
        let mut d = desktop();
        let a = booted(&mut d);
        let outcome = d.submit(a, "exit", 1_000).unwrap();
        assert!(outcome.exit_requested);

        d.tick(2_999);
        assert_eq!(d.window(a).unwrap().state(), WindowStateKind::Normal);
        d.tick(3_000);
        assert_eq!(d.window(a).unwrap().state(), WindowStateKind::Closing);
        d.tick(3_200);
        assert!(d.windows().is_empty());
        assert_eq!(d.active_id(), None);
    }

    #[test]
    fn test_drag_and_resize_route_to_pressed_window() {
        let mut d = desktop();
        let a = d.open_window();
        let b = d.open_window();

        assert!(d.begin_drag(a, Point::new(80, 80)));
        assert_eq!(d.active_id(), Some(a));
        assert!(d.pointer_move(Point::new(90, 100)));
        d.pointer_up();
        assert!(!d.pointer_move(Point::new(500, 500)));

        assert_eq!(d.window(a).unwrap().frame().bounds().origin, Point::new(80, 90));
        assert_eq!(d.window(b).unwrap().frame().bounds().origin, Point::new(100, 100));

        assert!(d.begin_resize(b, ResizeEdge::S, Point::new(300, 600)));
        d.pointer_move(Point::new(300, 650));
        assert_eq!(d.window(b).unwrap().frame().bounds().height(), 550);
    }

    #[test]
    fn test_maximize_brings_to_front() {
        let mut d = desktop();
        let a = d.open_window();
        d.open_window();
        assert_eq!(d.toggle_maximize(a), Some(true));
        assert_eq!(d.windows().last().unwrap().id(), a);
        assert_eq!(d.layout(a), Some(Rect::new(0, 0, 1280, 752)));
        assert_eq!(d.toggle_maximize(a), Some(false));
        assert_eq!(d.layout(a), Some(Rect::new(70, 70, 800, 500)));
        assert_eq!(d.toggle_maximize(WindowId(42)), None);
    }

    #[test]
    fn test_maximize_ignores_minimized_window() {
        let mut d = desktop();
        let a = d.open_window();
        let b = d.open_window();
        d.toggle_minimize(b, 0);
        assert_eq!(d.active_id(), Some(a));

        assert_eq!(d.toggle_maximize(b), None);
        assert!(!d.window(b).unwrap().frame().is_maximized());
        assert_eq!(d.active_id(), Some(a));
        assert!(d.accepts_keyboard(a));

        // Pointer presses cannot raise it either
        assert!(!d.begin_drag(b, Point::new(80, 80)));
        assert!(!d.bring_to_front(b));
        assert_eq!(d.active_id(), Some(a));
    }

    #[test]
    fn test_closing_window_cannot_take_focus() {
        let mut d = desktop();
        let a = d.open_window();
        let b = d.open_window();
        d.close(b, 0);
        assert_eq!(d.toggle_maximize(b), None);
        assert!(!d.begin_resize(b, ResizeEdge::E, Point::new(870, 300)));
        assert_eq!(d.active_id(), Some(a));
        assert!(d.accepts_keyboard(a));
    }

    #[test]
    fn test_viewport_change_applies_compact_layout() {
        let mut d = desktop();
        let a = d.open_window();
        d.set_viewport(Viewport::new(400, 800));
        assert_eq!(d.layout(a), Some(Rect::new(16, 96, 368, 560)));
        assert!(!d.begin_drag(a, Point::new(100, 100)));
        d.set_viewport(Viewport::new(1280, 800));
        assert_eq!(d.layout(a), Some(Rect::new(70, 70, 800, 500)));
    }

    #[test]
    fn test_complete_writes_back() {
        let mut d = desktop();
        let a = booted(&mut d);
        d.set_input(a, "pro");
        let got = d.complete(a, Selection::caret(3), false);
        assert_eq!(
            got,
            Completion::Replaced {
                value: "projects ".to_string(),
                caret: 9
            }
        );
        assert_eq!(d.window(a).unwrap().session().current_input(), "projects ");

        d.set_input(a, "c");
        assert_eq!(d.complete(a, Selection::caret(1), false), Completion::NoOp);
        assert_eq!(d.window(a).unwrap().session().current_input(), "c");
        assert_eq!(d.live_suggestions(a), vec!["contact", "clear", "cat"]);

        d.set_input(a, "neo");
        assert_eq!(d.hint(a).as_deref(), Some("fetch"));
    }

    #[test]
    fn test_previews() {
        let mut d = desktop();
        let a = booted(&mut d);
        let b = d.open_window();
        d.toggle_minimize(b, 0);

        let previews = d.previews();
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].id, a);
        assert_eq!(previews[0].title, "Terminal 1");
        assert_eq!(previews[0].lines[0], "Welcome to Ada's Portfolio v1.0.0");
        assert!(previews[1].minimized);
        assert!(previews[1].lines.is_empty());
    }

    fn inputs(d: &Desktop, id: WindowId) -> Vec<String> {
        d.window(id)
            .unwrap()
            .session()
            .lines()
            .filter(|l| l.kind == LineKind::Input)
            .map(|l| l.content.clone())
            .collect()
    }

    #[test]
    fn test_launch_runs_in_focused_window() {
        let mut d = desktop();
        let a = booted(&mut d);
        let b = booted(&mut d);
        let (id, outcome) = d.launch("about", 10).unwrap();
        assert_eq!(id, b);
        assert!(!outcome.error);
        assert_eq!(inputs(&d, b), ["about"]);
        assert!(inputs(&d, a).is_empty());

        let (_, outcome) = d.launch("clear", 20).unwrap();
        assert!(outcome.cleared);
        assert_eq!(d.window(b).unwrap().session().lines().len(), 0);
    }

    #[test]
    fn test_launch_opens_window_when_none_usable() {
        let mut d = desktop();
        let (id, _) = d.launch("projects", 0).unwrap();
        assert_eq!(d.windows().len(), 1);
        assert_eq!(d.active_id(), Some(id));
        let session = d.window(id).unwrap().session();
        assert!(!session.is_booting());
        assert_eq!(session.history().collect::<Vec<_>>(), ["projects"]);

        // Closing windows are not reused
        d.close(id, 10);
        let (next, _) = d.launch("contact", 20).unwrap();
        assert_ne!(next, id);
        assert_eq!(inputs(&d, next), ["contact"]);
    }

    #[test]
    fn test_launch_restores_minimized_window() {
        let mut d = desktop();
        let a = booted(&mut d);
        d.toggle_minimize(a, 0);
        d.tick(MINIMIZE_FADE);
        assert_eq!(d.active_id(), None);

        let (id, _) = d.launch("resume", 300).unwrap();
        assert_eq!(id, a);
        assert_eq!(d.window(a).unwrap().state(), WindowStateKind::Normal);
        assert!(d.accepts_keyboard(a));
        assert_eq!(d.windows().len(), 1);
    }

    #[test]
    fn test_launch_prefers_visible_over_minimized() {
        let mut d = desktop();
        let a = booted(&mut d);
        let b = booted(&mut d);
        d.toggle_minimize(b, 0);
        let (id, _) = d.launch("help", 10).unwrap();
        assert_eq!(id, a);
        assert!(d.window(b).unwrap().frame().is_minimized());
    }

    #[test]
    fn test_theme_command_goes_through_store() {
        let mut d = desktop();
        let a = booted(&mut d);
        d.submit(a, "theme nord", 0);
        assert_eq!(d.themes().current_key(), "nord");
    }

    #[test]
    fn test_bundled_desktop() {
        let d = Desktop::bundled(
            Box::new(MemoryStorage::new()),
            StdRng::seed_from_u64(0),
            Viewport::default(),
        )
        .unwrap();
        assert_eq!(d.window_title(), "khalid@portfolio: ~");
        assert!(d.windows().is_empty());
    }
}
