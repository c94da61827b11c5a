//! Root application module.
//!
//! Contains the main App component, the [`DesktopContext`] definition and the
//! application-level effects that feed the desktop model: the timer tick, the
//! viewport size, global pointer tracking and the theme palette.

use gloo_timers::callback::{Interval, Timeout};
use leptos::{ev, prelude::*};
use rand::SeedableRng;
use rand::rngs::StdRng;
use termfolio_core::{Completion, Desktop, HistoryDirection, Point, Selection, Theme, WindowId};

use crate::components::DesktopView;
use crate::config::{
    PALETTE_VAR_PREFIX, SHOW_TAB_CANDIDATES, THEME_RELOAD_DELAY_MS, TICK_INTERVAL_MS,
};
use crate::utils::{LocalStorage, dom};

// ============================================================================
// DesktopContext
// ============================================================================

/// Application-wide reactive context.
///
/// The whole desktop model sits in one signal. Components read it with
/// `with` and mutate it through the helpers below, which stamp the current
/// time where the model needs one.
#[derive(Clone, Copy)]
pub struct DesktopContext {
    pub desktop: RwSignal<Desktop>,
}

impl DesktopContext {
    /// Build the desktop from the bundled data and the persisted theme.
    ///
    /// Panics if the bundled data does not parse; the core test suite
    /// guarantees it does.
    pub fn new() -> Self {
        let rng = StdRng::from_entropy();
        let mut desktop = Desktop::bundled(Box::new(LocalStorage), rng, dom::viewport())
            .expect("bundled portfolio and theme data must parse");

        desktop.themes_mut().subscribe(schedule_reload);
        desktop.open_window();

        Self {
            desktop: RwSignal::new(desktop),
        }
    }

    /// Open a new terminal window on top of the stack.
    pub fn open_window(&self) {
        self.desktop.update(|d| {
            d.open_window();
        });
    }

    /// Raise `id`. Notifies only when it was not already on top.
    pub fn focus(&self, id: WindowId) {
        self.desktop.maybe_update(|d| d.focus(id));
    }

    pub fn toggle_minimize(&self, id: WindowId) {
        self.desktop.update(|d| d.toggle_minimize(id, dom::now()));
    }

    pub fn toggle_maximize(&self, id: WindowId) {
        self.desktop.update(|d| {
            d.toggle_maximize(id);
        });
    }

    pub fn close(&self, id: WindowId) {
        self.desktop.update(|d| d.close(id, dom::now()));
    }

    pub fn restore_from_taskbar(&self, id: WindowId) {
        self.desktop.update(|d| d.restore_from_taskbar(id));
    }

    // ------------------------------------------------------------------------
    // Session Routing
    // ------------------------------------------------------------------------

    pub fn submit(&self, id: WindowId, line: &str) {
        self.desktop.update(|d| {
            if let Some(outcome) = d.submit(id, line, dom::now()) {
                log::debug!("terminal {}: submitted {:?} ({:?})", id, line, outcome);
            }
        });
    }

    pub fn set_input(&self, id: WindowId, value: &str) {
        self.desktop.update(|d| d.set_input(id, value));
    }

    pub fn navigate_history(&self, id: WindowId, direction: HistoryDirection) {
        self.desktop.update(|d| d.navigate_history(id, direction));
    }

    /// Tab completion; the input has already been rewritten when the result
    /// is [`Completion::Replaced`].
    pub fn complete(&self, id: WindowId, selection: Selection) -> Completion {
        let mut completion = Completion::NoOp;
        self.desktop.maybe_update(|d| {
            completion = d.complete(id, selection, SHOW_TAB_CANDIDATES);
            matches!(completion, Completion::Replaced { .. })
        });
        completion
    }

    /// Run a launcher command in the primary terminal.
    pub fn launch(&self, command: &str) {
        self.desktop.update(|d| {
            if d.launch(command, dom::now()).is_none() {
                log::warn!("launcher could not run {:?}", command);
            }
        });
    }

    /// Theme picker entry point; the reload subscriber applies the result.
    pub fn set_theme(&self, key: &str) {
        self.desktop.update(|d| {
            if let Err(e) = d.themes_mut().set(key) {
                log::warn!("theme picker: {}", e);
            }
        });
    }

    pub fn finish_boot(&self, id: WindowId) {
        self.desktop.update(|d| d.finish_boot(id, dom::now()));
    }

    /// Run every timer that is due. Notifies only when something fired.
    fn tick(&self) {
        let now = dom::now();
        let due = self
            .desktop
            .with_untracked(|d| d.next_deadline().is_some_and(|at| at <= now));
        if due {
            self.desktop.update(|d| {
                let fired = d.tick(now);
                log::trace!("tick at {}: {} task(s)", now, fired);
            });
        }
    }
}

impl Default for DesktopContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Theme subscriber: the new palette is applied by reloading the page once
/// the switch message has been shown.
fn schedule_reload(theme: &Theme) {
    log::info!("theme switched to '{}', reloading", theme.key);
    Timeout::new(THEME_RELOAD_DELAY_MS, dom::reload).forget();
}

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Write the current palette to CSS custom properties on the document root.
fn setup_palette_effect(ctx: DesktopContext) {
    Effect::new(move || {
        ctx.desktop.with(|d| {
            for (name, color) in &d.themes().current().palette {
                dom::set_root_property(&format!("{}{}", PALETTE_VAR_PREFIX, name), color);
            }
        });
    });
}

/// Drive the desktop's timer queue from a browser interval.
fn setup_tick_interval(ctx: DesktopContext) {
    Interval::new(TICK_INTERVAL_MS, move || ctx.tick()).forget();
}

/// Track viewport size and pointer movement at the window level so drags and
/// resizes keep working when the pointer leaves the window chrome.
fn setup_window_listeners(ctx: DesktopContext) {
    let _ = window_event_listener(ev::resize, move |_| {
        let viewport = dom::viewport();
        ctx.desktop.maybe_update(|d| {
            let changed = d.viewport() != viewport;
            if changed {
                d.set_viewport(viewport);
            }
            changed
        });
    });

    let _ = window_event_listener(ev::mousemove, move |ev| {
        let pointer = Point::new(ev.client_x(), ev.client_y());
        ctx.desktop.maybe_update(|d| d.pointer_move(pointer));
    });

    let _ = window_event_listener(ev::mouseup, move |_| {
        let interacting = ctx
            .desktop
            .with_untracked(|d| d.windows().iter().any(|w| w.frame().is_interacting()));
        if interacting {
            ctx.desktop.update(|d| d.pointer_up());
        }
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global DesktopContext
/// - Installs the tick, viewport, pointer and palette effects
/// - Wraps the desktop in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = DesktopContext::new();
    provide_context(ctx);

    setup_palette_effect(ctx);
    setup_tick_interval(ctx);
    setup_window_listeners(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #2c001e;
                    color: #ffffff;
                    font-family: 'Ubuntu Mono', monospace;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ef2929; margin-bottom: 1rem;">
                            "Kernel panic"
                        </h1>
                        <p style="color: #d3d7cf; margin-bottom: 2rem;">
                            "The terminal crashed. Reload the page to boot again."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #ef2929;
                            font-size: 0.9rem;
                            margin-bottom: 1rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #e95420;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-family: inherit;
                                font-size: 1rem;
                            "
                        >
                            "Reboot"
                        </button>
                    </div>
                </div>
            }
        >
            <DesktopView />
        </ErrorBoundary>
    }
}
