//! Desktop surface.
//!
//! Hosts the desktop icon, every terminal window, the taskbar, the theme
//! picker and the application launcher.

use leptos::prelude::*;
use leptos_icons::Icon;
use termfolio_core::WindowId;

use super::{AppLauncher, Taskbar, TerminalWindowView, ThemeSwitcher};
use crate::app::DesktopContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/desktop/screen.module.css");

#[component]
pub fn DesktopView() -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");
    let launcher_open = RwSignal::new(false);

    // Windows are rendered in id order so raising one never moves DOM nodes;
    // stacking comes from each window's z-index.
    let window_ids = Memo::new(move |_| {
        ctx.desktop.with(|d| {
            let mut ids: Vec<WindowId> = d.windows().iter().map(|w| w.id()).collect();
            ids.sort();
            ids
        })
    });

    view! {
        <div class=css::screen>
            <button
                class=css::desktopIcon
                title="New Terminal"
                on:dblclick=move |_| ctx.open_window()
            >
                <span class=css::iconGlyph><Icon icon=ic::TERMINAL /></span>
                <span class=css::iconLabel>"Terminal"</span>
            </button>

            <For
                each=move || window_ids.get()
                key=|id| *id
                children=|id| view! { <TerminalWindowView id=id /> }
            />

            <ThemeSwitcher />
            <Taskbar launcher_open=launcher_open />
            <AppLauncher open=launcher_open />
        </div>
    }
}
