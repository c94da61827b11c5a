//! Bottom taskbar with a hover panel of terminal previews.

use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use termfolio_core::Preview;

use crate::app::DesktopContext;
use crate::components::icons as ic;
use crate::config::{PREVIEW_HIDE_DELAY_MS, PREVIEW_MAX_CHARS};

stylance::import_crate_style!(css, "src/components/desktop/taskbar.module.css");

/// Preview text of a window, cut to its trailing characters.
fn preview_text(preview: &Preview) -> Option<String> {
    if preview.lines.is_empty() {
        return None;
    }
    let text = preview.lines.join("\n");
    let skip = text.chars().count().saturating_sub(PREVIEW_MAX_CHARS);
    Some(text.chars().skip(skip).collect())
}

#[component]
fn PreviewCard(preview: Preview, on_pick: Callback<()>) -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");
    let id = preview.id;
    let (status_class, status_title) = if preview.minimized {
        (css::statusMinimized, "Minimized")
    } else {
        (css::statusActive, "Active")
    };

    let handle_pick = move |_: ev::MouseEvent| {
        ctx.restore_from_taskbar(id);
        on_pick.run(());
    };
    let handle_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close(id);
    };

    view! {
        <div class=css::card title=preview.title.clone() on:click=handle_pick>
            <div class=css::cardHeader>
                <span class=css::cardTitle>{preview.title.clone()}</span>
                <span class=status_class title=status_title></span>
            </div>
            <button class=css::cardClose title="Close terminal" on:click=handle_close>
                <Icon icon=ic::CLOSE />
            </button>
            <div class=css::cardBody>
                {match preview_text(&preview) {
                    Some(text) => view! { <pre class=css::cardText>{text}</pre> }.into_any(),
                    None => view! { <div class=css::cardEmpty>"(no recent output)"</div> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Taskbar strip at the bottom of the desktop.
///
/// The grid button toggles the launcher through `launcher_open`.
#[component]
pub fn Taskbar(launcher_open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");
    let previews = Memo::new(move |_| ctx.desktop.with(|d| d.previews()));
    let show_previews = RwSignal::new(false);
    let hide_timer = StoredValue::new_local(None::<Timeout>);

    let cancel_hide = move || hide_timer.update_value(|t| drop(t.take()));
    let handle_enter = move |_: ev::MouseEvent| {
        cancel_hide();
        show_previews.set(true);
    };
    let handle_leave = move |_: ev::MouseEvent| {
        let timeout = Timeout::new(PREVIEW_HIDE_DELAY_MS, move || show_previews.set(false));
        hide_timer.set_value(Some(timeout));
    };

    // A single terminal toggles directly; several open the panel
    let handle_button = move |_: ev::MouseEvent| {
        let list = previews.get_untracked();
        match list.as_slice() {
            [only] if only.minimized => {
                ctx.restore_from_taskbar(only.id);
                show_previews.set(false);
            }
            [only] => {
                ctx.toggle_minimize(only.id);
                show_previews.set(false);
            }
            _ => show_previews.update(|s| *s = !*s),
        }
    };

    let on_pick = Callback::new(move |()| show_previews.set(false));

    view! {
        <footer class=css::taskbar>
            <button
                class=css::dockButton
                title="Applications"
                on:click=move |_| launcher_open.update(|open| *open = !*open)
            >
                <Icon icon=ic::GRID />
            </button>
            <div class=css::dock on:mouseenter=handle_enter on:mouseleave=handle_leave>
                <Show when=move || previews.with(|p| !p.is_empty())>
                    <button class=css::dockButton title="Terminals" on:click=handle_button>
                        <Icon icon=ic::TERMINAL />
                        <span class=css::count>{move || previews.with(|p| p.len())}</span>
                    </button>
                </Show>

                <Show when=move || show_previews.get() && previews.with(|p| !p.is_empty())>
                    <div class=css::panel>
                        <For
                            each=move || previews.get()
                            key=|p| (p.id, p.minimized, p.lines.clone())
                            children=move |preview| view! {
                                <PreviewCard preview=preview on_pick=on_pick />
                            }
                        />
                    </div>
                </Show>
            </div>
        </footer>
    }
}
