//! Application launcher overlay.
//!
//! A searchable grid of portfolio shortcuts. Picking one runs its command in
//! the primary terminal and closes the overlay.

use icondata::Icon as IconData;
use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use termfolio_core::LauncherEntry;
use termfolio_core::launcher;

use crate::app::DesktopContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/desktop/launcher.module.css");

fn entry_icon(entry: &LauncherEntry) -> IconData {
    match entry.command {
        "about" => ic::USER,
        "projects" => ic::FOLDER,
        "resume" => ic::FILE_TEXT,
        "contact" => ic::MAIL,
        "help" => ic::LIST,
        _ => ic::TERMINAL,
    }
}

/// Launcher overlay, shown while `open` is set.
#[component]
pub fn AppLauncher(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");
    let query = RwSignal::new(String::new());
    let search_ref = NodeRef::<leptos::html::Input>::new();

    let close = move || {
        open.set(false);
        query.set(String::new());
    };

    // Search box takes focus whenever the overlay opens
    Effect::new(move || {
        if open.get()
            && let Some(input) = search_ref.get()
        {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => close(),
            "Enter" => {
                if let Some(first) = launcher::search(&query.get_untracked()).first() {
                    ctx.launch(first.command);
                    close();
                }
            }
            _ => {}
        }
    };

    let grid = move || {
        let entries = launcher::search(&query.get());
        if entries.is_empty() {
            return view! { <div class=css::empty>"No applications found"</div> }.into_any();
        }
        view! {
            <div class=css::grid>
                {entries
                    .into_iter()
                    .map(move |entry| {
                        let command = entry.command;
                        view! {
                            <button
                                class=css::entry
                                title=command
                                on:click=move |_| {
                                    ctx.launch(command);
                                    close();
                                }
                            >
                                <span class=css::entryIcon><Icon icon=entry_icon(entry) /></span>
                                <span class=css::entryName>{entry.name}</span>
                                <span class=css::entryCategory>{entry.category}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <Show when=move || open.get()>
            <div class=css::backdrop on:click=move |_| close()>
                <div class=css::dialog on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                    <div class=css::header>
                        <h2 class=css::heading>"Application Launcher"</h2>
                        <button class=css::closeButton title="Close launcher" on:click=move |_| close()>
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    <div class=css::searchRow>
                        <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                        <input
                            node_ref=search_ref
                            type="text"
                            class=css::search
                            placeholder="Search applications..."
                            autocomplete="off"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                            on:keydown=handle_keydown
                        />
                    </div>
                    {grid}
                </div>
            </div>
        </Show>
    }
}
