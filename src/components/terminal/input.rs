//! Terminal input component with tab completion, history navigation and
//! ghost text hints.
//!
//! The input value lives in the session; this component only forwards edit
//! and key events to the desktop and mirrors the session back into the DOM.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use termfolio_core::{Completion, HistoryDirection, Selection, WindowId};
use wasm_bindgen::JsCast;

use super::caret;
use crate::app::DesktopContext;
use crate::config::SHOW_LIVE_SUGGESTIONS;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// DOM id of the input element of window `id`.
pub fn input_element_id(id: WindowId) -> String {
    format!("terminal-input-{}", id)
}

/// Terminal input line for window `id`.
#[component]
pub fn Input(id: WindowId) -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");
    let desktop = ctx.desktop;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Candidates surfaced by Tab, cleared on the next edit
    let tab_candidates = RwSignal::new(Vec::<String>::new());

    let value = Memo::new(move |_| {
        desktop.with(|d| {
            d.window(id)
                .map(|w| w.session().current_input().to_string())
                .unwrap_or_default()
        })
    });
    let prompt = Memo::new(move |_| {
        desktop.with(|d| {
            d.window(id)
                .map(|w| w.session().prompt().to_string())
                .unwrap_or_default()
        })
    });
    let active = Memo::new(move |_| desktop.with(|d| d.accepts_keyboard(id)));
    let hint = Memo::new(move |_| desktop.with(|d| d.hint(id)));
    let suggestions = Memo::new(move |_| {
        let tabbed = tab_candidates.get();
        if !tabbed.is_empty() {
            return tabbed;
        }
        if SHOW_LIVE_SUGGESTIONS {
            desktop.with(|d| d.live_suggestions(id))
        } else {
            Vec::new()
        }
    });

    // Focus follows the active window
    Effect::new(move || {
        if active.get()
            && let Some(input) = input_ref.get()
        {
            let _ = input.focus();
        }
    });

    // Caret moves run after the new value has been rendered
    let caret_after_render = move |chars: Option<usize>| {
        request_animation_frame(move || {
            if let Some(input) = input_ref.get_untracked() {
                let at = chars.unwrap_or_else(|| input.value().chars().count());
                caret::place_caret(&input, at);
            }
        });
    };

    let handle_tab = move || {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        match ctx.complete(id, caret::selection_of(&input)) {
            Completion::Replaced { caret, .. } => {
                tab_candidates.set(Vec::new());
                caret_after_render(Some(caret));
            }
            Completion::Candidates(list) => tab_candidates.set(list),
            Completion::NoOp => {}
        }
    };

    // ArrowRight at the end of the line accepts the ghost text
    let accept_hint = move || -> bool {
        let Some(input) = input_ref.get_untracked() else {
            return false;
        };
        let current = input.value();
        let at_end = caret::selection_of(&input) == Selection::end_of(&current);
        match hint.get_untracked() {
            Some(rest) if at_end && !rest.is_empty() => {
                ctx.set_input(id, &format!("{}{}", current, rest));
                caret_after_render(None);
                true
            }
            _ => false,
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            handle_tab();
        }
        "Enter" => {
            tab_candidates.set(Vec::new());
            ctx.submit(id, &value.get_untracked());
        }
        "ArrowUp" => {
            ev.prevent_default();
            tab_candidates.set(Vec::new());
            ctx.navigate_history(id, HistoryDirection::Up);
            caret_after_render(None);
        }
        "ArrowDown" => {
            ev.prevent_default();
            tab_candidates.set(Vec::new());
            ctx.navigate_history(id, HistoryDirection::Down);
            caret_after_render(None);
        }
        "ArrowRight" => {
            if accept_hint() {
                ev.prevent_default();
            }
        }
        "c" if ev.ctrl_key() => {
            tab_candidates.set(Vec::new());
            ctx.set_input(id, "");
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            tab_candidates.set(Vec::new());
            ctx.submit(id, "clear");
        }
        "Escape" => tab_candidates.set(Vec::new()),
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        tab_candidates.set(Vec::new());
        ctx.set_input(id, &input.value());
    };

    let suggestions_view = move || {
        let list = suggestions.get();
        (!list.is_empty()).then(|| {
            view! {
                <div class=css::suggestions>
                    {list
                        .into_iter()
                        .map(|s| view! { <span class=css::suggestion>{s}</span> })
                        .collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=format!("{} glow", css::prompt)>{prompt}</span>
                <div class=css::field>
                    // Ghost text overlay (shows input value + hint)
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{value}</span>
                        <span class=css::ghostHint>
                            {move || hint.get().unwrap_or_default()}
                        </span>
                    </div>
                    <input
                        node_ref=input_ref
                        id=input_element_id(id)
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=value
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>

            {suggestions_view}
        </div>
    }
}
