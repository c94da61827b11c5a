//! Terminal view component.
//!
//! Shows the boot animation while the session boots, then the line log and
//! the command input.

use leptos::prelude::*;
use termfolio_core::{TerminalLine, WindowId};

use super::input::input_element_id;
use super::{Boot, Input, Output};
use crate::app::DesktopContext;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal(id: WindowId) -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");
    let desktop = ctx.desktop;
    let output_ref = NodeRef::<leptos::html::Div>::new();

    let booting = Memo::new(move |_| {
        desktop.with(|d| d.window(id).is_some_and(|w| w.session().is_booting()))
    });
    let lines = Memo::new(move |_| {
        desktop.with(|d| {
            d.window(id)
                .map(|w| w.session().lines().cloned().collect::<Vec<TerminalLine>>())
                .unwrap_or_default()
        })
    });

    // Auto-scroll output to bottom when the log changes
    Effect::new(move || {
        lines.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let handle_click = move |_| {
        dom::focus_element(&format!("#{}", input_element_id(id)));
    };

    view! {
        <Show
            when=move || !booting.get()
            fallback=move || view! { <Boot id=id /> }
        >
            <div class=css::container on:click=handle_click>
                <div node_ref=output_ref class=css::output>
                    <For
                        each=move || lines.get()
                        key=|line| line.id.clone()
                        children=|line| view! { <Output line=line /> }
                    />
                    <Input id=id />
                </div>
            </div>
        </Show>
    }
}
