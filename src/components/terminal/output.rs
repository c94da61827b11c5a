use leptos::{ev, prelude::*};
use termfolio_core::{LineKind, Span, TerminalLine, format};

use crate::config::BOOT_OK_MARKER;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// CSS class for a system line, picked from its content.
fn system_class(content: &str) -> &'static str {
    if content.contains(BOOT_OK_MARKER) {
        css::textGreen
    } else if content.starts_with("Welcome") {
        css::textYellow
    } else {
        css::textDim
    }
}

/// Line content with links, flags and the leading command word styled.
fn styled(content: String) -> AnyView {
    if format::is_plain(&content) {
        return content.into_any();
    }
    format::spans(&content)
        .into_iter()
        .map(|span| match span {
            Span::Text(text) => text.to_string().into_any(),
            Span::Link(url) => {
                let title = format!("Ctrl+Click to open: {}", url);
                // Plain clicks keep focus in the terminal; Ctrl/Cmd opens a tab
                let on_click = |ev: ev::MouseEvent| {
                    if !(ev.ctrl_key() || ev.meta_key()) {
                        ev.prevent_default();
                    }
                };
                view! {
                    <a
                        href=url.to_string()
                        target="_blank"
                        rel="noopener noreferrer"
                        class=css::link
                        title=title
                        on:click=on_click
                    >
                        {url.to_string()}
                    </a>
                }
                .into_any()
            }
            Span::Flag(flag) => view! { <span class=css::flag>{flag.to_string()}</span> }.into_any(),
            Span::Command(word) => {
                view! { <span class=css::commandWord>{word.to_string()}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn Output(line: TerminalLine) -> impl IntoView {
    match line.kind {
        LineKind::Input => {
            view! {
                <div class=css::command>
                    <span class=format!("{} glow", css::textGreen)>
                        {line.prompt.unwrap_or_default()}
                    </span>
                    " "
                    <span class=css::textFg>{styled(line.content)}</span>
                </div>
            }.into_any()
        }
        LineKind::Output if line.content.is_empty() => {
            view! { <div class=css::lineEmpty></div> }.into_any()
        }
        LineKind::Output => {
            view! {
                <div class=format!("{} {}", css::line, css::textFg)>{styled(line.content)}</div>
            }.into_any()
        }
        LineKind::System => {
            let class = format!("{} {}", css::line, system_class(&line.content));
            view! { <div class=class>{styled(line.content)}</div> }.into_any()
        }
    }
}
