//! Boot sequence animation.
//!
//! Types out the boot messages of one window, then hands the session over to
//! the prompt through [`DesktopContext::finish_boot`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use termfolio_core::WindowId;
use termfolio_core::config::BOOT_MESSAGES;

use crate::app::DesktopContext;
use crate::config::{BOOT_OK_MARKER, boot_delays};

stylance::import_crate_style!(css, "src/components/terminal/boot.module.css");

/// Total number of characters the animation types.
fn total_chars() -> usize {
    BOOT_MESSAGES.iter().map(|m| m.chars().count()).sum::<usize>().max(1)
}

/// Per-character delay and trailing pause for a message.
fn timing(message: &str) -> (u32, u32) {
    if message.contains(BOOT_OK_MARKER) {
        (boot_delays::OK_CHAR, boot_delays::OK_PAUSE)
    } else {
        (boot_delays::CHAR, boot_delays::PAUSE)
    }
}

/// Run the boot animation for window `id`.
///
/// Stops early when the component is torn down (its signals are disposed),
/// e.g. because the window was closed mid-boot.
fn run(ctx: DesktopContext, id: WindowId, typed: RwSignal<Vec<String>>, typing: RwSignal<bool>) {
    spawn_local(async move {
        for message in BOOT_MESSAGES {
            if typed.try_update(|t| t.push(String::new())).is_none() {
                return;
            }
            if message.is_empty() {
                TimeoutFuture::new(boot_delays::EMPTY_LINE).await;
                continue;
            }

            let (char_delay, pause) = timing(message);
            let _ = typing.try_set(true);
            for c in message.chars() {
                TimeoutFuture::new(char_delay).await;
                let pushed = typed.try_update(|t| {
                    if let Some(last) = t.last_mut() {
                        last.push(c);
                    }
                });
                if pushed.is_none() {
                    return;
                }
            }
            let _ = typing.try_set(false);
            TimeoutFuture::new(pause).await;
        }

        TimeoutFuture::new(boot_delays::COMPLETE).await;
        if typed.try_with_untracked(|_| ()).is_some() {
            ctx.finish_boot(id);
        }
    });
}

#[component]
pub fn Boot(id: WindowId) -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");

    let typed = RwSignal::new(Vec::<String>::new());
    let typing = RwSignal::new(false);

    // Boot sequence runs once
    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            run(ctx, id, typed, typing);
        }
    });

    let percent = Memo::new(move |_| {
        let done: usize = typed.with(|t| t.iter().map(|m| m.chars().count()).sum());
        (done * 100 / total_chars()).min(100)
    });

    let line_class = |message: &str| {
        if message.contains(BOOT_OK_MARKER) {
            css::ok
        } else if message.starts_with("System ready") {
            css::ready
        } else {
            css::message
        }
    };

    view! {
        <div class=css::boot>
            <div class=css::messages>
                {move || {
                    let lines = typed.get();
                    let last = lines.len().saturating_sub(1);
                    let cursor = typing.get();
                    lines
                        .into_iter()
                        .enumerate()
                        .map(|(i, message)| {
                            let class = if cursor && i == last {
                                format!("{} {}", line_class(&message), css::typing)
                            } else {
                                line_class(&message).to_string()
                            };
                            view! { <div class=class>{message}</div> }
                        })
                        .collect_view()
                }}
            </div>

            <div class=css::progress>
                <div class=css::progressLabel>{move || format!("Loading... {}%", percent.get())}</div>
                <div class=css::progressTrack>
                    <div
                        class=css::progressBar
                        style:width=move || format!("{}%", percent.get())
                    ></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_lines_type_faster() {
        let (ok_char, ok_pause) = timing("[ OK ] Portfolio data loaded");
        let (char, pause) = timing("Loading kernel modules...");
        assert!(ok_char < char);
        assert!(ok_pause < pause);
    }

    #[test]
    fn test_total_chars_counts_every_message() {
        let expected: usize = BOOT_MESSAGES.iter().map(|m| m.len()).sum();
        assert_eq!(total_chars(), expected);
    }
}
