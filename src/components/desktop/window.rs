//! Window chrome around a terminal.
//!
//! Title bar with drag and double-click maximize, the window controls, and
//! eight resize handles. Geometry and state come from the desktop; this
//! component only renders them and forwards pointer input.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use termfolio_core::{Point, Rect, ResizeEdge, WindowId, WindowStateKind};

use crate::app::DesktopContext;
use crate::components::icons as ic;
use crate::components::terminal::Terminal;

stylance::import_crate_style!(css, "src/components/desktop/window.module.css");

/// Everything the chrome needs from the desktop for one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Chrome {
    bounds: Rect,
    state: WindowStateKind,
    hidden: bool,
    movable: bool,
    active: bool,
    z_index: usize,
}

fn pointer(ev: &ev::MouseEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

fn window_style(chrome: &Chrome) -> String {
    let b = chrome.bounds;
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        b.left(),
        b.top(),
        b.width(),
        b.height(),
        chrome.z_index + 1,
    )
}

fn window_class(chrome: &Chrome) -> String {
    let mut class = css::window.to_string();
    let extra = [
        (chrome.active, css::active),
        (chrome.state == WindowStateKind::Maximized, css::maximized),
        (chrome.state == WindowStateKind::Minimized, css::minimizing),
        (chrome.state == WindowStateKind::Closing, css::closing),
        (chrome.hidden, css::hidden),
        (!chrome.movable, css::locked),
        (
            matches!(chrome.state, WindowStateKind::Dragging | WindowStateKind::Resizing(_)),
            css::interacting,
        ),
    ];
    for (on, name) in extra {
        if on {
            class.push(' ');
            class.push_str(name);
        }
    }
    class
}

/// The eight edge and corner grips. Each carries its edge in `data-edge`.
fn resize_handles(ctx: DesktopContext, id: WindowId) -> impl IntoView {
    ResizeEdge::ALL
        .into_iter()
        .map(|edge| {
            let on_down = move |ev: ev::MouseEvent| {
                if ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                ev.stop_propagation();
                ctx.focus(id);
                let at = pointer(&ev);
                ctx.desktop.maybe_update(|d| d.begin_resize(id, edge, at));
            };
            view! { <div class=css::handle data-edge=edge.as_str() on:mousedown=on_down></div> }
        })
        .collect_view()
}

#[component]
pub fn TerminalWindowView(id: WindowId) -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");
    let desktop = ctx.desktop;

    let chrome = Memo::new(move |_| {
        desktop.with(|d| {
            let viewport = d.viewport();
            let z_index = d.windows().iter().position(|w| w.id() == id)?;
            let window = d.window(id)?;
            let frame = window.frame();
            Some(Chrome {
                bounds: frame.layout(viewport),
                state: frame.state(),
                hidden: frame.is_hidden(),
                movable: frame.can_move(viewport),
                active: d.active_id() == Some(id),
                z_index,
            })
        })
    });
    let title = Memo::new(move |_| desktop.with(|d| d.window_title()));
    let maximized = Memo::new(move |_| {
        chrome.with(|c| c.is_some_and(|c| c.state == WindowStateKind::Maximized))
    });

    let handle_activate = move |_: ev::MouseEvent| ctx.focus(id);

    let handle_title_down = move |ev: ev::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ctx.focus(id);
        let at = pointer(&ev);
        desktop.maybe_update(|d| d.begin_drag(id, at));
    };

    let handle_title_dblclick = move |_: ev::MouseEvent| ctx.toggle_maximize(id);

    // Controls must not start a drag
    let stop = |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div
            class=move || chrome.get().map(|c| window_class(&c)).unwrap_or_default()
            style=move || chrome.get().map(|c| window_style(&c)).unwrap_or_default()
            on:mousedown=handle_activate
        >
            <div
                class=css::titlebar
                on:mousedown=handle_title_down
                on:dblclick=handle_title_dblclick
            >
                <div class=css::controls on:mousedown=stop>
                    <button
                        class=css::close
                        title="Close"
                        on:click=move |_| ctx.close(id)
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                    <button
                        class=css::control
                        title="Minimize"
                        on:click=move |_| ctx.toggle_minimize(id)
                    >
                        <Icon icon=ic::MINIMIZE />
                    </button>
                    <button
                        class=css::control
                        title=move || if maximized.get() { "Restore" } else { "Maximize" }
                        on:click=move |_| ctx.toggle_maximize(id)
                    >
                        {move || if maximized.get() {
                            view! { <Icon icon=ic::RESTORE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MAXIMIZE /> }.into_any()
                        }}
                    </button>
                </div>
                <span class=css::title>{title}</span>
                <button
                    class=css::control
                    title="New Terminal"
                    on:mousedown=stop
                    on:click=move |_| ctx.open_window()
                >
                    <Icon icon=ic::PLUS />
                </button>
            </div>

            <div class=css::body>
                <Terminal id=id />
            </div>

            {resize_handles(ctx, id)}
        </div>
    }
}
