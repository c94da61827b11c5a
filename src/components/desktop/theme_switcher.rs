//! Theme picker in the top-right corner.
//!
//! Goes through the same theme store as the `theme` command, so the reload
//! subscriber applies the pick.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::DesktopContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/desktop/theme_switcher.module.css");

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ctx = use_context::<DesktopContext>().expect("DesktopContext must be provided at root");
    let (menu_open, set_menu_open) = signal(false);

    let themes = Memo::new(move |_| {
        ctx.desktop.with(|d| {
            d.themes()
                .catalog()
                .iter()
                .map(|t| (t.key.clone(), t.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let current = Memo::new(move |_| ctx.desktop.with(|d| d.themes().current_key().to_string()));

    let items = move || {
        themes
            .get()
            .into_iter()
            .map(move |(key, name)| {
                let is_current = {
                    let key = key.clone();
                    move || current.get() == key
                };
                let class = {
                    let is_current = is_current.clone();
                    move || {
                        if is_current() {
                            format!("{} {}", css::item, css::selected)
                        } else {
                            css::item.to_string()
                        }
                    }
                };
                let pick = move |_: ev::MouseEvent| {
                    set_menu_open.set(false);
                    ctx.set_theme(&key);
                };
                view! {
                    <button class=class on:click=pick>
                        <span>{name}</span>
                        <Show when=is_current>
                            <Icon icon=ic::CHECK />
                        </Show>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class=css::switcher>
            <button
                class=css::toggle
                title="Switch theme"
                on:click=move |_| set_menu_open.update(|v| *v = !*v)
            >
                <Icon icon=ic::PALETTE />
                <span class=css::label>"Theme"</span>
            </button>
            <Show when=move || menu_open.get()>
                <div class=css::scrim on:click=move |_| set_menu_open.set(false)></div>
                <div class=css::menu>
                    <div class=css::menuHeading>"Select Theme"</div>
                    <div class=css::menuList>{items}</div>
                </div>
            </Show>
        </div>
    }
}
