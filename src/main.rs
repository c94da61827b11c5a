mod app;
mod components;
mod config;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{LOG_LEVEL, MOUNT_ELEMENT_ID};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = utils::logger::init(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", e).into());
    }

    let root = document()
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
