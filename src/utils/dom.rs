//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use termfolio_core::{Millis, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Current wall-clock time in milliseconds since the epoch.
#[inline]
pub fn now() -> Millis {
    js_sys::Date::now() as Millis
}

/// Current inner size of the browser window.
///
/// Falls back to a zero-sized viewport outside a browser, which the layout
/// treats as compact.
pub fn viewport() -> Viewport {
    let Some(window) = window() else {
        return Viewport::new(0, 0);
    };
    let dim = |v: Result<wasm_bindgen::JsValue, _>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as i32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Set a CSS custom property on the document root.
pub fn set_root_property(name: &str, value: &str) {
    if let Some(document) = window().and_then(|w| w.document())
        && let Some(root) = document.document_element()
        && let Ok(root) = root.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = root.style().set_property(name, value);
    }
}

/// Reload the page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
