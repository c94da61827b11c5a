//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - window, storage and style helpers
//! - [`logger`] - `log` records forwarded to the browser console
//! - [`LocalStorage`] - `localStorage` theme persistence

pub mod dom;
pub mod logger;
mod storage;

pub use storage::LocalStorage;
