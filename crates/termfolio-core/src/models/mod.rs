//! Data models shared across the core.
//!
//! Contains domain types for:
//! - [`Portfolio`], [`Project`], [`Contact`], [`Resume`] - The static dataset
//! - [`TerminalLine`], [`LineKind`] - Session log entries
//! - [`Point`], [`Size`], [`Rect`], [`Viewport`] - Window geometry

mod geometry;
mod portfolio;
mod terminal;

pub use geometry::{Point, Rect, Size, Viewport};
pub use portfolio::{Contact, Identity, Portfolio, Project, Resume};
pub use terminal::{LineKind, TerminalLine};

#[cfg(test)]
pub(crate) use portfolio::fixtures;
