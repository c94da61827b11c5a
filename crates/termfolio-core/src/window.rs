//! Per-window geometry and state machine.
//!
//! A [`WindowFrame`] stores the window's own box and flags. What is actually
//! drawn comes from [`WindowFrame::layout`], which overlays the maximized
//! and compact layouts on top of the stored box without ever overwriting it,
//! so leaving either mode returns to the exact previous geometry.

use std::cmp::{max, min};

use crate::config::window::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X, DEFAULT_Y, TASKBAR_HEIGHT};
use crate::models::{Point, Rect, Size, Viewport};

// ============================================================================
// Resize Edges
// ============================================================================

/// Edge or corner grabbed for a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::NE,
        Self::NW,
        Self::SE,
        Self::SW,
    ];

    fn north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    fn south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    fn east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    fn west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    /// Lower-case direction tag, e.g. `"ne"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }
}

// ============================================================================
// State
// ============================================================================

/// Observable state of a window, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowStateKind {
    Closing,
    Minimized,
    Maximized,
    Resizing(ResizeEdge),
    Dragging,
    Normal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Interaction {
    Idle,
    /// Pointer offset from the window origin at press time.
    Dragging { offset: Point },
    Resizing {
        edge: ResizeEdge,
        start: Point,
        start_box: Rect,
    },
}

/// Smallest box a resize may produce in `viewport`.
pub fn min_size(viewport: Viewport) -> Size {
    Size::new(
        min(400, max(280, viewport.width - 32)),
        min(300, max(220, viewport.height - 120)),
    )
}

/// Centered box forced on small viewports.
pub fn compact_layout(viewport: Viewport) -> Rect {
    let (vw, vh) = (viewport.width, viewport.height);
    let width = max(300, min((vw * 92).div_euclid(100), vw - 16));
    let height = max(240, min((vh * 7).div_euclid(10), vh - 96));

    let usable = vh - TASKBAR_HEIGHT;
    let centered = (usable - height).div_euclid(2);
    let top = max(8, min(centered, usable - height - 8));
    let left = max(8, (vw - width).div_euclid(2));

    Rect::new(left, top, width, height)
}

/// Box covering the viewport above the taskbar.
pub fn maximized_layout(viewport: Viewport) -> Rect {
    Rect::new(0, 0, viewport.width, viewport.height - TASKBAR_HEIGHT)
}

// ============================================================================
// Window Frame
// ============================================================================

/// Position, size and chrome state of one window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowFrame {
    bounds: Rect,
    maximized: bool,
    minimized: bool,
    /// The minimize fade has finished.
    hidden: bool,
    closing: bool,
    interaction: Interaction,
}

impl Default for WindowFrame {
    fn default() -> Self {
        Self::new(Point::new(DEFAULT_X, DEFAULT_Y))
    }
}

impl WindowFrame {
    /// A normal window of default size at `origin`.
    pub fn new(origin: Point) -> Self {
        Self {
            bounds: Rect {
                origin,
                size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            },
            maximized: false,
            minimized: false,
            hidden: false,
            closing: false,
            interaction: Interaction::Idle,
        }
    }

    /// The stored (normal-mode) box.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Box to draw in `viewport`.
    pub fn layout(&self, viewport: Viewport) -> Rect {
        if self.maximized {
            maximized_layout(viewport)
        } else if viewport.is_compact() {
            compact_layout(viewport)
        } else {
            self.bounds
        }
    }

    pub fn state(&self) -> WindowStateKind {
        if self.closing {
            WindowStateKind::Closing
        } else if self.minimized {
            WindowStateKind::Minimized
        } else if self.maximized {
            WindowStateKind::Maximized
        } else {
            match self.interaction {
                Interaction::Resizing { edge, .. } => WindowStateKind::Resizing(edge),
                Interaction::Dragging { .. } => WindowStateKind::Dragging,
                Interaction::Idle => WindowStateKind::Normal,
            }
        }
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// A drag or resize is in progress.
    pub fn is_interacting(&self) -> bool {
        self.interaction != Interaction::Idle
    }

    /// Whether drag and resize are allowed in `viewport`.
    pub fn can_move(&self, viewport: Viewport) -> bool {
        !self.maximized && !self.minimized && !self.closing && !viewport.is_compact()
    }

    /// Start dragging from a title-bar press at `pointer`.
    pub fn begin_drag(&mut self, pointer: Point, viewport: Viewport) -> bool {
        if !self.can_move(viewport) {
            return false;
        }
        self.interaction = Interaction::Dragging {
            offset: Point::new(pointer.x - self.bounds.left(), pointer.y - self.bounds.top()),
        };
        true
    }

    /// Start resizing from a press on `edge` at `pointer`.
    pub fn begin_resize(&mut self, edge: ResizeEdge, pointer: Point, viewport: Viewport) -> bool {
        if !self.can_move(viewport) {
            return false;
        }
        self.interaction = Interaction::Resizing {
            edge,
            start: pointer,
            start_box: self.bounds,
        };
        true
    }

    /// Apply a pointer move to the interaction in progress.
    ///
    /// Returns whether the stored box changed. Moves with no interaction in
    /// progress, or while moving is not allowed, are ignored.
    pub fn pointer_move(&mut self, pointer: Point, viewport: Viewport) -> bool {
        if !self.can_move(viewport) {
            return false;
        }

        let next = match self.interaction {
            Interaction::Idle => return false,
            Interaction::Dragging { offset } => Rect {
                origin: Point::new(pointer.x - offset.x, pointer.y - offset.y),
                size: self.bounds.size,
            },
            Interaction::Resizing {
                edge,
                start,
                start_box,
            } => resized(start_box, edge, pointer.x - start.x, pointer.y - start.y, min_size(viewport)),
        };

        let changed = next != self.bounds;
        self.bounds = next;
        changed
    }

    /// End any drag or resize.
    pub fn pointer_up(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Flip the maximized flag, returning the new value.
    pub fn toggle_maximize(&mut self) -> bool {
        self.interaction = Interaction::Idle;
        self.maximized = !self.maximized;
        self.maximized
    }

    /// Start minimizing; the owner calls [`hide`](Self::hide) once the fade
    /// is over.
    pub fn minimize(&mut self) {
        self.interaction = Interaction::Idle;
        self.minimized = true;
    }

    /// Finish the minimize fade. Ignored if restored in the meantime.
    pub fn hide(&mut self) {
        if self.minimized {
            self.hidden = true;
        }
    }

    /// Undo a minimize, visible immediately.
    pub fn restore(&mut self) {
        self.minimized = false;
        self.hidden = false;
    }

    /// Enter the closing state. Returns `false` if already closing.
    pub fn begin_close(&mut self) -> bool {
        if self.closing {
            return false;
        }
        self.interaction = Interaction::Idle;
        self.closing = true;
        true
    }
}

/// `start` resized by the pointer delta `(dx, dy)` on `edge`.
///
/// North and west edges move the origin so the opposite edge stays put.
fn resized(start: Rect, edge: ResizeEdge, dx: i32, dy: i32, min: Size) -> Rect {
    let mut left = start.left();
    let mut top = start.top();
    let mut width = start.width();
    let mut height = start.height();

    if edge.east() {
        width = min.width.max(start.width() + dx);
    }
    if edge.west() {
        width = min.width.max(start.width() - dx);
        left = start.left() + (start.width() - width);
    }
    if edge.south() {
        height = min.height.max(start.height() + dy);
    }
    if edge.north() {
        height = min.height.max(start.height() - dy);
        top = start.top() + (start.height() - height);
    }

    Rect::new(left, top, width, height)
}

// ============================================================================
// Tests
// ============================================================================
