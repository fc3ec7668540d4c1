#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! All events derive `Clone` and `PartialEq` for use in tests and pattern
//! matching. Coordinates are page-relative CSS pixels.

use crate::geometry::{Point, Vec2};

/// Canonical input event.
///
/// This enum represents all inputs a Vitrine widget can receive from its
/// embedding page.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A pointer event.
    Pointer(PointerEvent),

    /// A drag gesture ended.
    Drag(DragEnd),

    /// Viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width: f32,
        /// New viewport height in pixels.
        height: f32,
    },

    /// An autoplay timer fired.
    ///
    /// Applications route this to the same transition as the "next" control,
    /// without resetting the timer (it is already firing on schedule).
    Tick,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the element.
    Enter,
    /// Pointer left the element.
    Leave,
    /// Pointer moved, with its page position.
    Move(Point),
    /// Primary button pressed.
    Press(Point),
    /// Primary button released.
    Release(Point),
    /// Touch contact started.
    TouchStart,
    /// Touch contact ended.
    TouchEnd,
}

/// Final sample of a drag gesture.
///
/// `offset` is the total displacement from the gesture start in pixels;
/// `velocity` is the pointer velocity at release in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragEnd {
    pub offset: Vec2,
    pub velocity: Vec2,
}

impl DragEnd {
    /// Create a drag-end sample.
    #[must_use]
    pub const fn new(offset: Vec2, velocity: Vec2) -> Self {
        Self { offset, velocity }
    }

    /// Create a purely horizontal drag-end sample.
    #[must_use]
    pub const fn horizontal(offset: f32, velocity: f32) -> Self {
        Self {
            offset: Vec2::new(offset, 0.0),
            velocity: Vec2::new(velocity, 0.0),
        }
    }
}
