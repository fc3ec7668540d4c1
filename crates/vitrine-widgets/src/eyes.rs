#![forbid(unsafe_code)]

//! Gaze-tracking eyes.
//!
//! Pupils inside fixed sockets follow the pointer, with displacement
//! clamped to a maximum travel radius. The displacement math is total:
//! with no pointer, or the pointer exactly on a socket center, the pupil
//! rests at the center instead of dividing by a zero distance.

use vitrine_core::event::PointerEvent;
use vitrine_core::geometry::{Point, Vec2};

/// Default maximum pupil travel in pixels.
const DEFAULT_MAX_TRAVEL: f32 = 8.0;

/// The eyes widget: socket centers in container-relative coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Eyes {
    sockets: Vec<Point>,
    max_travel: f32,
}

impl Eyes {
    /// Create eyes with the given socket centers.
    ///
    /// # Panics
    ///
    /// Panics if `sockets` is empty.
    #[must_use]
    pub fn new(sockets: impl Into<Vec<Point>>) -> Self {
        let sockets = sockets.into();
        assert!(!sockets.is_empty(), "eyes require at least one socket");
        Self {
            sockets,
            max_travel: DEFAULT_MAX_TRAVEL,
        }
    }

    /// Set the maximum pupil travel radius.
    ///
    /// # Panics
    ///
    /// Panics if `max_travel` is not positive.
    #[must_use]
    pub fn max_travel(mut self, max_travel: f32) -> Self {
        assert!(max_travel > 0.0, "max travel must be positive");
        self.max_travel = max_travel;
        self
    }

    /// Socket centers, in declaration order.
    #[must_use]
    pub fn sockets(&self) -> &[Point] {
        &self.sockets
    }

    /// Pupil displacement for a socket under the current state.
    #[must_use]
    pub fn pupil_offset(&self, state: &EyesState, socket: Point) -> Vec2 {
        match state.pointer {
            Some(pointer) => (pointer - (state.origin + (socket - Point::ZERO)))
                .clamp_length(self.max_travel),
            None => Vec2::ZERO,
        }
    }

    /// Derive the render model: one pupil per socket.
    #[must_use]
    pub fn view(&self, state: &EyesState) -> EyesView {
        EyesView {
            pupils: self
                .sockets
                .iter()
                .map(|&socket| PupilView {
                    socket,
                    offset: self.pupil_offset(state, socket),
                })
                .collect(),
        }
    }
}

/// Pointer-tracking state for the eyes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EyesState {
    /// Container origin in page coordinates.
    origin: Point,
    /// Last known pointer position in page coordinates.
    pointer: Option<Point>,
}

impl EyesState {
    /// Create state with the container at the page origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the container origin (layout change or scroll).
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Last known pointer position, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Apply a pointer event: moves update the tracked position, leaving
    /// clears it. Other events are ignored.
    pub fn handle(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Move(p) => self.pointer = Some(*p),
            PointerEvent::Leave => self.pointer = None,
            _ => {}
        }
    }
}

/// One pupil in the render model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PupilView {
    /// Socket center, container-relative.
    pub socket: Point,
    /// Pupil displacement from the socket center.
    pub offset: Vec2,
}

/// Render model for the eyes.
#[derive(Debug, Clone, PartialEq)]
pub struct EyesView {
    pub pupils: Vec<PupilView>,
}
