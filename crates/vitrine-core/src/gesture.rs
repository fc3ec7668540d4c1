#![forbid(unsafe_code)]

//! Swipe-gesture classification.
//!
//! Maps the final sample of a horizontal drag to at most one navigation
//! step. Direction-sensitive and single-step-per-gesture: a long fling
//! still advances exactly once.

use crate::event::DragEnd;

/// Default dead zone around zero displacement, in pixels.
const DEFAULT_OFFSET_MIN: f32 = 0.0;

/// Default velocity magnitude that triggers a step, in pixels per second.
const DEFAULT_VELOCITY_MIN: f32 = 500.0;

/// Navigation step produced by a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// One step forward (drag to the left).
    Forward,
    /// One step backward (drag to the right).
    Backward,
}

/// Thresholds for swipe classification.
///
/// With the default zero offset buffer any horizontal displacement
/// classifies; widen the dead zone via [`offset_min`](Self::offset_min)
/// for pages where small accidental drags should be ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwipeThresholds {
    /// Displacement dead zone in pixels.
    pub offset_min: f32,
    /// Velocity magnitude that triggers a step regardless of displacement.
    pub velocity_min: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            offset_min: DEFAULT_OFFSET_MIN,
            velocity_min: DEFAULT_VELOCITY_MIN,
        }
    }
}

impl SwipeThresholds {
    /// Create thresholds with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the displacement dead zone.
    #[must_use]
    pub fn offset_min(mut self, px: f32) -> Self {
        self.offset_min = px;
        self
    }

    /// Set the velocity trigger magnitude.
    #[must_use]
    pub fn velocity_min(mut self, px_per_s: f32) -> Self {
        self.velocity_min = px_per_s;
        self
    }
}

/// Classify a drag-end sample as at most one swipe step.
///
/// A leftward gesture (negative horizontal offset or velocity beyond the
/// thresholds) is `Forward`; a rightward one is `Backward`. The forward
/// branch is evaluated first. Comparisons are strict, so a gesture exactly
/// at a threshold does not classify.
#[must_use]
pub fn classify(end: &DragEnd, thresholds: &SwipeThresholds) -> Option<Swipe> {
    if end.offset.dx < -thresholds.offset_min || end.velocity.dx < -thresholds.velocity_min {
        Some(Swipe::Forward)
    } else if end.offset.dx > thresholds.offset_min || end.velocity.dx > thresholds.velocity_min {
        Some(Swipe::Backward)
    } else {
        None
    }
}
