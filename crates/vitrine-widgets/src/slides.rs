#![forbid(unsafe_code)]

//! Flat drag carousel.
//!
//! A single strip of slides with one visible slide at a time, swipe
//! navigation, optional looping, optional autoplay, and pause-on-hover.
//! Looping appends a ghost copy of the first slide to the track: advancing
//! past the last slide animates onto the ghost, and [`SlidesState::settle`]
//! snaps back to slot 0 once the animation completes, so the wrap never
//! plays backwards.

use std::time::Duration;

use vitrine_core::event::{DragEnd, PointerEvent};
use vitrine_core::gesture::{self, Swipe, SwipeThresholds};

/// Default autoplay period.
const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_secs(3);

/// One slide: an image-source reference with optional alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub src: String,
    pub alt: Option<String>,
}

impl Slide {
    /// Create a slide from an image source.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }

    /// Attach alt text.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// Behavioural configuration for the strip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlidesConfig {
    /// Wrap from the last slide back to the first.
    pub looping: bool,
    /// Advance automatically on a timer.
    pub autoplay: bool,
    /// Autoplay period.
    pub autoplay_interval: Duration,
    /// Suspend autoplay while the pointer is over the strip.
    pub pause_on_hover: bool,
}

impl Default for SlidesConfig {
    fn default() -> Self {
        Self {
            looping: false,
            autoplay: false,
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            pause_on_hover: true,
        }
    }
}

impl SlidesConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable looping.
    #[must_use]
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Enable autoplay.
    #[must_use]
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Set the autoplay period.
    #[must_use]
    pub fn autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval = interval;
        self
    }

    /// Set whether hovering suspends autoplay.
    #[must_use]
    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = pause;
        self
    }
}

/// Navigation state for the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidesState {
    current: usize,
    len: usize,
    looping: bool,
    hovered: bool,
    snapped: bool,
}

impl SlidesState {
    /// Create state for `len` slides.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    #[must_use]
    pub fn new(len: usize, looping: bool) -> Self {
        assert!(len >= 1, "slides require at least one entry");
        Self {
            current: 0,
            len,
            looping,
            hovered: false,
            snapped: false,
        }
    }

    /// Number of real slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; construction requires at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current track position, which may be the ghost slot (`len`) while a
    /// looping wrap animation is in flight.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Track length including the ghost slot when looping.
    #[must_use]
    pub fn track_len(&self) -> usize {
        if self.looping { self.len + 1 } else { self.len }
    }

    /// Index of the active pagination dot, always in `[0, len)`.
    #[must_use]
    pub fn active_dot(&self) -> usize {
        self.current % self.len
    }

    /// Whether the pointer is currently over the strip.
    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Step one slide forward.
    ///
    /// With looping, the step from the last slide lands on the ghost slot;
    /// [`settle`](Self::settle) snaps it back to 0 after the animation.
    /// Without looping the position saturates at the last slide.
    pub fn advance(&mut self) {
        self.snapped = false;
        if self.looping {
            if self.current >= self.len {
                // Tick fired while parked on the ghost slot.
                self.current = 0;
            } else if self.current == self.len - 1 {
                self.current = self.len;
            } else {
                self.current += 1;
            }
        } else if self.current + 1 < self.len {
            self.current += 1;
        }
        self.trace_transition("advance");
    }

    /// Step one slide backward.
    ///
    /// With looping, stepping back from the first slide jumps straight to
    /// the last (no reverse ghost). Without looping the position saturates
    /// at 0.
    pub fn retreat(&mut self) {
        self.snapped = false;
        if self.current == 0 {
            if self.looping {
                self.current = self.len - 1;
            }
        } else {
            self.current -= 1;
            if self.current >= self.len {
                // Ghost slot retreats onto the real last slide.
                self.current = self.len - 1;
            }
        }
        self.trace_transition("retreat");
    }

    /// Jump to slide `i` (pagination dot click).
    pub fn select(&mut self, i: usize) {
        debug_assert!(i < self.len, "slide {i} out of range");
        self.snapped = false;
        self.current = i % self.len;
        self.trace_transition("select");
    }

    /// Animation-complete hook. If parked on the ghost slot, snaps back to
    /// slot 0 and returns `true`; the renderer suppresses the transition
    /// for that jump. Returns `false` otherwise.
    pub fn settle(&mut self) -> bool {
        if self.looping && self.current == self.len {
            self.current = 0;
            self.snapped = true;
            self.trace_transition("settle");
            true
        } else {
            false
        }
    }

    /// Track pointer enter/leave for pause-on-hover. Other pointer events
    /// are ignored.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Enter => self.hovered = true,
            PointerEvent::Leave => self.hovered = false,
            _ => {}
        }
    }

    /// Classify a drag-end sample and apply at most one step.
    ///
    /// Returns the swipe that was applied, if any.
    pub fn handle_drag_end(
        &mut self,
        end: &DragEnd,
        thresholds: &SwipeThresholds,
    ) -> Option<Swipe> {
        let swipe = gesture::classify(end, thresholds);
        match swipe {
            Some(Swipe::Forward) => self.advance(),
            Some(Swipe::Backward) => self.retreat(),
            None => {}
        }
        swipe
    }

    /// Whether the autoplay timer should currently be running.
    #[must_use]
    pub fn autoplay_active(&self, config: &SlidesConfig) -> bool {
        config.autoplay && self.len > 1 && !(config.pause_on_hover && self.hovered)
    }

    /// Derive the render model.
    #[must_use]
    pub fn view(&self) -> SlidesView {
        SlidesView {
            position: self.current,
            active_dot: self.active_dot(),
            dot_count: self.len,
            snap: self.snapped,
        }
    }

    #[allow(unused_variables)]
    fn trace_transition(&self, op: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::trace!(op, current = self.current, "slides transition");
    }
}

/// Render model for the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidesView {
    /// Track slot for the horizontal transform (may be the ghost slot).
    pub position: usize,
    /// Active pagination dot, always a real slide index.
    pub active_dot: usize,
    /// Number of pagination dots (one per real slide).
    pub dot_count: usize,
    /// The last transition was a ghost-slot snap; render it without
    /// animating.
    pub snap: bool,
}
