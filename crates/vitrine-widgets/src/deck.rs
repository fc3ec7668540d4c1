#![forbid(unsafe_code)]

//! Feature walkthrough deck.
//!
//! A clamped (non-wrapping) sequence of feature slides with prev/next
//! arrows and pagination dots. The deck computes a full render model plus
//! a [`ViewChanges`] delta so a renderer can update only the elements that
//! actually changed between two views.

use bitflags::bitflags;

/// Content of one walkthrough slide.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureSlide {
    pub title: String,
    pub description: String,
    pub description2: Option<String>,
    pub image: String,
    pub image_alt: String,
}

impl FeatureSlide {
    /// Create a slide with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        image_alt: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            description2: None,
            image: image.into(),
            image_alt: image_alt.into(),
        }
    }

    /// Attach a secondary description paragraph.
    #[must_use]
    pub fn description2(mut self, text: impl Into<String>) -> Self {
        self.description2 = Some(text.into());
        self
    }
}

/// Navigation state for the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckState {
    current: usize,
    len: usize,
}

impl DeckState {
    /// Create state for `len` slides, starting at the first.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len >= 1, "deck requires at least one slide");
        Self { current: 0, len }
    }

    /// Current slide index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; construction requires at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step forward, clamped at the last slide.
    pub fn next(&mut self) {
        if self.current + 1 < self.len {
            self.current += 1;
            self.trace_transition("next");
        }
    }

    /// Step backward, clamped at the first slide.
    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.trace_transition("prev");
        }
    }

    /// Jump to slide `i` (dot click), clamped to the valid range.
    pub fn go_to(&mut self, i: usize) {
        self.current = i.min(self.len - 1);
        self.trace_transition("go_to");
    }

    #[allow(unused_variables)]
    fn trace_transition(&self, op: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::trace!(op, current = self.current, "deck transition");
    }
}

/// The walkthrough deck widget, borrowing its slides.
#[derive(Debug, Clone)]
pub struct Deck<'a> {
    slides: &'a [FeatureSlide],
}

impl<'a> Deck<'a> {
    /// Create a deck over a non-empty slide list.
    ///
    /// # Panics
    ///
    /// Panics if `slides` is empty.
    #[must_use]
    pub fn new(slides: &'a [FeatureSlide]) -> Self {
        assert!(!slides.is_empty(), "deck requires at least one slide");
        Self { slides }
    }

    /// The borrowed slides.
    #[must_use]
    pub fn slides(&self) -> &'a [FeatureSlide] {
        self.slides
    }

    /// Fresh navigation state for this deck.
    #[must_use]
    pub fn state(&self) -> DeckState {
        DeckState::new(self.slides.len())
    }

    /// Derive the render model for the current state.
    #[must_use]
    pub fn view(&self, state: &DeckState) -> DeckView<'a> {
        debug_assert_eq!(state.len(), self.slides.len(), "state/slides length mismatch");
        let slide = &self.slides[state.current().min(self.slides.len() - 1)];
        DeckView {
            title: &slide.title,
            description: &slide.description,
            description2: slide.description2.as_deref(),
            image: &slide.image,
            image_alt: &slide.image_alt,
            prev_enabled: state.current() > 0,
            next_enabled: state.current() < state.len() - 1,
            active_dot: state.current(),
            dot_count: state.len(),
        }
    }
}

bitflags! {
    /// Which parts of a [`DeckView`] changed between two states.
    ///
    /// The pure-state equivalent of updating each page element
    /// independently: a renderer re-animates only the flagged parts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewChanges: u8 {
        /// Title or either description changed.
        const TEXT = 1 << 0;
        /// Image source or alt text changed.
        const IMAGE = 1 << 1;
        /// The active pagination dot moved.
        const DOTS = 1 << 2;
        /// An arrow's enabled/disabled flag flipped.
        const ARROWS = 1 << 3;
    }
}

/// Render model for one walkthrough slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub description2: Option<&'a str>,
    pub image: &'a str,
    pub image_alt: &'a str,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub active_dot: usize,
    pub dot_count: usize,
}

impl DeckView<'_> {
    /// Compute which parts changed relative to a previous view.
    #[must_use]
    pub fn delta(&self, old: &DeckView<'_>) -> ViewChanges {
        let mut changes = ViewChanges::empty();
        if self.title != old.title
            || self.description != old.description
            || self.description2 != old.description2
        {
            changes |= ViewChanges::TEXT;
        }
        if self.image != old.image || self.image_alt != old.image_alt {
            changes |= ViewChanges::IMAGE;
        }
        if self.active_dot != old.active_dot || self.dot_count != old.dot_count {
            changes |= ViewChanges::DOTS;
        }
        if self.prev_enabled != old.prev_enabled || self.next_enabled != old.next_enabled {
            changes |= ViewChanges::ARROWS;
        }
        changes
    }
}
