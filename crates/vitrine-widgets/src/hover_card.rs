#![forbid(unsafe_code)]

//! Hover-lift card.
//!
//! A card whose content lifts while the pointer is over it or a touch is
//! active. Pure state: the renderer maps `lifted` to whatever transform
//! and color change the page uses.

use vitrine_core::event::PointerEvent;

/// The card widget, borrowing its content.
#[derive(Debug, Clone)]
pub struct HoverCard<'a> {
    content: &'a str,
}

impl<'a> HoverCard<'a> {
    /// Create a card with the given content.
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Derive the render model for the current state.
    #[must_use]
    pub fn view(&self, state: &HoverCardState) -> HoverCardView<'a> {
        HoverCardView {
            content: self.content,
            lifted: state.lifted(),
        }
    }
}

/// Lift state for the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverCardState {
    lifted: bool,
}

impl HoverCardState {
    /// Create a settled card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the card is currently lifted.
    #[must_use]
    pub fn lifted(&self) -> bool {
        self.lifted
    }

    /// Apply a pointer event: enter/touch-start lifts, leave/touch-end
    /// settles. Other events are ignored. Idempotent.
    pub fn handle(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Enter | PointerEvent::TouchStart => self.lifted = true,
            PointerEvent::Leave | PointerEvent::TouchEnd => self.lifted = false,
            _ => {}
        }
    }
}

/// Render model for the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverCardView<'a> {
    pub content: &'a str,
    pub lifted: bool,
}
