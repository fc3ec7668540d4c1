#![forbid(unsafe_code)]

//! Vitrine public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage. Widget state machines live in
//! [`widgets`], geometry and input primitives in [`core`], and the timer
//! and message loop in [`runtime`] (behind the default `runtime` feature).

// --- Core re-exports -------------------------------------------------------

pub use vitrine_core::breakpoint::{Breakpoints, GroupSizePolicy};
pub use vitrine_core::event::{DragEnd, Event, PointerEvent};
pub use vitrine_core::geometry::{Point, Rect, Vec2};
pub use vitrine_core::gesture::{Swipe, SwipeThresholds, classify};

// --- Widget re-exports -----------------------------------------------------

pub use vitrine_widgets::deck::{Deck, DeckState, DeckView, FeatureSlide, ViewChanges};
pub use vitrine_widgets::eyes::{Eyes, EyesState, EyesView, PupilView};
pub use vitrine_widgets::gallery::{
    Gallery, GalleryItem, GalleryState, GalleryThumb, GalleryView,
};
pub use vitrine_widgets::hover_card::{HoverCard, HoverCardState, HoverCardView};
pub use vitrine_widgets::slides::{Slide, SlidesConfig, SlidesState, SlidesView};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use vitrine_runtime::{Autoplay, Cmd, IntervalHandle, Model, Program, spawn_interval};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Breakpoints, DragEnd, Event, GroupSizePolicy, Point, PointerEvent, Rect, Swipe,
        SwipeThresholds, Vec2,
    };

    pub use crate::{
        Deck, DeckState, Eyes, EyesState, Gallery, GalleryItem, GalleryState, HoverCard,
        HoverCardState, Slide, SlidesConfig, SlidesState,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{Autoplay, Cmd, Model, Program};

    pub use crate::{core, widgets};
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use vitrine_core as core;
#[cfg(feature = "runtime")]
pub use vitrine_runtime as runtime;
pub use vitrine_widgets as widgets;
