#![forbid(unsafe_code)]

//! Widget state machines for Vitrine.
//!
//! Each module pairs an immutable, builder-configured widget descriptor
//! with a mutable `FooState` holding the navigation state, and derives a
//! plain view struct after every transition. Core logic never touches a
//! document: a separate rendering layer applies the views.

pub mod deck;
pub mod eyes;
pub mod gallery;
pub mod hover_card;
pub mod slides;

pub use deck::{Deck, DeckState, DeckView, FeatureSlide, ViewChanges};
pub use eyes::{Eyes, EyesState, EyesView, PupilView};
pub use gallery::{Gallery, GalleryItem, GalleryState, GalleryThumb, GalleryView};
pub use hover_card::{HoverCard, HoverCardState, HoverCardView};
pub use slides::{Slide, SlidesConfig, SlidesState, SlidesView};
