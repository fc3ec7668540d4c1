#![forbid(unsafe_code)]

//! Core primitives for Vitrine widget state machines.
//!
//! This crate provides the value types the widget layer is built on:
//! pixel-space geometry, canonical pointer/viewport events, swipe-gesture
//! classification, and responsive group-size policies. Nothing here touches
//! a document or a renderer; everything is plain data and total functions.

pub mod breakpoint;
pub mod event;
pub mod geometry;
pub mod gesture;

pub use breakpoint::{Breakpoints, GroupSizePolicy};
pub use event::{DragEnd, Event, PointerEvent};
pub use geometry::{Point, Rect, Vec2};
pub use gesture::{Swipe, SwipeThresholds};
