#![forbid(unsafe_code)]

//! Background timers and the message loop that drives vitrine widgets.
//!
//! Widget state machines are synchronous and pure; this crate supplies the
//! two impure pieces a live page needs: interval timers that deliver tick
//! messages from a background thread, and a small model/update/view loop
//! that routes those messages (and user input) through application state.

pub mod autoplay;
pub mod program;
pub mod timer;

pub use autoplay::Autoplay;
pub use program::{Cmd, Model, Program};
pub use timer::{CancelHandle, CancelToken, IntervalHandle, spawn_interval};
