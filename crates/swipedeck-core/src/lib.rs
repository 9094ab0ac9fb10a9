//! Single-threaded runtime services for SwipeDeck.
//!
//! Everything here runs on the host UI thread: frame callbacks are queued
//! by animations and drained by the host once per frame, and state cells
//! notify the runtime that a new frame is needed when they change.

mod frame_clock;
pub mod platform;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};
pub use state::{MutableState, State};

pub type FrameCallbackId = u64;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
