//! Pointer input, gesture recognition and screen metrics for SwipeDeck.

pub mod gesture_constants;
mod metrics;
mod pan;
mod pointer;

pub use metrics::ScreenMetrics;
pub use pan::{PanGestureEvent, PanGestureRecognizer};
pub use pointer::{PointerEvent, PointerEventKind, PointerId};

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
