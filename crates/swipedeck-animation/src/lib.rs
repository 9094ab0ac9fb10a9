//! Animation system for SwipeDeck
//!
//! Provides frame-clock driven animations with easing curves and spring
//! physics, plus piecewise-linear interpolation for values derived from an
//! animated one.

mod animation;
mod interpolation;

pub use animation::*;
pub use interpolation::*;
