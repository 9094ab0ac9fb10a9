//! Shared gesture constants for swipe handling.
//!
//! Distances are in logical pixels or fractions of the logical screen
//! width, so they behave the same across densities.

/// Fraction of the screen width a release must travel past to commit a swipe.
///
/// The comparison is strict: a release exactly on the threshold cancels.
pub const SWIPE_THRESHOLD_FRACTION: f32 = 0.25;

/// Duration of the linear fly-out animation after a committed swipe.
pub const SWIPE_OUT_DURATION_MILLIS: u64 = 250;

/// Rotation reached when the card is dragged `ROTATION_INPUT_FRACTION`
/// screen widths away from rest. Larger offsets are clamped.
pub const MAX_ROTATION_DEGREES: f32 = 120.0;

/// Horizontal offset, in screen widths, at which rotation saturates.
pub const ROTATION_INPUT_FRACTION: f32 = 1.5;
