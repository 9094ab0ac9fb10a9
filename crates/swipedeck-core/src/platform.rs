//! Platform abstraction traits for runtime services.
//!
//! These traits let the runtime delegate scheduling and clock
//! responsibilities to the host platform, so the deck can be driven by a
//! real vsync source or by a test harness stepping time by hand.

/// Schedules work for the runtime.
///
/// Implementations are responsible for triggering frame processing on
/// behalf of the runtime.
pub trait RuntimeScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}
