use swipedeck_core::{Runtime, RuntimeHandle};
use swipedeck_foundation::{PointerEvent, PointerId};
use swipedeck_ui::{Deck, DeckContent, DeckError, DeckGesture, DeckItem};
use swipedeck_ui_graphics::Point;

/// One frame at 60Hz.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Number of intermediate pointer moves [`DeckTestRule::drag`] emits.
const DRAG_STEPS: usize = 10;

/// Headless harness for exercising decks in tests.
///
/// `DeckTestRule` owns the runtime a deck animates on and a virtual frame
/// clock. Frames only advance when a test asks for them, so animations are
/// fully deterministic.
pub struct DeckTestRule {
    runtime: Runtime,
    frame_time_nanos: u64,
    next_pointer: PointerId,
}

impl DeckTestRule {
    pub fn new() -> Self {
        Self {
            runtime: Runtime::default(),
            frame_time_nanos: 0,
            next_pointer: 1,
        }
    }

    /// Access the runtime driving this rule. Decks under test animate on it.
    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn frame_time_millis(&self) -> u64 {
        self.frame_time_nanos / 1_000_000
    }

    /// Returns whether any animation is waiting for a frame.
    pub fn is_animating(&self) -> bool {
        self.runtime.has_frame_callbacks()
    }

    /// Steps the clock by one frame and drains the callbacks registered for it.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Advances frame by frame until at least `millis` have elapsed.
    pub fn advance_time_by(&mut self, millis: u64) {
        let until = self.frame_time_nanos + millis * 1_000_000;
        while self.frame_time_nanos < until {
            self.advance_frame();
        }
    }

    /// Drives frames until no animation is pending and returns how many ran.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.is_animating() {
            frames += 1;
            if frames > 10_000 {
                panic!("pump_until_idle looped too many times!");
            }
            self.advance_frame();
        }
        log::trace!("idle after {frames} frames");
        frames
    }

    /// Drags a pointer from the middle of the screen by `delta` and lifts it.
    ///
    /// Returns what the deck made of the release. Animations started by the
    /// release are left running.
    pub fn drag<T, C>(
        &mut self,
        deck: &Deck<T, C>,
        delta: Point,
    ) -> Result<Option<DeckGesture>, DeckError>
    where
        T: DeckItem + 'static,
        C: DeckContent<T> + 'static,
    {
        let id = self.next_pointer;
        self.next_pointer += 1;

        let metrics = deck.metrics();
        let from = Point::new(metrics.width / 2.0, metrics.height / 2.0);
        let now = self.frame_time_millis();

        deck.handle_pointer_event(&PointerEvent::down(id, from).at(now))?;
        for step in 1..=DRAG_STEPS {
            let t = step as f32 / DRAG_STEPS as f32;
            let position = from + delta * t;
            deck.handle_pointer_event(&PointerEvent::moved(id, position).at(now))?;
        }
        deck.handle_pointer_event(&PointerEvent::up(id, from + delta).at(now))
    }

    /// Like [`DeckTestRule::drag`], then runs every resulting animation to
    /// completion.
    pub fn swipe<T, C>(
        &mut self,
        deck: &Deck<T, C>,
        delta: Point,
    ) -> Result<Option<DeckGesture>, DeckError>
    where
        T: DeckItem + 'static,
        C: DeckContent<T> + 'static,
    {
        let released = self.drag(deck, delta)?;
        self.pump_until_idle();
        Ok(released)
    }
}

impl Default for DeckTestRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for tests that only need temporary access to a
/// `DeckTestRule`.
pub fn run_deck_test<R>(f: impl FnOnce(&mut DeckTestRule) -> R) -> R {
    let mut rule = DeckTestRule::new();
    f(&mut rule)
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
