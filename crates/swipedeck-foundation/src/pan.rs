//! Single-pointer pan recognition.
//!
//! The recognizer claims every touch-down it sees while idle and reports
//! cumulative displacement from the touch-down position. Additional
//! pointers that go down during a pan are ignored.

use crate::pointer::{PointerEvent, PointerEventKind, PointerId};
use swipedeck_ui_graphics::Point;

/// Recognized gesture phases. Deltas are cumulative since the gesture began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanGestureEvent {
    Started { position: Point },
    Moved { delta: Point },
    Ended { delta: Point },
    /// The host took the pointer away (for example, a system gesture).
    Cancelled { delta: Point },
}

#[derive(Clone, Copy, Debug)]
struct TrackedPointer {
    id: PointerId,
    origin: Point,
    delta: Point,
}

#[derive(Debug, Default)]
pub struct PanGestureRecognizer {
    tracked: Option<TrackedPointer>,
}

impl PanGestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.tracked.is_some()
    }

    /// Cumulative delta of the pan in progress.
    pub fn current_delta(&self) -> Option<Point> {
        self.tracked.map(|tracked| tracked.delta)
    }

    /// Feeds one raw pointer event, returning the gesture phase it produced.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        match (event.kind, self.tracked) {
            (PointerEventKind::Down, None) => {
                self.tracked = Some(TrackedPointer {
                    id: event.id,
                    origin: event.position,
                    delta: Point::ZERO,
                });
                Some(PanGestureEvent::Started {
                    position: event.position,
                })
            }
            (PointerEventKind::Down, Some(tracked)) => {
                log::trace!(
                    "ignoring pointer {} while pointer {} pans",
                    event.id,
                    tracked.id
                );
                None
            }
            (PointerEventKind::Move, Some(mut tracked)) if tracked.id == event.id => {
                tracked.delta = event.position - tracked.origin;
                self.tracked = Some(tracked);
                Some(PanGestureEvent::Moved {
                    delta: tracked.delta,
                })
            }
            (PointerEventKind::Up, Some(tracked)) if tracked.id == event.id => {
                self.tracked = None;
                Some(PanGestureEvent::Ended {
                    delta: event.position - tracked.origin,
                })
            }
            (PointerEventKind::Cancel, Some(tracked)) if tracked.id == event.id => {
                self.tracked = None;
                Some(PanGestureEvent::Cancelled {
                    delta: tracked.delta,
                })
            }
            _ => None,
        }
    }

    /// Drops any pan in progress without reporting it.
    pub fn reset(&mut self) {
        self.tracked = None;
    }
}
