//! Deck phase machine.
//!
//! [`DeckState::reduce`] is the only place the deck's index and phase
//! change. Only one of dragging, the commit animation and the cancel spring
//! ever drives the card offset; conflicting actions are rejected here
//! instead of racing over the offset.

use std::fmt;

use crate::DeckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDirection::Left => f.write_str("left"),
            SwipeDirection::Right => f.write_str("right"),
        }
    }
}

/// What a release does with the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    Commit(SwipeDirection),
    Cancel,
}

impl SwipeDecision {
    /// Strict comparison: a release exactly on the threshold cancels.
    pub fn for_release(dx: f32, threshold: f32) -> Self {
        if dx > threshold {
            SwipeDecision::Commit(SwipeDirection::Right)
        } else if dx < -threshold {
            SwipeDecision::Commit(SwipeDirection::Left)
        } else {
            SwipeDecision::Cancel
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Idle,
    Dragging,
    AnimatingCommit(SwipeDirection),
    AnimatingCancel,
}

impl fmt::Display for DeckPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckPhase::Idle => f.write_str("idle"),
            DeckPhase::Dragging => f.write_str("dragging"),
            DeckPhase::AnimatingCommit(direction) => write!(f, "swiping {direction}"),
            DeckPhase::AnimatingCancel => f.write_str("springing back"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckAction {
    DataReplaced { len: usize },
    GestureStarted,
    GestureMoved,
    GestureReleased(SwipeDecision),
    ForceSwipe(SwipeDirection),
    ResetRequested,
    CommitFinished,
    CancelSettled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckState {
    /// Number of cards swiped away; always `<= len`.
    pub index: usize,
    pub len: usize,
    pub phase: DeckPhase,
}

impl DeckState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            phase: DeckPhase::Idle,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.len
    }

    pub fn remaining(&self) -> usize {
        self.len.saturating_sub(self.index)
    }

    pub fn reduce(self, action: DeckAction) -> Result<DeckState, DeckError> {
        use DeckAction as A;
        use DeckPhase as P;

        let rejected = || DeckError::TransitionRejected {
            phase: self.phase,
            action,
        };

        let next = match (action, self.phase) {
            (A::DataReplaced { len }, _) => DeckState::new(len),

            (A::GestureStarted | A::ForceSwipe(_), _) if self.is_exhausted() => {
                return Err(DeckError::Exhausted)
            }
            (A::GestureStarted, P::Idle | P::AnimatingCancel) => DeckState {
                phase: P::Dragging,
                ..self
            },
            (A::GestureMoved, P::Dragging) => self,
            (A::GestureReleased(decision), P::Dragging) => DeckState {
                phase: match decision {
                    SwipeDecision::Commit(direction) => P::AnimatingCommit(direction),
                    SwipeDecision::Cancel => P::AnimatingCancel,
                },
                ..self
            },
            (A::ForceSwipe(direction), P::Idle | P::Dragging | P::AnimatingCancel) => DeckState {
                phase: P::AnimatingCommit(direction),
                ..self
            },
            (A::ResetRequested, P::Idle | P::Dragging | P::AnimatingCancel) => DeckState {
                phase: P::AnimatingCancel,
                ..self
            },
            (A::CommitFinished, P::AnimatingCommit(_)) => DeckState {
                index: (self.index + 1).min(self.len),
                phase: P::Idle,
                ..self
            },
            (A::CancelSettled, P::AnimatingCancel) => DeckState {
                phase: P::Idle,
                ..self
            },
            _ => return Err(rejected()),
        };
        Ok(next)
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
