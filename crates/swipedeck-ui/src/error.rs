use crate::state::{DeckAction, DeckPhase};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DeckError {
    InvalidScreenMetrics { width: f32, height: f32 },
    InvalidConfig { field: &'static str, reason: String },
    TransitionRejected { phase: DeckPhase, action: DeckAction },
    /// The operation needs an active card but every card was swiped.
    Exhausted,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::InvalidScreenMetrics { width, height } => {
                write!(f, "invalid screen metrics {width}x{height}")
            }
            DeckError::InvalidConfig { field, reason } => {
                write!(f, "invalid deck config `{field}`: {reason}")
            }
            DeckError::TransitionRejected { phase, action } => {
                write!(f, "cannot apply {action:?} while {phase}")
            }
            DeckError::Exhausted => write!(f, "no cards left in the deck"),
        }
    }
}

impl std::error::Error for DeckError {}
