//! Swipeable card deck.
//!
//! A [`Deck`] shows an ordered list of items as a fanned stack. The top
//! card follows the user's finger, flies off screen when released past the
//! swipe threshold and springs back otherwise. Committed swipes are
//! reported through [`DeckContent::on_commit`] and advance the deck to the
//! next item.

mod config;
mod content;
mod deck;
mod error;
mod render;
mod state;

pub use config::DeckConfig;
pub use content::{DeckCallbacks, DeckContent, DeckItem};
pub use deck::{Deck, DeckGesture};
pub use error::DeckError;
pub use render::{
    render_stack, CardGeometry, CardLayer, CardRole, DeckFrame, DeckFrameContent,
    LayoutTransition,
};
pub use state::{DeckAction, DeckPhase, DeckState, SwipeDecision, SwipeDirection};

pub use swipedeck_foundation::{PointerEvent, PointerEventKind, ScreenMetrics};
pub use swipedeck_ui_graphics::{GraphicsLayer, Point, Size};

pub mod prelude {
    pub use crate::{
        Deck, DeckCallbacks, DeckConfig, DeckContent, DeckError, DeckFrame, DeckItem,
        ScreenMetrics, SwipeDecision, SwipeDirection,
    };
}
