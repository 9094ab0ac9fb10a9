use std::fmt;
use std::hash::Hash;

use crate::state::SwipeDirection;

/// A record shown on a card. The id keys the card while it is on screen.
pub trait DeckItem {
    type Id: Clone + Eq + Hash + fmt::Debug;

    fn id(&self) -> Self::Id;
}

/// Capabilities the deck borrows from its owner.
///
/// Each method can be substituted independently, which keeps the deck
/// testable without a real view tree.
pub trait DeckContent<T> {
    type View;

    /// Renders the content of one card.
    fn render_item(&self, item: &T) -> Self::View;

    /// Rendered in place of the stack once every card has been swiped.
    fn render_empty(&self) -> Self::View;

    /// Called once per committed swipe, before the deck advances.
    fn on_commit(&self, direction: SwipeDirection, item: &T) {
        let _ = (direction, item);
    }
}

type RenderCard<T, V> = Box<dyn Fn(&T) -> V>;
type RenderEmpty<V> = Box<dyn Fn() -> V>;
type SwipeCallback<T> = Box<dyn Fn(&T)>;

/// Closure-backed [`DeckContent`].
///
/// Swipe callbacks default to no-ops.
pub struct DeckCallbacks<T, V> {
    render_card: RenderCard<T, V>,
    render_no_more_cards: RenderEmpty<V>,
    on_swipe_right: SwipeCallback<T>,
    on_swipe_left: SwipeCallback<T>,
}

impl<T, V> DeckCallbacks<T, V> {
    pub fn new(
        render_card: impl Fn(&T) -> V + 'static,
        render_no_more_cards: impl Fn() -> V + 'static,
    ) -> Self {
        Self {
            render_card: Box::new(render_card),
            render_no_more_cards: Box::new(render_no_more_cards),
            on_swipe_right: Box::new(|_| {}),
            on_swipe_left: Box::new(|_| {}),
        }
    }

    pub fn on_swipe_right(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_swipe_right = Box::new(callback);
        self
    }

    pub fn on_swipe_left(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_swipe_left = Box::new(callback);
        self
    }
}

impl<T, V> DeckContent<T> for DeckCallbacks<T, V> {
    type View = V;

    fn render_item(&self, item: &T) -> V {
        (self.render_card)(item)
    }

    fn render_empty(&self) -> V {
        (self.render_no_more_cards)()
    }

    fn on_commit(&self, direction: SwipeDirection, item: &T) {
        match direction {
            SwipeDirection::Right => (self.on_swipe_right)(item),
            SwipeDirection::Left => (self.on_swipe_left)(item),
        }
    }
}
