//! Deck content that remembers what the deck asked of it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipedeck_ui::{DeckContent, DeckItem, SwipeDirection};

/// Plain item keyed by a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCard {
    pub id: u32,
}

impl TestCard {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl DeckItem for TestCard {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Cards with the given ids, in order.
pub fn cards(ids: impl IntoIterator<Item = u32>) -> Vec<TestCard> {
    ids.into_iter().map(TestCard::new).collect()
}

/// View produced by [`RecordingContent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView<Id> {
    Card(Id),
    NoMoreCards,
}

#[derive(Debug)]
struct Recording<Id> {
    commits: RefCell<Vec<(SwipeDirection, Id)>>,
    item_renders: Cell<usize>,
    empty_renders: Cell<usize>,
}

/// [`DeckContent`] that records every render and commit.
///
/// Clones share one recording, so a test can keep a clone after handing
/// the content to a deck.
#[derive(Debug)]
pub struct RecordingContent<Id> {
    recording: Rc<Recording<Id>>,
}

impl<Id> RecordingContent<Id> {
    pub fn new() -> Self {
        Self {
            recording: Rc::new(Recording {
                commits: RefCell::new(Vec::new()),
                item_renders: Cell::new(0),
                empty_renders: Cell::new(0),
            }),
        }
    }

    pub fn item_renders(&self) -> usize {
        self.recording.item_renders.get()
    }

    pub fn empty_renders(&self) -> usize {
        self.recording.empty_renders.get()
    }

    pub fn commit_count(&self) -> usize {
        self.recording.commits.borrow().len()
    }
}

impl<Id: Clone> RecordingContent<Id> {
    /// Every committed swipe, oldest first.
    pub fn commits(&self) -> Vec<(SwipeDirection, Id)> {
        self.recording.commits.borrow().clone()
    }

    pub fn swiped(&self, direction: SwipeDirection) -> Vec<Id> {
        self.recording
            .commits
            .borrow()
            .iter()
            .filter(|(d, _)| *d == direction)
            .map(|(_, id)| id.clone())
            .collect()
    }
}

impl<Id> Clone for RecordingContent<Id> {
    fn clone(&self) -> Self {
        Self {
            recording: Rc::clone(&self.recording),
        }
    }
}

impl<Id> Default for RecordingContent<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeckItem> DeckContent<T> for RecordingContent<T::Id> {
    type View = CardView<T::Id>;

    fn render_item(&self, item: &T) -> Self::View {
        let renders = &self.recording.item_renders;
        renders.set(renders.get() + 1);
        CardView::Card(item.id())
    }

    fn render_empty(&self) -> Self::View {
        let renders = &self.recording.empty_renders;
        renders.set(renders.get() + 1);
        CardView::NoMoreCards
    }

    fn on_commit(&self, direction: SwipeDirection, item: &T) {
        self.recording
            .commits
            .borrow_mut()
            .push((direction, item.id()));
    }
}
