//! Stack rendering.
//!
//! Turns the deck's index, the live card offset and the caller's renderer
//! into a list of absolutely positioned card layers, ordered back to front.

use swipedeck_animation::SpringSpec;
use swipedeck_ui_graphics::{GraphicsLayer, Point};

use crate::content::DeckItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    /// The top card; follows gestures.
    Active,
    /// A background card `depth` positions below the active one.
    Stacked { depth: usize },
}

/// Resting placement shared by every card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub width: f32,
    pub top: f32,
    pub stack_offset: f32,
}

impl CardGeometry {
    pub fn origin_for(&self, role: CardRole) -> Point {
        match role {
            CardRole::Active => Point::new(0.0, self.top),
            CardRole::Stacked { depth } => {
                Point::new(0.0, self.top + self.stack_offset * depth as f32)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardLayer<K, V> {
    pub key: K,
    /// Position of the item in the data list.
    pub index: usize,
    pub role: CardRole,
    /// Untransformed top-left corner.
    pub origin: Point,
    pub width: f32,
    pub layer: GraphicsLayer,
    pub content: V,
}

impl<K, V> CardLayer<K, V> {
    pub fn is_active(&self) -> bool {
        self.role == CardRole::Active
    }
}

/// Request for the surrounding layout to animate its next change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutTransition {
    Spring(SpringSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeckFrameContent<K, V> {
    /// Back-to-front: the deepest stacked card first, the active card last.
    Cards(Vec<CardLayer<K, V>>),
    Exhausted(V),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckFrame<K, V> {
    pub content: DeckFrameContent<K, V>,
    /// Set on the first frame after the top card changed.
    pub layout_transition: Option<LayoutTransition>,
}

impl<K, V> DeckFrame<K, V> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self.content, DeckFrameContent::Exhausted(_))
    }

    pub fn cards(&self) -> &[CardLayer<K, V>] {
        match &self.content {
            DeckFrameContent::Cards(cards) => cards,
            DeckFrameContent::Exhausted(_) => &[],
        }
    }

    pub fn active_card(&self) -> Option<&CardLayer<K, V>> {
        self.cards().last().filter(|card| card.is_active())
    }

    pub fn empty_view(&self) -> Option<&V> {
        match &self.content {
            DeckFrameContent::Exhausted(view) => Some(view),
            DeckFrameContent::Cards(_) => None,
        }
    }
}

/// Lays out every not-yet-swiped card of `data`, back to front.
///
/// Cards before `index` are gone. The card at `index` carries `offset` and
/// `rotation_degrees`; later cards fan out below it by the geometry's stack
/// offset. Returns an empty list once `index` reaches the end of `data`.
pub fn render_stack<T, V>(
    data: &[T],
    index: usize,
    offset: Point,
    rotation_degrees: f32,
    geometry: &CardGeometry,
    mut render_item: impl FnMut(&T) -> V,
) -> Vec<CardLayer<T::Id, V>>
where
    T: DeckItem,
{
    let mut cards: Vec<CardLayer<T::Id, V>> = data
        .iter()
        .enumerate()
        .skip(index)
        .map(|(i, item)| {
            let role = if i == index {
                CardRole::Active
            } else {
                CardRole::Stacked { depth: i - index }
            };
            let layer = match role {
                CardRole::Active => {
                    GraphicsLayer::translated(offset).with_rotation(rotation_degrees)
                }
                CardRole::Stacked { .. } => GraphicsLayer::default(),
            };
            CardLayer {
                key: item.id(),
                index: i,
                role,
                origin: geometry.origin_for(role),
                width: geometry.width,
                layer,
                content: render_item(item),
            }
        })
        .collect();
    cards.reverse();
    cards
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
