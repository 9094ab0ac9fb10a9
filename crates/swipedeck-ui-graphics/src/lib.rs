//! Pure math/data for positioning cards in SwipeDeck
//!
//! This crate contains the geometry primitives and the graphics layer
//! description that the deck hands to whatever renders it.

mod geometry;
mod layer;

pub use geometry::*;
pub use layer::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
    pub use crate::layer::GraphicsLayer;
}
