//! Testing utilities and harness for SwipeDeck

pub mod recording;
pub mod testing;

pub use recording::*;
pub use testing::*;

pub mod prelude {
    pub use crate::recording::*;
    pub use crate::testing::*;
}
