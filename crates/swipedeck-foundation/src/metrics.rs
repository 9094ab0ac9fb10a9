use swipedeck_ui_graphics::Size;

/// Logical size of the screen the deck is shown on.
///
/// Captured once when a deck is created. Orientation changes are not
/// tracked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
}

impl ScreenMetrics {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Finite and strictly positive in both dimensions.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && !self.size().is_empty()
    }

    /// Horizontal distance a release must exceed to commit a swipe.
    pub fn swipe_threshold(&self, fraction: f32) -> f32 {
        self.width * fraction
    }
}
