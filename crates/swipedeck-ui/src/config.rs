use swipedeck_animation::{AnimationSpec, Interpolation, SpringSpec};
use swipedeck_foundation::gesture_constants::{
    MAX_ROTATION_DEGREES, ROTATION_INPUT_FRACTION, SWIPE_OUT_DURATION_MILLIS,
    SWIPE_THRESHOLD_FRACTION,
};
use swipedeck_foundation::ScreenMetrics;

use crate::DeckError;

/// Vertical step between stacked background cards, in logical pixels.
pub const STACK_OFFSET: f32 = 10.0;

/// Resting top edge of every card, as a fraction of the screen height.
pub const CARD_TOP_FRACTION: f32 = 0.25;

/// Tunables for a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckConfig {
    pub swipe_threshold_fraction: f32,
    /// Fly-out animation for committed swipes.
    pub swipe_out: AnimationSpec,
    /// Spring used to return a cancelled swipe to rest.
    pub reset_spring: SpringSpec,
    pub stack_offset: f32,
    pub max_rotation_degrees: f32,
    /// Horizontal offset, in screen widths, where rotation saturates.
    pub rotation_input_fraction: f32,
    pub card_top_fraction: f32,
    /// Spring requested from the surrounding layout when the top card changes.
    pub layout_transition: SpringSpec,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_fraction: SWIPE_THRESHOLD_FRACTION,
            swipe_out: AnimationSpec::linear(SWIPE_OUT_DURATION_MILLIS),
            reset_spring: SpringSpec::default(),
            stack_offset: STACK_OFFSET,
            max_rotation_degrees: MAX_ROTATION_DEGREES,
            rotation_input_fraction: ROTATION_INPUT_FRACTION,
            card_top_fraction: CARD_TOP_FRACTION,
            layout_transition: SpringSpec::default(),
        }
    }
}

impl DeckConfig {
    pub fn with_swipe_threshold_fraction(mut self, fraction: f32) -> Self {
        self.swipe_threshold_fraction = fraction;
        self
    }

    pub fn with_swipe_out(mut self, spec: AnimationSpec) -> Self {
        self.swipe_out = spec;
        self
    }

    pub fn with_reset_spring(mut self, spec: SpringSpec) -> Self {
        self.reset_spring = spec;
        self
    }

    pub fn with_stack_offset(mut self, offset: f32) -> Self {
        self.stack_offset = offset;
        self
    }

    pub fn with_rotation(mut self, max_degrees: f32, input_fraction: f32) -> Self {
        self.max_rotation_degrees = max_degrees;
        self.rotation_input_fraction = input_fraction;
        self
    }

    pub fn with_card_top_fraction(mut self, fraction: f32) -> Self {
        self.card_top_fraction = fraction;
        self
    }

    pub fn with_layout_transition(mut self, spec: SpringSpec) -> Self {
        self.layout_transition = spec;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), DeckError> {
        let fractions = [
            ("swipe_threshold_fraction", self.swipe_threshold_fraction),
            ("card_top_fraction", self.card_top_fraction),
            ("stack_offset", self.stack_offset),
        ];
        for (field, value) in fractions {
            if !value.is_finite() || value < 0.0 {
                return Err(DeckError::InvalidConfig {
                    field,
                    reason: format!("expected a finite non-negative value, got {value}"),
                });
            }
        }
        if !self.max_rotation_degrees.is_finite() {
            return Err(DeckError::InvalidConfig {
                field: "max_rotation_degrees",
                reason: format!("expected a finite value, got {}", self.max_rotation_degrees),
            });
        }
        Ok(())
    }

    /// Maps a horizontal offset onto a rotation in degrees, clamped at the ends.
    pub(crate) fn rotation_for(&self, metrics: ScreenMetrics) -> Result<Interpolation, DeckError> {
        let reach = metrics.width * self.rotation_input_fraction;
        let max = self.max_rotation_degrees;
        Interpolation::new(&[-reach, 0.0, reach], &[-max, 0.0, max]).map_err(|err| {
            DeckError::InvalidConfig {
                field: "rotation_input_fraction",
                reason: err.to_string(),
            }
        })
    }
}
