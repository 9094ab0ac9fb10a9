//! Piecewise-linear mapping from one numeric range onto another.
//!
//! Used for values that are derived from an animated value rather than
//! animated themselves, such as a card's rotation as a function of its
//! horizontal offset.

use smallvec::SmallVec;
use std::fmt;

/// What happens to inputs outside the first/last control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Hold the output at the nearest end value.
    #[default]
    Clamp,
    /// Continue the slope of the nearest segment.
    Extend,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    LengthMismatch { input: usize, output: usize },
    TooFewPoints { len: usize },
    NotIncreasing { index: usize },
    NotFinite { index: usize },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::LengthMismatch { input, output } => write!(
                f,
                "input range has {input} points but output range has {output}"
            ),
            InterpolationError::TooFewPoints { len } => {
                write!(f, "interpolation needs at least 2 points, got {len}")
            }
            InterpolationError::NotIncreasing { index } => {
                write!(f, "input range must be strictly increasing at index {index}")
            }
            InterpolationError::NotFinite { index } => {
                write!(f, "control point {index} is not finite")
            }
        }
    }
}

impl std::error::Error for InterpolationError {}

/// Validated set of control points.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: SmallVec<[f32; 4]>,
    output: SmallVec<[f32; 4]>,
    extrapolate: Extrapolate,
}

impl Interpolation {
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self, InterpolationError> {
        if input.len() != output.len() {
            return Err(InterpolationError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(InterpolationError::TooFewPoints { len: input.len() });
        }
        for (index, (x, y)) in input.iter().zip(output).enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(InterpolationError::NotFinite { index });
            }
            if index > 0 && *x <= input[index - 1] {
                return Err(InterpolationError::NotIncreasing { index });
            }
        }
        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
            extrapolate: Extrapolate::Clamp,
        })
    }

    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    pub fn apply(&self, value: f32) -> f32 {
        let last = self.input.len() - 1;
        if self.extrapolate == Extrapolate::Clamp {
            if value <= self.input[0] {
                return self.output[0];
            }
            if value >= self.input[last] {
                return self.output[last];
            }
        }

        // Segment whose right edge is the first control point above `value`;
        // values past either end reuse the outermost segment.
        let segment = self
            .input
            .iter()
            .skip(1)
            .position(|x| value < *x)
            .unwrap_or(last - 1);

        let (x0, x1) = (self.input[segment], self.input[segment + 1]);
        let (y0, y1) = (self.output[segment], self.output[segment + 1]);
        let fraction = (value - x0) / (x1 - x0);
        y0 + (y1 - y0) * fraction
    }
}

#[cfg(test)]
#[path = "tests/interpolation_tests.rs"]
mod tests;
