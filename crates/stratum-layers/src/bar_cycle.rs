//! A vertical bar cycling across a horizontal band.

use stratum_core::{Coord, LayerError, ScalarField};

/// Falloff per column of distance from the bar.
const FALLOFF: i64 = 10;

/// Scalar layer whose value peaks on a moving vertical bar.
///
/// The bar's reference column starts at `left` and advances one column
/// per tick, wrapping back to `left` when it reaches `right`, so it is
/// always confined to `[left, right)` and recurs every `right - left`
/// ticks. A degenerate band (`left == right`) is a single column and the
/// bar stays on it.
///
/// ```text
/// value(x, y) = min - 10 * |reference - x|   if left <= x <= right
///             = 0                            otherwise
/// ```
///
/// The row is ignored. Inside the band the value is at most `min` and
/// goes negative for `min < 10 * distance`; the layer reports raw values
/// and leaves narrowing to the display collaborator. The arithmetic is
/// carried out in 64 bits and saturated to the `i32` range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarCycle {
    reference: i32,
    left: i32,
    right: i32,
    max: i32,
    min: i32,
}

impl BarCycle {
    /// Create a bar cycling over `[left, right)` with the given value range.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::InvalidBand`] if `left > right`, and
    /// [`LayerError::InvalidRange`] if `min > max`.
    pub fn new(left: i32, right: i32, max: i32, min: i32) -> Result<Self, LayerError> {
        if left > right {
            return Err(LayerError::InvalidBand { left, right });
        }
        if min > max {
            return Err(LayerError::InvalidRange { min, max });
        }
        Ok(Self {
            reference: left,
            left,
            right,
            max,
            min,
        })
    }

    /// Current column of the bar.
    pub fn reference(&self) -> i32 {
        self.reference
    }

    /// Left edge of the band (inclusive).
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Right edge of the band (inclusive for sampling, exclusive for the bar).
    pub fn right(&self) -> i32 {
        self.right
    }

    /// Declared upper value bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Value on the bar itself.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Number of ticks after which the bar returns to `left`. Zero for a
    /// single-column band, where the bar never moves.
    pub fn period(&self) -> u32 {
        self.right.abs_diff(self.left)
    }
}

impl ScalarField for BarCycle {
    fn name(&self) -> &str {
        "bar_cycle"
    }

    fn value_at(&self, at: Coord) -> i32 {
        if at.x < self.left || at.x > self.right {
            return 0;
        }
        let distance = (i64::from(self.reference) - i64::from(at.x)).abs();
        let value = i64::from(self.min) - FALLOFF * distance;
        value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    fn step(&mut self) {
        self.reference = match self.reference.checked_add(1) {
            Some(next) if next < self.right => next,
            _ => self.left,
        };
    }
}
