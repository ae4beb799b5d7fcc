//! A uniform flow that reverses direction on a fixed cadence.

use stratum_core::{Coord, LayerError, Vector, VectorField};

/// Motion layer emitting `vector` for `half_period` ticks, then
/// `-vector` for `half_period` ticks, repeating.
///
/// Unlike the static layers, the output of this layer depends on how many
/// times it has been stepped, which makes it useful for checking that an
/// environment steps every motion layer exactly once per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlternatingFlow {
    vector: Vector,
    half_period: u32,
    phase: u64,
}

impl AlternatingFlow {
    /// Create an alternating flow.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::ZeroPeriod`] if `half_period` is zero.
    pub fn new(vector: impl Into<Vector>, half_period: u32) -> Result<Self, LayerError> {
        if half_period == 0 {
            return Err(LayerError::ZeroPeriod {
                layer: "alternating_flow",
            });
        }
        Ok(Self {
            vector: vector.into(),
            half_period,
            phase: 0,
        })
    }

    /// Whether the layer currently emits the reversed vector.
    pub fn is_reversed(&self) -> bool {
        self.phase >= u64::from(self.half_period)
    }
}

impl VectorField for AlternatingFlow {
    fn name(&self) -> &str {
        "alternating_flow"
    }

    fn value_at(&self, _at: Coord) -> Vector {
        if self.is_reversed() {
            -self.vector
        } else {
            self.vector
        }
    }

    fn step(&mut self) {
        self.phase = (self.phase + 1) % (2 * u64::from(self.half_period));
    }
}
