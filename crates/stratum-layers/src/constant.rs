//! Spatially and temporally uniform layers.

use stratum_core::{Coord, ScalarField, Vector, VectorField};

/// Scalar layer returning `value` at every coordinate, on every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstantScalar {
    value: i32,
}

impl ConstantScalar {
    /// Create a constant layer.
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

impl ScalarField for ConstantScalar {
    fn name(&self) -> &str {
        "constant_scalar"
    }

    fn value_at(&self, _at: Coord) -> i32 {
        self.value
    }

    fn step(&mut self) {}
}

/// Motion layer returning `vector` at every coordinate, on every tick.
///
/// A device in a uniform flow accelerates linearly: its velocity grows by
/// `vector` each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformFlow {
    vector: Vector,
}

impl UniformFlow {
    /// Create a uniform flow.
    pub fn new(vector: impl Into<Vector>) -> Self {
        Self {
            vector: vector.into(),
        }
    }
}

impl VectorField for UniformFlow {
    fn name(&self) -> &str {
        "uniform_flow"
    }

    fn value_at(&self, _at: Coord) -> Vector {
        self.vector
    }

    fn step(&mut self) {}
}
