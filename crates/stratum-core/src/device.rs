//! Point-like devices carried by the motion layers.

use crate::geom::{Coord, Vector};

/// A passive position + velocity record.
///
/// Devices are created with the environment and mutated only by its
/// stepping algorithm. Callers receive copies; editing a returned
/// `Device` never affects the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Device {
    /// Current position on the sampling plane.
    pub position: Coord,
    /// Persistent momentum, accumulated from motion samples each tick.
    pub velocity: Vector,
}

impl Device {
    /// A device at rest at `position`.
    pub fn at(position: impl Into<Coord>) -> Self {
        Self {
            position: position.into(),
            velocity: Vector::ZERO,
        }
    }

    /// A device at `position` moving with `velocity`.
    pub fn moving(position: impl Into<Coord>, velocity: impl Into<Vector>) -> Self {
        Self {
            position: position.into(),
            velocity: velocity.into(),
        }
    }

    /// Apply one tick of motion: accumulate `sample` into the velocity,
    /// then advance the position by the updated velocity.
    pub fn integrate(&mut self, sample: Vector) {
        self.velocity += sample;
        self.position += self.velocity;
    }
}
