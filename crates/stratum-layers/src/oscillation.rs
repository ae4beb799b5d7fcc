//! Static restoring flow toward a horizontal line.

use stratum_core::{Coord, Vector, VectorField};

/// Motion layer pulling devices vertically toward `mid_line`.
///
/// ```text
/// value(x, y) = (0, (mid_line - y) >> 4)
/// ```
///
/// The shift is arithmetic, i.e. floor division by 16: magnitude grows
/// with distance from the line and the sign flips across it. Devices
/// accumulate these samples as momentum, so they overshoot and oscillate
/// about the line. The layer is static; `step()` does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HorizontalOscillation {
    mid_line: i32,
}

impl HorizontalOscillation {
    /// Create a flow restoring toward row `mid_line`.
    pub fn new(mid_line: i32) -> Self {
        Self { mid_line }
    }

    /// The row devices are pulled toward.
    pub fn mid_line(&self) -> i32 {
        self.mid_line
    }
}

impl VectorField for HorizontalOscillation {
    fn name(&self) -> &str {
        "horizontal_oscillation"
    }

    fn value_at(&self, at: Coord) -> Vector {
        Vector::new(0, self.mid_line.wrapping_sub(at.y) >> 4)
    }

    fn step(&mut self) {}
}
