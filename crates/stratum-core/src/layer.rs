//! The [`ScalarField`] and [`VectorField`] layer traits.
//!
//! Layers are stateful, time-stepped functions over the integer plane.
//! An environment owns its layers exclusively and advances each of them
//! exactly once per tick; between ticks a layer is read-only.

use crate::geom::{Coord, Vector};

/// A scalar plane parametrized by time (a *data layer*).
///
/// # Contract
///
/// - `value_at()` is pure: it depends only on the layer's current state
///   and the queried coordinate. Repeated queries between two `step()`
///   calls return identical results.
/// - `value_at()` is total over the integer plane. Coordinates outside
///   any active region return the layer's documented neutral value.
/// - `step()` advances the layer by exactly one tick and is
///   deterministic given the current state.
/// - Layers do not track absolute time; they keep only the local phase
///   their own `step()` needs.
///
/// # Object safety
///
/// This trait is object-safe; environments store data layers as
/// `Vec<Box<dyn ScalarField>>`.
///
/// # Examples
///
/// A layer reporting how many ticks have elapsed, everywhere:
///
/// ```
/// use stratum_core::{Coord, ScalarField};
///
/// struct Age(i32);
///
/// impl ScalarField for Age {
///     fn name(&self) -> &str { "age" }
///     fn value_at(&self, _at: Coord) -> i32 { self.0 }
///     fn step(&mut self) { self.0 += 1; }
/// }
///
/// let mut age = Age(0);
/// age.step();
/// assert_eq!(age.value_at(Coord::new(-7, 3)), 1);
/// ```
pub trait ScalarField: Send + 'static {
    /// Human-readable name for logging and debug output.
    fn name(&self) -> &str;

    /// Sample the layer at `at` for the current tick.
    fn value_at(&self, at: Coord) -> i32;

    /// Advance the layer by one tick.
    fn step(&mut self);
}

/// A planar vector field parametrized by time (a *motion layer*).
///
/// Same lifecycle and contract as [`ScalarField`], but each sample is a
/// [`Vector`]. The environment adds motion samples into device
/// velocities during integration.
pub trait VectorField: Send + 'static {
    /// Human-readable name for logging and debug output.
    fn name(&self) -> &str;

    /// Sample the layer at `at` for the current tick.
    fn value_at(&self, at: Coord) -> Vector;

    /// Advance the layer by one tick.
    ///
    /// Static layers implement this as a no-op, but callers must still
    /// invoke it every tick.
    fn step(&mut self);
}

impl<T: ScalarField + ?Sized> ScalarField for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value_at(&self, at: Coord) -> i32 {
        (**self).value_at(at)
    }

    fn step(&mut self) {
        (**self).step()
    }
}

impl<T: VectorField + ?Sized> VectorField for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value_at(&self, at: Coord) -> Vector {
        (**self).value_at(at)
    }

    fn step(&mut self) {
        (**self).step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp {
        offset: i32,
    }

    impl ScalarField for Ramp {
        fn name(&self) -> &str {
            "ramp"
        }
        fn value_at(&self, at: Coord) -> i32 {
            at.x + self.offset
        }
        fn step(&mut self) {
            self.offset += 1;
        }
    }

    struct Spin {
        phase: u8,
    }

    impl VectorField for Spin {
        fn name(&self) -> &str {
            "spin"
        }
        fn value_at(&self, _at: Coord) -> Vector {
            match self.phase % 4 {
                0 => Vector::new(1, 0),
                1 => Vector::new(0, 1),
                2 => Vector::new(-1, 0),
                _ => Vector::new(0, -1),
            }
        }
        fn step(&mut self) {
            self.phase = self.phase.wrapping_add(1);
        }
    }

    #[test]
    fn boxed_scalar_dispatches_dynamically() {
        let mut layer: Box<dyn ScalarField> = Box::new(Ramp { offset: 0 });
        assert_eq!(layer.name(), "ramp");
        assert_eq!(layer.value_at(Coord::new(4, 0)), 4);
        layer.step();
        assert_eq!(layer.value_at(Coord::new(4, 0)), 5);
    }

    #[test]
    fn boxed_vector_changes_per_tick() {
        let mut layer: Box<dyn VectorField> = Box::new(Spin { phase: 0 });
        let at = Coord::ORIGIN;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(layer.value_at(at));
            layer.step();
        }
        assert_eq!(
            seen,
            vec![
                Vector::new(1, 0),
                Vector::new(0, 1),
                Vector::new(-1, 0),
                Vector::new(0, -1)
            ]
        );
        assert_eq!(layer.value_at(at), Vector::new(1, 0));
    }

    #[test]
    fn nested_box_forwards() {
        let mut layer: Box<Box<dyn ScalarField>> = Box::new(Box::new(Ramp { offset: 2 }));
        layer.step();
        assert_eq!(layer.value_at(Coord::new(0, 9)), 3);
    }
}
