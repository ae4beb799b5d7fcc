//! Reusable layer test fixtures.
//!
//! - [`CountingScalar`] / [`CountingVector`]: count `step()` calls through
//!   a shared [`StepCounter`], optionally appending to a [`StepLog`].
//! - [`FixedScalar`] / [`FixedVector`]: constant output, no-op step.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use stratum_core::{Coord, ScalarField, Vector, VectorField};

/// Shared handle to a fixture's step count.
///
/// Cloned out of a fixture before the fixture is moved into an
/// environment, so the test can still observe it afterwards.
#[derive(Clone, Debug, Default)]
pub struct StepCounter(Arc<AtomicUsize>);

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `step()` calls observed so far.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// Shared, ordered record of fixture names in the order they were stepped.
#[derive(Clone, Debug, Default)]
pub struct StepLog(Arc<Mutex<Vec<String>>>);

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every entry recorded so far.
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, name: &str) {
        self.0.lock().unwrap().push(name.to_string());
    }
}

/// Scalar layer whose value at every coordinate is its step count.
pub struct CountingScalar {
    pub name: String,
    counter: StepCounter,
    log: Option<StepLog>,
}

impl CountingScalar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter: StepCounter::new(),
            log: None,
        }
    }

    /// Append this layer's name to `log` on every step.
    pub fn with_log(mut self, log: &StepLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    /// Handle observing this layer's step count.
    pub fn counter(&self) -> StepCounter {
        self.counter.clone()
    }
}

impl ScalarField for CountingScalar {
    fn name(&self) -> &str {
        &self.name
    }

    fn value_at(&self, _at: Coord) -> i32 {
        i32::try_from(self.counter.get()).unwrap_or(i32::MAX)
    }

    fn step(&mut self) {
        self.counter.bump();
        if let Some(log) = &self.log {
            log.record(&self.name);
        }
    }
}

/// Motion layer that contributes nothing but counts its steps.
pub struct CountingVector {
    pub name: String,
    counter: StepCounter,
    log: Option<StepLog>,
}

impl CountingVector {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter: StepCounter::new(),
            log: None,
        }
    }

    /// Append this layer's name to `log` on every step.
    pub fn with_log(mut self, log: &StepLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    /// Handle observing this layer's step count.
    pub fn counter(&self) -> StepCounter {
        self.counter.clone()
    }
}

impl VectorField for CountingVector {
    fn name(&self) -> &str {
        &self.name
    }

    fn value_at(&self, _at: Coord) -> Vector {
        Vector::ZERO
    }

    fn step(&mut self) {
        self.counter.bump();
        if let Some(log) = &self.log {
            log.record(&self.name);
        }
    }
}

/// Scalar layer returning a fixed value.
pub struct FixedScalar {
    pub value: i32,
}

impl FixedScalar {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

impl ScalarField for FixedScalar {
    fn name(&self) -> &str {
        "fixed_scalar"
    }

    fn value_at(&self, _at: Coord) -> i32 {
        self.value
    }

    fn step(&mut self) {}
}

/// Motion layer returning a fixed vector.
pub struct FixedVector {
    pub vector: Vector,
}

impl FixedVector {
    pub fn new(vector: impl Into<Vector>) -> Self {
        Self {
            vector: vector.into(),
        }
    }
}

impl VectorField for FixedVector {
    fn name(&self) -> &str {
        "fixed_vector"
    }

    fn value_at(&self, _at: Coord) -> Vector {
        self.vector
    }

    fn step(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_survives_move() {
        let mut layer = CountingScalar::new("c");
        let counter = layer.counter();
        layer.step();
        let mut boxed: Box<dyn ScalarField> = Box::new(layer);
        boxed.step();
        assert_eq!(counter.get(), 2);
        assert_eq!(boxed.value_at(Coord::ORIGIN), 2);
    }

    #[test]
    fn log_records_in_step_order() {
        let log = StepLog::new();
        let mut a = CountingVector::new("a").with_log(&log);
        let mut b = CountingScalar::new("b").with_log(&log);
        b.step();
        a.step();
        b.step();
        assert_eq!(log.entries(), ["b", "a", "b"]);
    }
}
