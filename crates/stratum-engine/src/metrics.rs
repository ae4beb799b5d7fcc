//! Per-tick timing metrics for the environment.
//!
//! [`StepMetrics`] captures timing for a single tick, for profiling and
//! driver-side frame pacing.

/// Timing metrics collected during a single tick.
///
/// All durations are in microseconds. The environment populates these
/// fields during each `step()` call; consumers read them from
/// [`Environment::last_metrics()`](crate::Environment::last_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent stepping data and motion layers, in microseconds.
    pub layer_step_us: u64,
    /// Time spent integrating devices, in microseconds.
    pub integration_us: u64,
    /// Number of devices integrated this tick.
    pub devices_integrated: u32,
    /// Number of devices relocated by the edge policy this tick.
    pub devices_confined: u32,
}
