//! Reference layers for the Stratum framework.
//!
//! Small, fully deterministic [`ScalarField`](stratum_core::ScalarField) and
//! [`VectorField`](stratum_core::VectorField) implementations used by the
//! examples, benchmarks and tests:
//!
//! - [`BarCycle`]: a vertical bar sweeping across a horizontal band.
//! - [`ConstantScalar`]: the same value everywhere.
//! - [`HorizontalOscillation`]: a static restoring flow toward a mid line.
//! - [`UniformFlow`]: the same vector everywhere.
//! - [`AlternatingFlow`]: a uniform vector whose sign flips periodically.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alternating;
pub mod bar_cycle;
pub mod constant;
pub mod oscillation;

pub use alternating::AlternatingFlow;
pub use bar_cycle::BarCycle;
pub use constant::{ConstantScalar, UniformFlow};
pub use oscillation::HorizontalOscillation;
