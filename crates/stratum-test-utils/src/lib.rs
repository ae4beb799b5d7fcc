//! Test utilities and layer fixtures for Stratum development.
//!
//! Provides instrumented layers that report how often, and in which
//! order, the environment steps them, plus fixed-value layers for
//! configurations that only need *some* layer present.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingScalar, CountingVector, FixedScalar, FixedVector, StepCounter, StepLog};
