//! Environment orchestration for Stratum simulations.
//!
//! An [`Environment`] composes scalar data layers and vector motion
//! layers, owns a fixed set of devices, and advances everything one tick
//! per [`step()`](Environment::step). Between steps it answers pure
//! spatial queries: per-channel samples, motion samples, and device
//! snapshots. [`display`] maps raw samples into displayable pixels.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod display;
pub mod edge;
pub mod environment;
pub mod metrics;

pub use config::{ChannelDef, ConfigError, EnvironmentConfig, Extent};
pub use display::{DisplayPolicy, Frame, Rgb};
pub use edge::DeviceEdge;
pub use environment::Environment;
pub use metrics::StepMetrics;
