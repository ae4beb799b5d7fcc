//! Core types and traits for the Stratum layered-environment framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Stratum workspace:
//! typed IDs, planar coordinates and vectors, device records, the
//! [`ScalarField`] and [`VectorField`] layer traits, and layer errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod device;
pub mod error;
pub mod geom;
pub mod id;
pub mod layer;

pub use device::Device;
pub use error::LayerError;
pub use geom::{Coord, Vector};
pub use id::{ChannelId, DeviceId, LayerId, TickId};
pub use layer::{ScalarField, VectorField};
