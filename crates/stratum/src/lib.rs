//! Stratum: discrete-time layered 2D environments.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Stratum sub-crates. For most users, adding `stratum` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stratum::prelude::*;
//! use stratum::layers::{BarCycle, HorizontalOscillation};
//!
//! // A 100×100 screen: a bar on the green channel, devices pulled
//! // toward the middle row.
//! let extent = Extent::new(100, 100);
//! let mut config = EnvironmentConfig::rgb(extent);
//! let bar = config.add_data_layer(BarCycle::new(0, 100, 255, 0).unwrap());
//! config.bind(ChannelId::GREEN, bar).unwrap();
//! config.add_motion_layer(HorizontalOscillation::new(extent.mid_row()));
//! config.add_device(Device::at((10, 10)));
//!
//! let mut env = Environment::new(config).unwrap();
//! env.step();
//! assert_eq!(env.current_tick(), TickId(1));
//! assert_eq!(env.devices()[0].position, Coord::new(10, 12));
//! assert_eq!(env.sample_at(ChannelId::GREEN, Coord::new(0, 0)), -10);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stratum-core` | IDs, coordinates, devices, layer traits |
//! | [`layers`] | `stratum-layers` | Reference data and motion layers |
//! | [`engine`] | `stratum-engine` | Environment, configuration, display mapping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`stratum-core`).
///
/// Contains [`types::Coord`], [`types::Vector`], [`types::Device`], and
/// the layer traits [`types::ScalarField`] and [`types::VectorField`].
pub use stratum_core as types;

/// Reference layer implementations (`stratum-layers`).
///
/// Includes [`layers::BarCycle`], [`layers::HorizontalOscillation`],
/// and the uniform and alternating layers.
pub use stratum_layers as layers;

/// Environment orchestration (`stratum-engine`).
///
/// [`engine::Environment`] steps layers and devices; [`engine::Frame`]
/// captures displayable images.
pub use stratum_engine as engine;

/// Common imports for typical Stratum usage.
///
/// ```rust
/// use stratum::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use stratum_core::{
        ChannelId, Coord, Device, DeviceId, LayerError, LayerId, ScalarField, TickId, Vector,
        VectorField,
    };

    // Engine
    pub use stratum_engine::{
        ChannelDef, ConfigError, DeviceEdge, DisplayPolicy, Environment, EnvironmentConfig,
        Extent, Frame, Rgb, StepMetrics,
    };
}
