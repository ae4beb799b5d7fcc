//! Benchmark profiles and utilities for the Stratum framework.
//!
//! Provides pre-built [`EnvironmentConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 extent with 64 devices
//! - [`stress_profile`]: 1000x1000 extent with 10K devices
//! - [`scatter_devices`]: deterministic device placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stratum_core::{ChannelId, Device};
use stratum_engine::{EnvironmentConfig, Extent};
use stratum_layers::{AlternatingFlow, BarCycle, HorizontalOscillation};

/// Build a reference benchmark profile: 100x100 extent.
///
/// Green channel: bar cycle over the full width. Motion: horizontal
/// oscillation about the middle row plus a slow alternating drift.
/// 64 devices scattered at rest.
pub fn reference_profile(seed: u64) -> EnvironmentConfig {
    profile(Extent::new(100, 100), 64, seed)
}

/// Build a stress benchmark profile: 1000x1000 extent.
///
/// Same layers as [`reference_profile`] with 10K devices.
pub fn stress_profile(seed: u64) -> EnvironmentConfig {
    profile(Extent::new(1000, 1000), 10_000, seed)
}

fn profile(extent: Extent, devices: usize, seed: u64) -> EnvironmentConfig {
    let mut cfg = EnvironmentConfig::rgb(extent);
    let bar = cfg.add_data_layer(
        BarCycle::new(0, extent.width as i32, 0xFF, 0xFF).expect("profile band is ordered"),
    );
    cfg.bind(ChannelId::GREEN, bar)
        .expect("rgb config defines the green channel");
    cfg.add_motion_layer(HorizontalOscillation::new(extent.mid_row()));
    cfg.add_motion_layer(AlternatingFlow::new((1, 0), 8).expect("half period is non-zero"));
    cfg.devices = scatter_devices(extent, devices, seed);
    cfg
}

/// Generate `n` devices at rest, uniformly placed inside `extent`.
///
/// The same seed always yields the same placement.
pub fn scatter_devices(extent: Extent, n: usize, seed: u64) -> Vec<Device> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x = rng.random_range(0..extent.width.max(1)) as i32;
            let y = rng.random_range(0..extent.height.max(1)) as i32;
            Device::at((x, y))
        })
        .collect()
}
