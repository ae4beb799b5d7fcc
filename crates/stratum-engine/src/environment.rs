//! The layered simulation environment.
//!
//! [`Environment`] is the primary user-facing API. Each call to
//! [`step()`](Environment::step) advances the tick counter, steps every
//! owned layer exactly once, and integrates every device against the
//! motion layers. Between steps all queries are pure.
//!
//! # Ownership model
//!
//! `Environment` is [`Send`] (it can be moved to a simulation thread) but
//! is not meant to be shared: [`step()`](Environment::step) takes
//! `&mut self`, so the borrow checker prevents querying while a step is
//! in progress. [`devices()`](Environment::devices) returns an owned
//! snapshot that stays valid across later steps.

use std::fmt;
use std::time::Instant;

use indexmap::IndexMap;
use smallvec::SmallVec;
use stratum_core::{
    ChannelId, Coord, Device, DeviceId, ScalarField, TickId, Vector, VectorField,
};
use tracing::{debug, trace};

use crate::config::{ChannelDef, ConfigError, EnvironmentConfig, Extent};
use crate::edge::DeviceEdge;
use crate::metrics::StepMetrics;

// Compile-time assertion: Environment is Send.
// (dyn ScalarField / dyn VectorField are Send + !Sync.)
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Environment>();
    }
};

/// A discrete-time 2D environment of data layers, motion layers and devices.
///
/// Created from an [`EnvironmentConfig`] via [`new()`](Environment::new).
///
/// # Example
///
/// ```ignore
/// let mut env = Environment::new(config)?;
/// for _ in 0..100 {
///     env.step();
///     let green = env.sample_at(ChannelId::GREEN, Coord::new(3, 4));
///     let devices = env.devices();
/// }
/// ```
pub struct Environment {
    extent: Extent,
    data_layers: Vec<Box<dyn ScalarField>>,
    motion_layers: Vec<Box<dyn VectorField>>,
    channels: Vec<ChannelDef>,
    channel_index: IndexMap<String, ChannelId>,
    devices: Vec<Device>,
    edge: DeviceEdge,
    tick: TickId,
    last_metrics: StepMetrics,
}

impl Environment {
    /// Create an environment from an [`EnvironmentConfig`].
    ///
    /// Validates the configuration and takes exclusive ownership of its
    /// layers and devices. The new environment is at tick 0.
    pub fn new(config: EnvironmentConfig) -> Result<Self, ConfigError> {
        let channel_index = config.channel_index()?;
        let EnvironmentConfig {
            extent,
            data_layers,
            motion_layers,
            channels,
            devices,
            edge,
        } = config;

        debug!(
            width = extent.width,
            height = extent.height,
            data_layers = data_layers.len(),
            motion_layers = motion_layers.len(),
            channels = channels.len(),
            devices = devices.len(),
            ?edge,
            "environment created"
        );

        Ok(Self {
            extent,
            data_layers,
            motion_layers,
            channels,
            channel_index,
            devices,
            edge,
            tick: TickId(0),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance the environment by one tick.
    ///
    /// 1. Increment the tick counter.
    /// 2. Step every data layer, then every motion layer, each in
    ///    configuration order, each exactly once.
    /// 3. For every device in order: sample the summed motion layers at
    ///    the device's current position, add the sample into its
    ///    velocity, add the velocity into its position, then apply the
    ///    configured [`DeviceEdge`].
    ///
    /// Each device reads the motion layers only, never another device,
    /// so integration order does not affect the outcome.
    pub fn step(&mut self) -> &StepMetrics {
        let tick_start = Instant::now();
        self.tick = self.tick.next();

        let layer_start = Instant::now();
        for layer in &mut self.data_layers {
            layer.step();
        }
        for layer in &mut self.motion_layers {
            layer.step();
        }
        let layer_step_us = layer_start.elapsed().as_micros() as u64;

        let integration_start = Instant::now();
        let motion = &self.motion_layers;
        let mut devices_confined = 0u32;
        for (i, device) in self.devices.iter_mut().enumerate() {
            let sample: Vector = motion.iter().map(|l| l.value_at(device.position)).sum();
            device.integrate(sample);
            if self.edge.confine(device, self.extent) {
                devices_confined += 1;
                trace!(
                    tick = self.tick.0,
                    device = i,
                    position = %device.position,
                    "device confined to extent"
                );
            }
        }
        let integration_us = integration_start.elapsed().as_micros() as u64;

        self.last_metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            layer_step_us,
            integration_us,
            devices_integrated: u32::try_from(self.devices.len()).unwrap_or(u32::MAX),
            devices_confined,
        };
        trace!(
            tick = self.tick.0,
            total_us = self.last_metrics.total_us,
            devices_confined,
            "step complete"
        );
        &self.last_metrics
    }

    /// Sample `channel` at `at` for the current tick.
    ///
    /// Delegates to the channel's data layer, or returns the channel's
    /// neutral value when it is unbound. Unknown channels read as 0.
    /// Never fails, for any coordinate.
    pub fn sample_at(&self, channel: ChannelId, at: Coord) -> i32 {
        let Some(def) = self.channels.get(channel.0 as usize) else {
            return 0;
        };
        def.source
            .and_then(|layer| self.data_layers.get(layer.0 as usize))
            .map_or(def.neutral, |layer| layer.value_at(at))
    }

    /// Sample every channel at `at`, in channel order.
    pub fn sample_all(&self, at: Coord) -> SmallVec<[i32; 4]> {
        (0..self.channels.len())
            .map(|i| self.sample_at(ChannelId(i as u32), at))
            .collect()
    }

    /// Summed motion-layer sample at `at` for the current tick.
    ///
    /// This is the vector a device at `at` would accumulate on the next
    /// step if the layers were static.
    pub fn motion_at(&self, at: Coord) -> Vector {
        self.motion_layers.iter().map(|l| l.value_at(at)).sum()
    }

    /// Look up a channel by name.
    pub fn channel(&self, name: &str) -> Option<ChannelId> {
        self.channel_index.get(name).copied()
    }

    /// Channel definitions, indexed by [`ChannelId`].
    pub fn channels(&self) -> &[ChannelDef] {
        &self.channels
    }

    /// Number of output channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Snapshot of every device, in construction order.
    ///
    /// The returned vector is owned by the caller; mutating it does not
    /// affect the environment.
    pub fn devices(&self) -> Vec<Device> {
        self.devices.clone()
    }

    /// Snapshot of a single device.
    pub fn device(&self, id: DeviceId) -> Option<Device> {
        self.devices.get(id.0 as usize).copied()
    }

    /// Number of devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Current tick (0 after construction, +1 per step).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The visible world extent.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The device edge behavior.
    pub fn edge(&self) -> DeviceEdge {
        self.edge
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data: Vec<&str> = self.data_layers.iter().map(|l| l.name()).collect();
        let motion: Vec<&str> = self.motion_layers.iter().map(|l| l.name()).collect();
        f.debug_struct("Environment")
            .field("current_tick", &self.tick)
            .field("extent", &self.extent)
            .field("data_layers", &data)
            .field("motion_layers", &motion)
            .field("channels", &self.channel_index.keys().collect::<Vec<_>>())
            .field("devices", &self.devices.len())
            .field("edge", &self.edge)
            .finish()
    }
}
