//! Environment configuration, validation, and error types.
//!
//! [`EnvironmentConfig`] is the builder-input for constructing an
//! [`Environment`](crate::Environment). [`validate()`](EnvironmentConfig::validate)
//! checks structural invariants up front so that a misconfigured
//! environment fails at construction instead of sampling wrongly later.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use stratum_core::{ChannelId, Device, DeviceId, LayerError, LayerId, ScalarField, VectorField};

use crate::edge::DeviceEdge;

// ── Extent ─────────────────────────────────────────────────────────

/// The visible world extent: cells `0..width` × `0..height`.
///
/// Sampling is defined on the whole integer plane; the extent only
/// bounds what a renderer captures and, for bounded [`DeviceEdge`]
/// variants, where devices may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Extent {
    /// Create an extent.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether `(x, y)` lies inside the extent.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        u32::try_from(x).is_ok_and(|x| x < self.width)
            && u32::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// The row used as vertical midline (`height / 2`).
    pub fn mid_row(&self) -> i32 {
        self.signed_dims().1 / 2
    }

    /// Dimensions as `i32`, saturating. Validated extents never saturate.
    pub(crate) fn signed_dims(&self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}

// ── ChannelDef ─────────────────────────────────────────────────────

/// Definition of an output channel.
///
/// A channel either delegates to a data layer or, when unbound, reports
/// a fixed neutral value at every coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelDef {
    /// Unique name used for lookup and debugging (e.g. `"green"`).
    pub name: String,
    /// Data layer feeding this channel, if any.
    pub source: Option<LayerId>,
    /// Value reported when `source` is `None`.
    pub neutral: i32,
}

impl ChannelDef {
    /// An unbound channel with neutral value 0.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            neutral: 0,
        }
    }

    /// A channel fed by `layer`.
    pub fn bound(name: impl Into<String>, layer: LayerId) -> Self {
        Self {
            name: name.into(),
            source: Some(layer),
            neutral: 0,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EnvironmentConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The extent has zero width or zero height.
    EmptyExtent,
    /// A dimension of the extent does not fit in `i32`.
    ExtentTooLarge {
        /// The configured extent.
        extent: Extent,
    },
    /// Neither data layers nor motion layers were configured.
    NoLayers,
    /// No output channels were configured.
    NoChannels,
    /// A channel references a data layer that does not exist.
    UnknownLayer {
        /// Name of the referencing channel.
        channel: String,
        /// The missing layer.
        layer: LayerId,
    },
    /// A binding referenced a channel that does not exist.
    UnknownChannel {
        /// The missing channel.
        channel: ChannelId,
    },
    /// Two channels share a name.
    DuplicateChannel {
        /// The repeated name.
        name: String,
    },
    /// A layer, channel, or device count exceeds `u32::MAX`.
    CountOverflow {
        /// Which collection overflowed.
        what: &'static str,
        /// The offending count.
        value: usize,
    },
    /// A layer rejected its construction parameters.
    Layer(LayerError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent => write!(f, "extent has zero area"),
            Self::ExtentTooLarge { extent } => write!(
                f,
                "extent {}x{} exceeds i32::MAX in some dimension",
                extent.width, extent.height
            ),
            Self::NoLayers => write!(f, "no data or motion layers configured"),
            Self::NoChannels => write!(f, "no output channels configured"),
            Self::UnknownLayer { channel, layer } => {
                write!(f, "channel '{channel}' references unknown layer {layer}")
            }
            Self::UnknownChannel { channel } => write!(f, "unknown channel {channel}"),
            Self::DuplicateChannel { name } => write!(f, "duplicate channel name '{name}'"),
            Self::CountOverflow { what, value } => {
                write!(f, "{what} count {value} exceeds u32::MAX")
            }
            Self::Layer(e) => write!(f, "layer: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayerError> for ConfigError {
    fn from(e: LayerError) -> Self {
        Self::Layer(e)
    }
}

// ── EnvironmentConfig ──────────────────────────────────────────────

/// Complete configuration for constructing an environment.
///
/// Consumed by [`Environment::new()`](crate::Environment::new). Fields
/// are public so configurations can be written as struct literals; the
/// helper methods cover the common incremental style.
pub struct EnvironmentConfig {
    /// Visible world extent.
    pub extent: Extent,
    /// Scalar data layers. `LayerId(n)` corresponds to `data_layers[n]`.
    pub data_layers: Vec<Box<dyn ScalarField>>,
    /// Motion layers, summed component-wise during device integration.
    pub motion_layers: Vec<Box<dyn VectorField>>,
    /// Output channels. `ChannelId(n)` corresponds to `channels[n]`.
    pub channels: Vec<ChannelDef>,
    /// Initial devices. `DeviceId(n)` corresponds to `devices[n]`.
    pub devices: Vec<Device>,
    /// Device behavior at the edge of the extent.
    pub edge: DeviceEdge,
}

impl EnvironmentConfig {
    /// An empty configuration with three unbound channels named `red`,
    /// `green` and `blue` ([`ChannelId::RED`] etc.).
    pub fn rgb(extent: Extent) -> Self {
        Self {
            extent,
            data_layers: Vec::new(),
            motion_layers: Vec::new(),
            channels: vec![
                ChannelDef::unbound("red"),
                ChannelDef::unbound("green"),
                ChannelDef::unbound("blue"),
            ],
            devices: Vec::new(),
            edge: DeviceEdge::default(),
        }
    }

    /// Register a data layer, returning its ID.
    pub fn add_data_layer(&mut self, layer: impl ScalarField) -> LayerId {
        self.data_layers.push(Box::new(layer));
        LayerId(saturating_u32(self.data_layers.len() - 1))
    }

    /// Register a motion layer.
    pub fn add_motion_layer(&mut self, layer: impl VectorField) {
        self.motion_layers.push(Box::new(layer));
    }

    /// Add an initial device, returning its ID.
    pub fn add_device(&mut self, device: Device) -> DeviceId {
        self.devices.push(device);
        DeviceId(saturating_u32(self.devices.len() - 1))
    }

    /// Feed `channel` from `layer`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownChannel`] if `channel` is not
    /// defined. Unknown layers are caught by [`validate()`](Self::validate).
    pub fn bind(&mut self, channel: ChannelId, layer: LayerId) -> Result<(), ConfigError> {
        let def = self
            .channels
            .get_mut(channel.0 as usize)
            .ok_or(ConfigError::UnknownChannel { channel })?;
        def.source = Some(layer);
        Ok(())
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.channel_index().map(|_| ())
    }

    /// Validate, and build the name → channel lookup on success.
    pub(crate) fn channel_index(&self) -> Result<IndexMap<String, ChannelId>, ConfigError> {
        // 1. Extent must have area and fit the signed coordinate space.
        if self.extent.cell_count() == 0 {
            return Err(ConfigError::EmptyExtent);
        }
        if i32::try_from(self.extent.width).is_err() || i32::try_from(self.extent.height).is_err()
        {
            return Err(ConfigError::ExtentTooLarge {
                extent: self.extent,
            });
        }
        // 2. At least one layer of either kind.
        if self.data_layers.is_empty() && self.motion_layers.is_empty() {
            return Err(ConfigError::NoLayers);
        }
        // 3. At least one channel.
        if self.channels.is_empty() {
            return Err(ConfigError::NoChannels);
        }
        // 4. Every ID space must fit in u32.
        for (what, value) in [
            ("data layer", self.data_layers.len()),
            ("motion layer", self.motion_layers.len()),
            ("channel", self.channels.len()),
            ("device", self.devices.len()),
        ] {
            if u32::try_from(value).is_err() {
                return Err(ConfigError::CountOverflow { what, value });
            }
        }
        // 5. Channel bindings must resolve, and names must be unique.
        let mut index = IndexMap::with_capacity(self.channels.len());
        for (i, def) in self.channels.iter().enumerate() {
            if let Some(layer) = def.source {
                if layer.0 as usize >= self.data_layers.len() {
                    return Err(ConfigError::UnknownLayer {
                        channel: def.name.clone(),
                        layer,
                    });
                }
            }
            let id = ChannelId(saturating_u32(i));
            if index.insert(def.name.clone(), id).is_some() {
                return Err(ConfigError::DuplicateChannel {
                    name: def.name.clone(),
                });
            }
        }
        Ok(index)
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl fmt::Debug for EnvironmentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data: Vec<&str> = self.data_layers.iter().map(|l| l.name()).collect();
        let motion: Vec<&str> = self.motion_layers.iter().map(|l| l.name()).collect();
        f.debug_struct("EnvironmentConfig")
            .field("extent", &self.extent)
            .field("data_layers", &data)
            .field("motion_layers", &motion)
            .field("channels", &self.channels)
            .field("devices", &self.devices.len())
            .field("edge", &self.edge)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_test_utils::{FixedScalar, FixedVector};

    fn valid_config() -> EnvironmentConfig {
        let mut cfg = EnvironmentConfig::rgb(Extent::new(64, 32));
        let layer = cfg.add_data_layer(FixedScalar::new(7));
        cfg.bind(ChannelId::GREEN, layer).unwrap();
        cfg.add_motion_layer(FixedVector::new((0, 1)));
        cfg.add_device(Device::at((1, 1)));
        cfg
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn rgb_defines_three_named_channels() {
        let cfg = EnvironmentConfig::rgb(Extent::new(1, 1));
        let names: Vec<&str> = cfg.channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["red", "green", "blue"]);
        assert!(cfg.channels.iter().all(|c| c.source.is_none()));
    }

    #[test]
    fn validate_empty_extent_fails() {
        let mut cfg = valid_config();
        cfg.extent = Extent::new(0, 10);
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyExtent));
    }

    #[test]
    fn validate_oversized_extent_fails() {
        let mut cfg = valid_config();
        cfg.extent = Extent::new(u32::MAX, 1);
        match cfg.validate() {
            Err(ConfigError::ExtentTooLarge { .. }) => {}
            other => panic!("expected ExtentTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn validate_no_layers_fails() {
        let mut cfg = valid_config();
        cfg.data_layers.clear();
        cfg.motion_layers.clear();
        cfg.channels[1].source = None;
        assert_eq!(cfg.validate(), Err(ConfigError::NoLayers));
    }

    #[test]
    fn motion_only_config_is_valid() {
        let mut cfg = valid_config();
        cfg.data_layers.clear();
        cfg.channels[1].source = None;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_no_channels_fails() {
        let mut cfg = valid_config();
        cfg.channels.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::NoChannels));
    }

    #[test]
    fn validate_unknown_layer_fails() {
        let mut cfg = valid_config();
        cfg.channels[0].source = Some(LayerId(9));
        match cfg.validate() {
            Err(ConfigError::UnknownLayer { channel, layer }) => {
                assert_eq!(channel, "red");
                assert_eq!(layer, LayerId(9));
            }
            other => panic!("expected UnknownLayer, got {other:?}"),
        }
    }

    #[test]
    fn validate_duplicate_channel_fails() {
        let mut cfg = valid_config();
        cfg.channels.push(ChannelDef::unbound("green"));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DuplicateChannel {
                name: "green".into()
            })
        );
    }

    #[test]
    fn bind_unknown_channel_fails() {
        let mut cfg = valid_config();
        assert_eq!(
            cfg.bind(ChannelId(3), LayerId(0)),
            Err(ConfigError::UnknownChannel {
                channel: ChannelId(3)
            })
        );
    }

    #[test]
    fn add_helpers_return_sequential_ids() {
        let mut cfg = EnvironmentConfig::rgb(Extent::new(4, 4));
        assert_eq!(cfg.add_data_layer(FixedScalar::new(0)), LayerId(0));
        assert_eq!(cfg.add_data_layer(FixedScalar::new(1)), LayerId(1));
        assert_eq!(cfg.add_device(Device::default()), DeviceId(0));
        assert_eq!(cfg.add_device(Device::default()), DeviceId(1));
    }

    #[test]
    fn layer_error_converts_and_chains() {
        let err: ConfigError = LayerError::InvalidBand { left: 3, right: 1 }.into();
        assert!(err.to_string().starts_with("layer: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn extent_contains_and_midline() {
        let e = Extent::new(10, 7);
        assert!(e.contains(0, 0));
        assert!(e.contains(9, 6));
        assert!(!e.contains(10, 0));
        assert!(!e.contains(-1, 3));
        assert_eq!(e.mid_row(), 3);
        assert_eq!(e.cell_count(), 70);
    }

    #[test]
    fn debug_lists_layer_names() {
        let dbg = format!("{:?}", valid_config());
        assert!(dbg.contains("fixed_scalar"));
        assert!(dbg.contains("fixed_vector"));
    }
}
