//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a scalar data layer within an environment.
///
/// Data layers are registered at environment creation and assigned
/// sequential IDs. `LayerId(n)` corresponds to the n-th data layer in
/// the environment configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u32);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LayerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies an output channel within an environment.
///
/// `ChannelId(n)` corresponds to the n-th channel definition. In the
/// conventional RGB layout channels 0, 1 and 2 are red, green and blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub u32);

impl ChannelId {
    /// Red display channel in the RGB layout.
    pub const RED: ChannelId = ChannelId(0);
    /// Green display channel in the RGB layout.
    pub const GREEN: ChannelId = ChannelId(1);
    /// Blue display channel in the RGB layout.
    pub const BLUE: ChannelId = ChannelId(2);
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChannelId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a device by its construction index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeviceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the environment advances one step. An
/// environment that has never been stepped is at `TickId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
