//! Device behavior at the edge of the visible extent.

use crate::config::Extent;
use stratum_core::Device;

/// What happens to a device that integrates outside the extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceEdge {
    /// No confinement. Devices may leave the visible extent and keep
    /// moving across the unbounded plane.
    #[default]
    Unbounded,
    /// Pin the position to the nearest in-extent cell and zero the
    /// velocity component that carried the device out.
    Clamp,
    /// Wrap the position around to the opposite edge (toroidal
    /// topology). Velocity is unchanged.
    Wrap,
}

impl DeviceEdge {
    /// Confine `device` to `extent` according to this behavior.
    ///
    /// Returns `true` if the device was relocated. An empty extent has no
    /// cell to confine to, so the device is left untouched. Dimensions
    /// above `i32::MAX` saturate; validated extents never reach that.
    pub fn confine(self, device: &mut Device, extent: Extent) -> bool {
        let (w, h) = extent.signed_dims();
        if w == 0 || h == 0 {
            return false;
        }
        match self {
            Self::Unbounded => false,
            Self::Clamp => {
                let before = device.position;
                let (x, stop_x) = clamp_axis(before.x, w);
                let (y, stop_y) = clamp_axis(before.y, h);
                if stop_x {
                    device.velocity.dx = 0;
                }
                if stop_y {
                    device.velocity.dy = 0;
                }
                device.position.x = x;
                device.position.y = y;
                device.position != before
            }
            Self::Wrap => {
                let before = device.position;
                device.position.x = before.x.rem_euclid(w);
                device.position.y = before.y.rem_euclid(h);
                device.position != before
            }
        }
    }
}

/// Clamp `v` into `[0, len)`; the flag reports whether it was out of range.
fn clamp_axis(v: i32, len: i32) -> (i32, bool) {
    if v < 0 {
        (0, true)
    } else if v >= len {
        (len - 1, true)
    } else {
        (v, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::{Coord, Vector};

    fn extent() -> Extent {
        Extent::new(10, 5)
    }

    #[test]
    fn unbounded_never_moves() {
        let mut d = Device::moving((-40, 900), (3, 3));
        assert!(!DeviceEdge::Unbounded.confine(&mut d, extent()));
        assert_eq!(d.position, Coord::new(-40, 900));
    }

    #[test]
    fn clamp_pins_and_stops_offending_axis() {
        let mut d = Device::moving((12, 2), (4, 1));
        assert!(DeviceEdge::Clamp.confine(&mut d, extent()));
        assert_eq!(d.position, Coord::new(9, 2));
        assert_eq!(d.velocity, Vector::new(0, 1));

        let mut d = Device::moving((-1, -8), (-1, -2));
        assert!(DeviceEdge::Clamp.confine(&mut d, extent()));
        assert_eq!(d.position, Coord::new(0, 0));
        assert_eq!(d.velocity, Vector::ZERO);
    }

    #[test]
    fn clamp_leaves_inside_devices_alone() {
        let mut d = Device::moving((9, 4), (5, 5));
        assert!(!DeviceEdge::Clamp.confine(&mut d, extent()));
        assert_eq!(d.velocity, Vector::new(5, 5));
    }

    #[test]
    fn wrap_is_toroidal() {
        let mut d = Device::moving((10, -1), (1, -1));
        assert!(DeviceEdge::Wrap.confine(&mut d, extent()));
        assert_eq!(d.position, Coord::new(0, 4));
        assert_eq!(d.velocity, Vector::new(1, -1));

        let mut d = Device::at((-21, 11));
        DeviceEdge::Wrap.confine(&mut d, extent());
        assert_eq!(d.position, Coord::new(9, 1));
    }

    #[test]
    fn empty_extent_leaves_device_untouched() {
        for extent in [Extent::new(0, 5), Extent::new(5, 0), Extent::new(0, 0)] {
            for edge in [DeviceEdge::Clamp, DeviceEdge::Wrap] {
                let mut d = Device::moving((-3, 7), (2, -1));
                assert!(!edge.confine(&mut d, extent));
                assert_eq!(d.position, Coord::new(-3, 7));
                assert_eq!(d.velocity, Vector::new(2, -1));
            }
        }
    }
}
