//! Planar integer coordinates and vectors.
//!
//! All arithmetic wraps on overflow. Devices accumulate velocity without
//! bound, so a long-running environment can drive positions arbitrarily
//! far from the origin; wrapping keeps integration total and
//! deterministic in both debug and release builds.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg};

/// An integer position on the unbounded sampling plane.
///
/// No bounds are enforced by the type; validity with respect to a
/// visible extent is a contract of the owning environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Horizontal component (column).
    pub x: i32,
    /// Vertical component (row).
    pub y: i32,
}

impl Coord {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Vector> for Coord {
    type Output = Coord;

    fn add(self, v: Vector) -> Coord {
        Coord {
            x: self.x.wrapping_add(v.dx),
            y: self.y.wrapping_add(v.dy),
        }
    }
}

impl AddAssign<Vector> for Coord {
    fn add_assign(&mut self, v: Vector) {
        *self = *self + v;
    }
}

/// An integer displacement: a velocity or a motion-layer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    /// Horizontal component.
    pub dx: i32,
    /// Vertical component.
    pub dy: i32,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector { dx: 0, dy: 0 };

    /// Create a vector from its components.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Returns `true` if both components are zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl From<(i32, i32)> for Vector {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self { dx, dy }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector {
            dx: self.dx.wrapping_add(other.dx),
            dy: self.dy.wrapping_add(other.dy),
        }
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            dx: self.dx.wrapping_neg(),
            dy: self.dy.wrapping_neg(),
        }
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::ZERO, |acc, v| acc + v)
    }
}
