//! Store-space coordinates.
//!
//! The store lives on the `x`/`z` floor plane with `y` pointing up.  Agents
//! move on the floor only, so every distance used for arrival checks is the
//! planar `x`/`z` distance; `y` is carried along so collision probes can test
//! a sphere at the agent's real height.

use std::ops::{Add, Mul, Sub};

/// A point or direction in store space, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Planar distance on the floor, ignoring height.
    #[inline]
    pub fn distance_xz(self, other: Vec3) -> f32 {
        (other.x - self.x).hypot(other.z - self.z)
    }

    /// Euclidean length of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector on the floor plane pointing from `self` towards `target`.
    ///
    /// Returns `None` when the two points coincide on the floor.
    pub fn direction_xz(self, target: Vec3) -> Option<Vec3> {
        let dx = target.x - self.x;
        let dz = target.z - self.z;
        let len = dx.hypot(dz);
        if len <= f32::EPSILON {
            return None;
        }
        Some(Vec3::new(dx / len, 0.0, dz / len))
    }

    /// Floor-plane perpendicular rotated a quarter turn to the left.
    #[inline]
    pub fn perp_left(self) -> Vec3 {
        Vec3::new(-self.z, 0.0, self.x)
    }

    /// Floor-plane perpendicular rotated a quarter turn to the right.
    #[inline]
    pub fn perp_right(self) -> Vec3 {
        Vec3::new(self.z, 0.0, -self.x)
    }

    /// Same point with a different height.
    #[inline]
    pub fn with_y(self, y: f32) -> Vec3 {
        Vec3 { y, ..self }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
