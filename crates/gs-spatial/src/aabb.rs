//! Axis-aligned obstacle volumes and the sphere probe.
//!
//! Every static obstacle in the store (walls, shelves, counters) is an
//! [`Aabb`].  An agent is a sphere of fixed radius; a proposed position is
//! rejected when that sphere touches any box.

use gs_core::Vec3;

/// An axis-aligned bounding box in store space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centred on `center` with full extents `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// `true` if `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Point containment, boundary inclusive.
    pub fn contains(&self, p: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// The point inside the box nearest to `p`.
    #[inline]
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Squared distance from `p` to the box surface; zero inside.
    #[inline]
    pub fn distance_2(&self, p: Vec3) -> f32 {
        let d = p - self.closest_point(p);
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    /// `true` if a sphere of `radius` centred at `center` touches the box.
    #[inline]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.distance_2(center) <= radius * radius
    }
}

/// `true` if a sphere of `radius` at `point` intersects any of `obstacles`.
///
/// Linear in the number of obstacles.
pub fn collides(point: Vec3, obstacles: &[Aabb], radius: f32) -> bool {
    obstacles.iter().any(|b| b.intersects_sphere(point, radius))
}
