//! Collision probe implementations.
//!
//! The behavior engine only ever asks one question: "would an agent at this
//! point overlap an obstacle?".  [`CollisionProbe`] is that question as a
//! trait so the engine does not care how the obstacles are stored.
//!
//! | Type            | Strategy                                  |
//! |-----------------|-------------------------------------------|
//! | `ObstacleList`  | linear scan over every box                |
//! | `ObstacleIndex` | R-tree nearest box, then exact sphere test |
//!
//! Both give identical answers for the same obstacle set.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use gs_core::Vec3;

use crate::aabb::{collides, Aabb};

/// Radius of the sphere used to represent an agent.
pub const DEFAULT_AGENT_RADIUS: f32 = 0.5;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Point/sphere-vs-obstacle intersection test.
///
/// `Send + Sync + 'static` so a probe can live inside a `Sim` that is moved
/// between threads by the caller.
pub trait CollisionProbe: Send + Sync + 'static {
    /// `true` if a sphere of `radius` at `point` touches any obstacle.
    fn collides(&self, point: Vec3, radius: f32) -> bool;

    /// Number of obstacle volumes known to the probe.
    fn obstacle_count(&self) -> usize;
}

// ── ObstacleList ──────────────────────────────────────────────────────────────

/// Plain obstacle vector; every probe scans all boxes.
#[derive(Clone, Debug, Default)]
pub struct ObstacleList {
    boxes: Vec<Aabb>,
}

impl ObstacleList {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }
}

impl CollisionProbe for ObstacleList {
    #[inline]
    fn collides(&self, point: Vec3, radius: f32) -> bool {
        collides(point, &self.boxes, radius)
    }

    fn obstacle_count(&self) -> usize {
        self.boxes.len()
    }
}

// ── ObstacleIndex ─────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: one obstacle box.
#[derive(Clone)]
struct ObstacleEntry {
    aabb: Aabb,
}

impl RTreeObject for ObstacleEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        let Aabb { min, max } = self.aabb;
        AABB::from_corners([min.x, min.y, min.z], [max.x, max.y, max.z])
    }
}

impl PointDistance for ObstacleEntry {
    /// Squared distance from the query point to the box, zero inside.
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        self.aabb.distance_2(Vec3::new(point[0], point[1], point[2]))
    }
}

/// R-tree backed probe.
///
/// The nearest box to the query point is the only one that can decide the
/// answer: if it is farther than `radius`, every other box is too.
pub struct ObstacleIndex {
    tree:  RTree<ObstacleEntry>,
    count: usize,
}

impl ObstacleIndex {
    /// Bulk-load the index from a set of boxes.
    pub fn new(boxes: &[Aabb]) -> Self {
        let entries: Vec<ObstacleEntry> =
            boxes.iter().map(|&aabb| ObstacleEntry { aabb }).collect();
        Self {
            count: entries.len(),
            tree:  RTree::bulk_load(entries),
        }
    }
}

impl CollisionProbe for ObstacleIndex {
    fn collides(&self, point: Vec3, radius: f32) -> bool {
        self.tree
            .nearest_neighbor(&[point.x, point.y, point.z])
            .is_some_and(|e| e.aabb.intersects_sphere(point, radius))
    }

    fn obstacle_count(&self) -> usize {
        self.count
    }
}
