//! Obstacle field: circle obstacles behind an R-tree.
//!
//! # Why an R-tree
//!
//! Obstacle avoidance probes three detector points per agent per tick.  A
//! linear scan over N obstacles per probe is O(3·N·agents); the R-tree
//! (via `rstar`) answers each point-overlap query in O(log N), which keeps
//! dense rock fields cheap.
//!
//! Obstacles are modelled as circles — position plus bounding radius — which
//! matches how the physics collaborator approximates them for detector
//! purposes.  When obstacles drift, the owner rebuilds the field with
//! [`ObstacleField::refresh`]; bulk-loading N circles is O(N log N) and at
//! game-world sizes is cheaper than maintaining incremental updates.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use helm_core::{ObstacleId, Vec2};

use crate::{WorldError, WorldResult};

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A circular obstacle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub id: ObstacleId,
    pub center: Vec2,
    pub radius: f32,
}

impl Obstacle {
    /// `true` if `point` lies inside (or on) the circle.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }
}

impl RTreeObject for Obstacle {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.center.x - self.radius, self.center.y - self.radius],
            [self.center.x + self.radius, self.center.y + self.radius],
        )
    }
}

impl PointDistance for Obstacle {
    /// Squared distance from `point` to the circle's edge (zero inside).
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let to_center = self.center.distance(Vec2::new(point[0], point[1]));
        let edge = (to_center - self.radius).max(0.0);
        edge * edge
    }

    fn contains_point(&self, point: &[f32; 2]) -> bool {
        self.contains(Vec2::new(point[0], point[1]))
    }
}

// ── ObstacleField ─────────────────────────────────────────────────────────────

/// Spatial index over all obstacles, answering the point-overlap queries the
/// avoidance detectors issue.
#[derive(Debug)]
pub struct ObstacleField {
    tree: RTree<Obstacle>,
    count: usize,
}

impl ObstacleField {
    /// An empty field.  Detector queries find nothing; avoidance becomes a
    /// no-op, which is what swarm machines want.
    pub fn empty() -> Self {
        Self {
            tree: RTree::new(),
            count: 0,
        }
    }

    /// Bulk-load a field from `(center, radius)` circles.
    ///
    /// A non-positive radius is a configuration error: a zero-size obstacle
    /// can never overlap a detector and indicates a broken loader upstream.
    pub fn from_circles<I>(circles: I) -> WorldResult<Self>
    where
        I: IntoIterator<Item = (Vec2, f32)>,
    {
        let mut obstacles = Vec::new();
        for (i, (center, radius)) in circles.into_iter().enumerate() {
            if radius <= 0.0 || !radius.is_finite() {
                return Err(WorldError::Config(format!(
                    "obstacle {i} has non-positive radius {radius}"
                )));
            }
            obstacles.push(Obstacle {
                id: ObstacleId(i as u32),
                center,
                radius,
            });
        }
        let count = obstacles.len();
        Ok(Self {
            tree: RTree::bulk_load(obstacles),
            count,
        })
    }

    /// Rebuild the index after obstacles have moved.
    pub fn refresh<I>(&mut self, circles: I) -> WorldResult<()>
    where
        I: IntoIterator<Item = (Vec2, f32)>,
    {
        *self = Self::from_circles(circles)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All obstacles whose circle contains `point`.
    ///
    /// This is the detector-overlap query: each returned obstacle
    /// contributes one repulsion force.
    pub fn overlapping(&self, point: Vec2) -> impl Iterator<Item = &Obstacle> + '_ {
        self.tree.locate_all_at_point(&[point.x, point.y])
    }

    /// All obstacles whose edge lies within `range` of `point`, nearest
    /// first.
    pub fn within(&self, point: Vec2, range: f32) -> impl Iterator<Item = &Obstacle> + '_ {
        self.tree
            .locate_within_distance([point.x, point.y], range * range)
    }

    /// The obstacle nearest to `point`, if any exist.
    pub fn nearest(&self, point: Vec2) -> Option<&Obstacle> {
        self.tree.nearest_neighbor(&[point.x, point.y])
    }

    /// Iterator over every obstacle (tree order, not id order).
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.tree.iter()
    }
}
