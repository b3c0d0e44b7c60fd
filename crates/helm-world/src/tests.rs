//! Unit tests for helm-world.

use helm_core::{AgentId, ObstacleId, Vec2};

use crate::{ObstacleField, ProjectileKind, ProjectileSpawn, SpawnQueue};

#[cfg(test)]
mod obstacle_field {
    use super::*;

    fn field() -> ObstacleField {
        ObstacleField::from_circles([
            (Vec2::new(0.0, 0.0), 50.0),
            (Vec2::new(200.0, 0.0), 30.0),
            (Vec2::new(0.0, 300.0), 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn overlap_inside_circle() {
        let f = field();
        let hits: Vec<_> = f.overlapping(Vec2::new(10.0, 10.0)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ObstacleId(0));
    }

    #[test]
    fn overlap_on_edge_counts() {
        let f = field();
        let hits: Vec<_> = f.overlapping(Vec2::new(50.0, 0.0)).collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn no_overlap_outside() {
        let f = field();
        assert_eq!(f.overlapping(Vec2::new(100.0, 100.0)).count(), 0);
    }

    #[test]
    fn overlapping_circles_both_report() {
        let f = ObstacleField::from_circles([
            (Vec2::new(0.0, 0.0), 60.0),
            (Vec2::new(50.0, 0.0), 60.0),
        ])
        .unwrap();
        assert_eq!(f.overlapping(Vec2::new(25.0, 0.0)).count(), 2);
    }

    #[test]
    fn within_range_uses_edge_distance() {
        let f = field();
        // 120 from origin: circle 0's edge is 70 away, circle 1's edge is 50.
        let near: Vec<_> = f.within(Vec2::new(120.0, 0.0), 60.0).collect();
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].id, ObstacleId(1));
    }

    #[test]
    fn nearest_and_empty() {
        let f = field();
        assert_eq!(f.nearest(Vec2::new(190.0, 5.0)).unwrap().id, ObstacleId(1));
        assert!(ObstacleField::empty().nearest(Vec2::ZERO).is_none());
        assert_eq!(ObstacleField::empty().overlapping(Vec2::ZERO).count(), 0);
    }

    #[test]
    fn non_positive_radius_rejected() {
        assert!(ObstacleField::from_circles([(Vec2::ZERO, 0.0)]).is_err());
        assert!(ObstacleField::from_circles([(Vec2::ZERO, -3.0)]).is_err());
    }

    #[test]
    fn refresh_replaces_contents() {
        let mut f = field();
        f.refresh([(Vec2::new(1000.0, 1000.0), 5.0)]).unwrap();
        assert_eq!(f.len(), 1);
        assert_eq!(f.overlapping(Vec2::new(10.0, 10.0)).count(), 0);
    }
}

#[cfg(test)]
mod spawn_queue {
    use super::*;

    #[test]
    fn push_pending_drain() {
        let mut q = SpawnQueue::new();
        q.push_projectile(ProjectileSpawn {
            shooter: AgentId(3),
            origin: Vec2::new(5.0, 6.0),
            orientation: 1.0,
            kind: ProjectileKind::Laser,
        });
        assert_eq!(q.len(), 1);
        assert_eq!(q.pending()[0].shooter, AgentId(3));

        let drained = q.drain();
        assert_eq!(drained.len(), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn kind_presets() {
        assert!(ProjectileKind::Laser.muzzle_speed() > ProjectileKind::Saw.muzzle_speed());
        assert!(ProjectileKind::Saw.mass() > ProjectileKind::Laser.mass());
        assert_eq!(ProjectileKind::Laser.to_string(), "laser");
    }
}
