//! Unit tests for helm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ObstacleId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ObstacleId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn length_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
        assert!((Vec2::ZERO.distance(v) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        assert_eq!(Vec2::ZERO.with_magnitude(500.0), Vec2::ZERO);
    }

    #[test]
    fn zero_vector_never_produces_nan() {
        let v = Vec2::ZERO.with_magnitude(123.0);
        assert!(v.x.is_finite() && v.y.is_finite());
        let n = Vec2::new(1e-9, -1e-9).normalized();
        assert!(n.x.is_finite() && n.y.is_finite());
    }

    #[test]
    fn with_magnitude_rescales() {
        let v = Vec2::new(10.0, 0.0).with_magnitude(3.0);
        assert!((v.x - 3.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn negative_magnitude_flips_direction() {
        let v = Vec2::new(10.0, 0.0).with_magnitude(-2.0);
        assert!((v.x + 2.0).abs() < 1e-6);
    }

    #[test]
    fn limit_clamps_long_vectors_only() {
        let long = Vec2::new(30.0, 40.0).limit(5.0);
        assert!((long.length() - 5.0).abs() < 1e-4);
        let short = Vec2::new(1.0, 1.0).limit(5.0);
        assert_eq!(short, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn heading_of_zero_is_none() {
        assert!(Vec2::ZERO.heading().is_none());
        let h = Vec2::new(0.0, 1.0).heading().unwrap();
        assert!((h - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn rotated_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated(std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sum_of_forces() {
        let net: Vec2 = [Vec2::new(1.0, 2.0), Vec2::new(-0.5, 0.5)]
            .into_iter()
            .sum();
        assert_eq!(net, Vec2::new(0.5, 2.5));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick, TimeSource};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(1.0 / 60.0);
        assert_eq!(clock.ticks_for_secs(1.0), 60);
        // a partial tick still counts
        assert_eq!(clock.ticks_for_secs(0.001), 1);
    }

    #[test]
    fn simulated_source_tracks_ticks_not_wall_time() {
        let mut clock = SimClock::new(1.0);
        let source = TimeSource::Simulated;
        assert_eq!(source.now_secs(&clock), 0.0);
        for _ in 0..100 {
            clock.advance();
        }
        // 100 simulated seconds elapse instantly in wall time.
        assert!((source.now_secs(&clock) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn wall_clock_source_ignores_ticks() {
        let clock = SimClock::new(1000.0);
        let source = TimeSource::wall_clock();
        // No real time has passed, regardless of tick resolution.
        assert!(source.now_secs(&clock) < 1.0);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            total_ticks: 600,
            ..SimConfig::default()
        };
        assert_eq!(cfg.end_tick(), Tick(600));
        assert!((cfg.make_clock().tick_duration_secs - 1.0 / 60.0).abs() < 1e-9);
    }
}
