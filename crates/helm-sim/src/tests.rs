//! Unit tests for the tick driver and reference integrator.

use helm_agent::{AgentInit, AgentStore, AgentStoreBuilder};
use helm_behavior::{StateKind, StateMachine, Target, Tuning, Wiring};
use helm_core::{AgentId, SimConfig, Tick, Vec2};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

fn config(dt: f32, total_ticks: u64) -> SimConfig {
    SimConfig {
        tick_duration_secs: dt,
        total_ticks,
        seed: 0,
        snapshot_interval_ticks: 0,
    }
}

fn store(positions: &[Vec2]) -> AgentStore {
    let mut builder = AgentStoreBuilder::new();
    for &position in positions {
        builder.push(AgentInit {
            position,
            ..AgentInit::default()
        });
    }
    builder.build()
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn rejects_machine_for_unknown_agent() {
        let machines = vec![StateMachine::fighter(
            AgentId(5),
            AgentId(0),
            vec![],
            Tuning::default(),
        )];
        let err = SimBuilder::new(config(0.1, 10), store(&[Vec2::ZERO]))
            .machines(machines)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::UnknownMachineAgent(AgentId(5))));
    }

    #[test]
    fn rejects_two_machines_for_one_agent() {
        let machines = vec![
            StateMachine::fighter(AgentId(0), AgentId(1), vec![], Tuning::default()),
            StateMachine::fighter(AgentId(0), AgentId(1), vec![], Tuning::default()),
        ];
        let err = SimBuilder::new(config(0.1, 10), store(&[Vec2::ZERO, Vec2::ZERO]))
            .machines(machines)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::DuplicateMachine(AgentId(0))));
    }

    #[test]
    fn machines_start_inactive_and_awake_activates_them() {
        let machines = vec![StateMachine::fighter(
            AgentId(0),
            AgentId(1),
            vec![],
            Tuning::default(),
        )];
        let mut sim = SimBuilder::new(config(0.1, 10), store(&[Vec2::ZERO, Vec2::new(2000.0, 0.0)]))
            .machines(machines)
            .build()
            .unwrap();

        assert_eq!(sim.machines[0].state_label(), "inactive");
        sim.awake().unwrap();
        assert_eq!(sim.machines[0].state_label(), "seeking target");
        // Idempotent: a second awake must not re-enter (which would error).
        sim.awake().unwrap();
    }
}

#[cfg(test)]
mod integrator {
    use super::*;
    use crate::integrator::{integrate, ANGULAR_DAMPING};

    #[test]
    fn net_force_is_clamped_to_max_force() {
        let mut agents = store(&[Vec2::ZERO]);
        agents.push_force(AgentId(0), Vec2::new(1000.0, 0.0));
        agents.push_force(AgentId(0), Vec2::new(0.0, 1000.0));

        integrate(&mut agents, 1.0);

        // max_force 50 acting for 1 s on a unit mass.
        assert!((agents.velocity[0].length() - 50.0).abs() < 1e-3);
        assert!(agents.pending_forces(AgentId(0)).is_empty());
    }

    #[test]
    fn speed_is_capped_at_max_speed() {
        let mut agents = store(&[Vec2::ZERO]);
        agents.velocity[0] = Vec2::new(490.0, 0.0);
        agents.push_force(AgentId(0), Vec2::new(50.0, 0.0));

        integrate(&mut agents, 10.0);
        assert!(agents.velocity[0].length() <= 500.0 + 1e-3);
    }

    #[test]
    fn dead_agents_freeze_but_their_sinks_still_clear() {
        let mut agents = store(&[Vec2::new(7.0, 8.0)]);
        agents.apply_damage(AgentId(0), 1000);
        agents.velocity[0] = Vec2::new(100.0, 0.0);
        agents.push_force(AgentId(0), Vec2::new(50.0, 0.0));

        integrate(&mut agents, 1.0);

        assert_eq!(agents.position[0], Vec2::new(7.0, 8.0));
        assert!(agents.pending_forces(AgentId(0)).is_empty());
    }

    #[test]
    fn spin_decays_each_tick() {
        let mut agents = store(&[Vec2::ZERO]);
        agents.angular_velocity[0] = 1.0;
        agents.orientation[0] = 0.0;

        integrate(&mut agents, 1.0);
        assert!((agents.angular_velocity[0] - ANGULAR_DAMPING).abs() < 1e-6);
        assert!((agents.orientation[0] - ANGULAR_DAMPING).abs() < 1e-6);
    }
}

#[cfg(test)]
mod tick_loop {
    use super::*;

    #[test]
    fn pursuit_closes_on_the_target() {
        let machines = vec![StateMachine::fighter(
            AgentId(0),
            AgentId(1),
            vec![],
            Tuning::default(),
        )];
        let mut sim = SimBuilder::new(
            config(0.1, 50),
            store(&[Vec2::ZERO, Vec2::new(2000.0, 0.0)]),
        )
        .machines(machines)
        .build()
        .unwrap();

        sim.run(&mut NoopObserver).unwrap();

        assert!(sim.agents.velocity[0].x > 0.0);
        assert!(sim.agents.position[0].x > 0.0);
        // Target has no machine and no forces: it never moves.
        assert_eq!(sim.agents.position[1], Vec2::new(2000.0, 0.0));
        // Every sink was drained on the way.
        assert!(sim.agents.pending_forces(AgentId(0)).is_empty());
        // Facing follows travel: velocity heading 0, sprite offset -π/2.
        assert!((sim.agents.orientation[0] + std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn dead_agents_are_skipped_by_the_behavior_phase() {
        let machines = vec![StateMachine::fighter(
            AgentId(0),
            AgentId(1),
            vec![],
            Tuning::default(),
        )];
        let mut sim = SimBuilder::new(
            config(0.1, 10),
            store(&[Vec2::ZERO, Vec2::new(2000.0, 0.0)]),
        )
        .machines(machines)
        .build()
        .unwrap();
        sim.awake().unwrap();
        sim.agents.apply_damage(AgentId(0), 1000);

        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.agents.position[0], Vec2::ZERO);
    }

    #[test]
    fn timed_fire_cadence_under_the_simulated_clock() {
        // dt = 0.1 s, cooldown = 1.8 s.  Fire at T0; re-arm at T18, fire at
        // T19; re-arm at T36, fire at T37.  40 ticks → exactly 3 shots,
        // every run, regardless of wall time.
        let wiring = Wiring::new(Target::Agent(AgentId(1)), Tuning::default());
        let machines = vec![StateMachine::new(AgentId(0), StateKind::PointAndShoot, wiring)];
        let mut sim = SimBuilder::new(
            config(0.1, 40),
            store(&[Vec2::ZERO, Vec2::new(500.0, 0.0)]),
        )
        .machines(machines)
        .build()
        .unwrap();

        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.spawns.pending().len(), 3);
    }

    #[test]
    fn swarm_pull_signal_flips_mid_run() {
        let machines = vec![StateMachine::swarm_member(
            AgentId(0),
            AgentId(1),
            vec![],
            Tuning::default(),
        )];
        let mut sim = SimBuilder::new(
            config(0.1, 100),
            store(&[Vec2::ZERO, Vec2::new(1500.0, 0.0)]),
        )
        .machines(machines)
        .build()
        .unwrap();

        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.machines[0].state_label(), "waiting for pull");
        let parked = sim.agents.position[0];

        sim.signals.swarm_pull = true;
        sim.run_ticks(30, &mut NoopObserver).unwrap();
        assert_eq!(sim.machines[0].state_label(), "pursuing");
        assert!(sim.agents.position[0].x > parked.x);
    }
}

#[cfg(test)]
mod observers {
    use super::*;

    #[derive(Default)]
    struct Counting {
        starts: usize,
        ends: usize,
        snapshots: usize,
        sim_ends: usize,
    }

    impl SimObserver for Counting {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, _live: usize) {
            self.ends += 1;
        }
        fn on_snapshot(
            &mut self,
            _tick: Tick,
            _agents: &AgentStore,
            _machines: &[StateMachine],
        ) {
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, _final_tick: Tick) {
            self.sim_ends += 1;
        }
    }

    #[test]
    fn hooks_fire_at_the_documented_cadence() {
        let mut cfg = config(0.1, 5);
        cfg.snapshot_interval_ticks = 2;
        let mut sim = SimBuilder::new(cfg, store(&[Vec2::ZERO]))
            .build()
            .unwrap();

        let mut observer = Counting::default();
        sim.run(&mut observer).unwrap();

        assert_eq!(observer.starts, 5);
        assert_eq!(observer.ends, 5);
        // Snapshots on ticks 0, 2, 4.
        assert_eq!(observer.snapshots, 3);
        assert_eq!(observer.sim_ends, 1);
    }

    #[test]
    fn live_count_reflects_deaths() {
        struct LastLive(usize);
        impl SimObserver for LastLive {
            fn on_tick_end(&mut self, _tick: Tick, live: usize) {
                self.0 = live;
            }
        }

        let mut sim = SimBuilder::new(config(0.1, 1), store(&[Vec2::ZERO, Vec2::ZERO]))
            .build()
            .unwrap();
        sim.agents.apply_damage(AgentId(1), 1000);

        let mut observer = LastLive(usize::MAX);
        sim.run(&mut observer).unwrap();
        assert_eq!(observer.0, 1);
    }
}
