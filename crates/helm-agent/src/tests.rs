//! Unit tests for helm-agent.

use helm_core::{AgentId, Vec2};

use crate::{AgentInit, AgentStoreBuilder};

fn two_agent_store() -> crate::AgentStore {
    let mut builder = AgentStoreBuilder::new();
    builder.push(AgentInit::default());
    builder.push(AgentInit {
        position: Vec2::new(10.0, 0.0),
        health: 30,
        ..AgentInit::default()
    });
    builder.build()
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn push_order_matches_agent_ids() {
        let mut b = AgentStoreBuilder::new();
        let a = b.push(AgentInit::default());
        let c = b.push(AgentInit {
            position: Vec2::new(1.0, 2.0),
            ..AgentInit::default()
        });
        assert_eq!(a, AgentId(0));
        assert_eq!(c, AgentId(1));

        let store = b.build();
        assert_eq!(store.count, 2);
        assert_eq!(store.pos(c), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn agents_start_alive_at_full_health() {
        let store = two_agent_store();
        assert!(store.is_alive(AgentId(1)));
        assert_eq!(store.health[1], 30);
        assert_eq!(store.max_health[1], 30);
        assert!(store.pending_forces(AgentId(1)).is_empty());
    }
}

#[cfg(test)]
mod forces {
    use super::*;

    #[test]
    fn push_then_drain_clears_sink() {
        let mut store = two_agent_store();
        let a = AgentId(0);
        store.push_force(a, Vec2::new(3.0, 0.0));
        store.push_force(a, Vec2::new(0.0, 4.0));
        assert_eq!(store.pending_forces(a).len(), 2);

        let net = store.drain_net_force(a);
        assert_eq!(net, Vec2::new(3.0, 4.0));
        assert!(store.pending_forces(a).is_empty());
    }

    #[test]
    fn drain_is_per_agent() {
        let mut store = two_agent_store();
        store.push_force(AgentId(0), Vec2::new(1.0, 0.0));
        store.push_force(AgentId(1), Vec2::new(0.0, 1.0));

        assert_eq!(store.drain_net_force(AgentId(0)), Vec2::new(1.0, 0.0));
        assert_eq!(store.pending_forces(AgentId(1)).len(), 1);
    }

    #[test]
    fn empty_sink_drains_to_zero() {
        let mut store = two_agent_store();
        assert_eq!(store.drain_net_force(AgentId(0)), Vec2::ZERO);
    }
}

#[cfg(test)]
mod health {
    use super::*;

    #[test]
    fn damage_floors_at_zero_and_kills() {
        let mut store = two_agent_store();
        let a = AgentId(0);
        store.apply_damage(a, 5);
        assert_eq!(store.health[0], 15);
        assert!(store.is_alive(a));

        store.apply_damage(a, 100);
        assert_eq!(store.health[0], 0);
        assert!(!store.is_alive(a));
    }

    #[test]
    fn heal_caps_at_max_health() {
        let mut store = two_agent_store();
        let a = AgentId(0);
        store.apply_damage(a, 3);
        store.heal_by(a, 1);
        assert_eq!(store.health[0], 18);
        store.heal_by(a, 1000);
        assert_eq!(store.health[0], store.max_health[0]);
    }
}

#[cfg(test)]
mod kinematics {
    use super::*;

    #[test]
    fn speed_fraction_clamps_and_guards_zero_max() {
        let mut store = two_agent_store();
        store.velocity[0] = Vec2::new(250.0, 0.0);
        assert!((store.speed_fraction(AgentId(0)) - 0.5).abs() < 1e-6);

        store.velocity[0] = Vec2::new(9999.0, 0.0);
        assert_eq!(store.speed_fraction(AgentId(0)), 1.0);

        store.max_speed[0] = 0.0;
        assert_eq!(store.speed_fraction(AgentId(0)), 0.0);
    }
}
