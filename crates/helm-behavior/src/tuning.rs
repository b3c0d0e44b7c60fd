//! Behavior tuning constants.
//!
//! Every range, radius, offset, and cooldown the states and activities use
//! is a named field here, not a literal at the use site.  Applications tweak
//! a `Tuning` per machine (fighters and swarm members usually differ) and
//! pass it through the machine's wiring.

use helm_world::ProjectileKind;

/// Named behavior constants, read by states when they rebuild their
/// activity/transition lists on entry.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    // ── Steering ──────────────────────────────────────────────────────────
    /// Arrival damping radius for `Seek`: inside it, desired speed scales
    /// linearly with distance to prevent overshoot.
    pub slow_radius: f32,

    /// `Flee` ignores threats further away than this.
    pub flee_range: f32,

    // ── Obstacle avoidance detectors ──────────────────────────────────────
    /// Detector reach when stationary.
    pub detector_base_offset: f32,

    /// Extra detector reach at full speed; scales with `|v| / max_speed`.
    pub detector_spread: f32,

    /// Angle between the center probe and each side probe, radians.
    pub detector_angle: f32,

    /// Desired speed of the repulsion response.  Deliberately lower than
    /// `max_speed`: avoidance nudges, pursuit commits.
    pub avoid_speed: f32,

    // ── Combat ranges ─────────────────────────────────────────────────────
    /// Switch from pursuit to shooting inside this distance to the target.
    pub attack_range: f32,

    /// A navigate/retreat state counts as "arrived" inside this distance.
    pub arrive_radius: f32,

    /// Health below this triggers the retreat transitions.
    pub low_health_threshold: i32,

    // ── Cooldowns ─────────────────────────────────────────────────────────
    /// Seconds between shots; the shooting state re-enters itself on this
    /// period to re-arm its one-shot `Fire`.
    pub fire_cooldown_secs: f64,

    /// Seconds between heal pulses, same re-entry mechanism.
    pub heal_cooldown_secs: f64,

    // ── Rally point offsets ───────────────────────────────────────────────
    /// How far past the current position a low-health agent runs before
    /// stopping to heal.
    pub retreat_distance: f32,

    /// Retreat distance when breaking off from a firefight.
    pub combat_retreat_distance: f32,

    /// Sidestep distance after taking damage mid-fight.
    pub sidestep_distance: f32,

    // ── Swarm ─────────────────────────────────────────────────────────────
    /// Arrival radius of the peer-attraction pull; members drift to roughly
    /// this distance from the swarm centroid rather than collapsing onto it.
    pub cohere_radius: f32,

    // ── Weapons / misc ────────────────────────────────────────────────────
    /// What `Fire` puts in the spawn queue.
    pub projectile: ProjectileKind,

    /// Per-tick velocity multiplier while shooting or healing, so the agent
    /// settles instead of coasting at full speed.
    pub settle_damping: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            slow_radius: 400.0,
            flee_range: 200.0,
            detector_base_offset: 50.0,
            detector_spread: 150.0,
            detector_angle: std::f32::consts::FRAC_PI_6,
            avoid_speed: 250.0,
            attack_range: 800.0,
            arrive_radius: 400.0,
            low_health_threshold: 10,
            fire_cooldown_secs: 1.8,
            heal_cooldown_secs: 1.2,
            retreat_distance: 3000.0,
            combat_retreat_distance: 2000.0,
            sidestep_distance: 1000.0,
            cohere_radius: 150.0,
            projectile: ProjectileKind::Laser,
            settle_damping: 0.99,
        }
    }
}
