//! The "spawn and register" sink.
//!
//! A `Fire` activity does not construct projectile entities itself — the
//! world owns entity lifecycles.  Instead it pushes a [`ProjectileSpawn`]
//! request into the [`SpawnQueue`]; the game-world collaborator drains the
//! queue after each tick, instantiates the projectiles, and registers them
//! with physics and the scene.

use helm_core::{AgentId, Vec2};

// ── ProjectileKind ────────────────────────────────────────────────────────────

/// Projectile presets.  Values mirror the weapon roster of the reference
/// scenario: a fast weak laser and a slow heavy saw blade.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectileKind {
    Laser,
    Saw,
}

impl ProjectileKind {
    /// Launch speed in world units per second.
    pub fn muzzle_speed(self) -> f32 {
        match self {
            ProjectileKind::Laser => 1500.0,
            ProjectileKind::Saw => 500.0,
        }
    }

    /// Mass handed to the physics collaborator at registration.
    pub fn mass(self) -> f32 {
        match self {
            ProjectileKind::Laser => 0.2,
            ProjectileKind::Saw => 5.0,
        }
    }

    /// Health subtracted from whatever this projectile hits.
    pub fn damage(self) -> i32 {
        match self {
            ProjectileKind::Laser => 1,
            ProjectileKind::Saw => 1,
        }
    }

    /// Ticks before the world despawns an unhit projectile.
    pub fn lifespan_ticks(self) -> u32 {
        200
    }
}

impl std::fmt::Display for ProjectileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectileKind::Laser => write!(f, "laser"),
            ProjectileKind::Saw => write!(f, "saw"),
        }
    }
}

// ── ProjectileSpawn ───────────────────────────────────────────────────────────

/// One pending projectile, recorded at the moment the trigger pulled.
///
/// `orientation` is the shooter's facing angle at fire time; the world
/// launches the projectile along it at [`ProjectileKind::muzzle_speed`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileSpawn {
    pub shooter: AgentId,
    pub origin: Vec2,
    pub orientation: f32,
    pub kind: ProjectileKind,
}

// ── SpawnQueue ────────────────────────────────────────────────────────────────

/// Accumulates spawn requests during the behavior phase.
///
/// Appended to by `Fire` activities, drained by the world after each tick.
/// Requests the world never drains simply accumulate — the queue imposes no
/// cap and no ordering beyond insertion.
#[derive(Debug, Default)]
pub struct SpawnQueue {
    projectiles: Vec<ProjectileSpawn>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_projectile(&mut self, spawn: ProjectileSpawn) {
        self.projectiles.push(spawn);
    }

    /// Requests accumulated since the last drain.
    pub fn pending(&self) -> &[ProjectileSpawn] {
        &self.projectiles
    }

    /// Hand all pending requests to the caller and clear the queue.
    pub fn drain(&mut self) -> Vec<ProjectileSpawn> {
        std::mem::take(&mut self.projectiles)
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}
