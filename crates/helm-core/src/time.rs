//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to seconds is held in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! Timed behavior decisions do not read a clock themselves — they capture a
//! start time from the per-tick context and compare against the context's
//! current time.  Which time the context carries is the integrator's choice,
//! expressed as a [`TimeSource`]:
//!
//! - `Simulated` derives seconds from the tick counter.  Deterministic:
//!   the same tick sequence always produces the same timed transitions,
//!   which is what replay and tests want.
//! - `WallClock` reads real elapsed time, so timed transitions track the
//!   frame rate of the hosting game loop rather than the simulation step.
//!
//! The default tick duration is 1/60 s (one display frame).  Applications
//! that step differently set `tick_duration_secs` accordingly; the rest of
//! the engine is agnostic.

use std::fmt;
use std::time::Instant;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 60 ticks per second a u64 lasts ~9.7 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and elapsed seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many seconds one tick represents.  Default: 1/60.
    pub tick_duration_secs: f32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(tick_duration_secs: f32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.tick_duration_secs as f64
    }

    /// How many ticks span `secs` seconds? (rounds up — a timed transition
    /// never fires early)
    #[inline]
    pub fn ticks_for_secs(&self, secs: f64) -> u64 {
        (secs / self.tick_duration_secs as f64).ceil() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── TimeSource ────────────────────────────────────────────────────────────────

/// Which notion of "now" timed decisions observe.
///
/// Wall-clock anchoring makes cooldowns track real frame time, but is not
/// reproducible under fixed-seed replay.  Both sources are provided; the
/// integrator binds one when assembling the per-tick context.
#[derive(Debug)]
pub enum TimeSource {
    /// Seconds derived from the tick counter.  Deterministic; the default.
    Simulated,
    /// Real elapsed time since the source was created.
    WallClock { start: Instant },
}

impl TimeSource {
    /// A wall-clock source anchored at the moment of this call.
    pub fn wall_clock() -> Self {
        TimeSource::WallClock {
            start: Instant::now(),
        }
    }

    /// Current time in seconds under this source.
    pub fn now_secs(&self, clock: &SimClock) -> f64 {
        match self {
            TimeSource::Simulated => clock.elapsed_secs(),
            TimeSource::WallClock { start } => start.elapsed().as_secs_f64(),
        }
    }
}

impl Default for TimeSource {
    fn default() -> Self {
        TimeSource::Simulated
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Default: 1/60.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate.  For 10 s at 60 ticks/s: 600.
    pub total_ticks: u64,

    /// Master RNG seed for scenario assembly.  The engine itself is RNG-free;
    /// this exists so demo/world setup is reproducible.
    pub seed: u64,

    /// Snapshot observers fire every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs: 1.0 / 60.0,
            total_ticks: 600,
            seed: 0,
            snapshot_interval_ticks: 0,
        }
    }
}
