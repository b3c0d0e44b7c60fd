//! Steering force math.
//!
//! Pure functions converting a desired velocity into a clamped corrective
//! force.  All activity force output funnels through here, which is where
//! the two core invariants live:
//!
//! - the returned force never exceeds `max_force` in magnitude;
//! - degenerate geometry (agent exactly on its target or threat) resolves
//!   to a defined zero force, never NaN.

use helm_core::vec2::EPSILON;
use helm_core::Vec2;

/// Corrective force that nudges `velocity` toward `desired`, clamped to
/// `max_force`.
#[inline]
pub fn steer(desired: Vec2, velocity: Vec2, max_force: f32) -> Vec2 {
    (desired - velocity).limit(max_force)
}

/// Force steering an agent at `pos` with `velocity` toward `target`.
///
/// Desired speed is `max_speed`, except inside `slow_radius` (when given)
/// where it scales linearly with `distance / slow_radius` — the arrival
/// damping that prevents overshoot.
///
/// Zero distance to the target has no direction to steer along; the result
/// is `Vec2::ZERO`.
pub fn seek(
    pos:         Vec2,
    velocity:    Vec2,
    target:      Vec2,
    max_speed:   f32,
    max_force:   f32,
    slow_radius: Option<f32>,
) -> Vec2 {
    let offset = target - pos;
    let distance = offset.length();
    if distance < EPSILON {
        return Vec2::ZERO;
    }

    let speed = match slow_radius {
        Some(radius) if radius > 0.0 && distance < radius => max_speed * (distance / radius),
        _ => max_speed,
    };

    steer(offset.with_magnitude(speed), velocity, max_force)
}

/// Force steering an agent directly away from `threat` at `desired_speed`.
///
/// The mirror of [`seek`] without arrival damping.  An agent exactly on the
/// threat has no away-direction; the result is `Vec2::ZERO`.
pub fn flee(
    pos:           Vec2,
    velocity:      Vec2,
    threat:        Vec2,
    desired_speed: f32,
    max_force:     f32,
) -> Vec2 {
    let offset = pos - threat;
    if offset.length() < EPSILON {
        return Vec2::ZERO;
    }

    steer(offset.with_magnitude(desired_speed), velocity, max_force)
}
