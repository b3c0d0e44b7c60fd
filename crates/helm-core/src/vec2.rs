//! 2D vector type used for positions, velocities, and steering forces.
//!
//! # Degenerate geometry
//!
//! Steering math divides by vector length in several places (normalization,
//! rescaling).  A NaN produced there would be appended to an agent's force
//! sink and corrupt the physics integration for the rest of the run, so every
//! length-dependent operation on `Vec2` is zero-guarded: the zero vector
//! normalizes to zero, rescales to zero, and has no heading.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Length below which a vector is treated as zero.
pub const EPSILON: f32 = 1e-6;

/// A 2D vector of single-precision floats.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` radians (counter-clockwise from +x).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// `true` if the vector is shorter than [`EPSILON`].
    #[inline]
    pub fn is_zero(self) -> bool {
        self.length_squared() < EPSILON * EPSILON
    }

    /// Unit vector in the same direction, or `Vec2::ZERO` for the zero vector.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len < EPSILON {
            Vec2::ZERO
        } else {
            self / len
        }
    }

    /// Rescale to `magnitude`, keeping direction.
    ///
    /// The zero vector has no direction and stays zero regardless of the
    /// requested magnitude.  A negative magnitude flips the direction.
    pub fn with_magnitude(self, magnitude: f32) -> Vec2 {
        self.normalized() * magnitude
    }

    /// Clamp the magnitude to at most `max`, keeping direction.
    pub fn limit(self, max: f32) -> Vec2 {
        let len_sq = self.length_squared();
        if len_sq > max * max {
            self * (max / len_sq.sqrt())
        } else {
            self
        }
    }

    /// Direction of the vector in radians, or `None` for the (near-)zero
    /// vector, whose heading is undefined.
    pub fn heading(self) -> Option<f32> {
        if self.is_zero() {
            None
        } else {
            Some(self.y.atan2(self.x))
        }
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotated(self, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl std::iter::Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Vec2 {
        iter.fold(Vec2::ZERO, Add::add)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
