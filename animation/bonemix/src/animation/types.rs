//! Vector and quaternion primitives for channel sampling

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Below this distance from `|dot| == 1` slerp falls back to a linear blend
/// of the coefficients, since `sin(omega)` approaches zero.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.000_001;

/// Quaternion representation for rotations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create a new quaternion
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Four-component dot product
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Component-wise negation (same rotation, opposite hemisphere)
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Shortest-arc spherical linear interpolation.
    ///
    /// `other` is flipped onto the hemisphere of `self` when the dot product
    /// is negative. Nearly parallel inputs blend the coefficients linearly.
    /// The result is not renormalized.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let mut cosom = self.dot(other);
        let mut other = *other;
        if cosom < 0.0 {
            cosom = -cosom;
            other = other.negated();
        }

        let (scale0, scale1) = if 1.0 - cosom > SLERP_LINEAR_THRESHOLD {
            let omega = cosom.acos();
            let sinom = omega.sin();
            (
                ((1.0 - t) * omega).sin() / sinom,
                (t * omega).sin() / sinom,
            )
        } else {
            (1.0 - t, t)
        };

        Self {
            x: scale0 * self.x + scale1 * other.x,
            y: scale0 * self.y + scale1 * other.y,
            z: scale0 * self.z + scale1 * other.z,
            w: scale0 * self.w + scale1 * other.w,
        }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 3D vector for positions and scales
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Zero vector
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit scale vector
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// Create a new vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Scalar linear interpolation, `a * (1 - t) + b * t`. `t` is not clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Trait for channel values that can be blended between two keyframes
pub trait Lerp: Copy {
    /// Interpolate from `self` towards `other`; `t` outside `[0, 1]` extrapolates
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        lerp(*self, *other, t)
    }
}

impl Lerp for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
            z: lerp(self.z, other.z, t),
        }
    }
}

impl Lerp for Quat {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self.slerp(other, t)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Quat> for Quat {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for glam::Quat {
    fn from(q: Quat) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
