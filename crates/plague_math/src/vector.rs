//! World-space vectors (x/y horizontal, z up)

use core::ops::Mul;

/// 3D vector used for origins and velocities
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Length of the x/y component, ignoring height
    #[inline]
    pub fn horizontal_length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scale x/y and z independently
    #[inline]
    pub fn scale_axes(self, horizontal: f32, vertical: f32) -> Self {
        Self::new(self.x * horizontal, self.y * horizontal, self.z * vertical)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}
