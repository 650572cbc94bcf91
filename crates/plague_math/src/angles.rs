//! Euler view angles in degrees

use crate::{radians, Vec3};

/// View angles in degrees: pitch (positive looks down), yaw, roll
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angles {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Angles {
    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Same angles with the pitch replaced
    #[inline]
    pub fn with_pitch(self, pitch: f32) -> Self {
        Self { pitch, ..self }
    }

    /// Unit forward vector. A negative pitch tilts it upward (+z); roll
    /// has no effect.
    pub fn forward(self) -> Vec3 {
        let (sp, cp) = radians(self.pitch).sin_cos();
        let (sy, cy) = radians(self.yaw).sin_cos();
        Vec3::new(cp * cy, cp * sy, -sp)
    }
}
