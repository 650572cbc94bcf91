//! # plague_math - Movement Math
//!
//! Small vector and view-angle primitives used by the gameplay modules.
//! Axes follow the host engine: x/y are horizontal, z points up.

pub mod angles;
pub mod vector;

pub use angles::*;
pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

pub mod prelude {
    pub use crate::angles::Angles;
    pub use crate::radians;
    pub use crate::vector::Vec3;
}
