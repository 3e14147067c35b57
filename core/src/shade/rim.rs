//! View-dependent rim highlight.

use crate::math::{Vec3, smoothstep};

/// An additive highlight that brightens surfaces seen at grazing angles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rim {
    /// Exponent applied to the smoothed grazing factor. Values below one
    /// widen the highlight.
    pub exponent: f32,
    /// Scale of the highlight added to each color channel.
    pub strength: f32,
}

impl Rim {
    /// Returns the highlight to add to each channel, `strength * rim`.
    #[inline]
    pub fn eval(&self, normal: Vec3, view: Vec3) -> f32 {
        self.strength * rim(normal, view, self.exponent)
    }
}

impl Default for Rim {
    /// Returns the rim of the points sketch: exponent 0.7, strength 0.35.
    fn default() -> Self {
        Self { exponent: 0.7, strength: 0.35 }
    }
}

/// Returns the rim factor of a surface with unit normal `normal` seen
/// from unit direction `view`.
///
/// The factor is `smoothstep(1 - max(view · normal, 0))` raised to the
/// power `k`: zero when looking straight at the surface, one at grazing
/// angles and on back faces.
///
/// # Examples
/// ```
/// use stipple_core::prelude::*;
///
/// let n = vec3(0.0, 0.0, 1.0);
/// assert_eq!(rim(n, n, 0.7), 0.0);
/// assert_eq!(rim(n, vec3(1.0, 0.0, 0.0), 0.7), 1.0);
/// ```
pub fn rim(normal: Vec3, view: Vec3, k: f32) -> f32 {
    let facing = view.dot(&normal).max(0.0);
    powf(smoothstep(1.0 - facing), k)
}

fn powf(x: f32, y: f32) -> f32 {
    use crate::math::float::f32;
    f32::powf(x, y)
}
