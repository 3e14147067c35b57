//! Shaders.
//!
//! A shader is evaluated in two steps per pixel, mirroring how the
//! sampling driver works: first the shader's *distance* value is computed
//! for every covered pixel, then each pixel is *shaded* knowing the
//! screen-space rate of change of that value, which lets the shader
//! anti-alias the edges it draws.

use crate::field::DistanceField;
use crate::math::{Color3f, Point2, Point3};
use crate::shade::DotMaterial;

use super::{Frag, Surfel};

/// Trait for shaders, used to compute the color of each covered pixel.
pub trait Shader {
    /// Returns the scalar value whose screen-space derivatives are passed
    /// back to [`shade`][Self::shade] as the fragment's footprint.
    fn distance(&self, surfel: &Surfel) -> f32;

    /// Computes the color of `frag`.
    ///
    /// # Panics
    /// `shade` should never panic.
    fn shade(&self, frag: &Frag) -> Color3f;
}

/// Trait for picking the position a field is evaluated at from a surfel.
pub trait Locate: Copy {
    /// Returns the position of `self`'s kind in `surfel`.
    fn locate(surfel: &Surfel) -> Self;
}

/// A shader composed of two functions.
#[derive(Copy, Clone, Debug)]
pub struct FnShader<D, S> {
    pub distance: D,
    pub shade: S,
}

/// Returns a shader that computes distances with `distance` and colors
/// with `shade`.
pub fn new<D, S>(distance: D, shade: S) -> FnShader<D, S>
where
    D: Fn(&Surfel) -> f32,
    S: Fn(&Frag) -> Color3f,
{
    FnShader { distance, shade }
}

impl<D, S> Shader for FnShader<D, S>
where
    D: Fn(&Surfel) -> f32,
    S: Fn(&Frag) -> Color3f,
{
    fn distance(&self, surfel: &Surfel) -> f32 {
        (self.distance)(surfel)
    }
    fn shade(&self, frag: &Frag) -> Color3f {
        (self.shade)(frag)
    }
}

/// Texture-space fields are evaluated at the texture coordinate.
impl Locate for Point2 {
    fn locate(surfel: &Surfel) -> Self {
        surfel.uv
    }
}

/// Object-space fields are evaluated at the object-space position.
impl Locate for Point3 {
    fn locate(surfel: &Surfel) -> Self {
        surfel.pos
    }
}

impl<F> Shader for DotMaterial<F>
where
    F: DistanceField,
    F::Pos: Locate,
{
    fn distance(&self, surfel: &Surfel) -> f32 {
        self.field.distance(F::Pos::locate(surfel))
    }

    fn shade(&self, frag: &Frag) -> Color3f {
        let Surfel { normal, view, .. } = frag.surfel;
        let pos = F::Pos::locate(&frag.surfel);
        self.shade_distance(pos, frag.dist, normal, view, frag.footprint)
    }
}
