//! Dot masks, color blending, and the dot material.
//!
//! A [`Mask`] turns the value of a [distance field][crate::field] into a
//! scalar in [0, 1]: the distance is compared against a threshold with an
//! [anti-aliased step][aastep], and the threshold itself is nudged per
//! lattice cell by time-varying [simplex noise][simplex3], which makes the
//! dot edges wobble over time. [`shade`] blends two colors by the mask,
//! and [`DotMaterial`] puts the pieces together the way the sketches do.

use core::f32::consts::FRAC_1_SQRT_2;

use crate::field::DistanceField;
use crate::math::{
    Color3f, Lerp, Point3, Vec3, aastep, color::gray, noise::simplex3, vec3,
};

pub use rim::{Rim, rim};

pub mod rim;

/// Which side of the threshold the mask is one on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Polarity {
    /// One where the distance exceeds the threshold, that is, between the
    /// dots. Zero at the reference points themselves.
    #[default]
    Outside,
    /// One inside the dots, zero between them.
    Inside,
}

/// Time-varying perturbation of the mask threshold.
///
/// Space is divided into a coarse lattice of `density` cells per unit, and
/// each cell gets its own threshold offset sampled from 3D simplex noise,
/// with time as the third (or added to the third) coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Noise {
    /// Scale of the offset. Zero disables the noise entirely.
    pub amplitude: f32,
    /// Number of lattice cells per unit.
    pub density: f32,
}

/// Screen-space rate of change of a value, per pixel.
///
/// This is what a GPU obtains with `dFdx` and `dFdy`, and what the
/// [sampling driver][crate::render::render] estimates with finite
/// differences.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Footprint {
    /// Change per pixel in the x direction.
    pub dx: f32,
    /// Change per pixel in the y direction.
    pub dy: f32,
}

/// An anti-aliased, noise-perturbed threshold over a distance field.
///
/// # Examples
/// ```
/// use stipple_core::prelude::*;
///
/// let pts = Points::new([pt3(0.0, 0.0, 0.0)]).unwrap();
/// let mask = Mask { noise: Noise::NONE, ..Mask::default() };
///
/// let fp = Footprint::new(0.01, 0.0);
/// assert_eq!(mask.eval(&pts, pt3(0.0, 0.0, 0.0), 0.0, fp), 0.0);
/// assert_eq!(mask.eval(&pts, pt3(0.0, 0.25, 0.0), 0.0, fp), 0.5);
/// assert_eq!(mask.eval(&pts, pt3(1.0, 0.0, 0.0), 0.0, fp), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mask {
    /// The distance at which the mask crosses 0.5, before noise.
    pub threshold: f32,
    /// Perturbation of the threshold.
    pub noise: Noise,
    /// Which side of the threshold is one.
    pub polarity: Polarity,
}

/// A material that shades a surface with dots cut from a distance field.
///
/// The output color is `shade(mask, base, accent)`, plus the rim term if
/// one is set. Components may fall outside [0, 1]; they are clamped only
/// when converted to 8-bit color.
#[derive(Clone, Debug, PartialEq)]
pub struct DotMaterial<F> {
    /// The field the dots are cut from.
    pub field: F,
    /// The mask parameters.
    pub mask: Mask,
    /// Color where the mask is zero.
    pub base: Color3f,
    /// Color where the mask is one.
    pub accent: Color3f,
    /// Optional view-dependent highlight.
    pub rim: Option<Rim>,
    /// Current time in seconds.
    pub time: f32,
}

//
// Inherent impls
//

impl Polarity {
    /// Orients `step`, a value that is one outside the dots, according to
    /// `self`.
    #[inline]
    pub fn apply(self, step: f32) -> f32 {
        match self {
            Self::Outside => step,
            Self::Inside => 1.0 - step,
        }
    }
}

impl Noise {
    /// No noise at all.
    pub const NONE: Self = Self { amplitude: 0.0, density: 10.0 };

    /// Returns the threshold offset of the lattice cell `cell` at `time`.
    ///
    /// The noise is sampled at `cell + (0, 0, time)`. If the amplitude is
    /// zero, returns zero without sampling.
    pub fn offset(&self, cell: Point3, time: f32) -> f32 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        let seed = cell + vec3(0.0, 0.0, time);
        self.amplitude * simplex3::noise(seed)
    }
}

impl Footprint {
    /// A zero footprint. Masks evaluated with it have hard edges.
    pub const NONE: Self = Self { dx: 0.0, dy: 0.0 };

    /// Returns a new footprint with the given partial derivatives.
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Returns the anti-aliasing width, `|(dx, dy)| / √2`.
    ///
    /// # Examples
    /// ```
    /// use stipple_core::shade::Footprint;
    ///
    /// assert_eq!(Footprint::new(0.0, 0.0).width(), 0.0);
    /// let w = Footprint::new(0.3, 0.4).width();
    /// assert!((w - 0.5 / 2f32.sqrt()).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn width(&self) -> f32 {
        use crate::math::float::f32;
        let Self { dx, dy } = *self;
        f32::sqrt(dx * dx + dy * dy) * FRAC_1_SQRT_2
    }
}

impl Mask {
    /// Returns the mask value of `field` at `pos` at `time`.
    ///
    /// `fp` is the screen-space rate of change of the field's distance
    /// value at `pos`, used to anti-alias the dot edges.
    pub fn eval<F: DistanceField>(
        &self,
        field: &F,
        pos: F::Pos,
        time: f32,
        fp: Footprint,
    ) -> f32 {
        let threshold = self.threshold_at(field, pos, time);
        self.step(threshold, field.distance(pos), fp)
    }

    /// Returns the noise-perturbed threshold of `field` at `pos` at `time`.
    pub fn threshold_at<F: DistanceField>(
        &self,
        field: &F,
        pos: F::Pos,
        time: f32,
    ) -> f32 {
        let Noise { amplitude, density } = self.noise;
        if amplitude == 0.0 {
            self.threshold
        } else {
            let cell = field.cell(pos, density);
            self.threshold + self.noise.offset(cell, time)
        }
    }

    /// Steps `dist` against `threshold`, anti-aliased over the footprint,
    /// and orients the result by the polarity of `self`.
    #[inline]
    pub fn step(&self, threshold: f32, dist: f32, fp: Footprint) -> f32 {
        self.polarity.apply(aastep(threshold, dist, fp.width()))
    }
}

/// Blends two colors by `mask`: `a * (1 - mask) + b * mask`.
///
/// Returns exactly `a` if `mask` is zero and exactly `b` if `mask` is one.
///
/// # Examples
/// ```
/// use stipple_core::prelude::*;
///
/// let (a, b) = (rgb(0.0, 0.5, 1.0), rgb(1.0, 1.0, 1.0));
/// assert_eq!(shade(0.0, a, b), a);
/// assert_eq!(shade(1.0, a, b), b);
/// assert_eq!(shade(0.5, a, b), rgb(0.5, 0.75, 1.0));
/// ```
#[inline]
pub fn shade(mask: f32, a: Color3f, b: Color3f) -> Color3f {
    a.lerp(&b, mask)
}

impl<F: DistanceField> DotMaterial<F> {
    /// Returns a material with the default mask, black base and white
    /// accent colors, no rim, at time zero.
    pub fn new(field: F) -> Self {
        Self {
            field,
            mask: Mask::default(),
            base: gray(0.0),
            accent: gray(1.0),
            rim: None,
            time: 0.0,
        }
    }

    /// Returns the mask value at `pos`, given the distance `dist` already
    /// computed there and its footprint.
    pub fn mask_at(&self, pos: F::Pos, dist: f32, fp: Footprint) -> f32 {
        let threshold = self.mask.threshold_at(&self.field, pos, self.time);
        self.mask.step(threshold, dist, fp)
    }

    /// Returns the color at `pos` with surface normal `normal` seen from
    /// direction `view`. Both directions should be unit vectors, pointing
    /// away from the surface.
    pub fn shade(
        &self,
        pos: F::Pos,
        normal: Vec3,
        view: Vec3,
        fp: Footprint,
    ) -> Color3f {
        let dist = self.field.distance(pos);
        self.shade_distance(pos, dist, normal, view, fp)
    }

    /// Like [`shade`][Self::shade], but with the distance at `pos`
    /// already computed.
    pub fn shade_distance(
        &self,
        pos: F::Pos,
        dist: f32,
        normal: Vec3,
        view: Vec3,
        fp: Footprint,
    ) -> Color3f {
        let mask = self.mask_at(pos, dist, fp);
        let col = shade(mask, self.base, self.accent);
        match &self.rim {
            Some(r) => col + gray(r.eval(normal, view)),
            None => col,
        }
    }
}

//
// Trait impls
//

impl Default for Noise {
    /// Returns the noise of the grid sketch: amplitude 0.15, ten cells
    /// per unit.
    fn default() -> Self {
        Self { amplitude: 0.15, density: 10.0 }
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            noise: Noise::default(),
            polarity: Polarity::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::field::{Grid, Points};
    use crate::math::{pt2, pt3, rgb};

    use super::*;

    fn origin() -> Points {
        Points::new([pt3(0.0, 0.0, 0.0)]).unwrap()
    }

    fn no_noise() -> Mask {
        Mask { noise: Noise::NONE, ..Mask::default() }
    }

    #[test]
    fn polarity() {
        assert_eq!(Polarity::default(), Polarity::Outside);
        assert_eq!(Polarity::Outside.apply(0.25), 0.25);
        assert_eq!(Polarity::Inside.apply(0.25), 0.75);
    }

    #[test]
    fn footprint_width() {
        assert_eq!(Footprint::NONE.width(), 0.0);
        assert_approx_eq!(Footprint::new(1.0, 1.0).width(), 1.0);
        assert_approx_eq!(Footprint::new(-2.0, 0.0).width(), 2.0_f32.sqrt());
    }

    #[test]
    fn mask_at_reference_point_is_inside_extreme() {
        let pts = origin();
        let fp = Footprint::new(0.01, 0.01);
        let at = pt3(0.0, 0.0, 0.0);

        assert_eq!(no_noise().eval(&pts, at, 0.0, fp), 0.0);

        let inside = Mask { polarity: Polarity::Inside, ..no_noise() };
        assert_eq!(inside.eval(&pts, at, 0.0, fp), 1.0);
    }

    #[test]
    fn mask_far_from_points_is_outside_extreme() {
        let pts = origin();
        let fp = Footprint::new(0.01, 0.01);
        let far = pt3(10.0, -3.0, 2.0);

        assert_eq!(no_noise().eval(&pts, far, 0.0, fp), 1.0);

        let inside = Mask { polarity: Polarity::Inside, ..no_noise() };
        assert_eq!(inside.eval(&pts, far, 0.0, fp), 0.0);
    }

    #[test]
    fn mask_at_threshold_is_one_half() {
        let m = no_noise();
        for fp in [Footprint::NONE, Footprint::new(0.02, 0.01)] {
            assert_eq!(m.step(0.25, 0.25, fp), 0.5);
            assert_eq!(m.eval(&origin(), pt3(0.25, 0.0, 0.0), 0.0, fp), 0.5);
        }
    }

    #[test]
    fn mask_scenario_narrow_band() {
        // Single point at the origin, sample at distance 0.3
        let m = no_noise();
        let pos = pt3(0.0, 0.3, 0.0);

        let v = m.eval(&origin(), pos, 0.0, Footprint::new(0.01, 0.0));
        assert_approx_eq!(v, 1.0);

        // A wide footprint puts the sample inside the transition band
        let v = m.eval(&origin(), pos, 0.0, Footprint::new(0.1, 0.0));
        assert!(0.5 < v && v < 1.0, "{v}");
    }

    #[test]
    fn mask_without_noise_ignores_time() {
        let m = no_noise();
        let g = Grid::default();
        let fp = Footprint::new(0.005, 0.005);
        for i in 0..50 {
            let uv = pt2(i as f32 * 0.0137, 1.0 - i as f32 * 0.0191);
            let a = m.eval(&g, uv, 0.0, fp);
            let b = m.eval(&g, uv, 17.5, fp);
            assert_eq!(a, b, "uv = {uv:?}");
        }
    }

    #[test]
    fn mask_with_noise_varies_with_time() {
        let m = Mask::default();
        let g = Grid::default();
        let uv = pt2(0.3, 0.4);
        let thresholds: alloc::vec::Vec<f32> = (0..20)
            .map(|t| m.threshold_at(&g, uv, t as f32 * 0.37))
            .collect();
        assert!(thresholds.iter().any(|&t| t != thresholds[0]));
        for t in thresholds {
            assert!((0.25 - 0.2..=0.25 + 0.2).contains(&t), "{t}");
        }
    }

    #[test]
    fn noise_offset_is_zero_without_amplitude() {
        let n = Noise { amplitude: 0.0, density: 3.0 };
        assert_eq!(n.offset(pt3(1.0, 2.0, 3.0), 0.5), 0.0);
        assert_eq!(n.offset(pt3(f32::NAN, 0.0, 0.0), 0.5), 0.0);
    }

    #[test]
    fn noise_offset_samples_cell_plus_time() {
        let n = Noise { amplitude: 0.5, density: 10.0 };
        let expected = 0.5 * simplex3::noise(pt3(2.0, 3.0, 4.0 + 1.25));
        assert_eq!(n.offset(pt3(2.0, 3.0, 4.0), 1.25), expected);
    }

    #[test]
    fn shade_endpoints_are_exact() {
        let a = rgb(0.13, 0.2, 0.33);
        let b = rgb(2.4, 2.4, 2.4);
        assert_eq!(shade(0.0, a, b), a);
        assert_eq!(shade(1.0, a, b), b);
    }

    #[test]
    fn shade_is_monotonic_and_continuous() {
        let a = rgb(0.1, 0.9, 0.5);
        let b = rgb(0.8, 0.2, 0.5);
        let mut prev = shade(0.0, a, b);
        for i in 1..=1000 {
            let c = shade(i as f32 / 1000.0, a, b);
            assert!(c.r() >= prev.r() && c.g() <= prev.g());
            assert!((c.r() - prev.r()).abs() < 1e-3);
            assert!((c.g() - prev.g()).abs() < 1e-3);
            assert_approx_eq!(c.b(), 0.5);
            prev = c;
        }
    }

    #[test]
    fn material_blends_base_and_accent() {
        let mut mat = DotMaterial::new(origin());
        mat.mask = Mask { polarity: Polarity::Inside, ..no_noise() };
        mat.base = rgb(0.1, 0.2, 0.3);
        mat.accent = rgb(1.0, 1.0, 1.0);

        let (n, v) = (vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0));
        let fp = Footprint::new(0.01, 0.0);

        assert_eq!(mat.shade(pt3(0.0, 0.0, 0.0), n, v, fp), mat.accent);
        assert_eq!(mat.shade(pt3(0.0, 1.0, 0.0), n, v, fp), mat.base);
    }

    #[test]
    fn material_adds_rim() {
        let mut mat = DotMaterial::new(origin());
        mat.mask = no_noise();
        mat.base = rgb(0.0, 0.0, 0.0);
        mat.rim = Some(Rim::default());

        let n = vec3(1.0, 0.0, 0.0);
        let fp = Footprint::NONE;
        // Far from the dot, mask is one: accent plus rim
        let pos = pt3(1.0, 0.0, 0.0);

        let head_on = mat.shade(pos, n, n, fp);
        assert_eq!(head_on, rgb(1.0, 1.0, 1.0));

        let grazing = mat.shade(pos, n, vec3(0.0, 0.0, 1.0), fp);
        assert_approx_eq!(grazing, rgb(1.35, 1.35, 1.35));
    }

    #[test]
    fn material_mask_at_matches_eval() {
        let mut mat = DotMaterial::new(Grid::default());
        mat.time = 2.5;
        let uv = pt2(0.41, 0.73);
        let fp = Footprint::new(0.003, 0.002);
        let d = mat.field.distance(uv);
        assert_eq!(
            mat.mask_at(uv, d, fp),
            mat.mask.eval(&mat.field, uv, 2.5, fp)
        );
    }
}
