//! Points, vectors, colors, and other useful mathematics.
//!
//! Includes [points][point], [vectors][vec], [colors][color],
//! [step functions][step] and [simplex noise][noise], as well as
//! approximate equality comparisons for testing.
//!
//! Points and vectors are distinct types: a point is a position, a vector
//! is a displacement. Subtracting two points yields a vector, and adding a
//! vector to a point yields a point. Distances are measured between points,
//! dot products taken between vectors.

pub use {
    approx::ApproxEq,
    color::{Color3, Color3f, rgb},
    point::{Point2, Point3, pt2, pt3},
    step::{aastep, fract, smoothstep, smoothstep_between, step},
    vec::{Vec2, Vec3, splat, vec2, vec3},
};

pub mod approx;
pub mod color;
pub mod float;
pub mod noise;
pub mod point;
pub mod step;
pub mod vec;

/// Trait for linear interpolation between two values.
pub trait Lerp: Sized {
    /// Linearly interpolates between `self` and `other`.
    ///
    /// if `t` = 0, returns `self`; if `t` = 1, returns `other`.
    /// For 0 < `t` < 1, returns the weighted average of `self` and `other`
    /// ```text
    /// (1 - t) * self + t * other
    /// ```
    ///
    /// Implementations evaluate exactly this two-term form, so the
    /// endpoints are reproduced without rounding error. The return value
    /// for `t` outside [0, 1] is the corresponding extrapolation; for a
    /// `NaN` it is unspecified.
    ///
    /// # Examples
    /// ```
    /// use stipple_core::math::Lerp;
    ///
    /// assert_eq!(f32::lerp(&1.0, &5.0, 0.25), 2.0);
    /// ```
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Returns the (unweighted) average of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use stipple_core::math::{Lerp, pt2, Point2};
    ///
    /// let a: Point2 = pt2(-1.0, 2.0);
    /// let b = pt2(3.0, -2.0);
    /// assert_eq!(a.midpoint(&b), pt2(1.0, 0.0));
    /// ```
    fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }
}

/// Linearly interpolates between two values.
///
/// For examples and more information, see [`Lerp::lerp`].
#[inline]
pub fn lerp<T: Lerp>(t: f32, from: T, to: T) -> T {
    from.lerp(&to, t)
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }
}

impl<const N: usize> Lerp for [f32; N] {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        core::array::from_fn(|i| self[i].lerp(&other[i], t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let (a, b) = (0.1_f32, 0.7_f32);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn lerp_arrays() {
        let a = [0.0, 1.0, -2.0];
        let b = [1.0, 3.0, 2.0];
        assert_eq!(lerp(0.5, a, b), [0.5, 2.0, 0.0]);
    }
}
