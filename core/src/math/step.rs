//! Step functions and other scalar helpers with shading-language semantics.

/// Returns 0 if `x` < `edge`, and 1 otherwise.
///
/// # Examples
/// ```
/// use stipple_core::math::step;
///
/// assert_eq!(step(0.25, 0.2), 0.0);
/// assert_eq!(step(0.25, 0.25), 1.0);
/// ```
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Interpolates smoothly from 0.0 to 1.0 as `t` goes from 0.0 to 1.0.
///
/// Returns 0 for all `t` <= 0 and 1 for all `t` >= 1. Has a continuous
/// first derivative.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        t * t * (3.0 - 2.0 * t)
    }
}

/// Interpolates smoothly from 0.0 to 1.0 as `x` goes from `e0` to `e1`.
///
/// Equivalent to `smoothstep(e0, e1, x)` in GLSL. The result is
/// unspecified if `e0` >= `e1`.
#[inline]
pub fn smoothstep_between(e0: f32, e1: f32, x: f32) -> f32 {
    smoothstep((x - e0) / (e1 - e0))
}

/// Anti-aliased version of [`step`].
///
/// Smoothly steps from 0 to 1 as `value` crosses `threshold`, over a
/// transition band of half-width `width` on either side. The width should
/// be the rate of change of `value` per pixel (see
/// [`Footprint::width`][crate::shade::Footprint::width]), so that the edge
/// stays about one pixel wide regardless of scale.
///
/// A `value` exactly at `threshold` yields exactly 0.5. If `width` is zero
/// (or negative) this is a hard step, except that it still yields 0.5 at
/// the threshold itself.
///
/// # Examples
/// ```
/// use stipple_core::math::aastep;
///
/// assert_eq!(aastep(0.25, 0.25, 0.01), 0.5);
/// assert_eq!(aastep(0.25, 0.30, 0.01), 1.0);
/// assert_eq!(aastep(0.25, 0.20, 0.01), 0.0);
/// assert_eq!(aastep(0.25, 0.25, 0.0), 0.5);
/// ```
#[inline]
pub fn aastep(threshold: f32, value: f32, width: f32) -> f32 {
    let d = value - threshold;
    if width > 0.0 {
        smoothstep(0.5 + 0.5 * d / width)
    } else if d == 0.0 {
        0.5
    } else {
        step(0.0, d)
    }
}

/// Returns the fractional part of `x`, `x - floor(x)`.
///
/// Unlike `f32::fract`, the result is always in [0, 1), also for
/// negative `x`.
///
/// # Examples
/// ```
/// use stipple_core::math::fract;
///
/// assert_eq!(fract(2.25), 0.25);
/// assert_eq!(fract(-0.25), 0.75);
/// ```
#[inline]
pub fn fract(x: f32) -> f32 {
    use super::float::f32;
    x - f32::floor(x)
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn smoothstep_clamps_outside_unit_range() {
        assert_eq!(smoothstep(-1.0), 0.0);
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(7.0), 1.0);
    }

    #[test]
    fn smoothstep_between_edges() {
        assert_eq!(smoothstep_between(2.0, 4.0, 1.0), 0.0);
        assert_eq!(smoothstep_between(2.0, 4.0, 3.0), 0.5);
        assert_eq!(smoothstep_between(2.0, 4.0, 5.0), 1.0);
    }

    #[test]
    fn aastep_midpoint_is_exact() {
        for thr in [0.0, 0.15, 0.25, 1.0e3] {
            assert_eq!(aastep(thr, thr, 0.01), 0.5);
            assert_eq!(aastep(thr, thr, 0.0), 0.5);
        }
    }

    #[test]
    fn aastep_band() {
        // Outside of ±width the step is saturated
        assert_eq!(aastep(0.25, 0.2601, 0.01), 1.0);
        assert_eq!(aastep(0.25, 0.2399, 0.01), 0.0);
        // Inside it is strictly between
        let v = aastep(0.25, 0.255, 0.01);
        assert!(0.5 < v && v < 1.0, "{v}");
        assert_approx_eq!(v, smoothstep(0.75), eps = 1e-4);
    }

    #[test]
    fn aastep_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = aastep(0.5, i as f32 / 100.0, 0.05);
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn aastep_zero_width_is_hard() {
        assert_eq!(aastep(0.25, 0.2500001, 0.0), 1.0);
        assert_eq!(aastep(0.25, 0.2499999, 0.0), 0.0);
    }

    #[test]
    fn fract_of_negative() {
        assert_eq!(fract(1.5), 0.5);
        assert_eq!(fract(-1.5), 0.5);
        assert_eq!(fract(3.0), 0.0);
    }
}
