//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the missing functions using either the `libm` or `micromath`
//! crate, depending on which feature is enabled. As a fallback, it also
//! implements the subset the shaders need even if none of the features is
//! enabled: `floor`, `abs`, and approximate `sqrt` and `powf`.
//!
//! Code in this crate calls these through the `f32` alias, for example
//! `f32::sqrt(x)`, which resolves to the inherent `std` methods when the
//! `std` feature is enabled and to one of the modules below otherwise.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabsf as abs;
    pub use libm::floorf as floor;
    pub use libm::powf;
    pub use libm::sqrtf as sqrt;
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    #[inline]
    pub fn abs(x: f32) -> f32 {
        mm::abs(x)
    }
    #[inline]
    pub fn floor(x: f32) -> f32 {
        mm::floor(x)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x == 0.0 {
            return 0.0;
        }
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    /// Returns the approximate value of `x` raised to the power `y`.
    ///
    /// Exact when `x` is zero or one, or `y` is zero.
    #[inline]
    pub fn powf(x: f32, y: f32) -> f32 {
        if y == 0.0 || x == 1.0 {
            1.0
        } else if x == 0.0 {
            if y > 0.0 { 0.0 } else { f32::INFINITY }
        } else {
            mm::powf(x, y)
        }
    }
}

pub mod fallback {
    use crate::math::float::fast_recip_sqrt;

    /// Returns the largest integer less than or equal to `x`.
    #[inline]
    pub fn floor(x: f32) -> f32 {
        let t = x as i64 as f32;
        t - (t > x) as i32 as f32
    }
    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f32) -> f32 {
        f32::from_bits(x.to_bits() & 0x7FFF_FFFF)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x == 0.0 {
            return 0.0;
        }
        let y = x * fast_recip_sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + x / y);
        0.5 * (y + x / y)
    }
    /// Returns the approximate value of `x` raised to the power `y`.
    ///
    /// Only defined for non-negative `x`. Exact when `x` is zero or one.
    #[inline]
    pub fn powf(x: f32, y: f32) -> f32 {
        if y == 0.0 || x == 1.0 {
            1.0
        } else if x == 0.0 {
            if y > 0.0 { 0.0 } else { f32::INFINITY }
        } else {
            exp2(y * log2(x))
        }
    }

    /// Approximate base-2 logarithm of a positive normal `x`.
    fn log2(x: f32) -> f32 {
        let bits = x.to_bits();
        let exp = ((bits >> 23) & 0xFF) as i32 - 127;
        // Mantissa in [1, 2)
        let m = f32::from_bits(bits & 0x007F_FFFF | 0x3F80_0000);
        // atanh series: ln m = 2 (t + t³/3 + t⁵/5 + ...), t = (m-1)/(m+1)
        let t = (m - 1.0) / (m + 1.0);
        let t2 = t * t;
        let series = 1.0 / 7.0 + t2 / 9.0;
        let series = 1.0 + t2 * (1.0 / 3.0 + t2 * (0.2 + t2 * series));
        let ln = 2.0 * t * series;
        exp as f32 + ln * core::f32::consts::LOG2_E
    }

    /// Approximate base-2 exponential of `x`.
    fn exp2(x: f32) -> f32 {
        let i = floor(x);
        if i < -126.0 {
            return 0.0;
        }
        if i > 127.0 {
            return f32::INFINITY;
        }
        let f = (x - i) * core::f32::consts::LN_2;
        // Taylor series of e^f for f in [0, ln 2)
        let ef = 1.0 / 24.0 + f * (1.0 / 120.0 + f / 720.0);
        let ef = 1.0 + f * (1.0 + f * (0.5 + f * (1.0 / 6.0 + f * ef)));
        ef * f32::from_bits(((i as i32 + 127) as u32) << 23)
    }
}

/// Returns a fast approximation of the reciprocal square root of a number.
#[inline]
pub fn fast_recip_sqrt(x: f32) -> f32 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u32 = 0x5f37_5a86;
    let y = f32::from_bits(MAGIC.wrapping_sub(x.to_bits() >> 1));
    // A round of Newton's method
    y * (1.5 - 0.5 * x * y * y)
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(any(feature = "std", feature = "libm", feature = "mm")))]
pub use fallback as f32;

#[cfg(test)]
#[allow(unused_imports)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::floor(1.5), 1.0);
        assert_eq!(libm::floor(-1.1), -2.0);
        assert_eq!(libm::abs(-2.5), 2.5);
        assert_eq!(libm::sqrt(9.0), 3.0);
        assert!(libm::sqrt(-1.0).is_nan());
        assert_eq!(libm::powf(3.0, 2.0), 9.0);
        assert_eq!(libm::powf(0.0, 0.7), 0.0);
    }

    #[cfg(feature = "mm")]
    #[test]
    fn mm_functions() {
        assert_eq!(mm::floor(1.5), 1.0);
        assert_eq!(mm::floor(-1.1), -2.0);
        assert_eq!(mm::abs(-2.5), 2.5);
        assert_approx_eq!(mm::sqrt(9.0), 3.0);
        assert_eq!(mm::sqrt(0.0), 0.0);
        assert_approx_eq!(mm::powf(3.0, 2.0), 9.0, eps = 1e-2);
        assert_eq!(mm::powf(0.0, 0.7), 0.0);
        assert_eq!(mm::powf(1.0, 0.7), 1.0);
        assert_eq!(mm::powf(0.3, 0.0), 1.0);
    }

    #[test]
    fn fallback_functions() {
        use fallback as fb;
        assert_eq!(fb::floor(1.5), 1.0);
        assert_eq!(fb::floor(0.99), 0.0);
        assert_eq!(fb::floor(-0.0), 0.0);
        assert_eq!(fb::floor(-1.1), -2.0);
        assert_eq!(fb::floor(-3.0), -3.0);

        assert_eq!(fb::abs(-0.25), 0.25);
        assert_eq!(fb::abs(0.25), 0.25);

        assert_eq!(fb::sqrt(0.0), 0.0);
        assert_approx_eq!(fb::sqrt(9.0), 3.0, eps = 1e-4);
        assert_approx_eq!(fb::sqrt(0.09), 0.3, eps = 1e-4);
        assert_approx_eq!(fb::sqrt(2.0e4), 141.42136, eps = 1e-4);

        assert_eq!(fb::powf(0.0, 0.7), 0.0);
        assert_eq!(fb::powf(1.0, 0.7), 1.0);
        assert_eq!(fb::powf(0.3, 0.0), 1.0);
        assert_approx_eq!(fb::powf(3.0, 2.0), 9.0, eps = 1e-4);
        assert_approx_eq!(fb::powf(0.5, 0.7), 0.615_572_8, eps = 1e-4);
        assert_approx_eq!(fb::powf(2.0, -3.0), 0.125, eps = 1e-4);
    }
}
