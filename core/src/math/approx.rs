//! Approximate equality of floating-point values, mostly for tests.

/// Default tolerance of [`ApproxEq::approx_eq`].
///
/// The approximate square roots and powers of the fallback and `micromath`
/// backends need a looser tolerance than `std` or `libm`.
pub const EPSILON: f32 = if cfg!(any(feature = "std", feature = "libm")) {
    1e-6
} else {
    5e-3
};

/// Trait for comparing values for approximate equality.
///
/// Two floats are approximately equal if their difference is at most
/// `eps` times the magnitude of the left operand, or `eps` itself if the
/// magnitude is less than one. Compound values are approximately equal if
/// all of their components are.
pub trait ApproxEq {
    /// Returns whether `self` and `other` are equal within tolerance `eps`.
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool;

    /// Returns whether `self` and `other` are equal within [`EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        let scale = if self.abs() > 1.0 { self.abs() } else { 1.0 };
        (self - other).abs() <= eps * scale
    }
}

impl<const N: usize> ApproxEq for [f32; N] {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.iter().zip(other).all(|(s, o)| s.approx_eq_eps(o, eps))
    }
}

/// Asserts that two values are approximately equal.
///
/// The left operand must implement [`ApproxEq`], and both operands
/// `Debug`. An explicit tolerance can be given with `eps = ...`, followed
/// optionally by a custom panic message.
///
/// # Examples
/// ```
/// # use stipple_core::assert_approx_eq;
/// assert_ne!(0.3_f32 + 0.6, 0.9);
/// assert_approx_eq!(0.3_f32 + 0.6, 0.9);
/// assert_approx_eq!(100.0_f32, 101.0, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_approx_eq!($a, $b, eps = $crate::math::approx::EPSILON)
    };
    ($a:expr, $b:expr, eps = $eps:expr $(,)?) => {
        match (&$a, &$b, $eps) {
            (a, b, eps) => assert!(
                $crate::math::approx::ApproxEq::approx_eq_eps(a, b, eps),
                "assertion failed: `{a:?} ≅ {b:?}` with eps = {eps}"
            ),
        }
    };
    ($a:expr, $b:expr, eps = $eps:expr, $($msg:tt)+) => {
        match (&$a, &$b) {
            (a, b) => assert!(
                $crate::math::approx::ApproxEq::approx_eq_eps(a, b, $eps),
                $($msg)+
            ),
        }
    };
}
