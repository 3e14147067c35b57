use core::{
    array,
    fmt::{Debug, Formatter},
    marker::PhantomData as Pd,
    ops::{Add, Index, Sub},
};

use super::{
    ApproxEq, Lerp,
    vec::{Real, Vector},
};

/// A position in some space, as opposed to a [`Vector`], which is a
/// displacement. The difference of two points is a vector.
#[repr(transparent)]
pub struct Point<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 2-point with `f32` components.
pub type Point2 = Point<[f32; 2], Real<2>>;
/// A 3-point with `f32` components.
pub type Point3 = Point<[f32; 3], Real<3>>;

/// Returns a real 2-point with `x` and `y` components.
pub const fn pt2(x: f32, y: f32) -> Point2 {
    Point([x, y], Pd)
}
/// Returns a real 3-point with `x`, `y`, and `z` components.
pub const fn pt3(x: f32, y: f32, z: f32) -> Point3 {
    Point([x, y, z], Pd)
}

impl<R, Sp> Point<R, Sp> {
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp, const N: usize> Point<[f32; N], Sp> {
    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// Approximate unless one of the floating-point features is enabled.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).len()
    }
    /// Returns the squared Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance_sqr(&self, other: &Self) -> f32 {
        (*self - *other).len_sqr()
    }
    /// Returns a point with `f` applied to each component of `self`.
    #[inline]
    #[must_use]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(f), Pd)
    }
    /// Returns the vector from the origin to `self`.
    #[inline]
    pub fn to_vec(self) -> Vector<[f32; N], Sp> {
        Vector::new(self.0)
    }
    /// Returns whether every component of `self` is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl<Sp> Point<[f32; 2], Sp> {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
}

impl<Sp> Point<[f32; 3], Sp> {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
}

impl<Sp, const N: usize> Lerp for Point<[f32; N], Sp> {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self(self.0.lerp(&other.0, t), Pd)
    }
}

impl<Sp, const N: usize> ApproxEq for Point<[f32; N], Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

//
// Foreign trait impls
//

impl<R: Copy, Sp> Copy for Point<R, Sp> {}

impl<R: Clone, Sp> Clone for Point<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, Sp> Default for Point<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Point<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Point<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R: PartialEq, Sp> PartialEq for Point<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R, Sp> From<R> for Point<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp, const N: usize> Index<usize> for Point<[f32; N], Sp> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<Sp, const N: usize> Add<Vector<[f32; N], Sp>> for Point<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vector<[f32; N], Sp>) -> Self {
        Self(array::from_fn(|i| self.0[i] + rhs.0[i]), Pd)
    }
}

impl<Sp, const N: usize> Sub for Point<[f32; N], Sp> {
    type Output = Vector<[f32; N], Sp>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::vec::{vec2, vec3};

    use super::*;

    #[test]
    fn point_minus_point_is_vector() {
        assert_eq!(pt2(3.0, 1.0) - pt2(1.0, 2.0), vec2(2.0, -1.0));
        assert_eq!(pt3(1.0, 1.0, 1.0) + vec3(0.0, -1.0, 2.0), pt3(1.0, 0.0, 3.0));
    }

    #[test]
    fn distance() {
        assert_approx_eq!(pt2(1.0, 1.0).distance(&pt2(4.0, 5.0)), 5.0);
        assert_approx_eq!(pt3(0.0, 0.0, 0.0).distance_sqr(&pt3(0.0, 0.3, 0.0)), 0.09);
        assert_eq!(pt3(0.2, -0.1, 0.7).distance(&pt3(0.2, -0.1, 0.7)), 0.0);
    }

    #[test]
    fn midpoint() {
        assert_eq!(pt2(-1.0, 2.0).midpoint(&pt2(3.0, -2.0)), pt2(1.0, 0.0));
    }

    #[test]
    fn finiteness() {
        assert!(pt3(1.0, 2.0, 3.0).is_finite());
        assert!(!pt3(1.0, f32::NAN, 3.0).is_finite());
        assert!(!pt2(f32::INFINITY, 0.0).is_finite());
    }
}
