//! Real vectors in two and three dimensions.

use core::{
    array,
    fmt::{Debug, Formatter},
    marker::PhantomData as Pd,
    ops::{Add, AddAssign, Index, Mul, Neg, Sub},
};

use super::{ApproxEq, Lerp, point::Point};

/// A generic vector type, tagged with the space it belongs to.
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
/// * `Space`: the space that `Self` is an element of. Vectors in different
///   spaces cannot be mixed.
#[repr(transparent)]
pub struct Vector<Repr, Space = ()>(pub Repr, Pd<Space>);

/// Tag type for real vector spaces (Euclidean spaces) of dimension `DIM`.
/// For example, the type `Real<3>` corresponds to ℝ³.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Real<const DIM: usize>;

/// A 2-vector with `f32` components.
pub type Vec2 = Vector<[f32; 2], Real<2>>;
/// A 3-vector with `f32` components.
pub type Vec3 = Vector<[f32; 3], Real<3>>;

/// Returns a real 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y], Pd)
}
/// Returns a real 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z], Pd)
}

/// Returns a vector with all components equal to `s`.
///
/// # Examples
/// ```
/// use stipple_core::math::{splat, vec3, Vec3};
///
/// let v: Vec3 = splat(0.5);
/// assert_eq!(v, vec3(0.5, 0.5, 0.5));
/// ```
#[inline]
pub fn splat<Sp, const N: usize>(s: f32) -> Vector<[f32; N], Sp> {
    Vector([s; N], Pd)
}

impl<R, Sp> Vector<R, Sp> {
    /// Returns a new vector with representation `repr`.
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp, const N: usize> Vector<[f32; N], Sp> {
    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }
    /// Returns the squared Euclidean length of `self`.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }
    /// Returns the Euclidean length of `self`.
    ///
    /// Approximate unless one of the floating-point features is enabled.
    #[inline]
    pub fn len(&self) -> f32 {
        use super::float::f32;
        f32::sqrt(self.len_sqr())
    }
    /// Returns `self` scaled to unit length.
    ///
    /// The result is unspecified (likely non-finite) if `self` is zero.
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        *self * self.len().recip()
    }
    /// Returns a vector with `f` applied to each component of `self`.
    #[inline]
    #[must_use]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(f), Pd)
    }
    /// Returns the point whose position relative to the origin is `self`.
    #[inline]
    pub fn to_pt(self) -> Point<[f32; N], Sp> {
        Point::new(self.0)
    }
}

impl<Sp> Vector<[f32; 2], Sp> {
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

impl<Sp> Vector<[f32; 3], Sp> {
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

//
// Foreign trait impls
//

// Manual impls of Copy, Clone, Eq, and PartialEq to avoid
// superfluous where Sp: Trait bound

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Vector<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R, Sp> From<R> for Vector<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp, const N: usize> Index<usize> for Vector<[f32; N], Sp> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<Sp, const N: usize> Add for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] + rhs.0[i]), Pd)
    }
}

impl<Sp, const N: usize> AddAssign for Vector<[f32; N], Sp> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Sp, const N: usize> Sub for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] - rhs.0[i]), Pd)
    }
}

impl<Sp, const N: usize> Neg for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<Sp, const N: usize> Mul<f32> for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<Sp, const N: usize> Lerp for Vector<[f32; N], Sp> {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self(self.0.lerp(&other.0, t), Pd)
    }
}

impl<Sp, const N: usize> ApproxEq for Vector<[f32; N], Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}
