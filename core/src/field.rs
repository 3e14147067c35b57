//! Distance fields that dot patterns are cut from.
//!
//! A field maps a position to the distance to its nearest "seed": either
//! the center of a cell in a repeating [grid][Grid] over texture space, or
//! the nearest of a fixed set of reference [points][Points] in object
//! space. Fields also report the coarse lattice cell a position falls in,
//! which seeds the noise that makes the dot edges wobble.

use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use crate::math::{Point2, Point3, Vec2, fract, pt2, pt3, vec2};

/// A scalar field giving the distance from a position to the nearest seed.
pub trait DistanceField {
    /// The position type: `Point2` for texture space, `Point3` for object
    /// space.
    type Pos: Copy;

    /// Returns the distance from `pos` to the nearest seed.
    fn distance(&self, pos: Self::Pos) -> f32;

    /// Returns the coarse lattice cell containing `pos` when space is
    /// divided into `density` cells per unit, as a point with integral
    /// coordinates. Two-dimensional fields return a zero z coordinate.
    fn cell(&self, pos: Self::Pos, density: f32) -> Point3;
}

/// A repeating grid of dots over texture space.
///
/// Texture coordinates are first scaled by `stretch` (the sketches double
/// `u` so that dots stay round on a 2:1 equirectangular map), then divided
/// into `cells` cells per unit. The seed of each cell is its center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    /// Per-axis scale applied to texture coordinates.
    pub stretch: Vec2,
    /// Number of cells per unit of stretched texture space.
    pub cells: f32,
}

/// A fixed, non-empty set of reference points in object space.
#[derive(Clone, Debug, PartialEq)]
pub struct Points(Vec<Point3>);

/// Error building a [`Points`] set.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The set contained no points.
    Empty,
    /// The point at this index had a non-finite coordinate.
    NonFinite(usize),
    /// A generated set would have had more points than can be built.
    TooLarge,
}

//
// Inherent impls
//

impl Grid {
    /// Returns `uv` scaled by `self.stretch`.
    #[inline]
    pub fn stretched(&self, uv: Point2) -> Point2 {
        pt2(uv.x() * self.stretch.x(), uv.y() * self.stretch.y())
    }
}

impl Points {
    /// Returns a point set containing the points yielded by `pts`.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if `pts` is empty, and
    /// [`Error::NonFinite`] with the index of the first offending point if
    /// any coordinate is infinite or NaN.
    ///
    /// # Examples
    /// ```
    /// use stipple_core::field::{Error, Points};
    /// use stipple_core::math::pt3;
    ///
    /// let pts = Points::new([pt3(0.0, 0.0, 0.0), pt3(1.0, 0.0, 0.0)]);
    /// assert_eq!(pts.map(|p| p.len()), Ok(2));
    ///
    /// assert_eq!(Points::new([]), Err(Error::Empty));
    /// ```
    pub fn new(pts: impl IntoIterator<Item = Point3>) -> Result<Self, Error> {
        let pts: Vec<_> = pts.into_iter().collect();
        if pts.is_empty() {
            return Err(Error::Empty);
        }
        if let Some(i) = pts.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFinite(i));
        }
        Ok(Self(pts))
    }

    /// Returns the points as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Point3] {
        &self.0
    }

    /// Returns the number of points in `self`. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether `self` has no points. Always false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the index of the point nearest to `pos`, and the squared
    /// distance to it. Ties resolve to the lowest index.
    pub fn nearest(&self, pos: Point3) -> (usize, f32) {
        let mut best = (0, f32::INFINITY);
        for (i, p) in self.0.iter().enumerate() {
            let d = pos.distance_sqr(p);
            if d < best.1 {
                best = (i, d);
            }
        }
        best
    }
}

//
// Trait impls
//

impl Default for Grid {
    /// Returns the grid of the grid sketch: `u` doubled, 18 cells per unit.
    fn default() -> Self {
        Self { stretch: vec2(2.0, 1.0), cells: 18.0 }
    }
}

impl DistanceField for Grid {
    type Pos = Point2;

    /// Returns the distance from `uv` to the center of its grid cell.
    ///
    /// The result is in [0, √2/2].
    fn distance(&self, uv: Point2) -> f32 {
        let q = self.stretched(uv);
        let cell = pt2(fract(q.x() * self.cells), fract(q.y() * self.cells));
        cell.distance(&pt2(0.5, 0.5))
    }

    fn cell(&self, uv: Point2, density: f32) -> Point3 {
        let q = self.stretched(uv);
        pt3(floor(q.x() * density), floor(q.y() * density), 0.0)
    }
}

impl DistanceField for Points {
    type Pos = Point3;

    /// Returns the Euclidean distance from `pos` to the nearest point.
    fn distance(&self, pos: Point3) -> f32 {
        sqrt(self.nearest(pos).1)
    }

    fn cell(&self, pos: Point3, density: f32) -> Point3 {
        pos.map(|c| floor(c * density))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => f.write_str("reference point set is empty"),
            Error::NonFinite(i) => {
                write!(f, "reference point {i} has a non-finite coordinate")
            }
            Error::TooLarge => f.write_str("reference point set is too large"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

fn floor(x: f32) -> f32 {
    use crate::math::float::f32;
    f32::floor(x)
}

fn sqrt(x: f32) -> f32 {
    use crate::math::float::f32;
    f32::sqrt(x)
}
