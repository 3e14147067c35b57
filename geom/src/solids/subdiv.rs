//! Subdivided spheres.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use log::debug;
use re::field::{self, Points};
use re::math::{Point3, Vec3};

use super::Icosahedron;

/// The vertex set of a subdivided icosahedron projected onto a sphere.
///
/// Every edge of the [icosahedron][Icosahedron] is split into
/// `detail + 1` segments, each face is filled with the corresponding
/// triangular lattice, and every lattice point is pushed out onto the
/// sphere of the given radius. A point shared by several faces appears
/// once, so there are `10 (detail + 1)² + 2` points in total: 12 for
/// `detail` = 0, 42 for `detail` = 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Icosphere {
    /// Radius of the sphere.
    pub radius: f32,
    /// Number of extra points inserted on each icosahedron edge.
    pub detail: u32,
}

/// A lattice point identified by its weights on the icosahedron vertices.
///
/// Points on a shared edge or vertex get the same key from every face
/// they belong to. Unused slots are `(usize::MAX, 0)`.
type Key = [(usize, u32); 3];

impl Icosphere {
    /// The largest `detail` that [`build`][Self::build] accepts.
    pub const MAX_DETAIL: u32 = 1023;

    /// Returns the number of points [`build`][Self::build] yields.
    ///
    /// Saturates at `usize::MAX` for `detail` values too large to build.
    pub fn len(&self) -> usize {
        let n = (self.detail as usize).saturating_add(1);
        n.saturating_mul(n).saturating_mul(10).saturating_add(2)
    }

    /// Returns whether `self` has no points. Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Builds the point set.
    ///
    /// Points are ordered face by face, and within a face row by row,
    /// skipping points already emitted by an earlier face.
    ///
    /// # Errors
    /// Returns [`field::Error::TooLarge`] if `detail` is greater than
    /// [`MAX_DETAIL`][Self::MAX_DETAIL], and [`field::Error::NonFinite`] if
    /// `radius` is not finite.
    pub fn build(self) -> Result<Points, field::Error> {
        if self.detail > Self::MAX_DETAIL {
            return Err(field::Error::TooLarge);
        }
        let n = self.detail + 1;
        let coords = Icosahedron::COORDS.map(|c| c.normalize());
        let mut seen = BTreeMap::new();
        let mut pts = Vec::with_capacity(self.len());

        for [a, b, c] in Icosahedron::FACES {
            for i in 0..=n {
                for j in 0..=n - i {
                    let key = key([(a, n - i - j), (b, i), (c, j)]);
                    seen.entry(key).or_insert_with(|| {
                        let w = |k: u32| k as f32 / n as f32;
                        let v = coords[a] * w(n - i - j)
                            + coords[b] * w(i)
                            + coords[c] * w(j);
                        pts.push(self.project(v));
                        pts.len() - 1
                    });
                }
            }
        }
        debug!(
            "built icosphere: radius {}, detail {}: {} points",
            self.radius,
            self.detail,
            pts.len()
        );
        Points::new(pts)
    }

    fn project(&self, v: Vec3) -> Point3 {
        (v.normalize() * self.radius).to_pt()
    }
}

impl Default for Icosphere {
    /// Returns the unit icosphere with detail 1, 42 points.
    fn default() -> Self {
        Self { radius: 1.0, detail: 1 }
    }
}

/// Returns the canonical key of the lattice point with the given weights.
fn key(weights: [(usize, u32); 3]) -> Key {
    let mut key =
        weights.map(|(i, w)| if w == 0 { (usize::MAX, 0) } else { (i, w) });
    key.sort_unstable();
    key
}
