//! The unit sphere: texture mapping and sample surfaces.
//!
//! Texture coordinates follow the usual UV-sphere convention: `u` wraps
//! around the y axis starting from -x, `v` goes from the south pole (0) to
//! the north pole (1). In terms of the azimuth φ = 2πu and the polar angle
//! θ = π(1 - v),
//! ```text
//! x = -cos φ sin θ
//! y =  cos θ
//! z =  sin φ sin θ
//! ```

use core::f32::consts::{PI, TAU};

use re::math::{Point2, Point3, Vec3, pt2, pt3, vec3};
use re::render::{Surface, Surfel};

/// Samples the whole texture of a sphere, one texture coordinate per pixel.
///
/// The top row of the image is the north pole. Every pixel is covered.
/// Surfels are seen head-on, so a rim term contributes nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Equirect;

/// Samples a sphere rotated about its y axis, viewed along the z axis.
///
/// The viewer is on the -z side looking toward +z, with +y up, so +x
/// points to the left in the image. This is a parallel projection: all
/// view rays are parallel and pixels whose ray misses the sphere are not
/// covered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orthographic {
    /// Rotation of the sphere about its y axis, in radians.
    pub rotation: f32,
    /// Half the extent of the view, in world units, along the shorter
    /// image dimension.
    pub extent: f32,
}

/// Returns the point on the unit sphere with texture coordinate `uv`.
///
/// # Examples
/// ```
/// use re::math::{pt2, pt3};
/// use stipple_geom::sphere::uv_to_point;
///
/// let p = uv_to_point(pt2(0.0, 0.5));
/// assert!(p.distance(&pt3(-1.0, 0.0, 0.0)) < 1e-6);
/// let p = uv_to_point(pt2(0.3, 1.0));
/// assert!(p.distance(&pt3(0.0, 1.0, 0.0)) < 1e-6);
/// ```
pub fn uv_to_point(uv: Point2) -> Point3 {
    let phi = TAU * uv.x();
    let theta = PI * (1.0 - uv.y());
    let (sin_t, cos_t) = theta.sin_cos();
    pt3(-phi.cos() * sin_t, cos_t, phi.sin() * sin_t)
}

/// Returns the texture coordinate of `p`, a point on the unit sphere.
///
/// The inverse of [`uv_to_point`] away from the poles. `u` is in [0, 1).
/// At the poles `u` is arbitrary.
pub fn point_to_uv(p: Point3) -> Point2 {
    let theta = p.y().clamp(-1.0, 1.0).acos();
    let phi = p.z().atan2(-p.x());
    pt2((phi / TAU).rem_euclid(1.0), 1.0 - theta / PI)
}

/// Returns `v` rotated by `angle` radians about the y axis.
///
/// Positive angles rotate counterclockwise when viewed from +y.
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    vec3(v.x() * c + v.z() * s, v.y(), v.z() * c - v.x() * s)
}

impl Orthographic {
    /// Returns a view of the sphere rotated by `rotation` radians, framed
    /// like the sketches' perspective camera at distance 4 with a 50°
    /// field of view.
    pub fn new(rotation: f32) -> Self {
        Self { rotation, extent: 1.8 }
    }
}

impl Default for Orthographic {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Surface for Equirect {
    fn surfel(&self, px: Point2, (w, h): (usize, usize)) -> Option<Surfel> {
        let uv = pt2(px.x() / w as f32, 1.0 - px.y() / h as f32);
        let pos = uv_to_point(uv);
        let normal = pos.to_vec();
        Some(Surfel { uv, pos, normal, view: normal })
    }
}

impl Surface for Orthographic {
    fn surfel(&self, px: Point2, (w, h): (usize, usize)) -> Option<Surfel> {
        let half = w.min(h) as f32 / 2.0;
        let x = (w as f32 / 2.0 - px.x()) / half * self.extent;
        let y = (h as f32 / 2.0 - px.y()) / half * self.extent;
        let r2 = x * x + y * y;
        if r2 >= 1.0 {
            return None;
        }
        // The near side faces -z
        let normal = vec3(x, y, -(1.0 - r2).sqrt());
        let pos = rotate_y(normal, -self.rotation).to_pt();
        Some(Surfel {
            uv: point_to_uv(pos),
            pos,
            normal,
            view: vec3(0.0, 0.0, -1.0),
        })
    }
}
