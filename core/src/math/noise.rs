//! Procedural noise generation.
//!
//! This module implements three-dimensional simplex noise.

pub mod simplex3 {
    use core::array::from_fn;

    use crate::math::{Point3, Vec3, step, vec3};

    /// Returns the simplex noise value corresponding to the 3D point.
    ///
    /// The value is roughly in the range [-1, 1], continuous, and zero-mean.
    /// The result for any given point is fully deterministic: the lattice
    /// hash is a fixed polynomial permutation, not a seeded table.
    ///
    /// # Examples
    /// ```
    /// use stipple_core::math::{noise::simplex3, pt3};
    ///
    /// let n = simplex3::noise(pt3(0.3, 1.7, 4.2));
    /// assert!(n.abs() < 1.2);
    /// assert_eq!(n, simplex3::noise(pt3(0.3, 1.7, 4.2)));
    /// ```
    pub fn noise(pt: Point3) -> f32 {
        const F3: f32 = 1.0 / 3.0;
        const G3: f32 = 1.0 / 6.0;

        let v = pt.to_vec();
        // Skew the input to find the lattice cell containing pt
        let s = (v.x() + v.y() + v.z()) * F3;
        let i = v.map(|c| floor(c + s));
        // Unskew back to get the offset from the cell origin
        let t = (i.x() + i.y() + i.z()) * G3;
        let x0 = v - i + vec3(t, t, t);

        // Find out in which of the six simplices we are
        let g = vec3(
            step(x0.y(), x0.x()),
            step(x0.z(), x0.y()),
            step(x0.x(), x0.z()),
        );
        let l = vec3(1.0, 1.0, 1.0) - g;
        let i1 = vec3(g[0].min(l[2]), g[1].min(l[0]), g[2].min(l[1]));
        let i2 = vec3(g[0].max(l[2]), g[1].max(l[0]), g[2].max(l[1]));

        let corners = [vec3(0.0, 0.0, 0.0), i1, i2, vec3(1.0, 1.0, 1.0)];
        // Offsets of pt from each of the four corners
        let offsets: [Vec3; 4] =
            from_fn(|k| x0 - corners[k] + vec3(1.0, 1.0, 1.0) * (G3 * k as f32));

        let i = i.map(mod289);
        let contribs: [f32; 4] = from_fn(|k| {
            let c = corners[k];
            let hash = permute(
                permute(permute(i.z() + c.z()) + i.y() + c.y()) + i.x() + c.x(),
            );
            let x = offsets[k];
            let m = (0.6 - x.len_sqr()).max(0.0);
            let m2 = m * m;
            m2 * m2 * gradient(hash).dot(&x)
        });
        42.0 * contribs.iter().sum::<f32>()
    }

    /// Returns the unit gradient corresponding to a lattice hash value.
    ///
    /// The 49 possible hash residues are laid out as a 7×7 grid of points
    /// over [-1, 1]², which is then folded onto the surface of an
    /// octahedron.
    fn gradient(hash: f32) -> Vec3 {
        const N: f32 = 1.0 / 7.0;
        // mod(hash, 49)
        let j = hash - 49.0 * floor(hash * N * N);
        let gx = floor(j * N);
        let gy = floor(j - 7.0 * gx);

        let x = gx * 2.0 * N - (1.0 - 0.5 * N);
        let y = gy * 2.0 * N - (1.0 - 0.5 * N);
        let h = 1.0 - abs(x) - abs(y);

        // Fold the points outside the octahedron back inside
        let sh = -step(h, 0.0);
        let x = x + (floor(x) * 2.0 + 1.0) * sh;
        let y = y + (floor(y) * 2.0 + 1.0) * sh;

        let g = vec3(x, y, h);
        g * taylor_inv_sqrt(g.len_sqr())
    }

    #[inline]
    fn mod289(x: f32) -> f32 {
        x - floor(x * (1.0 / 289.0)) * 289.0
    }

    #[inline]
    fn permute(x: f32) -> f32 {
        mod289((x * 34.0 + 1.0) * x)
    }

    /// First-order approximation of 1/√r around r ≈ 0.7.
    #[inline]
    fn taylor_inv_sqrt(r: f32) -> f32 {
        1.792_842_9 - 0.853_734_7 * r
    }

    #[inline]
    fn floor(x: f32) -> f32 {
        use crate::math::float::f32;
        f32::floor(x)
    }

    #[inline]
    fn abs(x: f32) -> f32 {
        use crate::math::float::f32;
        f32::abs(x)
    }
}
