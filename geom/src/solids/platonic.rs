//! The regular icosahedron.

use re::math::{Vec3, vec3};

/// The golden ratio constant φ.
const PHI: f32 = 1.618_034;

/// Regular icosahedron.
///
/// A Platonic solid with twelve vertices and twenty equilateral triangle
/// faces. Five edges meet at every vertex.
///
/// `Icosahedron`'s vertices are at:
/// * (±1, 0, ±φ)
/// * (±φ, ±1, 0)
/// * (0, ±φ, ±1),
///
/// where φ ≈ 1.618 is the golden ratio constant. They are not normalized.
#[derive(Copy, Clone, Debug, Default)]
pub struct Icosahedron;

impl Icosahedron {
    #[rustfmt::skip]
    pub const COORDS: [Vec3; 12] = [
        vec3(-PHI, 0.0, -1.0), vec3(-PHI, 0.0, 1.0), // -X
        vec3( PHI, 0.0, -1.0), vec3( PHI, 0.0, 1.0), // +X

        vec3(-1.0, -PHI, 0.0), vec3(1.0, -PHI, 0.0), // -Y
        vec3(-1.0,  PHI, 0.0), vec3(1.0,  PHI, 0.0), // +Y

        vec3(0.0, -1.0, -PHI), vec3(0.0, 1.0, -PHI), // -Z
        vec3(0.0, -1.0,  PHI), vec3(0.0, 1.0,  PHI), // +Z
    ];

    #[rustfmt::skip]
    pub const FACES: [[usize; 3]; 20] = [
        [0,  4,  1], [0,  1,  6], // -X
        [2,  3,  5], [2,  7,  3], // +X
        [4,  8,  5], [4,  5, 10], // -Y
        [6,  7,  9], [6,  11, 7], // +Y
        [8,  0,  9], [8,  9,  2], // -Z
        [10, 11, 1], [10, 3, 11], // +Z

        // Corner faces, one per octant
        [0, 8, 4], [1,  4, 10], // -X-Y -Z,+Z
        [0, 6, 9], [1, 11,  6], // -X+Y   "
        [2, 5, 8], [3, 10,  5], // +X-Y   "
        [2, 9, 7], [3,  7, 11], // +X+Y   "
    ];

    /// Returns the edges of `self` as pairs of vertex indices, each edge
    /// once, lower index first.
    pub fn edges() -> impl Iterator<Item = [usize; 2]> {
        Self::FACES.into_iter().flat_map(|[a, b, c]| {
            [[a, b], [b, c], [c, a]]
                .into_iter()
                .filter(|[i, j]| i < j)
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use re::assert_approx_eq;

    use super::*;

    #[test]
    fn edges_have_equal_length() {
        let edges: Vec<_> = Icosahedron::edges().collect();
        assert_eq!(edges.len(), 30);
        for [i, j] in edges {
            let [a, b] = [i, j].map(|k| Icosahedron::COORDS[k]);
            assert_approx_eq!((b - a).len_sqr(), 4.0, eps = 1e-5);
        }
    }

    #[test]
    fn five_faces_meet_at_every_vertex() {
        let mut count = [0; 12];
        for f in Icosahedron::FACES {
            for v in f {
                count[v] += 1;
            }
        }
        assert_eq!(count, [5; 12]);
    }
}
