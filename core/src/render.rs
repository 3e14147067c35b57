//! Evaluating shaders over pixel buffers.
//!
//! This module is a minimal CPU host for the shading functions in
//! [`shade`][crate::shade]. A [`Surface`] maps each pixel to the surface
//! attributes visible there, if any, and a [`Shader`] turns those
//! attributes into a color. The [`render`] function drives the two over a
//! buffer, estimating the screen-space derivatives a GPU would compute
//! from 2×2 fragment quads with finite differences between neighboring
//! pixels.

use log::debug;

use crate::math::{Color3, Point2, Point3, Vec3, pt2};
use crate::shade::Footprint;
use crate::util::buf::Buf2;

pub use shader::{Locate, Shader};
pub use stats::Stats;

pub mod shader;
pub mod stats;

/// The surface attributes visible at a sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surfel {
    /// Texture coordinate.
    pub uv: Point2,
    /// Position in object space.
    pub pos: Point3,
    /// Unit surface normal, in world space.
    pub normal: Vec3,
    /// Unit direction from the surface toward the viewer.
    pub view: Vec3,
}

/// A fragment: a covered pixel ready to be shaded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frag {
    /// Center of the pixel, in pixel coordinates.
    pub px: Point2,
    /// The surface attributes at the pixel.
    pub surfel: Surfel,
    /// The shader's distance value at the pixel.
    pub dist: f32,
    /// The screen-space rate of change of `dist`.
    pub footprint: Footprint,
}

/// Trait for things that can be sampled per pixel.
pub trait Surface {
    /// Returns the surface attributes visible at pixel center `px` of an
    /// image with dimensions `dims`, or `None` if the pixel is not covered.
    fn surfel(&self, px: Point2, dims: (usize, usize)) -> Option<Surfel>;
}

impl<F> Surface for F
where
    F: Fn(Point2, (usize, usize)) -> Option<Surfel>,
{
    fn surfel(&self, px: Point2, dims: (usize, usize)) -> Option<Surfel> {
        self(px, dims)
    }
}

/// Shades `surface` with `shader` into `target`.
///
/// Works in two passes. The first asks the surface for the attributes of
/// every pixel and evaluates the shader's distance value there. The
/// second shades every covered pixel, with a [`Footprint`] formed from
/// the differences to the right and lower neighbors, or to the left and
/// upper ones where the former are uncovered or outside the image. A
/// component is zero only if neither neighbor on its axis is covered.
/// Uncovered pixels are set to `background`.
///
/// Returns the number of covered and missed pixels.
pub fn render<S, Sh>(
    surface: &S,
    shader: &Sh,
    background: Color3,
    target: &mut Buf2<Color3>,
) -> Stats
where
    S: Surface + ?Sized,
    Sh: Shader + ?Sized,
{
    let mut stats = Stats::start();
    let (w, h) = (target.width(), target.height());

    let samples = Buf2::new_with(w, h, |x, y| {
        let px = pixel_center(x, y);
        surface
            .surfel(px, (w, h))
            .map(|s| (s, shader.distance(&s)))
    });
    let dist_at = |x: usize, y: usize| samples[y][x].map(|(_, d)| d);

    for y in 0..h {
        for x in 0..w {
            let Some((surfel, dist)) = samples[y][x] else {
                target[y][x] = background;
                stats.missed += 1;
                continue;
            };
            let dx = difference(
                dist,
                (x + 1 < w).then(|| dist_at(x + 1, y)).flatten(),
                x.checked_sub(1).and_then(|x| dist_at(x, y)),
            );
            let dy = difference(
                dist,
                (y + 1 < h).then(|| dist_at(x, y + 1)).flatten(),
                y.checked_sub(1).and_then(|y| dist_at(x, y)),
            );
            let frag = Frag {
                px: pixel_center(x, y),
                surfel,
                dist,
                footprint: Footprint::new(dx, dy),
            };
            target[y][x] = shader.shade(&frag).to_color3();
            stats.covered += 1;
        }
    }
    let stats = stats.finish();
    debug!("rendered {w}x{h}: {stats}");
    stats
}

/// Returns the forward difference from `dist` to `next` if covered, else
/// the backward difference from `prev`, else zero.
fn difference(dist: f32, next: Option<f32>, prev: Option<f32>) -> f32 {
    match (next, prev) {
        (Some(next), _) => next - dist,
        (None, Some(prev)) => dist - prev,
        (None, None) => 0.0,
    }
}

fn pixel_center(x: usize, y: usize) -> Point2 {
    pt2(x as f32 + 0.5, y as f32 + 0.5)
}
