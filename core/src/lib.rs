//! Core functionality of the `stipple` project.
//!
//! Shades surfaces with animated dot patterns derived from distance fields:
//! the distance from a sample to the nearest reference point (or to the
//! center of a repeating grid cell) is thresholded with an anti-aliased step
//! whose edge wobbles with simplex noise, and the resulting mask blends two
//! colors. An optional rim term adds a view-dependent highlight.
//!
//! Includes a small math library with points, vectors and colors, the
//! distance fields and shading functions themselves, and a CPU sampling
//! driver that evaluates a shader over a pixel buffer, deriving the
//! anti-aliasing footprint from finite differences.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O, and uses the floating-point
//!   functions of `std` instead of the fallbacks in [`math::float`].
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! All features are disabled by default.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;
extern crate core;

pub mod field;
pub mod math;
pub mod render;
pub mod shade;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        Lerp, lerp,
        color::{Color3, Color3f, rgb},
        noise::simplex3,
        point::{Point2, Point3, pt2, pt3},
        step::{aastep, fract, smoothstep, smoothstep_between, step},
        vec::{Vec2, Vec3, splat, vec2, vec3},
    };

    pub use crate::field::{DistanceField, Grid, Points};
    pub use crate::shade::rim::{Rim, rim};
    pub use crate::shade::{
        DotMaterial, Footprint, Mask, Noise, Polarity, shade,
    };

    pub use crate::render::{Frag, Shader, Surface, Surfel, render};

    pub use crate::util::buf::Buf2;
}
