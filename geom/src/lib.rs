//! Geometry feeding the `stipple` shaders.
//!
//! * [`solids`]: reference point sets, such as the vertices of a
//!   subdivided icosahedron, for object-space distance fields.
//! * [`sphere`]: texture mapping of the unit sphere and the
//!   [surfaces][re::render::Surface] the sketches are sampled through.
//!   Requires the `std` feature.

#![no_std]

extern crate alloc;
extern crate core;
#[cfg(feature = "std")]
extern crate std;

pub mod solids;
#[cfg(feature = "std")]
pub mod sphere;
