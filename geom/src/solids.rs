//! Point sets sampled from subdivided solids.

mod platonic;
mod subdiv;

pub use platonic::Icosahedron;
pub use subdiv::Icosphere;
