//! Various utility types and functions.

pub mod buf;
pub mod pnm;
