//! Geometry primitives used by pile properties

pub mod cuboid;

pub use cuboid::{cuboid_height, cuboid_is_normalized, Cuboidf};
