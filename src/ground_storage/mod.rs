//! Ground-storable pile capability
//!
//! `properties` is the fixed-schema configuration handed to the behavior;
//! `behavior` is the behavior instance attached to collectibles.

pub mod behavior;
pub mod properties;

pub use behavior::{GroundStorableBehavior, GROUND_STORABLE};
pub use properties::{GroundStorageLayout, GroundStorageProperties};
