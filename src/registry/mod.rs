//! Collectible registry
//!
//! In-memory stand-in for the host's object registry. Hosts with their own
//! registry implement `CollectibleSource` instead.

mod collectible_registry;

pub use collectible_registry::CollectibleRegistry;
