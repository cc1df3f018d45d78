//! Collectible definitions as the host registry exposes them
//!
//! Data lives in `collectible_data`, behavior seams in `behavior`, and the
//! mutations the pile pass performs in `collectible_operations`.

pub mod behavior;
pub mod collectible_data;
pub mod collectible_operations;

pub use behavior::CollectibleBehavior;
pub use collectible_data::{BlockSounds, CollectibleKind, CollectibleObject, CompositeShape};
pub use collectible_operations::{
    append_behavior, append_creative_tab, collectible_label, has_behavior, replace_behaviors,
};
