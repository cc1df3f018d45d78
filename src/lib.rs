// MorePiles Engine - ground-storage classification for collectible catalogs
//
// Data and operations are kept apart:
// - *_data modules hold plain data and static tables
// - *_operations modules hold pure functions over that data
// - the pile pass drives a rule engine over a host-owned registry

pub mod asset;
pub mod collectible;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ground_storage;
pub mod pile_pass;
pub mod registry;
pub mod rules;
pub mod scanner;

pub use asset::{AssetLocation, WildcardPattern};
pub use collectible::{CollectibleBehavior, CollectibleKind, CollectibleObject};
pub use config::{
    load_config, load_or_create_config, ConfigCategoryProvider, PileCategory,
    PileCategoryProvider, PilesConfig,
};
pub use error::{ErrorContext, PileError, PileResult};
pub use geometry::Cuboidf;
pub use ground_storage::{GroundStorableBehavior, GroundStorageLayout, GroundStorageProperties};
pub use pile_pass::{
    append_behaviors, append_behaviors_from_config, append_behaviors_with, ScanReport,
};
pub use registry::CollectibleRegistry;
pub use rules::{default_engine, CategoryRule, ClassifyOutcome, RuleEngine, CATEGORY_RULES};
pub use scanner::CollectibleSource;
