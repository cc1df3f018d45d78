//! Category enablement and base pile properties
//!
//! The rule engine only sees the `PileCategoryProvider` trait. The
//! file-backed `ConfigCategoryProvider` is the implementation used when no
//! host supplies its own.

pub mod config_data;
pub mod config_operations;
pub mod provider;

pub use config_data::{default_stacking_capacity, CategoryConfig, PilesConfig};
pub use config_operations::{load_config, load_or_create_config, parse_json, parse_toml, save_config};
pub use provider::{ConfigCategoryProvider, PileCategory, PileCategoryProvider};
