//! Pile configuration data
//!
//! Every field is optional in the file; anything left out falls back to the
//! defaults below.

use crate::asset::AssetLocation;
use crate::ground_storage::GroundStorageLayout;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Capacity used for categories missing from the table below
pub const FALLBACK_STACKING_CAPACITY: u32 = 16;

/// Default full-pile item counts per category
pub const DEFAULT_STACKING_CAPACITIES: [(&str, u32); 28] = [
    ("arrow", 64),
    ("bamboostakes", 32),
    ("beeswax", 32),
    ("bone", 32),
    ("chutesection", 20),
    ("cloth", 32),
    ("flaxfibers", 64),
    ("flaxtwine", 32),
    ("metalchain", 16),
    ("metallamellae", 32),
    ("metalscale", 32),
    ("sail", 16),
    ("stick", 32),
    ("angledgears", 16),
    ("axle", 16),
    ("ironfence", 16),
    ("torchholder", 8),
    ("drystonefence", 8),
    ("henbox", 10),
    ("ladder", 16),
    ("sign", 16),
    ("toolrack", 8),
    ("trapdoor", 16),
    ("fence", 16),
    ("fencegate", 16),
    ("stone", 32),
    ("rope", 16),
    ("mostCubicBlocks", 8),
];

/// Default stacking capacity of a category
pub fn default_stacking_capacity(key: &str) -> u32 {
    DEFAULT_STACKING_CAPACITIES
        .iter()
        .find(|(category, _)| *category == key)
        .map_or(FALLBACK_STACKING_CAPACITY, |(_, capacity)| *capacity)
}

/// Per-category settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CategoryConfig {
    pub enabled: bool,
    pub stacking_capacity: Option<u32>,
    pub transfer_quantity: Option<u32>,
    pub bulk_transfer_quantity: Option<u32>,
    pub layout: Option<GroundStorageLayout>,
    pub stacking_model: Option<AssetLocation>,
    pub max_stacking_height: Option<u32>,
    pub sprint_key: Option<bool>,
    pub upsolid: Option<bool>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stacking_capacity: None,
            transfer_quantity: None,
            bulk_transfer_quantity: None,
            layout: None,
            stacking_model: None,
            max_stacking_height: None,
            sprint_key: None,
            upsolid: None,
        }
    }
}

/// Whole pile configuration, keyed by category
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PilesConfig {
    pub categories: FxHashMap<String, CategoryConfig>,
}

impl PilesConfig {
    /// Configuration listing every known category with its default capacity
    pub fn with_defaults() -> Self {
        let categories = DEFAULT_STACKING_CAPACITIES
            .iter()
            .map(|(key, capacity)| {
                (
                    key.to_string(),
                    CategoryConfig {
                        stacking_capacity: Some(*capacity),
                        ..CategoryConfig::default()
                    },
                )
            })
            .collect();
        Self { categories }
    }

    pub fn category(&self, key: &str) -> Option<&CategoryConfig> {
        self.categories.get(key)
    }
}
