//! Category Enablement Provider
//!
//! Answers, per category key, whether piles are enabled and which base
//! properties (including the stacking capacity) the rule engine starts from.

use super::config_data::{default_stacking_capacity, PilesConfig};
use crate::collectible::CollectibleObject;
use crate::error::PileResult;
use crate::ground_storage::GroundStorageProperties;

/// Resolved settings of one category for one collectible
#[derive(Debug, Clone, PartialEq)]
pub struct PileCategory {
    pub enabled: bool,
    /// Base properties. `stacking_capacity` is the divisor of every formula.
    pub properties: GroundStorageProperties,
}

impl PileCategory {
    pub fn stacking_capacity(&self) -> u32 {
        self.properties.stacking_capacity
    }
}

/// Source of category enablement and base pile properties.
///
/// Must return a positive stacking capacity for enabled categories; the rule
/// engine divides by it without checking.
pub trait PileCategoryProvider {
    fn resolve(&self, key: &str, obj: &CollectibleObject) -> PileResult<PileCategory>;
}

impl<F> PileCategoryProvider for F
where
    F: Fn(&str, &CollectibleObject) -> PileResult<PileCategory>,
{
    fn resolve(&self, key: &str, obj: &CollectibleObject) -> PileResult<PileCategory> {
        self(key, obj)
    }
}

/// Provider backed by a `PilesConfig`
#[derive(Debug, Clone, Default)]
pub struct ConfigCategoryProvider {
    config: PilesConfig,
}

impl ConfigCategoryProvider {
    pub fn new(config: PilesConfig) -> Self {
        Self { config }
    }
}

impl PileCategoryProvider for ConfigCategoryProvider {
    fn resolve(&self, key: &str, obj: &CollectibleObject) -> PileResult<PileCategory> {
        let mut properties = GroundStorageProperties {
            stacking_capacity: default_stacking_capacity(key),
            ..GroundStorageProperties::default()
        };

        // Blocks pile up using their own shape unless configured otherwise
        properties.stacking_model = obj.shape_base().cloned();

        let Some(category) = self.config.category(key) else {
            return Ok(PileCategory {
                enabled: true,
                properties,
            });
        };

        if let Some(capacity) = category.stacking_capacity {
            properties.stacking_capacity = capacity;
        }
        if let Some(quantity) = category.transfer_quantity {
            properties.transfer_quantity = quantity;
        }
        if let Some(quantity) = category.bulk_transfer_quantity {
            properties.bulk_transfer_quantity = quantity;
        }
        if let Some(layout) = category.layout {
            properties.layout = layout;
        }
        if let Some(model) = &category.stacking_model {
            properties.stacking_model = Some(model.clone());
        }
        if category.max_stacking_height.is_some() {
            properties.max_stacking_height = category.max_stacking_height;
        }
        if let Some(sprint_key) = category.sprint_key {
            properties.sprint_key = sprint_key;
        }
        if let Some(upsolid) = category.upsolid {
            properties.upsolid = upsolid;
        }

        Ok(PileCategory {
            enabled: category.enabled,
            properties,
        })
    }
}
