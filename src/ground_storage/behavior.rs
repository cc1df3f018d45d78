//! The ground-storable behavior attached by the pile pass

use super::properties::GroundStorageProperties;
use crate::asset::AssetLocation;
use crate::collectible::CollectibleBehavior;
use crate::error::{PileError, PileResult};
use crate::geometry::cuboid_is_normalized;
use std::any::Any;

/// Registered name of the ground-storable behavior
pub const GROUND_STORABLE: &str = "GroundStorable";

/// Lets a collectible be placed on the ground as a pile.
///
/// Bound to the collectible it was created for. Holds no reference back to
/// the rule engine once initialized.
#[derive(Debug, Clone)]
pub struct GroundStorableBehavior {
    collectible: Option<AssetLocation>,
    properties: Option<GroundStorageProperties>,
}

impl GroundStorableBehavior {
    pub fn new(collectible: Option<AssetLocation>) -> Self {
        Self {
            collectible,
            properties: None,
        }
    }

    /// Code of the collectible this behavior belongs to
    pub fn collectible(&self) -> Option<&AssetLocation> {
        self.collectible.as_ref()
    }

    /// Properties set by `initialize`, None before that
    pub fn properties(&self) -> Option<&GroundStorageProperties> {
        self.properties.as_ref()
    }

    fn reject(&self, error: impl Into<String>) -> PileError {
        PileError::BehaviorInitialization {
            collectible: self
                .collectible()
                .map_or_else(|| "<no code>".to_string(), ToString::to_string),
            error: error.into(),
        }
    }

    fn validate(&self, props: &GroundStorageProperties) -> PileResult<()> {
        if props.stacking_capacity == 0 {
            return Err(self.reject("StackingCapacity must be positive"));
        }
        if props.transfer_quantity == 0 {
            return Err(self.reject("TransferQuantity must be positive"));
        }
        if !props.cb_scale_y_by_layer.is_finite() || props.cb_scale_y_by_layer < 0.0 {
            return Err(self.reject(format!(
                "CbScaleYByLayer must be a finite non-negative number, got {}",
                props.cb_scale_y_by_layer
            )));
        }
        if !props.model_items_to_stack_size_ratio.is_finite()
            || props.model_items_to_stack_size_ratio <= 0.0
        {
            return Err(self.reject(format!(
                "ModelItemsToStackSizeRatio must be a finite positive number, got {}",
                props.model_items_to_stack_size_ratio
            )));
        }
        if !cuboid_is_normalized(&props.collision_box) {
            return Err(self.reject(format!(
                "CollisionBox {:?} is not inside the unit block",
                props.collision_box
            )));
        }
        Ok(())
    }
}

impl CollectibleBehavior for GroundStorableBehavior {
    fn name(&self) -> &str {
        GROUND_STORABLE
    }

    fn initialize(&mut self, properties: &serde_json::Value) -> PileResult<()> {
        let props: GroundStorageProperties = serde_json::from_value(properties.clone())
            .map_err(|e| self.reject(format!("malformed properties: {}", e)))?;
        self.validate(&props)?;
        self.properties = Some(props);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
