//! Ground storage properties - pure data
//!
//! Serialized with PascalCase keys, which is the property-bag convention of
//! the host's behavior subsystem.

use crate::asset::AssetLocation;
use crate::geometry::Cuboidf;
use serde::{Deserialize, Serialize};

/// Sound used when nothing more specific is known
pub const DEFAULT_PLACE_REMOVE_SOUND: &str = "sounds/player/build";

/// How items are arranged inside one ground storage cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroundStorageLayout {
    SingleCenter,
    Halves,
    WallHalves,
    Quadrants,
    #[default]
    Stacking,
}

/// Configuration of one ground-storable pile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroundStorageProperties {
    pub layout: GroundStorageLayout,
    pub wall_off_y: i32,
    pub place_remove_sound: AssetLocation,
    pub randomize_sound_pitch: bool,
    pub stacking_model: Option<AssetLocation>,
    pub model_items_to_stack_size_ratio: f32,
    pub stacking_capacity: u32,
    pub transfer_quantity: u32,
    pub bulk_transfer_quantity: u32,
    pub max_stacking_height: Option<u32>,
    pub collision_box: Cuboidf,
    pub selection_box: Cuboidf,
    /// Collision box height gained per layer of the pile
    pub cb_scale_y_by_layer: f32,
    pub sprint_key: bool,
    pub upsolid: bool,
}

impl Default for GroundStorageProperties {
    fn default() -> Self {
        Self {
            layout: GroundStorageLayout::Stacking,
            wall_off_y: 1,
            place_remove_sound: AssetLocation::new(DEFAULT_PLACE_REMOVE_SOUND),
            randomize_sound_pitch: true,
            stacking_model: None,
            model_items_to_stack_size_ratio: 1.0,
            stacking_capacity: 1,
            transfer_quantity: 1,
            bulk_transfer_quantity: 4,
            max_stacking_height: None,
            collision_box: Cuboidf::default(),
            selection_box: Cuboidf::default(),
            cb_scale_y_by_layer: 0.0,
            sprint_key: false,
            upsolid: false,
        }
    }
}
