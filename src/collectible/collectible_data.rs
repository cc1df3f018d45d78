//! Collectible Data - Pure DOP
//!
//! Data structures only. All mutations happen in collectible_operations.rs

use super::behavior::CollectibleBehavior;
use crate::asset::AssetLocation;

/// Shape reference of a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeShape {
    pub base: AssetLocation,
}

/// Sound set of a block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSounds {
    pub place: Option<AssetLocation>,
}

/// Concrete kind of a collectible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectibleKind {
    Block {
        shape: Option<CompositeShape>,
        sounds: BlockSounds,
    },
    Item {
        /// Registered item class, e.g. `ItemStone`. None for plain items.
        class: Option<String>,
    },
}

/// A registered block or item definition
#[derive(Debug)]
pub struct CollectibleObject {
    /// Namespaced code. Absent while the definition is still loading.
    pub code: Option<AssetLocation>,
    /// Numeric id, 0 until the registry assigns one
    pub id: u32,
    pub kind: CollectibleKind,
    pub behaviors: Vec<Box<dyn CollectibleBehavior>>,
    pub creative_tabs: Vec<String>,
}

impl CollectibleObject {
    /// Create an item definition with no behaviors and no tabs
    pub fn item(code: AssetLocation) -> Self {
        Self {
            code: Some(code),
            id: 0,
            kind: CollectibleKind::Item { class: None },
            behaviors: Vec::new(),
            creative_tabs: Vec::new(),
        }
    }

    /// Create a block definition with the given shape and default sounds
    pub fn block(code: AssetLocation, shape: AssetLocation) -> Self {
        Self {
            code: Some(code),
            id: 0,
            kind: CollectibleKind::Block {
                shape: Some(CompositeShape { base: shape }),
                sounds: BlockSounds::default(),
            },
            behaviors: Vec::new(),
            creative_tabs: Vec::new(),
        }
    }

    /// Path component of the code, if any
    pub fn code_path(&self) -> Option<&str> {
        self.code.as_ref().map(|code| code.path.as_str())
    }

    /// Shape base of a block, None for items and shapeless blocks
    pub fn shape_base(&self) -> Option<&AssetLocation> {
        match &self.kind {
            CollectibleKind::Block {
                shape: Some(shape), ..
            } => Some(&shape.base),
            _ => None,
        }
    }

    /// Placement sound of a block, None for items
    pub fn place_sound(&self) -> Option<&AssetLocation> {
        match &self.kind {
            CollectibleKind::Block { sounds, .. } => sounds.place.as_ref(),
            CollectibleKind::Item { .. } => None,
        }
    }

    /// Item class name, None for blocks
    pub fn item_class(&self) -> Option<&str> {
        match &self.kind {
            CollectibleKind::Item { class } => class.as_deref(),
            CollectibleKind::Block { .. } => None,
        }
    }
}
