//! Collectible Registry
//!
//! In-memory registry of collectible definitions, walked by the pile pass in
//! registration order.

use crate::asset::AssetLocation;
use crate::collectible::CollectibleObject;
use crate::scanner::CollectibleSource;
use rustc_hash::FxHashMap;

/// Registry that stores all collectible definitions in registration order
#[derive(Debug)]
pub struct CollectibleRegistry {
    /// All registered collectibles, in registration order
    collectibles: Vec<CollectibleObject>,
    /// Map from code to index into `collectibles`
    code_to_index: FxHashMap<AssetLocation, usize>,
    next_id: u32,
}

impl Default for CollectibleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectibleRegistry {
    pub fn new() -> Self {
        Self {
            collectibles: Vec::new(),
            code_to_index: FxHashMap::default(),
            next_id: 1, // 0 means "not yet assigned"
        }
    }

    /// Register a collectible and assign it the next id
    pub fn register(&mut self, mut obj: CollectibleObject) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        obj.id = id;

        log::trace!(
            "Registered collectible '{}' with ID {}",
            obj.code
                .as_ref()
                .map_or_else(|| "<no code>".to_string(), ToString::to_string),
            id
        );
        self.insert(obj);
        id
    }

    /// Store a collectible exactly as given, keeping its id.
    ///
    /// Hosts expose definitions that are still loading this way: they may
    /// have no code and id 0.
    pub fn insert(&mut self, obj: CollectibleObject) {
        if let Some(code) = &obj.code {
            let index = self.collectibles.len();
            if let Some(previous) = self.code_to_index.insert(code.clone(), index) {
                log::warn!(
                    "Collectible '{}' registered twice (indices {} and {}), lookups now return the later one",
                    code,
                    previous,
                    index
                );
            }
        }
        self.collectibles.push(obj);
    }

    /// Get a collectible by code
    pub fn get(&self, code: &AssetLocation) -> Option<&CollectibleObject> {
        self.code_to_index
            .get(code)
            .and_then(|&index| self.collectibles.get(index))
    }

    /// Get an id by code
    pub fn get_id(&self, code: &AssetLocation) -> Option<u32> {
        self.get(code).map(|obj| obj.id)
    }

    /// All collectibles in registration order
    pub fn collectibles(&self) -> &[CollectibleObject] {
        &self.collectibles
    }

    pub fn len(&self) -> usize {
        self.collectibles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectibles.is_empty()
    }
}

impl CollectibleSource for CollectibleRegistry {
    fn collectibles_mut(&mut self) -> &mut [CollectibleObject] {
        &mut self.collectibles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = CollectibleRegistry::new();
        let stick = registry.register(CollectibleObject::item(AssetLocation::new("stick")));
        let bone = registry.register(CollectibleObject::item(AssetLocation::new("bone")));

        assert_eq!(stick, 1);
        assert_eq!(bone, 2);
        assert_eq!(registry.get_id(&AssetLocation::new("bone")), Some(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert_keeps_unassigned_entries() {
        let mut registry = CollectibleRegistry::new();
        let mut loading = CollectibleObject::item(AssetLocation::new("placeholder"));
        loading.code = None;
        registry.insert(loading);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.collectibles()[0].id, 0);
        assert!(registry.get(&AssetLocation::new("placeholder")).is_none());
    }

    #[test]
    fn test_duplicate_code_lookup_returns_later_entry() {
        let mut registry = CollectibleRegistry::new();
        let first = registry.register(CollectibleObject::item(AssetLocation::new("rope")));
        let second = registry.register(CollectibleObject::item(AssetLocation::new("rope")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_id(&AssetLocation::new("rope")), Some(second));
        assert_ne!(first, second);
        assert_eq!(registry.collectibles()[0].id, first);
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut registry = CollectibleRegistry::new();
        for code in ["rope", "arrow-flint", "stick"] {
            registry.register(CollectibleObject::item(AssetLocation::new(code)));
        }
        let paths: Vec<_> = registry
            .collectibles()
            .iter()
            .filter_map(CollectibleObject::code_path)
            .collect();
        assert_eq!(paths, vec!["rope", "arrow-flint", "stick"]);
    }
}
