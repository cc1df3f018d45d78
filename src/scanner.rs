//! Catalog Scanner
//!
//! Walks the host's collectibles in registry order, dropping definitions
//! that never finished loading and those already carrying a pile.

use crate::collectible::{has_behavior, CollectibleObject};
use crate::ground_storage::GROUND_STORABLE;

/// Codes whose existing pile behavior is replaced rather than kept
pub const REPLACEABLE_PATHS: [&str; 2] = ["stick", "bone"];

/// Host registry seam.
///
/// The pass holds the mutable borrow for its whole duration; nothing else
/// may touch the collectibles meanwhile.
pub trait CollectibleSource {
    fn collectibles_mut(&mut self) -> &mut [CollectibleObject];
}

impl CollectibleSource for Vec<CollectibleObject> {
    fn collectibles_mut(&mut self) -> &mut [CollectibleObject] {
        self
    }
}

/// Whether the definition finished loading (has a code or an id)
pub fn is_initialized(obj: &CollectibleObject) -> bool {
    obj.code.is_some() || obj.id != 0
}

/// Whether the definition may go through the rule engine.
///
/// Definitions that already carry a pile are only let through when their
/// code path is one of `REPLACEABLE_PATHS`.
pub fn passes_behavior_gate(obj: &CollectibleObject) -> bool {
    if !has_behavior(obj, GROUND_STORABLE) {
        return true;
    }
    obj.code_path()
        .is_some_and(|path| REPLACEABLE_PATHS.contains(&path))
}

/// Initialized collectibles in registry order
pub fn scan_collectibles<S>(source: &mut S) -> impl Iterator<Item = &mut CollectibleObject>
where
    S: CollectibleSource + ?Sized,
{
    source
        .collectibles_mut()
        .iter_mut()
        .filter(|obj| is_initialized(obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetLocation;
    use crate::collectible::append_behavior;
    use crate::ground_storage::GroundStorableBehavior;

    fn with_pile(code: &str) -> CollectibleObject {
        let mut obj = CollectibleObject::item(AssetLocation::new(code));
        append_behavior(&mut obj, Box::new(GroundStorableBehavior::new(None)));
        obj
    }

    #[test]
    fn test_scan_skips_uninitialized() {
        let mut loading = CollectibleObject::item(AssetLocation::new("x"));
        loading.code = None;

        let mut codeless_but_registered = CollectibleObject::item(AssetLocation::new("y"));
        codeless_but_registered.code = None;
        codeless_but_registered.id = 7;

        let mut source = vec![
            CollectibleObject::item(AssetLocation::new("rope")),
            loading,
            codeless_but_registered,
            CollectibleObject::item(AssetLocation::new("stick")),
        ];

        let seen: Vec<_> = scan_collectibles(&mut source)
            .map(|obj| (obj.code_path().map(str::to_string), obj.id))
            .collect();
        assert_eq!(
            seen,
            vec![
                (Some("rope".to_string()), 0),
                (None, 7),
                (Some("stick".to_string()), 0),
            ]
        );
    }

    #[test]
    fn test_gate_lets_uncapable_objects_through() {
        assert!(passes_behavior_gate(&CollectibleObject::item(AssetLocation::new(
            "arrow-fire"
        ))));
    }

    #[test]
    fn test_gate_only_reopens_stick_and_bone() {
        assert!(passes_behavior_gate(&with_pile("stick")));
        assert!(passes_behavior_gate(&with_pile("bone")));
        assert!(!passes_behavior_gate(&with_pile("arrow-fire")));
        assert!(!passes_behavior_gate(&with_pile("sticks")));

        let mut codeless = with_pile("stick");
        codeless.code = None;
        assert!(!passes_behavior_gate(&codeless));
    }
}
