//! Collectible Operations - Pure DOP Functions
//!
//! The only mutations the pile pass performs on a collectible.

use super::behavior::CollectibleBehavior;
use super::collectible_data::CollectibleObject;

/// Check if a behavior with the given name is attached
pub fn has_behavior(obj: &CollectibleObject, name: &str) -> bool {
    obj.behaviors.iter().any(|behavior| behavior.name() == name)
}

/// Append a behavior after all existing ones
pub fn append_behavior(obj: &mut CollectibleObject, behavior: Box<dyn CollectibleBehavior>) {
    obj.behaviors.push(behavior);
}

/// Replace the whole behavior list with a single behavior
pub fn replace_behaviors(obj: &mut CollectibleObject, behavior: Box<dyn CollectibleBehavior>) {
    obj.behaviors = vec![behavior];
}

/// Append a creative inventory tab.
///
/// Definitions with no tabs, or whose first tab is empty, are hidden from the
/// creative catalog and stay untouched. No duplicate check is made. Returns
/// whether the list changed.
pub fn append_creative_tab(obj: &mut CollectibleObject, tab: &str) -> bool {
    match obj.creative_tabs.first() {
        Some(first) if !first.is_empty() => {}
        _ => return false,
    }
    obj.creative_tabs.push(tab.to_string());
    true
}

/// Human-readable identity for logs and errors
pub fn collectible_label(obj: &CollectibleObject) -> String {
    match &obj.code {
        Some(code) => format!("{} (id {})", code, obj.id),
        None => format!("<no code> (id {})", obj.id),
    }
}
