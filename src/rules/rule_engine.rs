//! Rule Engine
//!
//! Tests every category rule against a collectible, in table order, and
//! attaches a ground-storable behavior for each enabled match.
//!
//! Evaluation does not stop at the first match. A matching rule whose
//! category is disabled ends evaluation for that collectible. The table's
//! patterns are mutually exclusive, so in practice at most one rule attaches.

use super::matcher::CompiledMatcher;
use super::rule_data::{AttachMode, CategoryRule, PileSound, CATEGORY_RULES};
use crate::asset::AssetLocation;
use crate::collectible::{
    append_behavior, append_creative_tab, collectible_label, replace_behaviors,
    CollectibleBehavior, CollectibleObject,
};
use crate::config::PileCategoryProvider;
use crate::error::{ErrorContext, PileError, PileResult};
use crate::geometry::cuboid_height;
use crate::ground_storage::{GroundStorableBehavior, GroundStorageProperties};
use lazy_static::lazy_static;

/// Creative tab added to every collectible that gains a pile
pub const GROUND_STORABLE_TAB: &str = "groundstorable";

lazy_static! {
    static ref DEFAULT_ENGINE: PileResult<RuleEngine> = RuleEngine::new(&CATEGORY_RULES);
}

/// Engine over the built-in category table, compiled on first use
pub fn default_engine() -> PileResult<&'static RuleEngine> {
    DEFAULT_ENGINE
        .as_ref()
        .context("built-in category table failed to compile")
}

/// A rule with its matcher compiled
#[derive(Debug)]
struct CompiledRule {
    rule: &'static CategoryRule,
    matcher: CompiledMatcher,
}

/// What happened to one collectible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOutcome {
    /// Keys of the categories attached, in table order
    pub attached: Vec<&'static str>,
    /// Category that matched but was disabled, ending evaluation
    pub disabled: Option<&'static str>,
}

impl ClassifyOutcome {
    pub fn is_unmatched(&self) -> bool {
        self.attached.is_empty() && self.disabled.is_none()
    }
}

/// Ordered, compiled category rules
#[derive(Debug)]
pub struct RuleEngine {
    rules: Vec<CompiledRule>,
}

impl RuleEngine {
    /// Compile a rule table
    pub fn new(rules: &'static [CategoryRule]) -> PileResult<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    rule,
                    matcher: CompiledMatcher::compile(&rule.matcher)?,
                })
            })
            .collect::<PileResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &'static CategoryRule> + '_ {
        self.rules.iter().map(|compiled| compiled.rule)
    }

    /// Every rule whose matcher accepts the collectible, ignoring enablement
    pub fn matching_rules(&self, obj: &CollectibleObject) -> Vec<&'static CategoryRule> {
        self.rules
            .iter()
            .filter(|compiled| compiled.matcher.matches(obj))
            .map(|compiled| compiled.rule)
            .collect()
    }

    /// Run every rule against one collectible and attach piles for matches
    pub fn classify(
        &self,
        obj: &mut CollectibleObject,
        provider: &dyn PileCategoryProvider,
    ) -> PileResult<ClassifyOutcome> {
        let mut outcome = ClassifyOutcome::default();

        for compiled in &self.rules {
            if !compiled.matcher.matches(obj) {
                continue;
            }
            let rule = compiled.rule;

            let category = provider.resolve(rule.key, obj)?;
            if !category.enabled {
                log::debug!(
                    "Category '{}' disabled, leaving {} untouched",
                    rule.key,
                    collectible_label(obj)
                );
                outcome.disabled = Some(rule.key);
                return Ok(outcome);
            }

            let properties = compute_properties(rule, category.properties, obj);
            attach_ground_storable(obj, rule, &properties)?;
            append_creative_tab(obj, GROUND_STORABLE_TAB);

            log::debug!(
                "Attached '{}' pile to {} (capacity {}, full height {:.4})",
                rule.key,
                collectible_label(obj),
                properties.stacking_capacity,
                cuboid_height(&properties.collision_box)
                    + properties.cb_scale_y_by_layer * rule.layer_units as f32,
            );
            outcome.attached.push(rule.key);
        }

        Ok(outcome)
    }
}

/// Derive the final pile properties from the provider's base properties.
///
/// Only the scale, collision box, sound and (for rules that define one) the
/// visual ratio are overwritten. The capacity is not checked for zero.
pub fn compute_properties(
    rule: &CategoryRule,
    base: GroundStorageProperties,
    obj: &CollectibleObject,
) -> GroundStorageProperties {
    let mut props = base;
    let capacity = props.stacking_capacity as f32;

    props.cb_scale_y_by_layer = rule.layer_units as f32 / capacity;
    props.collision_box = rule.collision_box;
    props.place_remove_sound = match rule.sound {
        PileSound::Fixed(sound) => AssetLocation::new(sound),
        PileSound::BlockPlaceOr(fallback) => obj
            .place_sound()
            .cloned()
            .unwrap_or_else(|| AssetLocation::new(fallback)),
    };
    if let Some(numerator) = rule.visual_ratio_numerator {
        props.model_items_to_stack_size_ratio = numerator as f32 / capacity;
    }

    props
}

/// Build, initialize and attach a ground-storable behavior.
///
/// Initialization happens before the behavior list is touched, so a rejected
/// property set leaves the collectible as it was.
pub fn attach_ground_storable(
    obj: &mut CollectibleObject,
    rule: &CategoryRule,
    properties: &GroundStorageProperties,
) -> PileResult<()> {
    let bag = serde_json::to_value(properties).map_err(|e| PileError::SerializationError {
        context: format!("ground storage properties of {}", collectible_label(obj)),
        error: e.to_string(),
    })?;

    let mut behavior = GroundStorableBehavior::new(obj.code.clone());
    behavior.initialize(&bag)?;

    match rule.attach_mode {
        AttachMode::Append => append_behavior(obj, Box::new(behavior)),
        AttachMode::Replace => replace_behaviors(obj, Box::new(behavior)),
    }
    Ok(())
}
