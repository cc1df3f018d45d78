//! Category Rule Data - Pure DOP
//!
//! The ordered category table. No methods, just data.
//! Matching and attachment happen in rule_engine.rs

use crate::geometry::Cuboidf;

/// Shape base of plain cubic blocks, claimed by the catch-all rule
pub const CUBE_SHAPE: &str = "block/basic/cube";

/// Predicate over a collectible's code or type
#[derive(Debug, Clone, Copy)]
pub enum CodeMatcher {
    /// Code path equals the literal
    Path(&'static str),
    /// Code path matches a `*` pattern
    Wildcard(&'static str),
    /// Code path matches any of the patterns
    AnyWildcard(&'static [&'static str]),
    /// Code domain equals `domain` and path matches `pattern`
    DomainWildcard {
        domain: &'static str,
        pattern: &'static str,
    },
    /// Full code equals `domain:path`
    Code {
        domain: &'static str,
        path: &'static str,
    },
    /// Any alternative matches
    AnyOf(&'static [CodeMatcher]),
    /// Block whose shape base is `domain:path`
    BlockShape {
        domain: &'static str,
        path: &'static str,
    },
    /// Item of the given class whose path matches `pattern`
    ItemClass {
        class: &'static str,
        pattern: &'static str,
    },
}

/// Where the place/remove sound comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileSound {
    Fixed(&'static str),
    /// The block's own place sound, else the fallback
    BlockPlaceOr(&'static str),
}

/// How the new behavior joins the existing behavior list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachMode {
    Append,
    /// The behavior list becomes exactly the new behavior
    Replace,
}

/// One category of pileable collectibles
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub key: &'static str,
    pub matcher: CodeMatcher,
    /// Visual layers one full stack occupies
    pub layer_units: u32,
    pub collision_box: Cuboidf,
    pub sound: PileSound,
    /// When set, the item-to-stack visual ratio is this over the capacity
    pub visual_ratio_numerator: Option<u32>,
    pub attach_mode: AttachMode,
}

const FLAT_SIXTEENTH: Cuboidf = Cuboidf::new(0.0, 0.0, 0.0, 1.0, 0.0625, 1.0);
const FLAT_EIGHTH: Cuboidf = Cuboidf::new(0.0, 0.0, 0.0, 1.0, 0.125, 1.0);
const INSET_EIGHTH: Cuboidf = Cuboidf::new(0.125, 0.0, 0.125, 0.875, 0.125, 0.875);
const CHAIN_BOX: Cuboidf = Cuboidf::new(0.0315, 0.0, 0.0315, 0.9685, 0.125, 0.9685);
const TWINE_BOX: Cuboidf = Cuboidf::new(0.1875, 0.0, 0.1875, 0.8125, 0.125, 0.8125);

const STICK_PLACE: &str = "sounds/block/stickplace";
const CLOTH: &str = "sounds/block/cloth";
const CHAIN: &str = "sounds/wearable/chain1";
const INGOT: &str = "sounds/block/ingot";
const PLANKS: &str = "sounds/block/planks";

const fn append(
    key: &'static str,
    matcher: CodeMatcher,
    layer_units: u32,
    collision_box: Cuboidf,
    sound: &'static str,
) -> CategoryRule {
    CategoryRule {
        key,
        matcher,
        layer_units,
        collision_box,
        sound: PileSound::Fixed(sound),
        visual_ratio_numerator: None,
        attach_mode: AttachMode::Append,
    }
}

const fn replace(
    key: &'static str,
    path: &'static str,
    layer_units: u32,
    collision_box: Cuboidf,
    sound: &'static str,
) -> CategoryRule {
    CategoryRule {
        attach_mode: AttachMode::Replace,
        ..append(key, CodeMatcher::Path(path), layer_units, collision_box, sound)
    }
}

const fn with_ratio(rule: CategoryRule, numerator: u32) -> CategoryRule {
    CategoryRule {
        visual_ratio_numerator: Some(numerator),
        ..rule
    }
}

/// Category table in evaluation order. The catch-all comes last.
pub static CATEGORY_RULES: [CategoryRule; 28] = [
    append("arrow", CodeMatcher::Wildcard("arrow-*"), 16, FLAT_SIXTEENTH, STICK_PLACE),
    append("bamboostakes", CodeMatcher::Path("bamboostakes"), 8, FLAT_EIGHTH, STICK_PLACE),
    append(
        "beeswax",
        CodeMatcher::Path("beeswax"),
        8,
        Cuboidf::new(0.2941, 0.0, 0.2941, 0.75, 0.125, 0.75),
        "sounds/effect/squish1",
    ),
    replace("bone", "bone", 16, FLAT_SIXTEENTH, "sounds/block/ceramicplace"),
    append(
        "chutesection",
        CodeMatcher::Wildcard("chutesection-*"),
        20,
        Cuboidf::new(0.0, 0.0, 0.0, 1.0, 0.05, 1.0),
        "sounds/block/chute",
    ),
    append("cloth", CodeMatcher::Wildcard("cloth-*"), 8, FLAT_EIGHTH, CLOTH),
    append("flaxfibers", CodeMatcher::Path("flaxfibers"), 16, FLAT_SIXTEENTH, CLOTH),
    append("flaxtwine", CodeMatcher::Path("flaxtwine"), 8, TWINE_BOX, CLOTH),
    append("metalchain", CodeMatcher::Wildcard("metalchain-*"), 8, CHAIN_BOX, CHAIN),
    append("metallamellae", CodeMatcher::Wildcard("metallamellae-*"), 8, CHAIN_BOX, CHAIN),
    append("metalscale", CodeMatcher::Wildcard("metalscale-*"), 8, TWINE_BOX, CHAIN),
    append("sail", CodeMatcher::Path("sail"), 8, FLAT_EIGHTH, CLOTH),
    replace("stick", "stick", 16, FLAT_SIXTEENTH, STICK_PLACE),
    append(
        "angledgears",
        CodeMatcher::Wildcard("angledgears-s"),
        8,
        Cuboidf::new(0.1875, 0.0, 0.1875, 0.8215, 0.125, 0.8215),
        STICK_PLACE,
    ),
    append(
        "axle",
        CodeMatcher::Wildcard("woodenaxle-ud"),
        4,
        Cuboidf::new(0.0, 0.0, 0.0, 1.0, 0.25, 1.0),
        STICK_PLACE,
    ),
    append(
        "ironfence",
        CodeMatcher::AnyWildcard(&["ironfence-base-ew", "ironfence-top-ew"]),
        16,
        Cuboidf::new(0.0625, 0.0, 0.0625, 0.9375, 0.0625, 0.9375),
        INGOT,
    ),
    append(
        "torchholder",
        CodeMatcher::Wildcard("torchholder-*-empty-north"),
        4,
        Cuboidf::new(0.188, 0.0, 0.188, 0.812, 0.25, 0.812),
        INGOT,
    ),
    append(
        "drystonefence",
        CodeMatcher::Wildcard("drystonefence-*-ew-free"),
        4,
        Cuboidf::new(0.25, 0.0, 0.25, 0.75, 0.25, 0.75),
        "sounds/block/loosestone1",
    ),
    with_ratio(
        append(
            "henbox",
            CodeMatcher::AnyOf(&[
                CodeMatcher::Wildcard("henbox-empty"),
                CodeMatcher::DomainWildcard {
                    domain: "vanvar",
                    pattern: "henbox-*-empty",
                },
            ]),
            4,
            Cuboidf::new(0.0625, 0.0, 0.0625, 0.9375, 0.25, 0.9375),
            PLANKS,
        ),
        320,
    ),
    append("ladder", CodeMatcher::AnyWildcard(&["ladder-*-north"]), 8, INSET_EIGHTH, PLANKS),
    with_ratio(
        append(
            "sign",
            CodeMatcher::AnyOf(&[
                CodeMatcher::Path("sign-ground-north"),
                CodeMatcher::DomainWildcard {
                    domain: "vanvar",
                    pattern: "sign-*-ground-north",
                },
            ]),
            8,
            INSET_EIGHTH,
            PLANKS,
        ),
        320,
    ),
    append(
        "toolrack",
        CodeMatcher::AnyOf(&[
            CodeMatcher::Path("toolrack-north"),
            CodeMatcher::DomainWildcard {
                domain: "vanvar",
                pattern: "toolrack-*-north",
            },
        ]),
        8,
        Cuboidf::new(0.1565, 0.0, 0.1565, 0.8435, 0.125, 0.8435),
        PLANKS,
    ),
    append(
        "trapdoor",
        CodeMatcher::AnyOf(&[
            CodeMatcher::Path("trapdoor-closed-up-north"),
            CodeMatcher::DomainWildcard {
                domain: "vanvar",
                pattern: "trapdoor-*-closed-up-north",
            },
        ]),
        8,
        INSET_EIGHTH,
        PLANKS,
    ),
    append("fence", CodeMatcher::Wildcard("woodenfence-*-ew-free"), 8, INSET_EIGHTH, PLANKS),
    append(
        "fencegate",
        CodeMatcher::Wildcard("woodenfencegate-*-n-closed-left-free"),
        8,
        INSET_EIGHTH,
        PLANKS,
    ),
    append(
        "stone",
        CodeMatcher::ItemClass {
            class: "ItemStone",
            pattern: "stone-*",
        },
        8,
        FLAT_EIGHTH,
        "sounds/block/loosestone",
    ),
    append(
        "rope",
        CodeMatcher::Code {
            domain: "game",
            path: "rope",
        },
        8,
        FLAT_EIGHTH,
        CLOTH,
    ),
    CategoryRule {
        key: "mostCubicBlocks",
        matcher: CodeMatcher::BlockShape {
            domain: "game",
            path: CUBE_SHAPE,
        },
        layer_units: 8,
        collision_box: FLAT_EIGHTH,
        sound: PileSound::BlockPlaceOr("sounds/player/build"),
        visual_ratio_numerator: None,
        attach_mode: AttachMode::Append,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cuboid_is_normalized;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = CATEGORY_RULES.iter().map(|rule| rule.key).collect();
        assert_eq!(keys.len(), CATEGORY_RULES.len());
    }

    #[test]
    fn test_only_stick_and_bone_replace() {
        let replacing: Vec<_> = CATEGORY_RULES
            .iter()
            .filter(|rule| rule.attach_mode == AttachMode::Replace)
            .map(|rule| rule.key)
            .collect();
        assert_eq!(replacing, vec!["bone", "stick"]);
    }

    #[test]
    fn test_catch_all_is_last() {
        let last = CATEGORY_RULES.last().expect("table is not empty");
        assert_eq!(last.key, "mostCubicBlocks");
        assert!(matches!(last.matcher, CodeMatcher::BlockShape { .. }));
    }

    #[test]
    fn test_boxes_are_normalized() {
        for rule in CATEGORY_RULES.iter() {
            assert!(
                cuboid_is_normalized(&rule.collision_box),
                "{} has a box outside the unit block",
                rule.key
            );
            assert!(rule.layer_units > 0, "{} has no layers", rule.key);
        }
    }

    #[test]
    fn test_visual_ratio_only_on_henbox_and_sign() {
        let with_ratio: Vec<_> = CATEGORY_RULES
            .iter()
            .filter_map(|rule| rule.visual_ratio_numerator.map(|n| (rule.key, n)))
            .collect();
        assert_eq!(with_ratio, vec![("henbox", 320), ("sign", 320)]);
    }
}
