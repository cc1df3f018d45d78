//! Category rules and the engine that applies them
//!
//! - **rule_data**: the static, ordered category table
//! - **matcher**: compiled code matchers
//! - **rule_engine**: matching loop, geometry derivation and attachment

pub mod matcher;
pub mod rule_data;
pub mod rule_engine;

pub use matcher::CompiledMatcher;
pub use rule_data::{AttachMode, CategoryRule, CodeMatcher, PileSound, CATEGORY_RULES, CUBE_SHAPE};
pub use rule_engine::{
    attach_ground_storable, compute_properties, default_engine, ClassifyOutcome, RuleEngine,
    GROUND_STORABLE_TAB,
};
