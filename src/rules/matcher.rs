//! Compiled code matchers
//!
//! `CodeMatcher` is plain table data; compiling it turns every wildcard into
//! a `WildcardPattern` once so the pass does no per-object regex building.

use super::rule_data::CodeMatcher;
use crate::asset::{AssetLocation, WildcardPattern};
use crate::collectible::CollectibleObject;
use crate::error::PileResult;

/// A matcher ready to test collectibles
#[derive(Debug, Clone)]
pub enum CompiledMatcher {
    Path(String),
    Wildcard(Vec<WildcardPattern>),
    DomainWildcard {
        domain: String,
        pattern: WildcardPattern,
    },
    Code(AssetLocation),
    AnyOf(Vec<CompiledMatcher>),
    BlockShape(AssetLocation),
    ItemClass {
        class: String,
        pattern: WildcardPattern,
    },
}

impl CompiledMatcher {
    pub fn compile(matcher: &CodeMatcher) -> PileResult<Self> {
        let compiled = match *matcher {
            CodeMatcher::Path(path) => CompiledMatcher::Path(path.to_string()),
            CodeMatcher::Wildcard(pattern) => {
                CompiledMatcher::Wildcard(vec![WildcardPattern::new(pattern)?])
            }
            CodeMatcher::AnyWildcard(patterns) => CompiledMatcher::Wildcard(
                patterns
                    .iter()
                    .map(|pattern| WildcardPattern::new(pattern))
                    .collect::<PileResult<Vec<_>>>()?,
            ),
            CodeMatcher::DomainWildcard { domain, pattern } => CompiledMatcher::DomainWildcard {
                domain: domain.to_string(),
                pattern: WildcardPattern::new(pattern)?,
            },
            CodeMatcher::Code { domain, path } => {
                CompiledMatcher::Code(AssetLocation::with_domain(domain, path))
            }
            CodeMatcher::AnyOf(alternatives) => CompiledMatcher::AnyOf(
                alternatives
                    .iter()
                    .map(CompiledMatcher::compile)
                    .collect::<PileResult<Vec<_>>>()?,
            ),
            CodeMatcher::BlockShape { domain, path } => {
                CompiledMatcher::BlockShape(AssetLocation::with_domain(domain, path))
            }
            CodeMatcher::ItemClass { class, pattern } => CompiledMatcher::ItemClass {
                class: class.to_string(),
                pattern: WildcardPattern::new(pattern)?,
            },
        };
        Ok(compiled)
    }

    /// Test a collectible. Code-based matchers never match a code-less object.
    pub fn matches(&self, obj: &CollectibleObject) -> bool {
        match self {
            CompiledMatcher::Path(path) => obj.code_path() == Some(path.as_str()),
            CompiledMatcher::Wildcard(patterns) => obj
                .code_path()
                .is_some_and(|path| patterns.iter().any(|pattern| pattern.matches(path))),
            CompiledMatcher::DomainWildcard { domain, pattern } => {
                obj.code.as_ref().is_some_and(|code| {
                    code.domain == *domain && pattern.matches(&code.path)
                })
            }
            CompiledMatcher::Code(expected) => obj.code.as_ref() == Some(expected),
            CompiledMatcher::AnyOf(alternatives) => {
                alternatives.iter().any(|matcher| matcher.matches(obj))
            }
            CompiledMatcher::BlockShape(shape) => obj.shape_base() == Some(shape),
            CompiledMatcher::ItemClass { class, pattern } => {
                obj.item_class() == Some(class.as_str())
                    && obj.code_path().is_some_and(|path| pattern.matches(path))
            }
        }
    }
}
