//! Wildcard patterns over asset paths
//!
//! `*` matches any run of characters, including an empty one. A pattern
//! starting with `@` is a raw regular expression. Matching always covers the
//! whole path.

use crate::error::{PileError, PileResult};
use regex::Regex;

/// A compiled wildcard pattern
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    kind: PatternKind,
}

#[derive(Debug, Clone)]
enum PatternKind {
    /// No `*` present, compared ordinally
    Literal,
    Regex(Regex),
}

impl WildcardPattern {
    /// Compile a wildcard or `@regex` pattern
    pub fn new(pattern: &str) -> PileResult<Self> {
        let kind = if let Some(raw) = pattern.strip_prefix('@') {
            PatternKind::Regex(compile(pattern, &format!("^(?:{})$", raw))?)
        } else if pattern.contains('*') {
            let body = pattern
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            PatternKind::Regex(compile(pattern, &format!("^{}$", body))?)
        } else {
            PatternKind::Literal
        };

        Ok(Self {
            source: pattern.to_string(),
            kind,
        })
    }

    /// Whether `path` matches the whole pattern
    pub fn matches(&self, path: &str) -> bool {
        match &self.kind {
            PatternKind::Literal => self.source == path,
            PatternKind::Regex(regex) => regex.is_match(path),
        }
    }
}

fn compile(pattern: &str, expr: &str) -> PileResult<Regex> {
    Regex::new(expr).map_err(|e| PileError::InvalidPattern {
        pattern: pattern.to_string(),
        error: e.to_string(),
    })
}
