//! Namespaced asset identifiers (`domain:path`)

use crate::error::{PileError, PileResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Domain assumed when an identifier carries no `domain:` prefix
pub const DEFAULT_DOMAIN: &str = "game";

/// Namespaced identifier used for collectible codes, shapes and sounds.
///
/// Equality is ordinal on both parts; no case folding happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetLocation {
    pub domain: String,
    pub path: String,
}

impl AssetLocation {
    /// Create a location in the default domain
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            path: path.into(),
        }
    }

    /// Create a location in an explicit domain
    pub fn with_domain(domain: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
        }
    }

    /// Parse `domain:path` or a bare `path`
    pub fn parse(value: &str) -> PileResult<Self> {
        let (domain, path) = match value.split_once(':') {
            Some((domain, path)) => (domain, path),
            None => (DEFAULT_DOMAIN, value),
        };

        if domain.is_empty() {
            return Err(PileError::InvalidAssetLocation {
                value: value.to_string(),
                reason: "empty domain".to_string(),
            });
        }
        if path.is_empty() {
            return Err(PileError::InvalidAssetLocation {
                value: value.to_string(),
                reason: "empty path".to_string(),
            });
        }

        Ok(Self::with_domain(domain, path))
    }
}

impl fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.domain, self.path)
    }
}

impl FromStr for AssetLocation {
    type Err = PileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AssetLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AssetLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
