//! Asset identifiers and the wildcard patterns matched against them

pub mod asset_location;
pub mod wildcard;

pub use asset_location::{AssetLocation, DEFAULT_DOMAIN};
pub use wildcard::WildcardPattern;
