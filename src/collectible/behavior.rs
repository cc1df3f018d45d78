//! Behavior seam into the host's behavior-execution subsystem

use crate::error::PileResult;
use std::any::Any;
use std::fmt;

/// A behavior instance attached to a collectible.
///
/// `initialize` is a one-shot configuration call. Implementations validate
/// the property bag and may reject it; the caller treats a rejection as fatal.
pub trait CollectibleBehavior: fmt::Debug {
    /// Registered behavior name, used for presence checks
    fn name(&self) -> &str;

    /// Configure the behavior from a JSON property bag
    fn initialize(&mut self, properties: &serde_json::Value) -> PileResult<()>;

    fn as_any(&self) -> &dyn Any;
}
