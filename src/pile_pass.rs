//! Pile pass - one classification run over a whole registry
//!
//! Runs once per session after the host has loaded every collectible. The
//! pass is synchronous and fails fast: the first behavior that rejects its
//! properties aborts the run and nothing after it is classified.

use crate::collectible::collectible_label;
use crate::config::{load_or_create_config, ConfigCategoryProvider, PileCategoryProvider};
use crate::error::PileResult;
use crate::rules::{default_engine, RuleEngine};
use crate::scanner::{passes_behavior_gate, scan_collectibles, CollectibleSource};
use std::path::Path;
use std::time::{Duration, Instant};

/// Counters of one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Initialized collectibles seen
    pub scanned: usize,
    /// Skipped because they already carry a non-replaceable pile
    pub gated: usize,
    /// Matched no rule
    pub unmatched: usize,
    /// Stopped by a disabled category
    pub disabled: usize,
    /// Pile behaviors attached
    pub attached: usize,
    pub elapsed: Duration,
}

/// Classify every collectible with the built-in category table
pub fn append_behaviors<S>(
    source: &mut S,
    provider: &dyn PileCategoryProvider,
) -> PileResult<ScanReport>
where
    S: CollectibleSource + ?Sized,
{
    append_behaviors_with(default_engine()?, source, provider)
}

/// Classify every collectible with the given engine
pub fn append_behaviors_with<S>(
    engine: &RuleEngine,
    source: &mut S,
    provider: &dyn PileCategoryProvider,
) -> PileResult<ScanReport>
where
    S: CollectibleSource + ?Sized,
{
    let timer = Instant::now();
    let mut report = ScanReport::default();

    for obj in scan_collectibles(source) {
        report.scanned += 1;

        if !passes_behavior_gate(obj) {
            report.gated += 1;
            continue;
        }

        let outcome = match engine.classify(obj, provider) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!(
                    "Pile pass aborted at {} after {} collectibles: {}",
                    collectible_label(obj),
                    report.scanned,
                    e
                );
                return Err(e);
            }
        };

        if outcome.is_unmatched() {
            log::trace!("No pile category for {}", collectible_label(obj));
            report.unmatched += 1;
        }
        if outcome.disabled.is_some() {
            report.disabled += 1;
        }
        report.attached += outcome.attached.len();
    }

    report.elapsed = timer.elapsed();
    log::info!(
        "MorePiles: Insert behavior time - {} μs",
        report.elapsed.as_micros()
    );
    log::debug!(
        "MorePiles: scanned {}, attached {}, disabled {}, already piled {}, unmatched {}",
        report.scanned,
        report.attached,
        report.disabled,
        report.gated,
        report.unmatched
    );
    Ok(report)
}

/// Load (or create) the pile config at `config_path` and run the pass with it
pub fn append_behaviors_from_config<S>(source: &mut S, config_path: &Path) -> PileResult<ScanReport>
where
    S: CollectibleSource + ?Sized,
{
    let provider = ConfigCategoryProvider::new(load_or_create_config(config_path)?);
    append_behaviors(source, &provider)
}
