//! Cumulative lifecycle counters.
//!
//! [`LifecycleMetrics`] records what happened to every `add` and
//! `remove` request. `add` has no return value, so these counters are
//! how a caller (or a test) learns which path a particle took.

/// Counts of lifecycle outcomes since the simulation was created.
///
/// Counters are cumulative and survive `remove_all`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifecycleMetrics {
    /// Particles stored locally.
    pub added: u64,
    /// Particles handed to the ownership gate for another process.
    pub queued_for_transfer: u64,
    /// Particles dropped by the boundary predicate.
    pub rejected_outside_boundary: u64,
    /// Additions made while variational particles were allocated.
    pub added_during_variational: u64,
    /// Particles removed individually.
    pub removed: u64,
    /// Refused removal requests.
    pub remove_failures: u64,
    /// Calls to `remove_all`.
    pub clears: u64,
    /// Spatial index notifications.
    pub index_insertions: u64,
}

impl LifecycleMetrics {
    /// Total diagnostics emitted: drops, misuse warnings and refusals.
    pub fn diagnostics(&self) -> u64 {
        self.rejected_outside_boundary + self.added_during_variational + self.remove_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = LifecycleMetrics::default();
        assert_eq!(m.added, 0);
        assert_eq!(m.queued_for_transfer, 0);
        assert_eq!(m.removed, 0);
        assert_eq!(m.diagnostics(), 0);
    }

    #[test]
    fn diagnostics_sum_warning_counters() {
        let m = LifecycleMetrics {
            rejected_outside_boundary: 2,
            added_during_variational: 3,
            remove_failures: 4,
            added: 100,
            ..Default::default()
        };
        assert_eq!(m.diagnostics(), 9);
    }
}
