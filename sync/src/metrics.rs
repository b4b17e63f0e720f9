//! Prometheus metrics for the range processor.
//!
//! The [`ProcessorMetrics`] struct owns a dedicated [`Registry`] so that an
//! embedding service can encode it into the Prometheus text exposition
//! format without touching the global registry.

use prometheus::{
    register_int_counter_with_registry, register_int_gauge_with_registry, IntCounter, IntGauge,
    Opts, Registry,
};

/// Counters and gauges covering submission intake and window progress.
pub struct ProcessorMetrics {
    /// The Prometheus registry that owns every metric below.
    pub registry: Registry,

    /// Submissions counted toward a height's quorum.
    pub submissions_accepted: IntCounter,
    /// Submissions dropped: outside the active window, or for a height
    /// that had already finalized.
    pub submissions_discarded: IntCounter,
    /// Heights that reached quorum and were finalized.
    pub heights_finalized: IntCounter,
    /// Current lower bound of the active window.
    pub window_lower_bound: IntGauge,
}

impl ProcessorMetrics {
    /// Create a fresh set of metrics registered under a new [`Registry`].
    pub fn new() -> Self {
        let registry = Registry::new();

        let submissions_accepted = register_int_counter_with_registry!(
            Opts::new(
                "cairn_submissions_accepted_total",
                "Submissions counted toward a height's quorum"
            ),
            registry
        )
        .expect("failed to register submissions_accepted counter");

        let submissions_discarded = register_int_counter_with_registry!(
            Opts::new(
                "cairn_submissions_discarded_total",
                "Submissions dropped as out-of-window or already finalized"
            ),
            registry
        )
        .expect("failed to register submissions_discarded counter");

        let heights_finalized = register_int_counter_with_registry!(
            Opts::new(
                "cairn_heights_finalized_total",
                "Heights that reached quorum"
            ),
            registry
        )
        .expect("failed to register heights_finalized counter");

        let window_lower_bound = register_int_gauge_with_registry!(
            Opts::new(
                "cairn_window_lower_bound",
                "Current lower bound of the active window"
            ),
            registry
        )
        .expect("failed to register window_lower_bound gauge");

        Self {
            registry,
            submissions_accepted,
            submissions_discarded,
            heights_finalized,
            window_lower_bound,
        }
    }
}

impl Default for ProcessorMetrics {
    fn default() -> Self {
        Self::new()
    }
}
