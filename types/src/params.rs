//! Processor parameters, clamped at construction.

use serde::{Deserialize, Serialize};

/// Smallest permitted window size.
pub const MIN_WINDOW_SIZE: u64 = 1;
/// Smallest permitted quorum threshold.
pub const MIN_QUORUM_THRESHOLD: u64 = 1;

/// Tunable parameters of a range processor.
///
/// Both values are fixed for the processor's lifetime. Values below the
/// minimums are clamped up rather than rejected; construction never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorParams {
    /// Number of heights in the active window.
    #[serde(default = "default_window_size")]
    pub window_size: u64,

    /// Peer submissions required before a height finalizes.
    #[serde(default = "default_quorum_threshold")]
    pub quorum_threshold: u64,
}

fn default_window_size() -> u64 {
    32
}

fn default_quorum_threshold() -> u64 {
    3
}

impl ProcessorParams {
    pub fn new(window_size: u64, quorum_threshold: u64) -> Self {
        Self {
            window_size: window_size.max(MIN_WINDOW_SIZE),
            quorum_threshold: quorum_threshold.max(MIN_QUORUM_THRESHOLD),
        }
    }

    /// Clamp both fields up to their minimums.
    ///
    /// Deserialization bypasses [`ProcessorParams::new`], so configs loaded
    /// from a file go through this before use.
    pub fn clamped(self) -> Self {
        Self::new(self.window_size, self.quorum_threshold)
    }
}

impl Default for ProcessorParams {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            quorum_threshold: default_quorum_threshold(),
        }
    }
}
