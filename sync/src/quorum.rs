//! Per-height confirmation counting toward quorum.

use cairn_types::Height;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Counts accepted submissions per height.
///
/// Entries exist only for heights that received at least one submission
/// while still unfinalized. The map is lock-guarded so that an increment is
/// atomic with respect to racing increments for the same height: every
/// caller observes a distinct post-increment count, which makes the
/// submission that crosses the quorum threshold unique.
pub struct ConfirmationCounter {
    counts: Mutex<HashMap<Height, u64>>,
}

impl ConfirmationCounter {
    pub fn new() -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// Record one submission for `height` and return the new count.
    pub async fn increment(&self, height: Height) -> u64 {
        let mut counts = self.counts.lock().await;
        let count = counts.entry(height).or_insert(0);
        *count += 1;
        *count
    }

    /// Current count for `height`; zero if it never received a submission.
    pub async fn count(&self, height: Height) -> u64 {
        self.counts.lock().await.get(&height).copied().unwrap_or(0)
    }

    /// Number of heights with at least one counted submission.
    pub async fn len(&self) -> usize {
        self.counts.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.counts.lock().await.is_empty()
    }
}

impl Default for ConfirmationCounter {
    fn default() -> Self {
        Self::new()
    }
}
