//! Range processor: fans submissions out per height and finalizes on quorum.
//!
//! A submission batch maps the i-th block to height `start_height + i`.
//! Each submission is range-checked, counted, and, on its height's count
//! reaching the quorum threshold, recorded as finalized; the window then
//! advances past the finalized height.

use std::sync::Arc;

use cairn_types::{Block, Height, HeightRange, ProcessorParams};
use tokio::task::JoinSet;

use crate::finalized::FinalizedStore;
use crate::metrics::ProcessorMetrics;
use crate::quorum::ConfirmationCounter;
use crate::window::Window;

/// Sliding-window quorum counter over block heights.
///
/// Clones share all state, so a processor can be handed to any number of
/// concurrent callers; interleaved [`RangeProcessor::process_range`] calls
/// are tolerated in any order.
#[derive(Clone)]
pub struct RangeProcessor {
    window: Arc<Window>,
    counter: Arc<ConfirmationCounter>,
    finalized: Arc<FinalizedStore>,
    metrics: Arc<ProcessorMetrics>,
    quorum_threshold: u64,
}

impl RangeProcessor {
    /// Create a processor with a window of `window_size` heights starting
    /// at `start_height`, finalizing a height once it has received
    /// `quorum_threshold` submissions. Zero parameters are clamped to one;
    /// construction never fails.
    pub fn new(window_size: u64, quorum_threshold: u64, start_height: Height) -> Self {
        Self::with_params(
            ProcessorParams::new(window_size, quorum_threshold),
            start_height,
        )
    }

    /// Create a processor from pre-built parameters.
    pub fn with_params(params: ProcessorParams, start_height: Height) -> Self {
        let params = params.clamped();
        let metrics = ProcessorMetrics::new();
        metrics.window_lower_bound.set(start_height);
        Self {
            window: Arc::new(Window::new(params.window_size, start_height)),
            counter: Arc::new(ConfirmationCounter::new()),
            finalized: Arc::new(FinalizedStore::new()),
            metrics: Arc::new(metrics),
            quorum_threshold: params.quorum_threshold,
        }
    }

    /// Snapshot of the currently active height range.
    pub fn active_range(&self) -> HeightRange {
        self.window.active_range()
    }

    /// Quorum threshold the processor was built with.
    pub fn quorum_threshold(&self) -> u64 {
        self.quorum_threshold
    }

    /// Metrics for this processor, including its Prometheus registry.
    pub fn metrics(&self) -> &ProcessorMetrics {
        &self.metrics
    }

    /// The finalized block for `height`, if that height reached quorum.
    pub async fn finalized_block(&self, height: Height) -> Option<Block> {
        self.finalized.get(height).await
    }

    /// Number of heights finalized so far.
    pub async fn finalized_count(&self) -> usize {
        self.finalized.len().await
    }

    /// Submit a contiguous batch of blocks, the i-th for `start_height + i`.
    ///
    /// Every submission runs in its own task; the call returns once all of
    /// them have settled, so every effect of the batch is visible to the
    /// caller. Submissions outside the active window, or for heights
    /// already finalized, are dropped without error.
    pub async fn process_range(&self, start_height: Height, blocks: Vec<Block>) {
        let mut tasks = JoinSet::new();
        for (i, block) in blocks.into_iter().enumerate() {
            let height = start_height.saturating_add(i as Height);
            let processor = self.clone();
            tasks.spawn(async move {
                processor.process_submission(height, block).await;
            });
        }
        while tasks.join_next().await.is_some() {}
    }

    async fn process_submission(&self, height: Height, block: Block) {
        let range = self.window.active_range();
        if !range.contains(height) {
            tracing::debug!(height, %range, "submission outside active range, dropped");
            self.metrics.submissions_discarded.inc();
            return;
        }

        if self.finalized.contains(height).await {
            tracing::debug!(height, "height already finalized, submission dropped");
            self.metrics.submissions_discarded.inc();
            return;
        }

        let count = self.counter.increment(height).await;
        self.metrics.submissions_accepted.inc();

        // The counter hands each value out exactly once, so at most one
        // submission per height observes the threshold crossing.
        if count != self.quorum_threshold {
            return;
        }

        if self.finalized.try_finalize(height, block).await {
            self.metrics.heights_finalized.inc();
            self.window.advance_past(height);
            let lower_bound = self.window.lower_bound();
            self.metrics.window_lower_bound.set(lower_bound);
            tracing::info!(height, lower_bound, "height reached quorum, finalized");
        }
    }
}
