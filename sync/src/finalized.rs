//! Finalized height store: the first block to reach quorum wins.

use cairn_types::{Block, Height};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Heights that reached quorum, with the block each finalized at.
///
/// Entries are insert-only and never overwritten. [`FinalizedStore::try_finalize`]
/// is an insert-if-absent: of any set of concurrent finalizers for the same
/// height, exactly one wins and the rest observe the height as already
/// finalized.
pub struct FinalizedStore {
    blocks: Mutex<HashMap<Height, Block>>,
}

impl FinalizedStore {
    pub fn new() -> Self {
        Self {
            blocks: Mutex::new(HashMap::new()),
        }
    }

    /// Record `block` as the finalized value for `height`.
    ///
    /// Returns `false` if the height was already finalized; the existing
    /// value is left untouched.
    pub async fn try_finalize(&self, height: Height, block: Block) -> bool {
        match self.blocks.lock().await.entry(height) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(block);
                true
            }
        }
    }

    /// Whether `height` has been finalized.
    pub async fn contains(&self, height: Height) -> bool {
        self.blocks.lock().await.contains_key(&height)
    }

    /// The finalized block for `height`, if any.
    pub async fn get(&self, height: Height) -> Option<Block> {
        self.blocks.lock().await.get(&height).cloned()
    }

    /// Number of finalized heights.
    pub async fn len(&self) -> usize {
        self.blocks.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blocks.lock().await.is_empty()
    }
}

impl Default for FinalizedStore {
    fn default() -> Self {
        Self::new()
    }
}
