//! Window tracker: the monotonically advancing active height range.

use cairn_types::{Height, HeightRange};
use std::sync::atomic::{AtomicI64, Ordering};

/// Holds the lower bound of the active range and its fixed size.
///
/// The lower bound only ever moves forward. Advancement is an atomic
/// fetch-max, so a finalizer for a smaller height that loses the race to a
/// finalizer for a larger height cannot regress the window.
pub struct Window {
    lower_bound: AtomicI64,
    size: i64,
}

impl Window {
    /// Create a window of `size` heights starting at `start`.
    ///
    /// A size of zero is clamped to one.
    pub fn new(size: u64, start: Height) -> Self {
        let size = i64::try_from(size.max(1)).unwrap_or(i64::MAX);
        Self {
            lower_bound: AtomicI64::new(start),
            size,
        }
    }

    /// Current lower bound: the smallest height still eligible for counting.
    pub fn lower_bound(&self) -> Height {
        self.lower_bound.load(Ordering::Acquire)
    }

    /// Number of heights in the window.
    pub fn size(&self) -> u64 {
        self.size as u64
    }

    /// Snapshot of the active range, `[lower_bound, lower_bound + size - 1]`.
    ///
    /// The lower bound is read once, so the returned range is internally
    /// consistent even while finalizers are advancing the window.
    pub fn active_range(&self) -> HeightRange {
        let min = self.lower_bound();
        HeightRange::new(min, min.saturating_add(self.size - 1))
    }

    /// Advance the lower bound to `height + 1` unless it is already further.
    ///
    /// Returns `true` if the lower bound moved.
    pub fn advance_past(&self, height: Height) -> bool {
        let candidate = height.saturating_add(1);
        let previous = self.lower_bound.fetch_max(candidate, Ordering::AcqRel);
        previous < candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn initial_range() {
        let window = Window::new(33, 7);
        assert_eq!(window.active_range(), HeightRange::new(7, 39));
        assert_eq!(window.lower_bound(), 7);
        assert_eq!(window.size(), 33);
    }

    #[test]
    fn zero_size_clamps_to_one() {
        let window = Window::new(0, 7);
        assert_eq!(window.active_range(), HeightRange::new(7, 7));
        assert_eq!(window.size(), 1);
    }

    #[test]
    fn negative_start() {
        let window = Window::new(3, -5);
        assert_eq!(window.active_range(), HeightRange::new(-5, -3));
    }

    #[test]
    fn advance_moves_forward() {
        let window = Window::new(3, 0);
        assert!(window.advance_past(0));
        assert_eq!(window.active_range(), HeightRange::new(1, 3));
        assert!(window.advance_past(4));
        assert_eq!(window.active_range(), HeightRange::new(5, 7));
    }

    #[test]
    fn advance_backward_is_noop() {
        let window = Window::new(3, 0);
        assert!(window.advance_past(5));
        assert_eq!(window.lower_bound(), 6);

        // A late finalizer for a lower height must not regress the bound.
        assert!(!window.advance_past(2));
        assert_eq!(window.lower_bound(), 6);

        // Re-advancing past the same height is also a no-op.
        assert!(!window.advance_past(5));
        assert_eq!(window.lower_bound(), 6);
    }

    #[test]
    fn concurrent_advances_settle_on_max() {
        let window = Arc::new(Window::new(4, 0));
        let mut handles = Vec::new();
        for height in 0..32i64 {
            let w = Arc::clone(&window);
            handles.push(std::thread::spawn(move || {
                w.advance_past(height);
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(window.lower_bound(), 32);
    }
}
