//! Nearest range state for optimized key→index lookup.
//!
//! Based on JC's `LazyLayoutNearestRangeState`. Uses a sliding window
//! to limit key lookup to items near the current scroll position,
//! providing O(1) lookup instead of O(n).

use std::ops::Range;

/// Sliding window size for key lookup optimization.
/// JC uses 30 for lists, 90 for grids.
pub const NEAREST_ITEMS_SLIDING_WINDOW_SIZE: usize = 30;

/// Extra items to include beyond the sliding window.
/// JC uses 100.
pub const NEAREST_ITEMS_EXTRA_COUNT: usize = 100;

/// Tuning parameters for the nearest range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NearestRangeConfig {
    /// Size of the buckets the first visible item is quantized to. Must be positive.
    pub sliding_window_size: usize,
    /// Extra items to include on each side of the window.
    pub extra_item_count: usize,
}

impl NearestRangeConfig {
    /// Defaults for lists.
    pub const LIST: Self = Self {
        sliding_window_size: NEAREST_ITEMS_SLIDING_WINDOW_SIZE,
        extra_item_count: NEAREST_ITEMS_EXTRA_COUNT,
    };

    /// Defaults for grids, which show several items per line.
    pub const GRID: Self = Self {
        sliding_window_size: 90,
        extra_item_count: 200,
    };

    pub const fn new(sliding_window_size: usize, extra_item_count: usize) -> Self {
        Self {
            sliding_window_size,
            extra_item_count,
        }
    }
}

impl Default for NearestRangeConfig {
    fn default() -> Self {
        Self::LIST
    }
}

/// Returns a range of indices which contains at least `extra_item_count` items near
/// the first visible item.
///
/// Optimized to return the same range for small changes in `first_visible_item`, so
/// the key-index map is not regenerated on each scroll.
///
/// # Panics
/// Panics if `sliding_window_size` is zero.
pub fn calculate_nearest_items_range(
    first_visible_item: usize,
    sliding_window_size: usize,
    extra_item_count: usize,
) -> Range<usize> {
    assert!(
        sliding_window_size > 0,
        "sliding_window_size should be > 0, but was {sliding_window_size}"
    );
    let sliding_window_start =
        sliding_window_size.saturating_mul(first_visible_item / sliding_window_size);
    let start = sliding_window_start.saturating_sub(extra_item_count);
    let end = sliding_window_start
        .saturating_add(sliding_window_size)
        .saturating_add(extra_item_count);
    start..end
}

/// Tracks a range of indices near the first visible item for optimized key lookup.
///
/// Instead of searching all items (O(n)), we only search within this range.
/// The range is calculated using a sliding window that only updates when
/// the first visible item crosses a window boundary.
///
/// Matches JC's `LazyLayoutNearestRangeState`.
#[derive(Debug, Clone)]
pub struct NearestRangeState {
    /// Current range of indices to search for keys.
    value: Range<usize>,
    /// Last known first visible item index.
    last_first_visible_item: usize,
    config: NearestRangeConfig,
}

impl Default for NearestRangeState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NearestRangeState {
    /// Creates a new NearestRangeState with default window sizes.
    pub fn new(first_visible_item: usize) -> Self {
        Self::with_config(first_visible_item, NearestRangeConfig::LIST)
    }

    /// Creates a NearestRangeState with custom window sizes.
    ///
    /// # Panics
    /// Panics if `sliding_window_size` is zero.
    pub fn with_sizes(
        first_visible_item: usize,
        sliding_window_size: usize,
        extra_item_count: usize,
    ) -> Self {
        Self::with_config(
            first_visible_item,
            NearestRangeConfig::new(sliding_window_size, extra_item_count),
        )
    }

    /// Creates a NearestRangeState from a [`NearestRangeConfig`].
    pub fn with_config(first_visible_item: usize, config: NearestRangeConfig) -> Self {
        let value = Self::calculate_range(first_visible_item, &config);
        Self {
            value,
            last_first_visible_item: first_visible_item,
            config,
        }
    }

    /// Returns the current range of indices to search.
    pub fn range(&self) -> Range<usize> {
        self.value.clone()
    }

    pub fn config(&self) -> NearestRangeConfig {
        self.config
    }

    /// Updates the range based on the new first visible item.
    ///
    /// Returns `true` if the range changed, i.e. the first visible item crossed a
    /// window boundary and anything derived from the range must be rebuilt.
    pub fn update(&mut self, first_visible_item: usize) -> bool {
        if first_visible_item == self.last_first_visible_item {
            return false;
        }
        self.last_first_visible_item = first_visible_item;
        let range = Self::calculate_range(first_visible_item, &self.config);
        if range == self.value {
            return false;
        }
        log::trace!(
            "nearest range {:?} -> {:?} (first visible {})",
            self.value,
            range,
            first_visible_item
        );
        self.value = range;
        true
    }

    fn calculate_range(first_visible_item: usize, config: &NearestRangeConfig) -> Range<usize> {
        calculate_nearest_items_range(
            first_visible_item,
            config.sliding_window_size,
            config.extra_item_count,
        )
    }
}
