//! Scroll position tracking with key-based anchoring.
//!
//! Design follows Jetpack Compose's `LazyListScrollPosition`: the position is the
//! first visible item index plus its scroll offset, and the key of that item is
//! remembered so the position can follow the item when data is inserted or removed
//! before it.

use std::ops::Range;

use super::item_provider::LazyLayoutItemProvider;
use super::key::LazyLayoutKey;
use super::nearest_range::{NearestRangeConfig, NearestRangeState};

/// Contains the current scroll position represented by the first visible item
/// index and the first visible item scroll offset.
#[derive(Clone, Debug, Default)]
pub struct LazyListScrollPosition {
    /// The index of the first visible item.
    index: usize,
    /// The scroll offset of the first visible item.
    scroll_offset: f32,
    /// The last known key of the item at index position.
    /// Used for scroll position stability across data changes.
    last_known_first_item_key: Option<LazyLayoutKey>,
    /// Sliding window range for optimized key lookups.
    nearest_range_state: NearestRangeState,
}

impl LazyListScrollPosition {
    pub fn new(index: usize, scroll_offset: f32) -> Self {
        Self::with_config(index, scroll_offset, NearestRangeConfig::LIST)
    }

    pub fn with_config(index: usize, scroll_offset: f32, config: NearestRangeConfig) -> Self {
        Self {
            index,
            scroll_offset,
            last_known_first_item_key: None,
            nearest_range_state: NearestRangeState::with_config(index, config),
        }
    }

    /// Returns the index of the first visible item.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the scroll offset of the first visible item.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn last_known_first_item_key(&self) -> Option<LazyLayoutKey> {
        self.last_known_first_item_key
    }

    /// Returns the nearest range for optimized key lookups.
    pub fn nearest_range(&self) -> Range<usize> {
        self.nearest_range_state.range()
    }

    pub fn nearest_range_state(&self) -> &NearestRangeState {
        &self.nearest_range_state
    }

    /// Updates the scroll position from a measurement result.
    ///
    /// Stores the key for scroll position stability and updates the nearest range.
    pub fn update_from_measure_result(
        &mut self,
        first_visible_index: usize,
        first_visible_scroll_offset: f32,
        first_visible_item_key: Option<LazyLayoutKey>,
    ) {
        self.last_known_first_item_key = first_visible_item_key;
        self.nearest_range_state.update(first_visible_index);
        self.index = first_visible_index;
        self.scroll_offset = first_visible_scroll_offset;
    }

    /// Requests a new position and clears the last known key.
    /// Used for programmatic scrolls (scroll_to_item).
    pub fn request_position_and_forget_last_known_key(&mut self, index: usize, scroll_offset: f32) {
        self.index = index;
        self.scroll_offset = scroll_offset;
        self.last_known_first_item_key = None;
        self.nearest_range_state.update(index);
    }

    /// Adjusts scroll position if the first visible item was moved.
    ///
    /// Looks the last known key up with `find_by_key`; if the key is gone (or was never
    /// recorded) the current index is clamped to the new item count instead.
    /// Returns the adjusted index.
    pub fn update_if_first_item_moved<F>(&mut self, new_item_count: usize, find_by_key: F) -> usize
    where
        F: Fn(&LazyLayoutKey) -> Option<usize>,
    {
        let clamped = self.index.min(new_item_count.saturating_sub(1));
        let new_index = self
            .last_known_first_item_key
            .as_ref()
            .and_then(find_by_key)
            .unwrap_or(clamped);

        if self.index != new_index {
            log::debug!(
                "LazyList: first visible item moved {} -> {}",
                self.index,
                new_index
            );
            self.index = new_index;
            self.nearest_range_state.update(new_index);
        }
        new_index
    }

    /// Same as [`update_if_first_item_moved`](Self::update_if_first_item_moved), looking
    /// keys up through an item provider.
    pub fn update_from_provider<P>(&mut self, provider: &P) -> usize
    where
        P: LazyLayoutItemProvider + ?Sized,
    {
        self.update_if_first_item_moved(provider.item_count(), |key| provider.get_index(key))
    }
}
