//! Item provider trait for lazy layouts.
//!
//! This module defines the [`LazyLayoutItemProvider`] trait which provides
//! the item identity information lazy layouts need during measurement, and
//! [`LazyListItemProvider`], which answers it from interval content and a
//! [`LazyLayoutKeyIndexMap`] over the nearest range.

use std::ops::Range;

use super::interval_content::LazyLayoutIntervalContent;
use super::key::{get_default_lazy_layout_key, LazyLayoutKey};
use super::key_index_map::LazyLayoutKeyIndexMap;
use super::nearest_range::{NearestRangeConfig, NearestRangeState};

/// Provides all the needed info about items which could be composed and
/// measured by lazy layouts.
///
/// This follows the Jetpack Compose `LazyLayoutItemProvider` pattern.
/// Implementations should be immutable from the layout's point of view - changes to
/// the data source should create a new provider instance.
pub trait LazyLayoutItemProvider {
    /// The total number of items in the lazy layout (visible or not).
    fn item_count(&self) -> usize;

    /// Returns the key for the item at the given index.
    ///
    /// Keys are used to:
    /// - Maintain scroll position when items are added/removed
    /// - Efficiently diff items during recomposition
    /// - Enable item animations
    ///
    /// If not overridden, defaults to the index-based key.
    fn get_key(&self, index: usize) -> LazyLayoutKey {
        get_default_lazy_layout_key(index)
    }

    /// Returns the content type for the item at the given index.
    ///
    /// Items with the same content type can be reused more efficiently.
    /// Returns `None` for items with no specific type (compatible with any).
    fn get_content_type(&self, index: usize) -> Option<u64> {
        let _ = index;
        None
    }

    /// Get the index for a given key.
    ///
    /// Used to find items by key for scroll-to operations.
    /// Returns `None` if the key is not found.
    fn get_index(&self, key: &LazyLayoutKey) -> Option<usize> {
        // Default implementation: linear search
        (0..self.item_count()).find(|&i| self.get_key(i) == *key)
    }
}

/// Item provider for lazy lists.
///
/// Owns the list content and a key-index map over the nearest range. The map is
/// rebuilt only when the nearest range moves to another sliding window, so key
/// lookups stay O(1) without indexing the whole list.
pub struct LazyListItemProvider<C> {
    content: C,
    nearest_range: NearestRangeState,
    key_index_map: LazyLayoutKeyIndexMap,
}

impl<C: LazyLayoutIntervalContent> LazyListItemProvider<C> {
    /// Creates a provider whose map covers the nearest range of `first_visible_item`.
    pub fn new(content: C, first_visible_item: usize) -> Self {
        Self::with_config(content, first_visible_item, NearestRangeConfig::LIST)
    }

    pub fn with_config(content: C, first_visible_item: usize, config: NearestRangeConfig) -> Self {
        Self::from_state(
            content,
            NearestRangeState::with_config(first_visible_item, config),
        )
    }

    /// Creates a provider reusing an existing nearest range, e.g. one kept in the
    /// scroll position across content changes.
    pub fn from_state(content: C, nearest_range: NearestRangeState) -> Self {
        let key_index_map = LazyLayoutKeyIndexMap::nearest_range(nearest_range.range(), &content);
        Self {
            content,
            nearest_range,
            key_index_map,
        }
    }

    /// Moves the nearest range to follow `first_visible_item`.
    ///
    /// Returns `true` if the key-index map was rebuilt.
    pub fn update_nearest_range(&mut self, first_visible_item: usize) -> bool {
        if !self.nearest_range.update(first_visible_item) {
            return false;
        }
        let range = self.nearest_range.range();
        log::debug!(
            "LazyList: rebuilding key index map for {:?} ({} items)",
            range,
            self.content.item_count()
        );
        self.key_index_map = LazyLayoutKeyIndexMap::nearest_range(range, &self.content);
        true
    }

    /// Replaces the content, keeping the current nearest range.
    pub fn set_content(&mut self, content: C) {
        self.key_index_map =
            LazyLayoutKeyIndexMap::nearest_range(self.nearest_range.range(), &content);
        self.content = content;
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn key_index_map(&self) -> &LazyLayoutKeyIndexMap {
        &self.key_index_map
    }

    pub fn nearest_range(&self) -> Range<usize> {
        self.nearest_range.range()
    }
}

impl<C: LazyLayoutIntervalContent> LazyLayoutItemProvider for LazyListItemProvider<C> {
    fn item_count(&self) -> usize {
        self.content.item_count()
    }

    fn get_key(&self, index: usize) -> LazyLayoutKey {
        self.key_index_map
            .get_key(index)
            .unwrap_or_else(|| self.content.get_key(index))
    }

    fn get_content_type(&self, index: usize) -> Option<u64> {
        self.content.get_content_type(index)
    }

    /// Only items in the nearest range can be found.
    fn get_index(&self, key: &LazyLayoutKey) -> Option<usize> {
        self.key_index_map.get_index(key)
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for LazyListItemProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyListItemProvider")
            .field("content", &self.content)
            .field("nearest_range", &self.nearest_range)
            .finish_non_exhaustive()
    }
}
