//! Key↔index mapping over a window of items.
//!
//! Based on JC's `LazyLayoutKeyIndexMap` / `NearestRangeKeyIndexMap`. The map does
//! not cover every item: it is built for the nearest range around the first visible
//! item, which is all a layout pass asks about. Anything outside is unknown.

use std::ops::Range;

use crate::collections::map::{self as hash_map, Entry, HashMap};

use super::interval_content::{interval_key, LazyLayoutIntervalContent};
use super::key::LazyLayoutKey;

/// A key-index mapping used by lazy layout item providers.
///
/// It might not contain all items as an optimization, but it covers the items a
/// provider requests during a layout pass.
#[derive(Clone, Debug, Default)]
pub enum LazyLayoutKeyIndexMap {
    /// Knows nothing. Used before the first range has been computed.
    #[default]
    Empty,
    /// Indexes the items of one nearest range.
    NearestRange(NearestRangeKeyIndexMap),
}

impl LazyLayoutKeyIndexMap {
    pub const EMPTY: Self = Self::Empty;

    /// Builds a map over `range` of `content`.
    pub fn nearest_range<C>(range: Range<usize>, content: &C) -> Self
    where
        C: LazyLayoutIntervalContent + ?Sized,
    {
        Self::NearestRange(NearestRangeKeyIndexMap::new(range, content))
    }

    /// Returns the current index for `key`, or `None` if the key is not known.
    #[inline]
    pub fn get_index(&self, key: &LazyLayoutKey) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::NearestRange(map) => map.get_index(key),
        }
    }

    /// Returns the key for `index` if it is known.
    #[inline]
    pub fn get_key(&self, index: usize) -> Option<LazyLayoutKey> {
        match self {
            Self::Empty => None,
            Self::NearestRange(map) => map.get_key(index),
        }
    }

    /// Indices covered by this map. Empty for [`LazyLayoutKeyIndexMap::Empty`].
    pub fn covered_range(&self) -> Range<usize> {
        match self {
            Self::Empty => 0..0,
            Self::NearestRange(map) => map.covered_range(),
        }
    }
}

/// [`LazyLayoutKeyIndexMap`] implementation indexing over a range of items.
///
/// Items outside of the range are considered unknown. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct NearestRangeKeyIndexMap {
    map: HashMap<LazyLayoutKey, usize>,
    keys: Vec<Option<LazyLayoutKey>>,
    keys_start_index: usize,
}

impl NearestRangeKeyIndexMap {
    /// Traverses the intervals of `content` overlapping `nearest_range` and records
    /// the key of every item in it.
    ///
    /// The range end is clamped to the item count. An empty or inverted range, or one
    /// entirely past the end of the data, yields an empty map. Only intervals that
    /// overlap the range are visited, so the cost is bounded by the range length, not
    /// by the item count.
    ///
    /// Keys are expected to be unique. If two items in the range share a key the later
    /// index wins in the key→index direction and a warning is logged.
    pub fn new<C>(nearest_range: Range<usize>, content: &C) -> Self
    where
        C: LazyLayoutIntervalContent + ?Sized,
    {
        let list = content.intervals();
        let first = nearest_range.start;
        let end = nearest_range.end.min(list.size());
        if end <= first {
            return Self::default();
        }
        let last = end - 1;

        let mut keys = vec![None; end - first];
        let mut map = hash_map::with_capacity(end - first);
        list.for_each(first, last, |interval| {
            let start = first.max(interval.start_index());
            let stop = last.min(interval.end_index() - 1);
            for index in start..=stop {
                let key = interval_key(interval, index);
                match map.entry(key) {
                    Entry::Occupied(mut entry) => {
                        log::warn!(
                            "lazy layout key {:?} used by both index {} and {}; keys must be unique",
                            key,
                            entry.get(),
                            index
                        );
                        entry.insert(index);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(index);
                    }
                }
                keys[index - first] = Some(key);
            }
        });

        Self {
            map,
            keys,
            keys_start_index: first,
        }
    }

    /// Returns the index of `key`, or `None` if it is outside the range.
    #[inline]
    pub fn get_index(&self, key: &LazyLayoutKey) -> Option<usize> {
        self.map.get(key).copied()
    }

    /// Returns the key at `index`, or `None` if it is outside the range.
    #[inline]
    pub fn get_key(&self, index: usize) -> Option<LazyLayoutKey> {
        let offset = index.checked_sub(self.keys_start_index)?;
        self.keys.get(offset).copied().flatten()
    }

    /// Indices this map knows about.
    pub fn covered_range(&self) -> Range<usize> {
        self.keys_start_index..self.keys_start_index + self.keys.len()
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::{LazyListIntervalContent, LazyListScope};

    fn keyed(count: usize) -> LazyListIntervalContent {
        LazyListIntervalContent::build(|scope| {
            scope.items(count, Some(|i| i as u64 * 10), None::<fn(usize) -> u64>);
        })
    }

    #[test]
    fn empty_map_knows_nothing() {
        let map = LazyLayoutKeyIndexMap::EMPTY;
        assert_eq!(map.get_index(&LazyLayoutKey::User(0)), None);
        assert_eq!(map.get_index(&LazyLayoutKey::Index(0)), None);
        assert_eq!(map.get_key(0), None);
        assert_eq!(map.covered_range(), 0..0);
    }

    #[test]
    fn bijective_within_range() {
        let content = keyed(100);
        let map = NearestRangeKeyIndexMap::new(20..40, &content);
        assert_eq!(map.covered_range(), 20..40);
        for index in 20..40 {
            let key = map.get_key(index).expect("key in range");
            assert_eq!(key, LazyLayoutKey::User(index as u64 * 10));
            assert_eq!(map.get_index(&key), Some(index));
        }
    }

    #[test]
    fn outside_range_is_unknown() {
        let content = keyed(100);
        let map = NearestRangeKeyIndexMap::new(20..40, &content);
        assert_eq!(map.get_key(19), None);
        assert_eq!(map.get_key(40), None);
        assert_eq!(map.get_key(0), None);
        assert_eq!(map.get_key(usize::MAX), None);
        assert_eq!(map.get_index(&LazyLayoutKey::User(190)), None);
        assert_eq!(map.get_index(&LazyLayoutKey::User(12345)), None);
    }

    #[test]
    fn inverted_range_is_empty() {
        let content = keyed(200);
        #[allow(clippy::reversed_empty_ranges)]
        let map = NearestRangeKeyIndexMap::new(100..6, &content);
        assert!(map.is_empty());
        assert_eq!(map.get_key(100), None);
        assert_eq!(map.get_key(5), None);
        assert_eq!(map.get_index(&LazyLayoutKey::User(1000)), None);
    }

    #[test]
    fn range_is_clamped_to_item_count() {
        let content = keyed(50);
        let map = NearestRangeKeyIndexMap::new(40..101, &content);
        assert_eq!(map.covered_range(), 40..50);
        assert_eq!(map.get_key(49), Some(LazyLayoutKey::User(490)));
        assert_eq!(map.get_key(50), None);
    }

    #[test]
    fn range_past_the_end_is_empty() {
        let content = keyed(10);
        let map = NearestRangeKeyIndexMap::new(30..60, &content);
        assert!(map.is_empty());
    }

    #[test]
    fn no_items_is_empty() {
        let content = LazyListIntervalContent::new();
        let map = LazyLayoutKeyIndexMap::nearest_range(0..130, &content);
        assert_eq!(map.get_key(0), None);
        assert_eq!(map.covered_range(), 0..0);
    }

    #[test]
    fn mixes_user_and_default_keys() {
        let content = LazyListIntervalContent::build(|scope| {
            scope.item(Some(7), None);
            scope.items(3, None::<fn(usize) -> u64>, None::<fn(usize) -> u64>);
            scope.items(2, Some(|i| 100 + i as u64), None::<fn(usize) -> u64>);
        });
        let map = NearestRangeKeyIndexMap::new(0..10, &content);

        assert_eq!(map.get_key(0), Some(LazyLayoutKey::User(7)));
        assert_eq!(map.get_key(2), Some(LazyLayoutKey::Index(2)));
        assert_eq!(map.get_key(5), Some(LazyLayoutKey::User(101)));
        assert_eq!(map.get_index(&LazyLayoutKey::Index(3)), Some(3));
        assert_eq!(map.get_index(&LazyLayoutKey::User(100)), Some(4));
        // User(2) and the default key of index 2 are different identities.
        assert_eq!(map.get_index(&LazyLayoutKey::User(2)), None);
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let content = LazyListIntervalContent::build(|scope| {
            scope.item(Some(1), None);
            scope.item(Some(1), None);
        });
        let map = NearestRangeKeyIndexMap::new(0..2, &content);
        assert_eq!(map.get_index(&LazyLayoutKey::User(1)), Some(1));
        assert_eq!(map.get_key(0), Some(LazyLayoutKey::User(1)));
        assert_eq!(map.get_key(1), Some(LazyLayoutKey::User(1)));
    }
}
