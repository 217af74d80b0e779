//! Interval-based item content and the DSL scope that builds it.
//!
//! Based on JC's `LazyLayoutIntervalContent` pattern: the list DSL appends one
//! interval per `item`/`items` call, and every per-item question (key, content
//! type) is answered by locating the interval and asking it with a local index.

use std::rc::Rc;

use super::interval_list::{Interval, IntervalList};
use super::key::{get_default_lazy_layout_key, LazyLayoutKey};

/// Local index → value factory stored on an interval.
pub type IntervalFactory = Rc<dyn Fn(usize) -> u64>;

/// Per-interval data a lazy layout needs to identify its items.
pub trait LazyLayoutInterval {
    /// Key factory, taking an index local to the interval.
    /// `None` means items use the default key.
    fn key(&self) -> Option<&IntervalFactory>;

    /// Content type factory, taking an index local to the interval.
    fn content_type(&self) -> Option<&IntervalFactory> {
        None
    }
}

/// Content of a lazy layout expressed as an [`IntervalList`].
///
/// This is the read-only interval source the key-index map is built from.
pub trait LazyLayoutIntervalContent {
    type Interval: LazyLayoutInterval;

    fn intervals(&self) -> &IntervalList<Self::Interval>;

    /// The total number of items across all intervals.
    fn item_count(&self) -> usize {
        self.intervals().size()
    }

    /// Returns the key for the item at global `index`.
    ///
    /// Falls back to [`get_default_lazy_layout_key`] when the interval has no key
    /// factory or the index is out of bounds.
    fn get_key(&self, index: usize) -> LazyLayoutKey {
        match self.intervals().find(index) {
            Some(interval) => interval_key(interval, index),
            None => get_default_lazy_layout_key(index),
        }
    }

    /// Returns the content type for the item at global `index`, if any.
    fn get_content_type(&self, index: usize) -> Option<u64> {
        self.with_interval(index, |local_index, interval| {
            interval.content_type().map(|factory| factory(local_index))
        })
        .flatten()
    }

    /// Executes `block` with the local index and the interval containing `global_index`.
    /// Returns `None` if the index is out of bounds.
    fn with_interval<T, F>(&self, global_index: usize, block: F) -> Option<T>
    where
        F: FnOnce(usize, &Self::Interval) -> T,
    {
        self.intervals()
            .find(global_index)
            .map(|interval| block(global_index - interval.start_index(), interval.value()))
    }
}

/// Receiver scope for lazy list content definition.
///
/// Matches Jetpack Compose's `LazyListScope`, minus the composable content which
/// lives with the UI layer.
///
/// # Example
///
/// ```rust
/// use cranpose_lazy_layout::lazy::{LazyListIntervalContent, LazyListScope};
///
/// let ids = vec![10u64, 20, 30];
/// let mut content = LazyListIntervalContent::new();
/// content.item(Some(0), None);
/// content.items(ids.len(), Some(move |i: usize| ids[i]), None::<fn(usize) -> u64>);
/// ```
pub trait LazyListScope {
    /// Adds a single item to the list.
    ///
    /// # Arguments
    /// * `key` - Optional stable key for the item
    /// * `content_type` - Optional content type for efficient reuse
    fn item(&mut self, key: Option<u64>, content_type: Option<u64>);

    /// Adds `count` items to the list. Does nothing when `count` is zero.
    ///
    /// # Arguments
    /// * `key` - Optional function to generate stable keys from the local index
    /// * `content_type` - Optional function to generate content types from the local index
    fn items<K, C>(&mut self, count: usize, key: Option<K>, content_type: Option<C>)
    where
        K: Fn(usize) -> u64 + 'static,
        C: Fn(usize) -> u64 + 'static;
}

/// Interval produced by one `item`/`items` call.
///
/// Factories are shared through `Rc`, so cloning an interval is cheap.
#[derive(Clone)]
pub struct LazyListInterval {
    /// Based on JC's `Interval.key: ((index: Int) -> Any)?`
    key: Option<IntervalFactory>,
    /// Based on JC's `Interval.type: ((index: Int) -> Any?)`
    content_type: Option<IntervalFactory>,
}

impl std::fmt::Debug for LazyListInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyListInterval")
            .field("has_key", &self.key.is_some())
            .field("has_content_type", &self.content_type.is_some())
            .finish()
    }
}

impl LazyLayoutInterval for LazyListInterval {
    fn key(&self) -> Option<&IntervalFactory> {
        self.key.as_ref()
    }

    fn content_type(&self) -> Option<&IntervalFactory> {
        self.content_type.as_ref()
    }
}

/// Builder that collects intervals during scope execution.
#[derive(Clone, Debug, Default)]
pub struct LazyListIntervalContent {
    intervals: IntervalList<LazyListInterval>,
}

impl LazyListIntervalContent {
    /// Creates a new empty interval content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds content by running `block` against a fresh scope.
    pub fn build(block: impl FnOnce(&mut Self)) -> Self {
        let mut content = Self::new();
        block(&mut content);
        content
    }
}

impl LazyLayoutIntervalContent for LazyListIntervalContent {
    type Interval = LazyListInterval;

    fn intervals(&self) -> &IntervalList<LazyListInterval> {
        &self.intervals
    }
}

impl LazyListScope for LazyListIntervalContent {
    fn item(&mut self, key: Option<u64>, content_type: Option<u64>) {
        self.intervals.add_interval(
            1,
            LazyListInterval {
                key: key.map(|k| Rc::new(move |_| k) as IntervalFactory),
                content_type: content_type.map(|t| Rc::new(move |_| t) as IntervalFactory),
            },
        );
    }

    fn items<K, C>(&mut self, count: usize, key: Option<K>, content_type: Option<C>)
    where
        K: Fn(usize) -> u64 + 'static,
        C: Fn(usize) -> u64 + 'static,
    {
        if count == 0 {
            return;
        }
        self.intervals.add_interval(
            count,
            LazyListInterval {
                key: key.map(|k| Rc::new(k) as IntervalFactory),
                content_type: content_type.map(|c| Rc::new(c) as IntervalFactory),
            },
        );
    }
}

/// Convenience for building intervals from borrowed data.
pub trait LazyListScopeExt: LazyListScope {
    /// Adds one item per element of `items`, keyed by `key_of`.
    ///
    /// Keys are computed eagerly, which is O(n) in the slice length.
    fn items_keyed<T, F>(&mut self, items: &[T], key_of: F)
    where
        F: Fn(&T) -> u64,
    {
        let keys: Rc<[u64]> = items.iter().map(key_of).collect();
        self.items(
            keys.len(),
            Some(move |index: usize| keys[index]),
            None::<fn(usize) -> u64>,
        );
    }
}

impl<S: LazyListScope + ?Sized> LazyListScopeExt for S {}

/// Key of the item at `global_index`, which must lie inside `interval`.
pub(crate) fn interval_key(
    interval: &Interval<impl LazyLayoutInterval>,
    global_index: usize,
) -> LazyLayoutKey {
    match interval.value().key() {
        Some(key) => LazyLayoutKey::User(key(global_index - interval.start_index())),
        None => get_default_lazy_layout_key(global_index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_come_from_interval_factories() {
        let content = LazyListIntervalContent::build(|scope| {
            scope.item(Some(100), None);
            scope.items(3, Some(|i| 200 + i as u64), None::<fn(usize) -> u64>);
            scope.items(2, None::<fn(usize) -> u64>, None::<fn(usize) -> u64>);
        });

        assert_eq!(content.item_count(), 6);
        assert_eq!(content.get_key(0), LazyLayoutKey::User(100));
        assert_eq!(content.get_key(1), LazyLayoutKey::User(200));
        assert_eq!(content.get_key(3), LazyLayoutKey::User(202));
        assert_eq!(content.get_key(4), LazyLayoutKey::Index(4));
        assert_eq!(content.get_key(5), LazyLayoutKey::Index(5));
    }

    #[test]
    fn out_of_bounds_key_is_default() {
        let content = LazyListIntervalContent::build(|scope| scope.item(Some(1), None));
        assert_eq!(content.get_key(10), LazyLayoutKey::Index(10));
    }

    #[test]
    fn content_type_uses_local_index() {
        let content = LazyListIntervalContent::build(|scope| {
            scope.item(None, Some(7));
            scope.items(
                4,
                None::<fn(usize) -> u64>,
                Some(|i: usize| (i % 2) as u64),
            );
        });

        assert_eq!(content.get_content_type(0), Some(7));
        assert_eq!(content.get_content_type(1), Some(0));
        assert_eq!(content.get_content_type(2), Some(1));
        assert_eq!(content.get_content_type(99), None);
    }

    #[test]
    fn zero_count_items_is_ignored() {
        let content = LazyListIntervalContent::build(|scope| {
            scope.items(0, None::<fn(usize) -> u64>, None::<fn(usize) -> u64>);
        });
        assert_eq!(content.item_count(), 0);
        assert!(content.intervals().is_empty());
    }

    #[test]
    fn items_keyed_uses_element_keys() {
        let rows = ["a", "bb", "ccc"];
        let content = LazyListIntervalContent::build(|scope| {
            scope.items_keyed(&rows, |row| row.len() as u64 * 10);
        });
        assert_eq!(content.get_key(2), LazyLayoutKey::User(30));
    }
}
