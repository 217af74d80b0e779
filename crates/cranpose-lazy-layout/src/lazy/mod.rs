//! Lazy layout item identity for Cranpose.
//!
//! Lazy lists only materialize the items near the viewport. To keep item identity
//! stable across layout passes they need to map keys to indices, but indexing every
//! item would make each pass O(n). This module maps keys only within a window around
//! the first visible item.
//!
//! # Architecture
//!
//! Based on Jetpack Compose's lazy layout system:
//! - [`IntervalList`] / [`LazyListIntervalContent`] - Item intervals built by [`LazyListScope`]
//!   (JC: `IntervalList`, `LazyLayoutIntervalContent`)
//! - [`NearestRangeState`] - Sliding window around the first visible item
//!   (JC: `LazyLayoutNearestRangeState`)
//! - [`LazyLayoutKeyIndexMap`] - Key↔index map over the nearest range
//!   (JC: `LazyLayoutKeyIndexMap`, `NearestRangeKeyIndexMap`)
//! - [`LazyListItemProvider`] - Ties content and map together (JC: `LazyListItemProviderImpl`)
//! - [`LazyListScrollPosition`] - Keeps the first visible item anchored by key
//!
//! # Example
//!
//! ```rust
//! use cranpose_lazy_layout::lazy::{
//!     LazyLayoutItemProvider, LazyLayoutKey, LazyListIntervalContent, LazyListItemProvider,
//!     LazyListScope,
//! };
//!
//! let content = LazyListIntervalContent::build(|scope| {
//!     scope.item(Some(u64::MAX), None);
//!     scope.items(10_000, Some(|i| i as u64), None::<fn(usize) -> u64>);
//! });
//! let mut provider = LazyListItemProvider::new(content, 0);
//! provider.update_nearest_range(5_000);
//! assert_eq!(provider.get_index(&LazyLayoutKey::User(5_000)), Some(5_001));
//! ```

mod interval_content;
mod interval_list;
mod item_provider;
mod key;
mod key_index_map;
mod nearest_range;
mod scroll_position;

pub use interval_content::{
    IntervalFactory, LazyLayoutInterval, LazyLayoutIntervalContent, LazyListInterval,
    LazyListIntervalContent, LazyListScope, LazyListScopeExt,
};
pub use interval_list::*;
pub use item_provider::*;
pub use key::*;
pub use key_index_map::*;
pub use nearest_range::*;
pub use scroll_position::*;
