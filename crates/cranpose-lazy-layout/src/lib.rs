//! Key/index mapping and nearest-range windowing for Cranpose lazy layouts.

pub mod collections;
pub mod lazy;

#[cfg(test)]
mod tests;

pub use lazy::{
    calculate_nearest_items_range, get_default_lazy_layout_key, LazyLayoutItemProvider,
    LazyLayoutKey, LazyLayoutKeyIndexMap, LazyListIntervalContent, LazyListItemProvider,
    LazyListScope, NearestRangeKeyIndexMap, NearestRangeState,
};
