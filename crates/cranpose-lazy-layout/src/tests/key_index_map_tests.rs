use crate::lazy::*;
use std::cell::Cell;
use std::rc::Rc;

/// Interval content with one key factory per interval that counts its calls.
struct CountingContent {
    intervals: IntervalList<LazyListInterval>,
    key_calls: Rc<Cell<usize>>,
    touched_intervals: Rc<Cell<usize>>,
}

impl CountingContent {
    fn new(interval_count: usize, interval_size: usize) -> Self {
        let key_calls = Rc::new(Cell::new(0));
        let touched_intervals = Rc::new(Cell::new(0));
        let mut content = LazyListIntervalContent::new();
        for n in 0..interval_count {
            let calls = Rc::clone(&key_calls);
            let touched = Rc::clone(&touched_intervals);
            let first_call = Cell::new(true);
            content.items(
                interval_size,
                Some(move |local: usize| {
                    calls.set(calls.get() + 1);
                    if first_call.replace(false) {
                        touched.set(touched.get() + 1);
                    }
                    (n * interval_size + local) as u64
                }),
                None::<fn(usize) -> u64>,
            );
        }
        Self {
            intervals: content.intervals().clone(),
            key_calls,
            touched_intervals,
        }
    }
}

impl LazyLayoutIntervalContent for CountingContent {
    type Interval = LazyListInterval;

    fn intervals(&self) -> &IntervalList<LazyListInterval> {
        &self.intervals
    }
}

#[test]
fn construction_touches_only_overlapping_intervals() {
    // 100_000 intervals of 10 items each: one million items.
    let content = CountingContent::new(100_000, 10);
    let range = calculate_nearest_items_range(500_000, 30, 100);
    // Window 499_980..500_010 widened by 100 on each side.
    assert_eq!(range, 499_880..500_110);

    let map = NearestRangeKeyIndexMap::new(range.clone(), &content);

    assert_eq!(content.key_calls.get(), range.len());
    assert_eq!(content.touched_intervals.get(), 23);
    assert_eq!(map.len(), range.len());
}

#[test]
fn every_covered_key_maps_back_to_its_index() {
    let content = LazyListIntervalContent::build(|scope| {
        scope.item(Some(u64::MAX), None);
        scope.items(17, None::<fn(usize) -> u64>, None::<fn(usize) -> u64>);
        scope.items(33, Some(|i| 1_000 + i as u64), None::<fn(usize) -> u64>);
        scope.item(None, None);
        scope.items(5, Some(|i| 5_000 + i as u64), None::<fn(usize) -> u64>);
    });

    for first_visible in [0, 12, 29, 30, 55] {
        let range = calculate_nearest_items_range(first_visible, 10, 3);
        let map = LazyLayoutKeyIndexMap::nearest_range(range.clone(), &content);
        for index in map.covered_range() {
            let key = map.get_key(index).expect("covered index has a key");
            assert_eq!(map.get_index(&key), Some(index));
            assert_eq!(key, content.get_key(index));
        }
        let expected_end = range.end.min(content.item_count());
        assert_eq!(map.covered_range(), range.start.min(expected_end)..expected_end);
    }
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn unknown_keys_and_indices_are_not_found_for_every_variant() {
    let content = LazyListIntervalContent::build(|scope| {
        scope.items(50, Some(|i| i as u64), None::<fn(usize) -> u64>);
    });
    let maps = [
        LazyLayoutKeyIndexMap::EMPTY,
        LazyLayoutKeyIndexMap::default(),
        LazyLayoutKeyIndexMap::nearest_range(40..100, &content),
        LazyLayoutKeyIndexMap::nearest_range(100..5, &content),
    ];
    for map in &maps {
        assert_eq!(map.get_index(&LazyLayoutKey::User(999)), None);
        assert_eq!(map.get_index(&LazyLayoutKey::Index(0)), None);
        assert_eq!(map.get_key(50), None);
        assert_eq!(map.get_key(usize::MAX), None);
    }
    assert_eq!(maps[2].covered_range(), 40..50);
    assert_eq!(maps[2].get_key(49), Some(LazyLayoutKey::User(49)));
}
