//! Ordered list of item intervals.
//!
//! Based on JC's `IntervalList` / `MutableIntervalList`. Each interval covers a
//! contiguous run of global indices; together they cover `0..size()` without gaps.

/// A contiguous run of items sharing one value (key factory, content type, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval<T> {
    start_index: usize,
    size: usize,
    value: T,
}

impl<T> Interval<T> {
    /// First global index covered by this interval.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Number of items in this interval. Always positive.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Exclusive end of the covered global indices.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.start_index + self.size
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if `index` falls within this interval.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index()
    }
}

/// Append-only list of [`Interval`]s.
#[derive(Clone, Debug)]
pub struct IntervalList<T> {
    intervals: Vec<Interval<T>>,
    size: usize,
}

impl<T> Default for IntervalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntervalList<T> {
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
            size: 0,
        }
    }

    /// Total number of items across all intervals.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Appends an interval of `size` items starting right after the current end.
    ///
    /// # Panics
    /// Panics if `size` is zero. Empty intervals would break the binary search
    /// used by [`get`](Self::get) and [`for_each`](Self::for_each).
    pub fn add_interval(&mut self, size: usize, value: T) {
        assert!(size > 0, "size should be > 0, but was {size}");
        let start_index = self.size;
        self.intervals.push(Interval {
            start_index,
            size,
            value,
        });
        self.size += size;
    }

    /// Returns the interval containing global `index`.
    ///
    /// # Panics
    /// Panics if `index >= size()`.
    pub fn get(&self, index: usize) -> &Interval<T> {
        self.check_index_bounds(index);
        &self.intervals[self.interval_position(index)]
    }

    /// Returns the interval containing global `index`, or `None` when out of bounds.
    pub fn find(&self, index: usize) -> Option<&Interval<T>> {
        if index >= self.size {
            return None;
        }
        self.intervals.get(self.interval_position(index))
    }

    /// Calls `block` for every interval overlapping the inclusive index range
    /// `from_index..=to_index`, in order. Intervals outside the range are not visited.
    ///
    /// # Panics
    /// Panics if `from_index > to_index` or either bound is out of `0..size()`.
    pub fn for_each<F>(&self, from_index: usize, to_index: usize, mut block: F)
    where
        F: FnMut(&Interval<T>),
    {
        self.check_index_bounds(from_index);
        self.check_index_bounds(to_index);
        assert!(
            to_index >= from_index,
            "to_index ({to_index}) should not be smaller than from_index ({from_index})"
        );

        let first = self.interval_position(from_index);
        for interval in &self.intervals[first..] {
            if interval.start_index > to_index {
                break;
            }
            block(interval);
        }
    }

    /// Iterates over all intervals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    /// Position in `intervals` of the interval containing `index`.
    /// Binary search, O(log n) in the number of intervals.
    #[inline]
    fn interval_position(&self, index: usize) -> usize {
        self.intervals
            .partition_point(|interval| interval.end_index() <= index)
    }

    fn check_index_bounds(&self, index: usize) {
        assert!(
            index < self.size,
            "Index {index}, size {size}",
            size = self.size
        );
    }
}

impl<'a, T> IntoIterator for &'a IntervalList<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
