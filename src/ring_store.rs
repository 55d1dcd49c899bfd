use std::collections::TryReserveError;

/// Fixed-capacity ring store. Oldest entry is overwritten when full.
///
/// While growing, live values sit at `data[0..len]` in insertion order.
/// Once filled, the logical order is `data[oldest..]` followed by
/// `data[..oldest]`.
#[derive(Debug, Clone)]
pub struct RingStore<T> {
    data: Vec<T>,
    oldest: usize,
    cap: usize,
}

impl<T> RingStore<T> {
    /// Reserves exactly `cap` slots up front; pushes never reallocate.
    pub fn new(cap: usize) -> Self {
        Self { data: Vec::with_capacity(cap), oldest: 0, cap }
    }

    /// Like [`RingStore::new`] but reports a refused allocation instead of aborting.
    pub fn try_new(cap: usize) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(cap)?;
        Ok(Self { data, oldest: 0, cap })
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.oldest = 0;
    }

    pub fn size(&self) -> usize { self.data.len() }
    pub fn capacity(&self) -> usize { self.cap }
    pub fn empty(&self) -> bool { self.data.is_empty() }
    pub fn is_filled(&self) -> bool { self.data.len() == self.cap }

    pub fn push_back(&mut self, val: T) {
        if self.cap == 0 {
            return;
        }
        if self.data.len() < self.cap {
            self.data.push(val);
            if self.data.len() == self.cap {
                log::trace!("ring store filled at capacity {}", self.cap);
            }
        } else {
            self.data[self.oldest] = val;
            self.oldest = (self.oldest + 1) % self.cap;
        }
    }

    /// Physical spans in logical order: (older, newer).
    /// `newer` is empty until the store has wrapped at least once.
    fn spans(&self) -> (&[T], &[T]) {
        let (newer, older) = self.data.split_at(self.oldest);
        (older, newer)
    }
}

impl<T: Clone> RingStore<T> {
    /// Returns up to `n` values, most recent first.
    pub fn latest(&self, n: usize) -> Vec<T> {
        let n = n.min(self.size());
        let mut out = Vec::with_capacity(n);
        let (older, newer) = self.spans();
        out.extend(newer.iter().rev().take(n).cloned());
        let rest = n - out.len();
        out.extend(older.iter().rev().take(rest).cloned());
        out
    }

    /// Returns up to `n` values, oldest first.
    pub fn earliest(&self, n: usize) -> Vec<T> {
        let n = n.min(self.size());
        let mut out = Vec::with_capacity(n);
        let (older, newer) = self.spans();
        out.extend(older.iter().take(n).cloned());
        let rest = n - out.len();
        out.extend(newer.iter().take(rest).cloned());
        out
    }
}

impl<T> Extend<T> for RingStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push_back(val);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(cap: usize, vals: &[i32]) -> RingStore<i32> {
        let mut s = RingStore::new(cap);
        s.extend(vals.iter().copied());
        s
    }

    #[test]
    fn empty_store_returns_nothing() {
        let s: RingStore<i32> = RingStore::new(10);
        assert!(s.empty());
        assert!(!s.is_filled());
        assert_eq!(s.latest(5), Vec::<i32>::new());
        assert_eq!(s.earliest(20), Vec::<i32>::new());
    }

    #[test]
    fn growing_store_reads_from_front() {
        let s = store_of(10, &[30, 25, 20, 15, 10, 5, 0]);
        assert_eq!(s.size(), 7);
        assert!(!s.is_filled());
        assert_eq!(s.latest(3), vec![0, 5, 10]);
        assert_eq!(s.earliest(3), vec![30, 25, 20]);
        assert_eq!(s.latest(10), vec![0, 5, 10, 15, 20, 25, 30]);
        assert_eq!(s.earliest(0), Vec::<i32>::new());
    }

    #[test]
    fn wrapped_store_stitches_both_spans() {
        let s = store_of(10, &[30, 25, 20, 15, 10, 5, 0, 100, 101, 102, 103, 104, 105]);
        assert!(s.is_filled());
        assert_eq!(s.size(), 10);
        assert_eq!(s.latest(3), vec![105, 104, 103]);
        assert_eq!(s.earliest(3), vec![15, 10, 5]);
        assert_eq!(s.earliest(10), vec![15, 10, 5, 0, 100, 101, 102, 103, 104, 105]);
        assert_eq!(s.latest(20), vec![105, 104, 103, 102, 101, 100, 0, 5, 10, 15]);
    }

    #[test]
    fn query_crossing_wrap_point() {
        // Physical layout after 13 pushes into 5 slots: [10, 11, 12, 8, 9], oldest = 3
        let s = store_of(5, &(0..13).collect::<Vec<_>>());
        assert_eq!(s.oldest, 3);
        assert_eq!(s.earliest(3), vec![8, 9, 10]);
        assert_eq!(s.latest(4), vec![12, 11, 10, 9]);
    }

    #[test]
    fn exactly_full_has_not_wrapped() {
        let s = store_of(4, &[1, 2, 3, 4]);
        assert!(s.is_filled());
        assert_eq!(s.oldest, 0);
        assert_eq!(s.earliest(4), vec![1, 2, 3, 4]);
        assert_eq!(s.latest(4), vec![4, 3, 2, 1]);
    }

    #[test]
    fn push_never_reallocates() {
        let mut s = RingStore::new(8);
        let ptr = s.data.as_ptr();
        let reserved = s.data.capacity();
        for i in 0..100 {
            s.push_back(i);
        }
        assert_eq!(s.data.as_ptr(), ptr);
        assert_eq!(s.data.capacity(), reserved);
    }

    #[test]
    fn clear_resets_to_growing() {
        let mut s = store_of(3, &[1, 2, 3, 4, 5]);
        s.clear();
        assert!(s.empty());
        assert_eq!(s.size(), 0);
        assert_eq!(s.capacity(), 3);
        assert_eq!(s.latest(3), Vec::<i32>::new());
        s.push_back(9);
        assert_eq!(s.earliest(3), vec![9]);
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut s = store_of(0, &[1, 2, 3]);
        s.push_back(4);
        assert!(s.empty());
        assert!(s.is_filled());
        assert_eq!(s.latest(1), Vec::<i32>::new());
        assert_eq!(s.earliest(1), Vec::<i32>::new());
    }

    #[test]
    fn results_are_snapshots() {
        let mut s = store_of(2, &[1, 2]);
        let before = s.latest(2);
        s.push_back(3);
        s.push_back(4);
        assert_eq!(before, vec![2, 1]);
        assert_eq!(s.latest(2), vec![4, 3]);
    }

    #[test]
    fn try_new_reserves_capacity() {
        let s = RingStore::<String>::try_new(16).expect("small reservation");
        assert_eq!(s.capacity(), 16);
        assert!(s.data.capacity() >= 16);
        assert!(RingStore::<u64>::try_new(usize::MAX).is_err());
    }
}
