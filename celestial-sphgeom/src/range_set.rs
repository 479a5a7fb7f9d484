//! Sets of `u64` values stored as sorted half-open intervals.
//!
//! Pixel indices of hierarchical pixelizations are laid out so that every
//! cell's descendants form one contiguous integer range. A set of pixels is
//! therefore far smaller as a list of intervals than as a list of values,
//! and [`RangeSet`] is that list: sorted, pairwise disjoint, and never
//! adjacent (touching intervals are merged on insert).
//!
//! Besides plain set operations it offers the coarsening steps a budgeted
//! search needs:
//!
//! | Method | Result | Interval count |
//! |--------|--------|----------------|
//! | [`simplify`](RangeSet::simplify) | superset, bounds widened to multiples of `2^bits` | never grows |
//! | [`narrow`](RangeSet::narrow) | subset, bounds narrowed to multiples of `2^bits` | never grows |
//! | [`close_gaps`](RangeSet::close_gaps) | superset, smallest gaps filled | `≤ max(n, 1)` |
//! | [`drop_shortest`](RangeSet::drop_shortest) | subset, shortest intervals removed | `≤ n` |
//!
//! ```
//! use celestial_sphgeom::RangeSet;
//!
//! let mut s = RangeSet::new();
//! s.insert(10, 20);
//! s.insert(20, 25);
//! s.insert(40, 41);
//! assert_eq!(s.len(), 2);
//! assert!(s.contains(24));
//! assert!(!s.contains(25));
//! ```

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSet {
    ranges: Vec<(u64, u64)>,
}

#[inline]
fn low_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

impl RangeSet {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// A set holding the single interval `[first, last)`.
    pub fn from_range(first: u64, last: u64) -> Self {
        let mut s = Self::new();
        s.insert(first, last);
        s
    }

    /// Adds `[first, last)`, merging with any overlapping or adjacent
    /// intervals. Empty intervals are ignored.
    pub fn insert(&mut self, first: u64, last: u64) {
        if first >= last {
            return;
        }
        let lo = self.ranges.partition_point(|&(_, end)| end < first);
        let hi = self.ranges.partition_point(|&(start, _)| start <= last);
        if lo < hi {
            let merged = (
                first.min(self.ranges[lo].0),
                last.max(self.ranges[hi - 1].1),
            );
            self.ranges.splice(lo..hi, std::iter::once(merged));
        } else {
            self.ranges.insert(lo, (first, last));
        }
    }

    /// Number of disjoint intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    #[inline]
    pub fn ranges(&self) -> &[(u64, u64)] {
        &self.ranges
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.ranges.iter().copied()
    }

    /// Total number of values in the set, saturating at `u64::MAX`.
    pub fn cardinality(&self) -> u64 {
        self.ranges
            .iter()
            .fold(0u64, |acc, &(a, b)| acc.saturating_add(b - a))
    }

    pub fn contains(&self, value: u64) -> bool {
        let i = self.ranges.partition_point(|&(_, end)| end <= value);
        self.ranges
            .get(i)
            .is_some_and(|&(start, _)| start <= value)
    }

    /// Returns true if every value of `[first, last)` is in the set. Empty
    /// intervals are always contained.
    pub fn contains_range(&self, first: u64, last: u64) -> bool {
        if first >= last {
            return true;
        }
        let i = self.ranges.partition_point(|&(_, end)| end <= first);
        self.ranges
            .get(i)
            .is_some_and(|&(start, end)| start <= first && last <= end)
    }

    pub fn is_subset_of(&self, other: &RangeSet) -> bool {
        self.ranges
            .iter()
            .all(|&(a, b)| other.contains_range(a, b))
    }

    pub fn intersects(&self, other: &RangeSet) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < self.ranges.len() && j < other.ranges.len() {
            let (a0, a1) = self.ranges[i];
            let (b0, b1) = other.ranges[j];
            if a0 < b1 && b0 < a1 {
                return true;
            }
            if a1 <= b1 {
                i += 1;
            } else {
                j += 1;
            }
        }
        false
    }

    /// Widens every interval outwards to multiples of `2^bits` and re-merges.
    ///
    /// An upper bound that would round past `u64::MAX` saturates there.
    pub fn simplify(&mut self, bits: u32) {
        if bits == 0 || self.ranges.is_empty() {
            return;
        }
        let mask = low_mask(bits);
        let old = std::mem::take(&mut self.ranges);
        for (first, last) in old {
            let first = first & !mask;
            let last = if last & mask == 0 {
                last
            } else {
                (last | mask).saturating_add(1)
            };
            self.insert(first, last);
        }
    }

    /// Narrows every interval inwards to multiples of `2^bits`, dropping the
    /// ones that vanish.
    pub fn narrow(&mut self, bits: u32) {
        if bits == 0 || self.ranges.is_empty() {
            return;
        }
        let mask = low_mask(bits);
        self.ranges.retain_mut(|(first, last)| {
            let start = if *first & mask == 0 {
                Some(*first)
            } else {
                (*first | mask).checked_add(1)
            };
            let end = *last & !mask;
            match start {
                Some(start) if start < end => {
                    *first = start;
                    *last = end;
                    true
                }
                _ => false,
            }
        });
    }

    /// Fills the smallest gaps between neighbouring intervals until at most
    /// `max(max_ranges, 1)` intervals remain. Ties go to the lower gap.
    pub fn close_gaps(&mut self, max_ranges: usize) {
        let target = max_ranges.max(1);
        if self.ranges.len() <= target {
            return;
        }
        let excess = self.ranges.len() - target;
        let mut gaps: Vec<(u64, usize)> = self
            .ranges
            .windows(2)
            .enumerate()
            .map(|(i, w)| (w[1].0 - w[0].1, i))
            .collect();
        gaps.sort_unstable();
        let mut fill = vec![false; self.ranges.len()];
        for &(_, i) in gaps.iter().take(excess) {
            fill[i] = true;
        }
        let mut merged: Vec<(u64, u64)> = Vec::with_capacity(target);
        let mut open = false;
        for (i, &(a, b)) in self.ranges.iter().enumerate() {
            match merged.last_mut() {
                Some(last) if open => last.1 = b,
                _ => merged.push((a, b)),
            }
            open = fill[i];
        }
        self.ranges = merged;
    }

    /// Removes the shortest intervals until at most `max_ranges` remain.
    /// Ties go to the lower interval.
    pub fn drop_shortest(&mut self, max_ranges: usize) {
        if self.ranges.len() <= max_ranges {
            return;
        }
        let excess = self.ranges.len() - max_ranges;
        let mut by_len: Vec<(u64, usize)> = self
            .ranges
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| (b - a, i))
            .collect();
        by_len.sort_unstable();
        let mut keep = vec![true; self.ranges.len()];
        for &(_, i) in by_len.iter().take(excess) {
            keep[i] = false;
        }
        let mut i = 0;
        self.ranges.retain(|_| {
            let k = keep[i];
            i += 1;
            k
        });
    }
}

impl FromIterator<(u64, u64)> for RangeSet {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        let mut s = RangeSet::new();
        s.extend(iter);
        s
    }
}

impl Extend<(u64, u64)> for RangeSet {
    fn extend<I: IntoIterator<Item = (u64, u64)>>(&mut self, iter: I) {
        for (first, last) in iter {
            self.insert(first, last);
        }
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = (u64, u64);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (u64, u64)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter().copied()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (a, b)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {})", a, b)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_merges_overlap_and_adjacency() {
        let mut s = RangeSet::new();
        s.insert(10, 20);
        s.insert(30, 40);
        assert_eq!(s.ranges(), &[(10, 20), (30, 40)]);
        s.insert(20, 30);
        assert_eq!(s.ranges(), &[(10, 40)]);
        s.insert(5, 12);
        s.insert(38, 50);
        assert_eq!(s.ranges(), &[(5, 50)]);
    }

    #[test]
    fn test_insert_spanning_many() {
        let mut s: RangeSet = [(0, 1), (2, 3), (4, 5), (6, 7), (10, 11)].into_iter().collect();
        assert_eq!(s.len(), 5);
        s.insert(1, 6);
        assert_eq!(s.ranges(), &[(0, 7), (10, 11)]);
    }

    #[test]
    fn test_insert_empty_is_ignored() {
        let mut s = RangeSet::new();
        s.insert(5, 5);
        s.insert(7, 3);
        assert!(s.is_empty());
    }

    #[test]
    fn test_contains() {
        let s = RangeSet::from_range(10, 20);
        assert!(!s.contains(9));
        assert!(s.contains(10));
        assert!(s.contains(19));
        assert!(!s.contains(20));
        assert!(s.contains_range(12, 20));
        assert!(!s.contains_range(12, 21));
        assert!(s.contains_range(50, 50));
    }

    #[test]
    fn test_subset_and_intersects() {
        let a: RangeSet = [(10, 20), (30, 40)].into_iter().collect();
        let b: RangeSet = [(12, 18), (35, 36)].into_iter().collect();
        let c = RangeSet::from_range(20, 30);
        assert!(b.is_subset_of(&a));
        assert!(!a.is_subset_of(&b));
        assert!(RangeSet::new().is_subset_of(&b));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_cardinality() {
        let a: RangeSet = [(10, 20), (30, 40)].into_iter().collect();
        assert_eq!(a.cardinality(), 20);
    }

    #[test]
    fn test_simplify() {
        let mut s: RangeSet = [(5, 6), (9, 10), (17, 18)].into_iter().collect();
        s.simplify(2);
        assert_eq!(s.ranges(), &[(4, 12), (16, 20)]);
        s.simplify(3);
        assert_eq!(s.ranges(), &[(0, 24)]);
    }

    #[test]
    fn test_simplify_saturates() {
        let mut s = RangeSet::from_range(u64::MAX - 3, u64::MAX - 1);
        s.simplify(4);
        assert_eq!(s.ranges(), &[(u64::MAX - 15, u64::MAX)]);
    }

    #[test]
    fn test_narrow() {
        let mut s: RangeSet = [(3, 13), (17, 19), (20, 24)].into_iter().collect();
        s.narrow(2);
        assert_eq!(s.ranges(), &[(4, 12), (20, 24)]);
        s.narrow(4);
        assert!(s.is_empty());
    }

    #[test]
    fn test_close_gaps() {
        let mut s: RangeSet = [(0, 1), (3, 4), (10, 11), (12, 13)].into_iter().collect();
        s.close_gaps(2);
        assert_eq!(s.ranges(), &[(0, 4), (10, 13)]);
        s.close_gaps(0);
        assert_eq!(s.ranges(), &[(0, 13)]);
    }

    #[test]
    fn test_drop_shortest() {
        let mut s: RangeSet = [(0, 5), (10, 11), (20, 23), (30, 31)].into_iter().collect();
        s.drop_shortest(2);
        assert_eq!(s.ranges(), &[(0, 5), (20, 23)]);
        s.drop_shortest(0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_display() {
        let s: RangeSet = [(1, 2), (4, 8)].into_iter().collect();
        assert_eq!(s.to_string(), "{[1, 2), [4, 8)}");
    }

    fn arb_ranges() -> impl Strategy<Value = Vec<(u64, u64)>> {
        prop::collection::vec((0u64..1000, 1u64..50).prop_map(|(a, n)| (a, a + n)), 0..40)
    }

    proptest! {
        #[test]
        fn prop_insert_keeps_invariants(input in arb_ranges()) {
            let s: RangeSet = input.iter().copied().collect();
            for w in s.ranges().windows(2) {
                prop_assert!(w[0].0 < w[0].1);
                prop_assert!(w[0].1 < w[1].0);
            }
            for &(a, b) in &input {
                prop_assert!(s.contains_range(a, b));
            }
        }

        #[test]
        fn prop_coarsening_direction(input in arb_ranges(), bits in 0u32..6, max in 0usize..6) {
            let s: RangeSet = input.iter().copied().collect();

            let mut wide = s.clone();
            wide.simplify(bits);
            prop_assert!(s.is_subset_of(&wide));
            prop_assert!(wide.len() <= s.len());

            let mut thin = s.clone();
            thin.narrow(bits);
            prop_assert!(thin.is_subset_of(&s));
            prop_assert!(thin.len() <= s.len());

            let mut closed = s.clone();
            closed.close_gaps(max);
            prop_assert!(s.is_subset_of(&closed));
            prop_assert!(closed.len() <= max.max(1));

            let mut dropped = s.clone();
            dropped.drop_shortest(max);
            prop_assert!(dropped.is_subset_of(&s));
            prop_assert!(dropped.len() <= max);
        }
    }
}
