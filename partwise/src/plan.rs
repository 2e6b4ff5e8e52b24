//! Static partitioning of an index space across parallel workers.

use core::ops::Range;

/// A static assignment of a sequence's index space to parallel workers.
///
/// A plan is a pure function of the sequence length and the parallelism degree;
/// it never depends on element values. It divides `[0, len)` into `count`
/// contiguous, non-overlapping ranges whose union is exactly `[0, len)`. All
/// ranges share the same base size except the last, which absorbs the remainder
/// of the division (at most `count - 1` extra elements).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Plan {
    /// Number of partitions (one worker each).
    count: usize,
    /// Base size of each partition.
    size: usize,
    /// Total number of elements being partitioned.
    len: usize,
}

impl Plan {
    /// Computes the partitioning of `len` elements across up to `degree` workers.
    ///
    /// Uses `count = min(degree, len)`, which maximizes parallelism while
    /// guaranteeing that no partition is empty. Returns `None` when `len == 0`:
    /// there is nothing to partition, and callers short-circuit before spawning
    /// any worker.
    pub fn new(len: usize, degree: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let count = degree.min(len);
        Some(Self {
            count,
            size: len / count,
            len,
        })
    }

    /// Returns the number of partitions in the plan.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Iterates the half-open index range of each partition, in partition order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> {
        let Self { count, size, len } = *self;
        (0..count).map(move |p| {
            let start = p * size;
            let end = if p == count - 1 { len } else { start + size };
            start..end
        })
    }
}

/// Splits `slice` into consecutive disjoint sub-slices of the given sizes.
///
/// Sub-slices are carved off front-to-back, so the `p`-th sub-slice begins at
/// the exclusive prefix sum of the first `p` sizes. Any tail beyond the
/// requested sizes is left out of the result.
///
/// # Panics
///
/// Panics if the sizes sum to more than `slice.len()`.
pub(crate) fn split_sizes<X>(
    mut slice: &mut [X],
    sizes: impl Iterator<Item = usize>,
) -> Vec<&mut [X]> {
    let mut chunks = Vec::with_capacity(sizes.size_hint().0);
    for size in sizes {
        let (chunk, rest) = slice.split_at_mut(size);
        chunks.push(chunk);
        slice = rest;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        for degree in 1..=8 {
            assert!(Plan::new(0, degree).is_none());
        }
    }

    #[test]
    fn test_counts() {
        // Test case 0: more elements than workers
        let plan = Plan::new(100, 4).unwrap();
        assert_eq!(plan.count(), 4);

        // Test case 1: fewer elements than workers
        let plan = Plan::new(3, 8).unwrap();
        assert_eq!(plan.count(), 3);

        // Test case 2: single worker
        let plan = Plan::new(100, 1).unwrap();
        assert_eq!(plan.count(), 1);

        // Test case 3: single element
        let plan = Plan::new(1, 8).unwrap();
        assert_eq!(plan.count(), 1);
    }

    #[test]
    fn test_invariants() {
        for len in 1..=64usize {
            for degree in 1..=9usize {
                let plan = Plan::new(len, degree).unwrap();
                let ranges: Vec<_> = plan.ranges().collect();
                assert_eq!(ranges.len(), plan.count());
                assert_eq!(plan.count(), degree.min(len));

                // Contiguous, non-overlapping, and covering [0, len).
                let mut next = 0;
                for range in &ranges {
                    assert_eq!(range.start, next);
                    assert!(range.end > range.start, "empty partition");
                    next = range.end;
                }
                assert_eq!(next, len);

                // All partitions except the last share the base size; the last
                // absorbs the remainder.
                let base = len / plan.count();
                for range in &ranges[..ranges.len() - 1] {
                    assert_eq!(range.len(), base);
                }
                let last = ranges.last().unwrap();
                assert!(last.len() >= base);
                assert!(last.len() - base < plan.count());
            }
        }
    }

    #[test]
    fn test_split_sizes() {
        // Test case 0: exact split
        let mut data = [0u8; 10];
        let chunks = split_sizes(&mut data, [3, 3, 4].into_iter());
        assert_eq!(chunks.iter().map(|c| c.len()).collect::<Vec<_>>(), [3, 3, 4]);

        // Test case 1: tail left out
        let mut data = [0u8; 10];
        let chunks = split_sizes(&mut data, [2, 2].into_iter());
        assert_eq!(chunks.len(), 2);

        // Test case 2: zero-sized chunks are allowed
        let mut data = [0u8; 4];
        let chunks = split_sizes(&mut data, [0, 4, 0].into_iter());
        assert_eq!(chunks.iter().map(|c| c.len()).collect::<Vec<_>>(), [0, 4, 0]);
    }

    #[test]
    #[should_panic]
    fn test_split_sizes_overflow() {
        let mut data = [0u8; 4];
        let _ = split_sizes(&mut data, [3, 3].into_iter());
    }
}
