//! Order-preserving parallel selection of matching elements.

use crate::{
    bitvec::BitVec,
    plan::{split_sizes, Plan},
};

/// Per-partition state produced by the mark phase.
struct Mark {
    /// One bit per element of the partition, set when the predicate matched.
    bits: BitVec,
    /// Number of set bits.
    matches: usize,
}

/// Returns the elements of `values` for which `predicate` is true, in their
/// original relative order.
///
/// The predicate is evaluated exactly once per element (there is no
/// short-circuiting, unlike [`any`](crate::any)). Internally the input is
/// partitioned and processed in two parallel phases: a mark phase records
/// matches in one private bitmap per partition, then, once the per-partition
/// match counts fix disjoint write windows in the output, a compact phase
/// copies the matching elements into place. Neither phase requires
/// synchronization between workers.
///
/// # Examples
///
/// ```
/// let values: Vec<u64> = (0..100).collect();
/// let evens = partwise::filter(&values, |v| v % 2 == 0);
/// assert_eq!(evens.len(), 50);
/// assert_eq!(evens[1], 2);
/// ```
pub fn filter<T, P>(values: &[T], predicate: P) -> Vec<T>
where
    T: Clone + Send + Sync,
    P: Fn(&T) -> bool + Send + Sync,
{
    let Some(plan) = Plan::new(values.len(), rayon::current_num_threads()) else {
        return Vec::new();
    };

    // Mark: each worker owns its partition's bitmap exclusively.
    let mut marks: Vec<Mark> = plan
        .ranges()
        .map(|range| Mark {
            bits: BitVec::zeroes(range.len()),
            matches: 0,
        })
        .collect();
    rayon::scope(|s| {
        for (range, mark) in plan.ranges().zip(marks.iter_mut()) {
            let predicate = &predicate;
            s.spawn(move |_| {
                for (pos, value) in values[range].iter().enumerate() {
                    if predicate(value) {
                        mark.bits.set(pos);
                        mark.matches += 1;
                    }
                }
            });
        }
    });

    // Plan: the output is sized to the total match count, and carving it into
    // windows of each partition's match count (in partition order) assigns
    // every partition the exclusive prefix sum of the counts as its write
    // offset.
    let total = marks.iter().map(|m| m.matches).sum();
    let mut out = Vec::with_capacity(total);
    let windows = split_sizes(out.spare_capacity_mut(), marks.iter().map(|m| m.matches));

    // Compact: bitmaps are now read-only; windows are disjoint.
    rayon::scope(|s| {
        for ((range, mark), window) in plan.ranges().zip(&marks).zip(windows) {
            s.spawn(move |_| {
                debug_assert_eq!(mark.bits.len(), range.len());
                debug_assert_eq!(mark.bits.count_ones(), mark.matches);
                for (slot, pos) in window.iter_mut().zip(mark.bits.ones()) {
                    slot.write(values[range.start + pos].clone());
                }
            });
        }
    });
    // SAFETY: partition windows cover exactly the first `total` slots of the
    // spare capacity, each window's worker initialized every one of its
    // `matches` slots, and the scope joined them all before returning.
    unsafe { out.set_len(total) };
    out
}
