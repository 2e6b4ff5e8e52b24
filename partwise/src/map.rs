//! Order-preserving parallel transformation of a slice.

use crate::plan::{split_sizes, Plan};

/// Applies `transform` to every element of `values` in parallel, returning the
/// results in the original order.
///
/// The output is pre-allocated at full length and divided into one disjoint
/// window per partition, so workers write their results without any
/// synchronization. All workers are joined before the output is exposed; a
/// partially-written output can never escape, even if `transform` panics (the
/// panic is re-raised to the caller after every worker has stopped).
///
/// `transform` must not rely on cross-partition side effects; this is assumed,
/// not enforced.
///
/// # Examples
///
/// ```
/// let values: Vec<u64> = (0..1000).collect();
/// let doubled = partwise::map(&values, |v| v * 2);
/// assert_eq!(doubled.len(), 1000);
/// assert_eq!(doubled[500], 1000);
/// ```
pub fn map<T, U, F>(values: &[T], transform: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
{
    let Some(plan) = Plan::new(values.len(), rayon::current_num_threads()) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(values.len());
    let windows = split_sizes(out.spare_capacity_mut(), plan.ranges().map(|r| r.len()));
    rayon::scope(|s| {
        for (range, window) in plan.ranges().zip(windows) {
            let transform = &transform;
            s.spawn(move |_| {
                for (slot, value) in window.iter_mut().zip(&values[range]) {
                    slot.write(transform(value));
                }
            });
        }
    });
    // SAFETY: the windows cover exactly the first `values.len()` slots of the
    // spare capacity, every slot was initialized by exactly one worker, and the
    // scope joined them all before returning.
    unsafe { out.set_len(values.len()) };
    out
}
