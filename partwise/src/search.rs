//! Short-circuiting parallel predicate search.

use crate::plan::Plan;
use std::sync::atomic::{AtomicBool, Ordering};

/// Returns whether `predicate` is true for any element of `values`.
///
/// Each partition is scanned in ascending index order; a worker stops at its
/// first match and signals a shared one-shot cancellation flag so sibling
/// workers can abandon their remaining ranges. Because of the short-circuiting,
/// the predicate is not guaranteed to be invoked on every element. All workers
/// are joined before returning, even after cancellation, so none can outlive
/// the call and race with the caller's reuse of `values` or `predicate`.
///
/// Returns `false` for an empty slice.
///
/// # Examples
///
/// ```
/// let values: Vec<u64> = (0..1000).collect();
/// assert!(partwise::any(&values, |v| *v == 999));
/// assert!(!partwise::any(&values, |v| *v == 1000));
/// ```
pub fn any<T, P>(values: &[T], predicate: P) -> bool
where
    T: Sync,
    P: Fn(&T) -> bool + Send + Sync,
{
    let Some(plan) = Plan::new(values.len(), rayon::current_num_threads()) else {
        return false;
    };

    let cancel = AtomicBool::new(false);
    let mut found = vec![false; plan.count()];
    rayon::scope(|s| {
        for (range, found) in plan.ranges().zip(found.iter_mut()) {
            let (cancel, predicate) = (&cancel, &predicate);
            s.spawn(move |_| {
                for value in &values[range] {
                    // Purely a cooperative hint: once a sibling matched, the
                    // remainder of this range cannot change the outcome.
                    if cancel.load(Ordering::Relaxed) {
                        return;
                    }
                    if predicate(value) {
                        *found = true;
                        cancel.store(true, Ordering::Relaxed);
                        return;
                    }
                }
            });
        }
    });
    found.into_iter().any(|matched| matched)
}

/// Returns whether `predicate` is true for all elements of `values`.
///
/// Workers short-circuit on the first element for which the predicate is
/// false, so the predicate is not guaranteed to be invoked on every element.
/// Vacuously true for an empty slice.
///
/// # Examples
///
/// ```
/// let values: Vec<u64> = (0..1000).collect();
/// assert!(partwise::all(&values, |v| *v < 1000));
/// assert!(!partwise::all(&values, |v| *v < 999));
/// ```
pub fn all<T, P>(values: &[T], predicate: P) -> bool
where
    T: Sync,
    P: Fn(&T) -> bool + Send + Sync,
{
    none(values, |value| !predicate(value))
}

/// Returns whether `predicate` is true for no element of `values`.
///
/// Workers short-circuit on the first match, so the predicate is not
/// guaranteed to be invoked on every element. Vacuously true for an empty
/// slice.
///
/// # Examples
///
/// ```
/// let values: Vec<u64> = (0..1000).collect();
/// assert!(partwise::none(&values, |v| *v >= 1000));
/// ```
pub fn none<T, P>(values: &[T], predicate: P) -> bool
where
    T: Sync,
    P: Fn(&T) -> bool + Send + Sync,
{
    !any(values, predicate)
}
