//! Parallel reduction of a slice to a single value.

use crate::{plan::Plan, Error};
use std::sync::mpsc;

/// Reduces `values` to a single value by repeatedly applying `accumulator`.
///
/// Each partition is folded on its own worker: the fold is seeded with the
/// partition's first element, then combined with the remaining elements in
/// strictly ascending index order, so within a partition the result is fully
/// deterministic. Partition results are then combined on the calling thread in
/// **completion order**, which is timing-dependent: the final value is
/// reproducible across runs only if `accumulator` is associative. Within a
/// single run, no partial result is dropped or duplicated.
///
/// Returns [`Error::EmptySequence`] for an empty slice; no identity element is
/// assumed or synthesized.
///
/// # Examples
///
/// ```
/// let values: Vec<u64> = (1..=10).collect();
/// let sum = partwise::reduce(&values, |a, b| a + b).unwrap();
/// assert_eq!(sum, 55);
/// ```
pub fn reduce<T, A>(values: &[T], accumulator: A) -> Result<T, Error>
where
    T: Clone + Send + Sync,
    A: Fn(T, T) -> T + Send + Sync,
{
    let Some(plan) = Plan::new(values.len(), rayon::current_num_threads()) else {
        return Err(Error::EmptySequence);
    };

    let (partials, collected) = mpsc::channel();
    let accumulator = &accumulator;
    rayon::scope(move |s| {
        for range in plan.ranges() {
            let partials = partials.clone();
            s.spawn(move |_| {
                // The plan guarantees no partition is empty.
                let partition = &values[range];
                let mut acc = partition[0].clone();
                for value in &partition[1..] {
                    acc = accumulator(acc, value.clone());
                }
                // The receiver outlives the scope, so this cannot fail.
                let _ = partials.send(acc);
            });
        }
    });

    // The channel queues partials in the order workers finished, so draining it
    // combines them in completion order, not partition order.
    let mut collected = collected.into_iter();
    let mut acc = collected.next().expect("one partial per partition");
    for partial in collected {
        acc = accumulator(acc, partial);
    }
    Ok(acc)
}
