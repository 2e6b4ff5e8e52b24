//! Data-parallel map, filter, reduce, and search over in-memory slices.
//!
//! Every operation follows the same shape: the input's index space is divided
//! into contiguous partitions, one per available worker, the partitions are
//! processed independently in parallel, and the per-partition results are
//! combined on the calling thread. This approach to parallelization provides a
//! few key benefits:
//!
//! - No synchronization is required between workers during execution
//!   (coordination happens on the calling thread, between fan-out phases).
//! - Allocations are minimized, as output sizes become known before use.
//! - Sacrificing determinism is usually not necessary: [map] and [filter]
//!   preserve the input order by construction, because output positions are
//!   derived from index positions rather than completion timing.
//!
//! The two exceptions to strict determinism are documented on the operations
//! themselves: [reduce] combines partition results in completion order (and is
//! therefore reproducible only for associative accumulators), and the search
//! family ([any]/[all]/[none]) short-circuits, so predicates may not be
//! invoked on every element.
//!
//! # Execution
//!
//! Workers are dispatched as [rayon] scope tasks on the global thread pool, and
//! the parallelism degree is queried from the pool on every call (it can be
//! configured by the environment via `RAYON_NUM_THREADS`). Each fan-out ends in
//! a full join: no worker ever outlives the call that spawned it, even when a
//! search is cancelled early or a user closure panics.
//!
//! As with every performance-oriented tool, measure before applying: the
//! operations only pay off when the dataset is large enough or the
//! per-element computation is expensive.
//!
//! # Example
//!
//! ```
//! let values: Vec<u64> = (0..1000).collect();
//!
//! let doubled = partwise::map(&values, |v| v * 2);
//! assert_eq!(doubled[500], 1000);
//!
//! let evens = partwise::filter(&values, |v| v % 2 == 0);
//! assert_eq!(evens.len(), 500);
//!
//! let sum = partwise::reduce(&values, |a, b| a + b).unwrap();
//! assert_eq!(sum, 499_500);
//!
//! assert!(partwise::any(&values, |v| *v == 999));
//! assert!(partwise::all(&values, |v| *v < 1000));
//! assert!(partwise::none(&values, |v| *v >= 1000));
//! ```

use thiserror::Error;

mod bitvec;
mod filter;
mod map;
mod plan;
mod reduce;
mod search;

pub use filter::filter;
pub use map::map;
pub use reduce::reduce;
pub use search::{all, any, none};

/// Errors that can be returned when combining a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot reduce an empty sequence")]
    EmptySequence,
}
