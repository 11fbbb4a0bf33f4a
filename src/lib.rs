//! prime-hashmap: from-scratch hash maps over prime-sized bucket arrays,
//! with two independent collision-resolution strategies behind one
//! contract.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: implement the two classic collision-resolution strategies as
//!   small, separately verifiable maps that share their sizing rules but
//!   no bucket code.
//! - Layers:
//!   - `prime`: capacity manager. Bucket-array lengths are always prime;
//!     `next_prime` normalizes requested capacities at construction and
//!     at every resize.
//!   - `ProbingHashMap<K, V, S>`: open addressing. Collisions walk the
//!     quadratic sequence `initial + j^2 (mod capacity)`; deletion leaves
//!     a key-bearing tombstone so probe sequences through the slot stay
//!     intact; inserts grow the table eagerly once the load factor
//!     reaches 0.5.
//!   - `ChainedHashMap<K, V, S>`: separate chaining. Each bucket owns a
//!     singly linked chain; nothing resizes automatically — callers bound
//!     chain length with `resize_table` at their discretion.
//!   - `FnvBuildHasher`: the fixed, deterministic default hash function;
//!     any `S: BuildHasher` can be injected at construction instead.
//!
//! Constraints
//! - Single-threaded: no internal synchronization; callers needing
//!   concurrent access serialize externally.
//! - Both variants resize the same way: snapshot live entries, replace
//!   the bucket array at the prime-normalized capacity, replay every pair
//!   through `insert` so indices are recomputed. No entry is lost or
//!   duplicated.
//! - The eager-vs-manual resize split is deliberate, not an oversight:
//!   probing needs a bounded load factor for probe sequences to
//!   terminate; chaining degrades gracefully and leaves the trade-off to
//!   the caller.
//! - Probe termination is inherited behavior: there is no cycle
//!   detection, only the load-factor bound and prime capacities.
//!
//! Error semantics
//! - Missing keys are normal negatives (`Option`/`bool`), removal of an
//!   absent key is a no-op, and out-of-range `resize_table` targets are
//!   silently ignored. The only panicking surface is indexing (`map[&k]`)
//!   with an absent key.
//!
//! Notes and non-goals
//! - No iteration-order guarantee beyond bucket-array order, which
//!   changes across resizes.
//! - No shrink-on-delete; tombstones accumulate in the probing variant
//!   until a resize rehashes them away.
//! - Keys are immutable post-insert; updates replace values only.
//! - `serde` support for both maps is available behind the `serde`
//!   feature.

pub mod chained;
pub mod fnv;
pub mod prime;
pub mod probing;
#[cfg(feature = "serde")]
mod serde;

/// Capacity used by `new()` on either variant, normalized through
/// `next_prime` like any caller-supplied value.
pub(crate) const DEFAULT_CAPACITY: usize = 11;

// Public surface
pub use chained::ChainedHashMap;
pub use fnv::{FnvBuildHasher, FnvHasher};
pub use probing::ProbingHashMap;
