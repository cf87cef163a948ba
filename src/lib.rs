//! chained-map: a fixed-capacity, string-keyed hash map with separate
//! chaining, built in small layers so each piece can be reasoned about
//! independently.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a deterministic, fixed-bucket-count associative container for
//!   string keys, where collision handling is explicit chains rather than a
//!   resizing probe table.
//! - Layers:
//!   - hash: the djb2 string hash and the hash-to-bucket-index mapping.
//!     Pure functions of the key bytes; no per-run seeding, so placement is
//!     reproducible across runs and in tests.
//!   - chain::ChainStore<V>: the chain operations. Nodes live in a slotmap
//!     arena and link to their successor by slot key behind small `Link`
//!     wrappers; push-front, scoped find, value swap, and
//!     previous-node-tracking unlink all work on one chain at a time.
//!   - chained_map::ChainedMap<V>: public API holding the fixed bucket array
//!     of optional chain heads plus the store; routes every operation
//!     through hash-then-modulo bucket selection and a linear chain scan.
//!
//! Constraints
//! - Capacity is chosen at construction and never changes: no resize, no
//!   rehash. Chains grow past the bucket count instead.
//! - Single-threaded: exclusive access is whatever `&mut self` grants; the
//!   map has no internal locking.
//! - Keys are strings, duplicated into owned storage on insert; each key
//!   appears in at most one entry across the whole map.
//! - Values are opaque. The map never inspects a `V`; instantiate with
//!   `V = &T` for non-owning references whose referents the map never
//!   touches.
//! - Costs: O(chain length) for insert/get/remove, O(capacity + entries)
//!   for clear and describe.
//!
//! Why this split?
//! - Localize invariants: chain splicing is correct or broken entirely
//!   inside `chain`; bucket selection entirely inside `hash`. The public
//!   layer only composes the two.
//! - No unsafe anywhere: chains link by arena key, not by owning pointer,
//!   so unlinking is a key splice and teardown is one arena clear.
//!
//! Error handling
//! - Constructor failures (`CreateError`) are values: zero capacity and
//!   bucket-array allocation failure. Absent keys on get/remove are `None`,
//!   a normal negative result, not an error.
//!
//! Notes and non-goals
//! - No non-string keys and no iteration-order guarantees; within a bucket,
//!   chain order is newest-first after inserts and implementation-defined
//!   after other mutation.
//! - No growth policy. A crowded map stays at its capacity by design; pick
//!   the bucket count for the expected load.
//! - Public API surface is `ChainedMap`, `CreateError`, and the `hash`
//!   functions; `chain` is an implementation detail kept public for the
//!   chain-level benchmarks.

pub mod chain;
mod chained_map;
mod chained_map_proptest;
pub mod hash;

// Public surface
pub use chained_map::{ChainedMap, CreateError};
