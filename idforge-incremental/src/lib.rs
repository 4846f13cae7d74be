//! Content-addressed memoization engine.
//!
//! Each pipeline stage is modeled as a pure function from a structurally
//! hashable input to an output. A [`MemoTable`] caches outputs keyed by the
//! *value* of the input, not its identity and not a timestamp, so a stage
//! is recomputed exactly when its relevant input changed.
//!
//! Per-item work flows through a [`Stream`] of change-[`Tracked`] values;
//! aggregates are single `Tracked` values. The combinators are deliberately
//! small:
//!
//! - [`Stream::input`]: admit raw values, detecting first-time content
//! - [`Stream::map`]: memoized per-item transform
//! - [`Stream::filter`] / [`Stream::filter_map`]: drop items, no cache
//! - [`Stream::collect`]: gather all items into one aggregate node
//! - [`Stream::combine_each`] / [`Tracked::combine`]: joint nodes,
//!   recomputed when either side changed
//!
//! Tables tolerate concurrent readers and writers; racing writes for the
//! same key resolve to a single value, which is safe because stage functions
//! are pure and recomputing the same input always yields the same output.

mod cancel;
mod memo;
mod stream;
mod track;

pub use cancel::{CancelToken, Cancelled};
pub use memo::{CacheStats, MemoTable};
pub use stream::Stream;
pub use track::Tracked;
