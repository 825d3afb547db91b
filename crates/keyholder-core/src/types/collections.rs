//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
pub use smallvec::SmallVec;

/// SmallVec sized for per-simulation mitigation lists (at most five).
pub type SmallVec5<T> = SmallVec<[T; 5]>;
