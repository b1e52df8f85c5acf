//! Analysis modules.
//!
//! Group aggregation and table sorting. Both are pure functions over the
//! snapshot records.

pub mod aggregator;
pub mod sorter;

pub use aggregator::*;
pub use sorter::*;
