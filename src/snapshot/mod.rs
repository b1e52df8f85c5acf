//! Snapshot input.

pub mod loader;

pub use loader::load_snapshot;
