//! Occupancy tracker implementations.
//!
//! Only the in-memory tracker exists: the pool lives in a single process.

pub mod memory;

pub use memory::MemoryOccupancyTracker;
