//! Core traits defined in `libdesk-core` and implemented by other crates.

pub mod directory;
pub mod occupancy;

pub use directory::DirectoryLookup;
pub use occupancy::{LoginOutcome, LogoutOutcome, OccupancyTracker};
