//! # libdesk-occupancy
//!
//! Occupancy tracking for the shared library PC pool.
//!
//! ## Modules
//!
//! - `tracker`: bounded set of roll numbers holding a PC
//! - `directory`: roll number to name resolution (SQLite, cached, static)
//! - `service`: login/logout flow combining the two

pub mod directory;
pub mod service;
pub mod tracker;

pub use directory::{CachedDirectory, SqlDirectory, StaticDirectory};
pub use service::{LibraryService, SessionAction, SessionChange};
pub use tracker::MemoryOccupancyTracker;
