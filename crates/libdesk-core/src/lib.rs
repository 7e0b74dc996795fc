//! # libdesk-core
//!
//! Core crate for LibDesk, the library PC occupancy service. Contains the
//! directory and occupancy traits, configuration schemas, roll number and
//! status types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LibDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
