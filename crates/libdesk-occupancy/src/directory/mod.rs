//! Student directory lookups.
//!
//! - `sql`: reads the `students` table through the connection pool
//! - `cached`: moka read-through cache in front of any other lookup
//! - `memory`: fixed in-process map, for tests and demos

pub mod cached;
pub mod memory;
pub mod sql;

pub use cached::CachedDirectory;
pub use memory::StaticDirectory;
pub use sql::SqlDirectory;
