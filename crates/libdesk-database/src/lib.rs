//! # libdesk-database
//!
//! SQLite connection management, embedded migrations and the student
//! directory repository.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
