//! Repository implementations.

pub mod student;

pub use student::{StudentRecord, StudentRepository};
