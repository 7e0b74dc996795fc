//! Route handlers organized by domain.

pub mod health;
pub mod library;
pub mod pages;
