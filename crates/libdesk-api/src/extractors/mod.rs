//! Custom Axum extractors.

pub mod roll_no;

pub use roll_no::RollNoBody;
