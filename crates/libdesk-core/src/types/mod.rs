//! Core type definitions used across the LibDesk workspace.

pub mod directory;
pub mod roll_number;
pub mod status;

pub use directory::DirectoryEntry;
pub use roll_number::RollNumber;
pub use status::OccupancyStatus;
