pub mod access_pattern;
pub mod report;
pub mod simulation;

pub use address_space;
