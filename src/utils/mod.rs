//! Shared terminal helpers

pub mod progress;
pub mod styling;
