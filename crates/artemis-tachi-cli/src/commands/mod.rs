//! CLI command implementations.

pub mod export;
pub mod interactive;
pub mod lookup;
pub mod stats;
