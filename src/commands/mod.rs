//! Command implementations.

pub mod collapse;

pub use collapse::{CollapseCommand, CollapseStats};
