//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks are written by hand so tests control exactly what a port returns
//! and can count how often it was called.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
