//! Common test utilities for router-level tests

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{StalledIndex, TestApp};
