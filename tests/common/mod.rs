//! Common test utilities for Forge contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated registry and project directories plus CLI helpers
//! - Fixtures: Reusable registry content constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
