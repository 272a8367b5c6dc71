//! Common test utilities for capreq contract and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - `ForeignCapability` / `ForeignRequirement`: external shapes unrelated to `CapReq`
//! - Fixtures: Reusable manifest constants

#![allow(dead_code)]

pub mod fixtures;
pub mod shapes;

pub use env::*;
pub use fixtures::*;
pub use shapes::*;
