//! Shared test utilities for the test-harness workspace.
//!
//! Used from the integration tests of the workspace crates only, never
//! published.
//!
//! # Modules
//!
//! - [`gold`]: [`gold::GoldDir`], a temporary results directory for gold files
//! - [`modules`]: registration tables describing fixture test modules

pub mod gold;
pub mod modules;
