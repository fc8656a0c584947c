//! Gold-file diffing for the test harness
//!
//! Compares output produced by a test against a stored reference ("gold")
//! file. JSON output is compared semantically after the shared-reference
//! encoding (`serId` / `serRefId`) has been resolved, so two documents that
//! only differ in how shared subgraphs were numbered compare equal.

pub mod diff;
pub mod differ;
pub mod error;
pub mod gold;
pub mod json;
pub mod refs;
pub mod text;

pub use diff::{SemanticChange, SemanticDiff};
pub use differ::GoldDiff;
pub use error::{Error, Result, Side};
pub use gold::{GoldConfig, GoldFile, GoldSource};
pub use json::JsonDiff;
pub use refs::{RefKeys, RefResolver, resolve_refs};
pub use text::TextDiff;
