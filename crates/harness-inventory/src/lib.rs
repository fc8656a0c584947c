//! Test inventory for the test harness
//!
//! Discovers the test classes registered under a module root, classifies
//! each one by its category annotation and assembles one suite per
//! category for the test runner.
//!
//! Classes are declared through an explicit registration table
//! ([`ClassRegistry`]) instead of runtime reflection. A class contributes
//! tests through two optional capabilities: a `suite()` factory and a
//! test-case capability that yields one case per test method.

pub mod annotation;
pub mod category;
pub mod class;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod logging;
pub mod node;
pub mod registry;

pub use annotation::{Annotation, classify};
pub use category::Category;
pub use class::{ClassSpec, SuiteError, TestClass, TestClassRef};
pub use config::FilterConfig;
pub use discovery::{ClassLoader, DiscoveryContext, LoadError, ModuleWalker};
pub use error::{Error, Result};
pub use filter::{PassThroughFilter, PatternFilter, ServiceLocator, TestFilter};
pub use inventory::{TEST_CLASS_SUFFIX, TestInventory};
pub use node::{BridgeAdapter, Test, TestCase, TestSuite};
pub use registry::ClassRegistry;
