//! Collaborators the inventory discovers classes through

use std::sync::Arc;

use crate::class::{TestClass, TestClassRef};
use crate::filter::ServiceLocator;
use crate::registry::ClassRegistry;

/// Why a candidate class could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("class not found: {0}")]
    NotFound(String),

    #[error("failed to link {name}: {reason}")]
    Link { name: String, reason: String },
}

/// Enumerates the classes that belong to a module.
pub trait ModuleWalker: Send + Sync {
    /// Root URI of the module `class` belongs to.
    fn root_uri_of(&self, class: &dyn TestClass) -> Option<String>;

    /// Fully-qualified names under `root`, in a deterministic order.
    fn class_names_under(&self, root: &str) -> Vec<String>;
}

/// Resolves class names to loaded classes.
pub trait ClassLoader: Send + Sync {
    fn load(&self, name: &str) -> Result<TestClassRef, LoadError>;
}

/// Everything a [`crate::TestInventory`] needs from its environment.
#[derive(Clone)]
pub struct DiscoveryContext {
    pub walker: Arc<dyn ModuleWalker>,
    pub loader: Arc<dyn ClassLoader>,
    pub locator: Arc<ServiceLocator>,
}

impl DiscoveryContext {
    pub fn new(
        walker: Arc<dyn ModuleWalker>,
        loader: Arc<dyn ClassLoader>,
        locator: Arc<ServiceLocator>,
    ) -> Self {
        Self {
            walker,
            loader,
            locator,
        }
    }

    /// Use one registration table as both walker and loader.
    pub fn from_registry(registry: Arc<ClassRegistry>, locator: Arc<ServiceLocator>) -> Self {
        Self {
            walker: registry.clone(),
            loader: registry,
            locator,
        }
    }
}
