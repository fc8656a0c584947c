//! Class registration table
//!
//! Test modules declare their classes up front instead of being scanned
//! at runtime. The table serves both as the module walker (ordered names
//! per module root) and as the class loader.

use std::collections::HashMap;

use crate::class::{TestClass, TestClassRef};
use crate::discovery::{ClassLoader, LoadError, ModuleWalker};

#[derive(Debug, Clone)]
enum Entry {
    Loadable { root: String, class: TestClassRef },
    Unloadable { root: String, error: LoadError },
}

impl Entry {
    fn root(&self) -> &str {
        match self {
            Entry::Loadable { root, .. } | Entry::Unloadable { root, .. } => root,
        }
    }
}

/// Registration table of the classes in one or more modules.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Module root -> class names in registration order
    modules: HashMap<String, Vec<String>>,
    /// Class name -> entry
    entries: HashMap<String, Entry>,
}

impl ClassRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loadable class under `root`.
    ///
    /// Registering a name again replaces the previous entry but keeps its
    /// position.
    pub fn register(&mut self, root: impl Into<String>, class: TestClassRef) {
        let name = class.name().to_string();
        self.insert(
            name,
            Entry::Loadable {
                root: root.into(),
                class,
            },
        );
    }

    /// Register a name that enumerates under `root` but fails to load.
    pub fn register_unloadable(
        &mut self,
        root: impl Into<String>,
        name: impl Into<String>,
        error: LoadError,
    ) {
        self.insert(
            name.into(),
            Entry::Unloadable {
                root: root.into(),
                error,
            },
        );
    }

    fn insert(&mut self, name: String, entry: Entry) {
        if let Some(previous) = self.entries.get(&name) {
            let previous_root = previous.root().to_string();
            if previous_root != entry.root() {
                if let Some(names) = self.modules.get_mut(&previous_root) {
                    names.retain(|n| *n != name);
                }
                self.modules
                    .entry(entry.root().to_string())
                    .or_default()
                    .push(name.clone());
            }
        } else {
            self.modules
                .entry(entry.root().to_string())
                .or_default()
                .push(name.clone());
        }
        self.entries.insert(name, entry);
    }

    /// Check if a name is registered (loadable or not).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List module roots (sorted).
    pub fn roots(&self) -> Vec<&str> {
        let mut roots: Vec<_> = self.modules.keys().map(|s| s.as_str()).collect();
        roots.sort();
        roots
    }
}

impl ModuleWalker for ClassRegistry {
    fn root_uri_of(&self, class: &dyn TestClass) -> Option<String> {
        self.entries
            .get(class.name())
            .map(|entry| entry.root().to_string())
    }

    fn class_names_under(&self, root: &str) -> Vec<String> {
        self.modules.get(root).cloned().unwrap_or_default()
    }
}

impl ClassLoader for ClassRegistry {
    fn load(&self, name: &str) -> Result<TestClassRef, LoadError> {
        match self.entries.get(name) {
            Some(Entry::Loadable { class, .. }) => Ok(class.clone()),
            Some(Entry::Unloadable { error, .. }) => Err(error.clone()),
            None => Err(LoadError::NotFound(name.to_string())),
        }
    }
}
