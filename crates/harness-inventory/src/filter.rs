//! Test filters and the locator that supplies them

use regex::Regex;
use std::sync::{Arc, RwLock};

use crate::class::TestClassRef;
use crate::config::FilterConfig;
use crate::node::TestCase;
use crate::{Error, Result};

/// Prunes classes and individual cases from discovery output.
///
/// Returning `None` removes the item. Both methods default to identity.
pub trait TestFilter: Send + Sync {
    fn apply_to_class(&self, class: TestClassRef) -> Option<TestClassRef> {
        Some(class)
    }

    fn apply_to_case(&self, case: TestCase) -> Option<TestCase> {
        Some(case)
    }
}

/// Admits everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughFilter;

impl TestFilter for PassThroughFilter {}

/// Include/exclude regular expressions over class names and `Class#method`
/// case names.
///
/// An item is admitted when it matches at least one include pattern (or no
/// include patterns are configured) and no exclude pattern.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl PatternFilter {
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        Ok(Self {
            include: compile(&config.include)?,
            exclude: compile(&config.exclude)?,
        })
    }

    pub fn admits(&self, name: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|r| r.is_match(name));
        included && !self.exclude.iter().any(|r| r.is_match(name))
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

impl TestFilter for PatternFilter {
    fn apply_to_class(&self, class: TestClassRef) -> Option<TestClassRef> {
        self.admits(class.name()).then_some(class)
    }

    fn apply_to_case(&self, case: TestCase) -> Option<TestCase> {
        self.admits(&case.qualified_name()).then_some(case)
    }
}

/// Service locator for the active [`TestFilter`].
///
/// The inventory asks for the filter at the start of every discovery run,
/// so a filter installed between runs applies to the next category loaded.
#[derive(Default)]
pub struct ServiceLocator {
    filter: RwLock<Option<Arc<dyn TestFilter>>>,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: Arc<dyn TestFilter>) -> Self {
        Self {
            filter: RwLock::new(Some(filter)),
        }
    }

    pub fn install(&self, filter: Arc<dyn TestFilter>) {
        *self.filter.write().unwrap_or_else(|e| e.into_inner()) = Some(filter);
    }

    pub fn clear(&self) {
        *self.filter.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// The installed filter, or a pass-through filter when none is installed.
    pub fn test_filter(&self) -> Arc<dyn TestFilter> {
        self.filter
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .unwrap_or_else(|| Arc::new(PassThroughFilter) as Arc<dyn TestFilter>)
    }
}
