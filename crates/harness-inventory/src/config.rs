//! Filter configuration
//!
//! A filter is described by include/exclude pattern lists, either in a
//! TOML file:
//!
//! ```toml
//! include = ["\\.ui\\."]
//! exclude = ["Flaky", "#testSlow"]
//! ```
//!
//! or through the `TEST_INCLUDE` / `TEST_EXCLUDE` environment variables
//! as comma-separated lists.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{Error, Result};

pub const INCLUDE_ENV: &str = "TEST_INCLUDE";
pub const EXCLUDE_ENV: &str = "TEST_EXCLUDE";

/// Pattern lists for a [`crate::PatternFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl FilterConfig {
    /// Load a TOML filter configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            include: split_list(lookup(INCLUDE_ENV)),
            exclude: split_list(lookup(EXCLUDE_ENV)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

fn split_list(value: Option<String>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
