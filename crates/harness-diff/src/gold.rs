//! Gold file access and update configuration

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable that switches differs into gold update mode.
pub const UPDATE_GOLD_ENV: &str = "UPDATE_GOLD";

/// Source of the reference text a differ compares against.
pub trait GoldSource {
    /// Location of the gold file, used in failure messages.
    fn url(&self) -> String;

    /// Read the gold text.
    ///
    /// Fails with [`Error::GoldMissing`] when no gold file exists.
    fn read(&self) -> Result<String>;

    /// Replace the gold text.
    fn write(&self, content: &str) -> Result<()>;
}

/// A gold file on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldFile {
    path: PathBuf,
}

impl GoldFile {
    /// Gold file `name` inside the results directory `dir`.
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Self {
        Self {
            path: dir.as_ref().join(name),
        }
    }

    /// Gold file at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GoldSource for GoldFile {
    fn url(&self) -> String {
        format!("file://{}", self.path.display())
    }

    fn read(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::GoldMissing { url: self.url() }),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }

    fn write(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))
    }
}

/// Behaviour switches shared by all differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoldConfig {
    /// Rewrite the gold file with the actual output instead of failing
    /// on a mismatch or a missing gold file.
    pub update: bool,
}

impl GoldConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let update = lookup(UPDATE_GOLD_ENV)
            .map(|value| is_enabled(&value))
            .unwrap_or(false);
        Self { update }
    }

    pub fn updating() -> Self {
        Self { update: true }
    }
}

fn is_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
