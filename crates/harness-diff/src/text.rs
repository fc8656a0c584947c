//! Exact text comparison against a gold file

use crate::differ::{self, GoldDiff};
use crate::gold::{GoldConfig, GoldFile, GoldSource};
use crate::{Error, Result};

/// Differ that requires the actual text to match the gold text exactly,
/// apart from line-ending style.
#[derive(Debug, Clone)]
pub struct TextDiff<S = GoldFile> {
    gold: S,
    config: GoldConfig,
}

impl<S: GoldSource> TextDiff<S> {
    pub fn new(gold: S) -> Self {
        Self {
            gold,
            config: GoldConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GoldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn gold(&self) -> &S {
        &self.gold
    }
}

impl<S: GoldSource> GoldDiff for TextDiff<S> {
    fn url(&self) -> String {
        self.gold.url()
    }

    fn assert_diff(&self, actual: &str, message: Option<&str>) -> Result<()> {
        let gold = match self.gold.read() {
            Ok(text) => text,
            Err(Error::GoldMissing { .. }) if self.config.update => {
                return differ::update_gold(&self.gold, actual);
            }
            Err(e) => return Err(e),
        };

        let gold = normalize_newlines(&gold);
        let actual_text = normalize_newlines(actual);
        if gold == actual_text {
            return Ok(());
        }

        if self.config.update {
            return differ::update_gold(&self.gold, actual);
        }

        Err(Error::Mismatch {
            message: differ::failure_message(message, &self.gold.url()),
            diff: differ::line_diff(&gold, &actual_text),
        })
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
