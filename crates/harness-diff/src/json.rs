//! JSON gold-file comparison

use serde_json::Value;

use crate::diff::SemanticDiff;
use crate::differ::{self, GoldDiff};
use crate::gold::{GoldConfig, GoldFile, GoldSource};
use crate::refs::RefResolver;
use crate::{Error, Result, Side};

/// Differ that compares JSON documents structurally after resolving
/// shared references on both sides.
///
/// Key order is irrelevant, arrays compare positionally and numbers compare
/// by their parsed representation (`1` and `1.0` differ).
#[derive(Debug, Clone)]
pub struct JsonDiff<S = GoldFile> {
    gold: S,
    config: GoldConfig,
    resolver: RefResolver,
}

impl<S: GoldSource> JsonDiff<S> {
    pub fn new(gold: S) -> Self {
        Self {
            gold,
            config: GoldConfig::default(),
            resolver: RefResolver::default(),
        }
    }

    pub fn with_config(mut self, config: GoldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_resolver(mut self, resolver: RefResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn gold(&self) -> &S {
        &self.gold
    }

    fn canonical(&self, text: &str, side: Side) -> Result<Value> {
        let parsed: Value = serde_json::from_str(text).map_err(|e| Error::parse(side, e))?;
        Ok(self.resolver.resolve(&parsed))
    }
}

impl<S: GoldSource> GoldDiff for JsonDiff<S> {
    fn url(&self) -> String {
        self.gold.url()
    }

    fn assert_diff(&self, actual: &str, message: Option<&str>) -> Result<()> {
        let gold = match self.gold.read() {
            Ok(text) => text,
            Err(Error::GoldMissing { .. }) if self.config.update => {
                // Never record unparseable output as gold
                self.canonical(actual, Side::Actual)?;
                return differ::update_gold(&self.gold, actual);
            }
            Err(e) => return Err(e),
        };

        let expected = self.canonical(&gold, Side::Gold)?;
        let actual_value = self.canonical(actual, Side::Actual)?;

        if expected == actual_value {
            return Ok(());
        }

        if self.config.update {
            return differ::update_gold(&self.gold, actual);
        }

        Err(Error::Mismatch {
            message: differ::failure_message(message, &self.gold.url()),
            diff: render_mismatch(&expected, &actual_value),
        })
    }
}

fn render_mismatch(expected: &Value, actual: &Value) -> String {
    let semantic = SemanticDiff::compute(expected, actual);
    let expected_text = serde_json::to_string_pretty(expected).unwrap_or_default();
    let actual_text = serde_json::to_string_pretty(actual).unwrap_or_default();
    format!(
        "{}{}",
        semantic,
        differ::line_diff(&expected_text, &actual_text)
    )
}
