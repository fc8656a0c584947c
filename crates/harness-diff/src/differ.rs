//! The common surface of all gold-file differs

use similar::TextDiff;
use tracing::info;

use crate::gold::GoldSource;
use crate::Result;

/// Compares test output against a gold file.
pub trait GoldDiff {
    /// Location of the gold file this differ reads.
    fn url(&self) -> String;

    /// Check `actual` against the gold file.
    ///
    /// On a mismatch the returned [`crate::Error::Mismatch`] carries
    /// `message` when given, otherwise `"Diff from <url>"`.
    fn assert_diff(&self, actual: &str, message: Option<&str>) -> Result<()>;
}

pub(crate) fn failure_message(message: Option<&str>, url: &str) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("Diff from {url}"),
    }
}

/// Unified line diff between the gold text and the actual text.
pub(crate) fn line_diff(gold: &str, actual: &str) -> String {
    TextDiff::from_lines(gold, actual)
        .unified_diff()
        .context_radius(3)
        .header("gold", "actual")
        .to_string()
}

/// Replace the gold text with `actual`.
pub(crate) fn update_gold(source: &impl GoldSource, actual: &str) -> Result<()> {
    source.write(actual)?;
    info!(url = %source.url(), "Updated gold file");
    Ok(())
}
