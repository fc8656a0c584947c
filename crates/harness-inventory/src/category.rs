//! Test categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Classification of a test class.
///
/// Rendered and parsed by the upper-case names the runner dashboards use
/// (`JSTEST`, `WEBDRIVER`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    JsTest,
    WebDriver,
    Integration,
    /// Never assigned by classification; a destination for skipped tests.
    Ignored,
    PerfSuite,
    PerfCmp,
    PerfFramework,
    PerfCustom,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::JsTest,
        Category::WebDriver,
        Category::Integration,
        Category::Ignored,
        Category::PerfSuite,
        Category::PerfCmp,
        Category::PerfFramework,
        Category::PerfCustom,
    ];

    /// Performance categories.
    pub const PERF: [Category; 4] = [
        Category::PerfSuite,
        Category::PerfCmp,
        Category::PerfFramework,
        Category::PerfCustom,
    ];

    /// Functional categories.
    pub const FUNC: [Category; 3] = [Category::JsTest, Category::WebDriver, Category::Integration];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::JsTest => "JSTEST",
            Category::WebDriver => "WEBDRIVER",
            Category::Integration => "INTEGRATION",
            Category::Ignored => "IGNORED",
            Category::PerfSuite => "PERFSUITE",
            Category::PerfCmp => "PERFCMP",
            Category::PerfFramework => "PERFFRAMEWORK",
            Category::PerfCustom => "PERFCUSTOM",
        }
    }

    pub fn is_perf(&self) -> bool {
        Self::PERF.contains(self)
    }

    pub fn is_func(&self) -> bool {
        Self::FUNC.contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
