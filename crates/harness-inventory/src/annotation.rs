//! Category annotations and classification

use crate::Category;

/// Marker a test class declares to select its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
    PerfTestSuite,
    PerfCustomTest,
    PerfCmpTest,
    PerfFrameworkTest,
    JsTest,
    WebDriverTest,
    IntegrationTest,
}

impl Annotation {
    /// Classification order, highest priority first.
    pub const PRIORITY: [Annotation; 7] = [
        Annotation::PerfTestSuite,
        Annotation::PerfCustomTest,
        Annotation::PerfCmpTest,
        Annotation::PerfFrameworkTest,
        Annotation::JsTest,
        Annotation::WebDriverTest,
        Annotation::IntegrationTest,
    ];

    pub fn category(self) -> Category {
        match self {
            Annotation::PerfTestSuite => Category::PerfSuite,
            Annotation::PerfCustomTest => Category::PerfCustom,
            Annotation::PerfCmpTest => Category::PerfCmp,
            Annotation::PerfFrameworkTest => Category::PerfFramework,
            Annotation::JsTest => Category::JsTest,
            Annotation::WebDriverTest => Category::WebDriver,
            Annotation::IntegrationTest => Category::Integration,
        }
    }
}

/// Category of a class bearing `annotations`.
///
/// When several annotations are present the one earliest in
/// [`Annotation::PRIORITY`] wins. Returns `None` for unannotated classes.
pub fn classify(annotations: &[Annotation]) -> Option<Category> {
    Annotation::PRIORITY
        .into_iter()
        .find(|a| annotations.contains(a))
        .map(Annotation::category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_unannotated_is_unclassified() {
        assert_eq!(classify(&[]), None);
    }

    #[rstest]
    #[case(&[Annotation::JsTest, Annotation::IntegrationTest], Category::JsTest)]
    #[case(&[Annotation::IntegrationTest, Annotation::JsTest], Category::JsTest)]
    #[case(&[Annotation::WebDriverTest, Annotation::PerfCmpTest], Category::PerfCmp)]
    #[case(&[Annotation::PerfFrameworkTest, Annotation::PerfCustomTest], Category::PerfCustom)]
    #[case(&[Annotation::IntegrationTest, Annotation::PerfTestSuite], Category::PerfSuite)]
    fn test_priority_wins(#[case] annotations: &[Annotation], #[case] expected: Category) {
        assert_eq!(classify(annotations), Some(expected));
    }

    #[test]
    fn test_highest_priority_present_is_chosen() {
        // Every pair of distinct annotations resolves to the earlier one.
        for (i, high) in Annotation::PRIORITY.iter().enumerate() {
            for low in &Annotation::PRIORITY[i + 1..] {
                assert_eq!(classify(&[*low, *high]), Some(high.category()));
            }
        }
    }

    #[test]
    fn test_never_classifies_as_ignored() {
        assert!(
            Annotation::PRIORITY
                .iter()
                .all(|a| a.category() != Category::Ignored)
        );
    }
}
