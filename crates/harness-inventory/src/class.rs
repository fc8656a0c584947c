//! Test class handles and their suite-building capabilities

use std::fmt;
use std::sync::Arc;

use crate::annotation::Annotation;
use crate::node::{Test, TestCase, TestSuite};

/// Shared handle to a loaded test class.
pub type TestClassRef = Arc<dyn TestClass>;

/// Why a class did not contribute through one of its suite capabilities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuiteError {
    #[error("class declares no suite() factory")]
    NoSuiteMethod,

    #[error("class is not a test case")]
    NotATestCase,

    #[error("suite() of {class} failed: {message}")]
    Failed { class: String, message: String },
}

/// A class as seen by the inventory.
///
/// The defaults describe a public, concrete test node without any suite
/// capability.
pub trait TestClass: Send + Sync + fmt::Debug {
    /// Fully-qualified name.
    fn name(&self) -> &str;

    fn is_public(&self) -> bool {
        true
    }

    fn is_abstract(&self) -> bool {
        false
    }

    /// Whether the class is a runnable test node at all.
    fn is_test(&self) -> bool {
        true
    }

    fn annotations(&self) -> &[Annotation];

    /// The class's static `suite()` factory.
    fn suite(&self) -> Result<Test, SuiteError> {
        Err(SuiteError::NoSuiteMethod)
    }

    /// One case per test method, for classes that are test cases.
    fn case_suite(&self) -> Result<TestSuite, SuiteError> {
        Err(SuiteError::NotATestCase)
    }
}

type SuiteFactory = Arc<dyn Fn() -> Result<Test, SuiteError> + Send + Sync>;

/// Declarative [`TestClass`] used to populate a registration table.
///
/// ```
/// use harness_inventory::{Annotation, ClassSpec};
///
/// let class = ClassSpec::new("com.example.ui.ButtonTest")
///     .annotated(Annotation::JsTest)
///     .with_test_methods(["testClick", "testRender"]);
/// ```
#[derive(Clone)]
pub struct ClassSpec {
    name: String,
    public: bool,
    is_abstract: bool,
    test_node: bool,
    annotations: Vec<Annotation>,
    suite_factory: Option<SuiteFactory>,
    test_methods: Option<Vec<String>>,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public: true,
            is_abstract: false,
            test_node: true,
            annotations: Vec::new(),
            suite_factory: None,
            test_methods: None,
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn non_public(mut self) -> Self {
        self.public = false;
        self
    }

    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark the class as not being a test node.
    pub fn not_a_test(mut self) -> Self {
        self.test_node = false;
        self
    }

    /// Declare a static `suite()` factory.
    pub fn with_suite<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<Test, SuiteError> + Send + Sync + 'static,
    {
        self.suite_factory = Some(Arc::new(factory));
        self
    }

    /// Make the class a test case with the given test methods.
    pub fn with_test_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn into_ref(self) -> TestClassRef {
        Arc::new(self)
    }
}

impl fmt::Debug for ClassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassSpec")
            .field("name", &self.name)
            .field("public", &self.public)
            .field("is_abstract", &self.is_abstract)
            .field("test_node", &self.test_node)
            .field("annotations", &self.annotations)
            .field("has_suite", &self.suite_factory.is_some())
            .field("test_methods", &self.test_methods)
            .finish()
    }
}

impl TestClass for ClassSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_public(&self) -> bool {
        self.public
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn is_test(&self) -> bool {
        self.test_node
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn suite(&self) -> Result<Test, SuiteError> {
        match &self.suite_factory {
            Some(factory) => factory(),
            None => Err(SuiteError::NoSuiteMethod),
        }
    }

    fn case_suite(&self) -> Result<TestSuite, SuiteError> {
        let methods = self.test_methods.as_ref().ok_or(SuiteError::NotATestCase)?;
        let mut suite = TestSuite::named(self.name.clone());
        for method in methods {
            suite.add_test(TestCase::new(self.name.clone(), method.clone()));
        }
        Ok(suite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_capabilities() {
        let class = ClassSpec::new("a.PlainTest");
        assert!(class.is_public());
        assert!(!class.is_abstract());
        assert!(class.is_test());
        assert_eq!(class.suite().unwrap_err(), SuiteError::NoSuiteMethod);
        assert_eq!(class.case_suite().unwrap_err(), SuiteError::NotATestCase);
    }

    #[test]
    fn test_case_suite_has_one_case_per_method() {
        let class = ClassSpec::new("a.MathTest").with_test_methods(["testAdd", "testSub"]);
        let suite = class.case_suite().unwrap();

        assert_eq!(suite.name(), Some("a.MathTest"));
        assert_eq!(suite.test_count(), 2);
        assert_eq!(suite.cases()[1].method(), "testSub");
    }

    #[test]
    fn test_suite_factory_is_invoked() {
        let class = ClassSpec::new("a.FactoryTest")
            .with_suite(|| Ok(Test::Case(TestCase::new("a.FactoryTest", "testMade"))));

        assert_eq!(class.suite().unwrap().test_count(), 1);
    }
}
