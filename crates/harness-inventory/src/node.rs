//! Test-runner node model
//!
//! Mirrors the composite the runner consumes: single cases, named suites,
//! and bridge adapters whose children the runner cannot enumerate.

use std::fmt;

/// A single test method of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    class_name: String,
    method: String,
}

impl TestCase {
    pub fn new(class_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method: method.into(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// `Class#method`, the name filters match against.
    pub fn qualified_name(&self) -> String {
        format!("{}#{}", self.class_name, self.method)
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.method, self.class_name)
    }
}

/// Opaque container bridging tests written for another runner generation.
///
/// Presents to the runner as a single node; its tests are counted but
/// cannot be enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeAdapter {
    class_name: String,
    test_count: usize,
}

impl BridgeAdapter {
    pub fn new(class_name: impl Into<String>, test_count: usize) -> Self {
        Self {
            class_name: class_name.into(),
            test_count,
        }
    }

    pub fn test_count(&self) -> usize {
        self.test_count
    }
}

impl fmt::Display for BridgeAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}

/// Any node the runner can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Test {
    Case(TestCase),
    Suite(TestSuite),
    Adapter(BridgeAdapter),
    /// A node kind the inventory does not know how to assemble.
    Other(String),
}

impl Test {
    /// Number of runnable tests below this node.
    pub fn test_count(&self) -> usize {
        match self {
            Test::Case(_) | Test::Other(_) => 1,
            Test::Suite(suite) => suite.test_count(),
            Test::Adapter(adapter) => adapter.test_count(),
        }
    }
}

impl From<TestCase> for Test {
    fn from(case: TestCase) -> Self {
        Test::Case(case)
    }
}

impl From<TestSuite> for Test {
    fn from(suite: TestSuite) -> Self {
        Test::Suite(suite)
    }
}

impl From<BridgeAdapter> for Test {
    fn from(adapter: BridgeAdapter) -> Self {
        Test::Adapter(adapter)
    }
}

/// An ordered, optionally named group of tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuite {
    name: Option<String>,
    tests: Vec<Test>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            tests: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn add_test(&mut self, test: impl Into<Test>) {
        self.tests.push(test.into());
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn into_tests(self) -> Vec<Test> {
        self.tests
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Number of runnable tests in the whole tree.
    pub fn test_count(&self) -> usize {
        self.tests.iter().map(Test::test_count).sum()
    }

    /// Every case in the tree, depth first.
    pub fn cases(&self) -> Vec<&TestCase> {
        let mut out = Vec::new();
        collect_cases(&self.tests, &mut out);
        out
    }

    /// Find a direct child suite by name.
    pub fn child_suite(&self, name: &str) -> Option<&TestSuite> {
        self.tests.iter().find_map(|t| match t {
            Test::Suite(s) if s.name() == Some(name) => Some(s),
            _ => None,
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        writeln!(
            f,
            "{indent}{} [{}]",
            self.name().unwrap_or("<unnamed>"),
            self.test_count()
        )?;
        for test in &self.tests {
            match test {
                Test::Suite(suite) => suite.render(f, depth + 1)?,
                Test::Case(case) => writeln!(f, "{indent}  {case}")?,
                Test::Adapter(adapter) => {
                    writeln!(f, "{indent}  {adapter} (adapter, {})", adapter.test_count())?
                }
                Test::Other(name) => writeln!(f, "{indent}  {name} (other)")?,
            }
        }
        Ok(())
    }
}

fn collect_cases<'a>(tests: &'a [Test], out: &mut Vec<&'a TestCase>) {
    for test in tests {
        match test {
            Test::Case(case) => out.push(case),
            Test::Suite(suite) => collect_cases(suite.tests(), out),
            Test::Adapter(_) | Test::Other(_) => {}
        }
    }
}

impl fmt::Display for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_includes_nested_and_adapters() {
        let mut inner = TestSuite::named("inner");
        inner.add_test(TestCase::new("a.BTest", "testOne"));
        inner.add_test(TestCase::new("a.BTest", "testTwo"));

        let mut outer = TestSuite::new();
        outer.add_test(inner);
        outer.add_test(BridgeAdapter::new("a.LegacyTest", 4));
        outer.add_test(TestCase::new("a.CTest", "testThree"));

        assert_eq!(outer.test_count(), 7);
        assert_eq!(outer.cases().len(), 3);
        assert!(outer.child_suite("inner").is_some());
    }

    #[test]
    fn test_case_display() {
        let case = TestCase::new("com.example.FooTest", "testBar");
        assert_eq!(case.to_string(), "testBar(com.example.FooTest)");
        assert_eq!(case.qualified_name(), "com.example.FooTest#testBar");
    }

    #[test]
    fn test_empty_suite() {
        let suite = TestSuite::named("empty");
        assert!(suite.is_empty());
        assert_eq!(suite.test_count(), 0);
        assert_eq!(suite.to_string(), "empty [0]\n");
    }
}
