//! Category-scoped test discovery and suite assembly

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::annotation::classify;
use crate::class::{TestClass, TestClassRef};
use crate::discovery::DiscoveryContext;
use crate::filter::TestFilter;
use crate::node::{Test, TestSuite};
use crate::{Category, Error, Result};

/// Suffix a class name must carry to be considered a test.
pub const TEST_CLASS_SUFFIX: &str = "Test";

/// Name suffix of the suite wrapped around a bridge adapter.
const ADAPTER_HACK_SUFFIX: &str = "JUnit4TestAdapterHack";

/// Inventory of the tests in one module.
///
/// Suites and class lists are built per category on first request and
/// returned unchanged afterwards. The `IGNORED` suite exists from
/// construction and stays empty.
pub struct TestInventory {
    root_uri: String,
    context: DiscoveryContext,
    suites: HashMap<Category, Arc<TestSuite>>,
    classes: HashMap<Category, Arc<Vec<TestClassRef>>>,
}

impl TestInventory {
    /// Create the inventory of the module `class_in_module` belongs to.
    pub fn new(class_in_module: &dyn TestClass, context: DiscoveryContext) -> Result<Self> {
        let root_uri = context
            .walker
            .root_uri_of(class_in_module)
            .ok_or_else(|| Error::UnknownModule {
                class: class_in_module.name().to_string(),
            })?;

        let mut suites = HashMap::new();
        suites.insert(Category::Ignored, Arc::new(TestSuite::new()));

        Ok(Self {
            root_uri,
            context,
            suites,
            classes: HashMap::new(),
        })
    }

    pub fn root_uri(&self) -> &str {
        &self.root_uri
    }

    /// The suite of every test in `category`.
    pub fn suite_for(&mut self, category: Category) -> Arc<TestSuite> {
        if let Some(suite) = self.suites.get(&category) {
            return Arc::clone(suite);
        }
        let suite = Arc::new(self.load_suite(category));
        self.suites.insert(category, Arc::clone(&suite));
        suite
    }

    /// The admitted classes of `category`, in enumeration order.
    pub fn classes_for(&mut self, category: Category) -> Arc<Vec<TestClassRef>> {
        if let Some(classes) = self.classes.get(&category) {
            return Arc::clone(classes);
        }
        let filter = self.context.locator.test_filter();
        let classes = Arc::new(self.admitted(category, filter.as_ref()));
        self.classes.insert(category, Arc::clone(&classes));
        classes
    }

    /// One suite holding the non-empty suites of `categories`, each named
    /// after its category.
    pub fn suites_for(&mut self, name: &str, categories: &[Category]) -> TestSuite {
        let mut combined = TestSuite::named(name);
        for &category in categories {
            let suite = self.suite_for(category);
            if suite.test_count() == 0 {
                continue;
            }
            let mut child = TestSuite::named(category.as_str());
            for test in suite.tests() {
                child.add_test(test.clone());
            }
            combined.add_test(child);
        }
        combined
    }

    fn load_suite(&self, category: Category) -> TestSuite {
        let filter = self.context.locator.test_filter();
        let mut suite = TestSuite::new();

        info!("Loading {} tests from {}", category, self.root_uri);

        for class in self.admitted(category, filter.as_ref()) {
            match class.suite() {
                Ok(test) => add_test(&mut suite, filter.as_ref(), test),
                Err(e) => debug!(class = class.name(), reason = %e, "No suite() contribution"),
            }
            match class.case_suite() {
                Ok(cases) => add_test(&mut suite, filter.as_ref(), Test::Suite(cases)),
                Err(e) => debug!(class = class.name(), reason = %e, "No test case contribution"),
            }
        }

        suite
    }

    /// Classes under the module root that pass admissibility and the filter
    /// and classify as `category`.
    fn admitted(&self, category: Category, filter: &dyn TestFilter) -> Vec<TestClassRef> {
        self.context
            .walker
            .class_names_under(&self.root_uri)
            .into_iter()
            .filter_map(|name| self.load_candidate(&name))
            .filter_map(|class| filter.apply_to_class(class))
            .filter(|class| classify(class.annotations()) == Some(category))
            .collect()
    }

    /// Load `name` if it can be a test: named `*Test`, loadable, public,
    /// concrete and a test node.
    fn load_candidate(&self, name: &str) -> Option<TestClassRef> {
        if !name.ends_with(TEST_CLASS_SUFFIX) {
            return None;
        }
        let class = match self.context.loader.load(name) {
            Ok(class) => class,
            Err(e) => {
                debug!(class = name, reason = %e, "Skipping class that failed to load");
                return None;
            }
        };
        if !class.is_public() || class.is_abstract() || !class.is_test() {
            return None;
        }
        Some(class)
    }
}

/// Insert `test` into `target`, filtering cases and pruning suites left
/// without tests.
fn add_test(target: &mut TestSuite, filter: &dyn TestFilter, test: Test) {
    match test {
        Test::Case(case) => {
            if filter.apply_to_case(case.clone()).is_some() {
                target.add_test(case);
            }
        }
        Test::Suite(suite) => {
            let mut pruned = match suite.name() {
                Some(name) => TestSuite::named(name),
                None => TestSuite::new(),
            };
            for child in suite.into_tests() {
                add_test(&mut pruned, filter, child);
            }
            if pruned.test_count() > 0 {
                target.add_test(pruned);
            }
        }
        Test::Adapter(adapter) => {
            // The runner only sees the adapter as a single test, so it gets
            // a suite of its own.
            let mut wrapper = TestSuite::named(format!("{adapter}{ADAPTER_HACK_SUFFIX}"));
            wrapper.add_test(adapter);
            target.add_test(wrapper);
        }
        Test::Other(name) => debug!(test = %name, "Ignoring unsupported test node"),
    }
}
