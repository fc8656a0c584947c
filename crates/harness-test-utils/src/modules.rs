//! Fixture test modules as registration tables.
//!
//! [`ui_module`] describes a small web-UI module that exercises every
//! discovery path: priority between annotations, unloadable classes,
//! classes that are not tests, and both suite capabilities.

use std::sync::Arc;

use harness_inventory::{
    Annotation, BridgeAdapter, ClassRegistry, ClassSpec, LoadError, SuiteError, Test, TestCase,
    TestClassRef, TestSuite,
};

/// Root URI of [`ui_module`].
pub const UI_ROOT: &str = "file:///workspace/ui/target/test-classes/";

/// Fully-qualified class names registered by [`ui_module`].
pub mod names {
    pub const BUTTON: &str = "com.example.ui.ButtonTest";
    pub const DUAL: &str = "com.example.ui.DualAnnotatedTest";
    pub const BROKEN: &str = "com.example.ui.BrokenTest";
    pub const MERGED: &str = "com.example.ui.MergedTest";
    pub const PAGE_LOAD: &str = "com.example.ui.PageLoadTest";
    pub const ABSTRACT_BASE: &str = "com.example.ui.AbstractBaseTest";
    pub const HELPER: &str = "com.example.ui.Helper";
    pub const UNANNOTATED: &str = "com.example.ui.UnannotatedTest";
    pub const HIDDEN: &str = "com.example.ui.HiddenTest";
    pub const NOT_A_NODE: &str = "com.example.ui.NotANodeTest";
    pub const DRIVER: &str = "com.example.ui.DriverTest";
    pub const FAILING_FACTORY: &str = "com.example.ui.FailingFactoryTest";
    pub const GROUPED: &str = "com.example.ui.GroupedTest";
}

/// A fixture module together with a class that anchors it.
pub struct FixtureModule {
    pub registry: Arc<ClassRegistry>,
    pub anchor: TestClassRef,
}

/// Build the web-UI fixture module.
///
/// | Class | Declares | Contributes |
/// |-------|----------|-------------|
/// | `ButtonTest` | JsTest | 2 methods |
/// | `DualAnnotatedTest` | JsTest + IntegrationTest | 1 method |
/// | `BrokenTest` | nothing | fails to link |
/// | `MergedTest` | IntegrationTest | `suite()` with 1 case + 2 methods |
/// | `PageLoadTest` | PerfFrameworkTest | 1 method |
/// | `AbstractBaseTest` | JsTest, abstract | nothing |
/// | `Helper` | JsTest, wrong suffix | nothing |
/// | `UnannotatedTest` | nothing | nothing |
/// | `HiddenTest` | JsTest, not public | nothing |
/// | `NotANodeTest` | JsTest, not a test node | nothing |
/// | `DriverTest` | WebDriverTest | `suite()` with a bridge adapter of 4 |
/// | `FailingFactoryTest` | WebDriverTest | failing `suite()` + 1 method |
/// | `GroupedTest` | PerfCmpTest | `suite()` with nested groups, one empty |
pub fn ui_module() -> FixtureModule {
    use names::*;

    let mut registry = ClassRegistry::new();

    let button = ClassSpec::new(BUTTON)
        .annotated(Annotation::JsTest)
        .with_test_methods(["testClick", "testRender"])
        .into_ref();
    registry.register(UI_ROOT, button.clone());

    registry.register(
        UI_ROOT,
        ClassSpec::new(DUAL)
            .annotated(Annotation::IntegrationTest)
            .annotated(Annotation::JsTest)
            .with_test_methods(["testBoth"])
            .into_ref(),
    );

    registry.register_unloadable(
        UI_ROOT,
        BROKEN,
        LoadError::Link {
            name: BROKEN.into(),
            reason: "com/example/ui/MissingWidget".into(),
        },
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(MERGED)
            .annotated(Annotation::IntegrationTest)
            .with_suite(|| Ok(Test::Case(TestCase::new(MERGED, "testFromFactory"))))
            .with_test_methods(["testFirst", "testSecond"])
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(PAGE_LOAD)
            .annotated(Annotation::PerfFrameworkTest)
            .with_test_methods(["testColdLoad"])
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(ABSTRACT_BASE)
            .annotated(Annotation::JsTest)
            .abstract_class()
            .with_test_methods(["testInherited"])
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(HELPER)
            .annotated(Annotation::JsTest)
            .with_test_methods(["testHelp"])
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(UNANNOTATED)
            .with_test_methods(["testNothing"])
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(HIDDEN)
            .annotated(Annotation::JsTest)
            .non_public()
            .with_test_methods(["testHidden"])
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(NOT_A_NODE)
            .annotated(Annotation::JsTest)
            .not_a_test()
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(DRIVER)
            .annotated(Annotation::WebDriverTest)
            .with_suite(|| Ok(Test::Adapter(BridgeAdapter::new(DRIVER, 4))))
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(FAILING_FACTORY)
            .annotated(Annotation::WebDriverTest)
            .with_suite(|| {
                Err(SuiteError::Failed {
                    class: FAILING_FACTORY.into(),
                    message: "browser unavailable".into(),
                })
            })
            .with_test_methods(["testStillRuns"])
            .into_ref(),
    );

    registry.register(
        UI_ROOT,
        ClassSpec::new(GROUPED)
            .annotated(Annotation::PerfCmpTest)
            .with_suite(grouped_suite)
            .into_ref(),
    );

    FixtureModule {
        registry: Arc::new(registry),
        anchor: button,
    }
}

fn grouped_suite() -> Result<Test, SuiteError> {
    let mut fast = TestSuite::named("fast");
    fast.add_test(TestCase::new(names::GROUPED, "testCompareSmall"));

    let mut slow = TestSuite::named("slow");
    slow.add_test(TestSuite::named("empty"));

    let mut root = TestSuite::named(names::GROUPED);
    root.add_test(fast);
    root.add_test(slow);
    Ok(Test::Suite(root))
}

/// A module of `count` JsTest classes named `com.example.gen.Class{i}Test`,
/// each with one test method, registered under `root`.
pub fn generated_module(root: &str, count: usize) -> FixtureModule {
    let mut registry = ClassRegistry::new();
    let mut anchor = None;
    for i in 0..count {
        let name = format!("com.example.gen.Class{i}Test");
        let class = ClassSpec::new(name)
            .annotated(Annotation::JsTest)
            .with_test_methods(["testGenerated"])
            .into_ref();
        if anchor.is_none() {
            anchor = Some(class.clone());
        }
        registry.register(root, class);
    }
    let anchor = anchor.unwrap_or_else(|| {
        let class = ClassSpec::new("com.example.gen.AnchorTest").into_ref();
        registry.register(root, class.clone());
        class
    });
    FixtureModule {
        registry: Arc::new(registry),
        anchor,
    }
}
