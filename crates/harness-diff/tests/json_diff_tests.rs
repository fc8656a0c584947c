//! JsonDiff against gold files on disk

use harness_diff::{Error, GoldConfig, GoldDiff, GoldFile, JsonDiff, Side};
use harness_test_utils::gold::GoldDir;
use rstest::rstest;

fn differ(dir: &GoldDir, name: &str) -> JsonDiff {
    JsonDiff::new(GoldFile::new(dir.root(), name))
}

#[test]
fn test_key_order_is_irrelevant() {
    let dir = GoldDir::new();
    dir.write("order.json", r#"{"a":1,"b":[2,3]}"#);

    differ(&dir, "order.json")
        .assert_diff(r#"{"b":[2,3],"a":1}"#, None)
        .unwrap();
}

#[test]
fn test_reference_numbering_is_irrelevant() {
    let dir = GoldDir::new();
    dir.write(
        "refs.json",
        r#"[{"serId":1,"value":{"x":7}},{"serRefId":1},{"serId":2,"value":{"y":8}},{"serRefId":2}]"#,
    );

    // Same graph, visited in the opposite order when numbering
    let actual = r#"[{"serId":2,"value":{"x":7}},{"serRefId":2},{"serId":1,"value":{"y":8}},{"serRefId":1}]"#;
    differ(&dir, "refs.json").assert_diff(actual, None).unwrap();

    // And the fully expanded form
    differ(&dir, "refs.json")
        .assert_diff(r#"[{"x":7},{"x":7},{"y":8},{"y":8}]"#, None)
        .unwrap();
}

#[test]
fn test_shared_object_swapped_ids() {
    let dir = GoldDir::new();
    dir.write(
        "shared.json",
        r#"{"first":{"serId":1,"value":{"x":7}},"second":{"serId":2,"value":{"x":7}},"items":[{"serRefId":1},{"serRefId":2}]}"#,
    );
    let actual = r#"{"first":{"serId":2,"value":{"x":7}},"second":{"serId":1,"value":{"x":7}},"items":[{"serRefId":2},{"serRefId":1}]}"#;

    differ(&dir, "shared.json").assert_diff(actual, None).unwrap();
}

#[test]
fn test_mismatch_defaults_to_gold_url_message() {
    let dir = GoldDir::new();
    dir.write("value.json", r#"{"a":1}"#);
    let differ = differ(&dir, "value.json");

    let err = differ.assert_diff(r#"{"a":2}"#, None).unwrap_err();

    let message = err.mismatch_message().expect("mismatch");
    assert!(message.starts_with("Diff from "));
    assert_eq!(message, format!("Diff from {}", differ.url()));
    assert!(err.to_string().contains("~ a: 1 -> 2"));
}

#[test]
fn test_mismatch_uses_caller_message() {
    let dir = GoldDir::new();
    dir.write("value.json", r#"{"a":1}"#);

    let err = differ(&dir, "value.json")
        .assert_diff(r#"{"a":1,"b":true}"#, Some("component model changed"))
        .unwrap_err();

    assert_eq!(err.mismatch_message(), Some("component model changed"));
    assert!(err.to_string().contains("+ b: true"));
}

#[test]
fn test_numbers_compare_by_representation() {
    let dir = GoldDir::new();
    dir.write("num.json", r#"{"n":1}"#);

    let err = differ(&dir, "num.json").assert_diff(r#"{"n":1.0}"#, None).unwrap_err();
    assert!(matches!(err, Error::Mismatch { .. }));
}

#[test]
fn test_missing_gold() {
    let dir = GoldDir::new();
    let differ = differ(&dir, "absent.json");

    let err = differ.assert_diff("{}", None).unwrap_err();
    match err {
        Error::GoldMissing { url } => assert_eq!(url, differ.url()),
        other => panic!("Expected GoldMissing, got {other:?}"),
    }
}

#[rstest]
#[case("{not json", r#"{"a":1}"#, Side::Gold)]
#[case(r#"{"a":1}"#, "[1, 2", Side::Actual)]
#[case("{not json", "[1, 2", Side::Gold)]
fn test_parse_errors_name_their_side(
    #[case] gold: &str,
    #[case] actual: &str,
    #[case] expected: Side,
) {
    let dir = GoldDir::new();
    dir.write("broken.json", gold);

    let err = differ(&dir, "broken.json").assert_diff(actual, None).unwrap_err();
    match err {
        Error::Parse { side, source } => {
            assert_eq!(side, expected);
            assert!(source.is_syntax() || source.is_eof());
        }
        other => panic!("Expected Parse, got {other:?}"),
    }
}

#[test]
fn test_update_mode_records_missing_gold() {
    let dir = GoldDir::new();
    let differ = differ(&dir, "new.json").with_config(GoldConfig::updating());

    differ.assert_diff(r#"{"created":true}"#, None).unwrap();
    dir.assert_gold_eq("new.json", r#"{"created":true}"#);
}

#[test]
fn test_update_mode_rewrites_mismatching_gold() {
    let dir = GoldDir::new();
    dir.write("stale.json", r#"{"v":1}"#);
    let differ = differ(&dir, "stale.json").with_config(GoldConfig::updating());

    differ.assert_diff(r#"{"v":2}"#, None).unwrap();
    dir.assert_gold_eq("stale.json", r#"{"v":2}"#);
}

#[test]
fn test_update_mode_keeps_matching_gold_untouched() {
    let dir = GoldDir::new();
    dir.write("same.json", r#"{ "v" : 1 }"#);
    let differ = differ(&dir, "same.json").with_config(GoldConfig::updating());

    differ.assert_diff(r#"{"v":1}"#, None).unwrap();
    dir.assert_gold_eq("same.json", r#"{ "v" : 1 }"#);
}

#[test]
fn test_update_mode_refuses_unparseable_output() {
    let dir = GoldDir::new();
    let differ = differ(&dir, "bad.json").with_config(GoldConfig::updating());

    let err = differ.assert_diff("not json", None).unwrap_err();
    assert!(matches!(err, Error::Parse { side: Side::Actual, .. }));
    dir.assert_gold_missing("bad.json");
}

#[test]
fn test_differs_share_the_gold_diff_surface() {
    let dir = GoldDir::new();
    dir.write("doc.json", "[1, 2]");
    let differs: Vec<Box<dyn GoldDiff>> = vec![
        Box::new(differ(&dir, "doc.json")),
        Box::new(harness_diff::TextDiff::new(GoldFile::new(dir.root(), "doc.json"))),
    ];

    for differ in &differs {
        differ.assert_diff("[1, 2]", None).unwrap();
    }
    assert!(differs[0].assert_diff("[1,2]", None).is_ok());
    assert!(differs[1].assert_diff("[1,2]", None).is_err());
}
