//! Purpose: Lock the conversion contract: wrapper text, indentation, key order, round trips.
//! Exports: Integration tests only.
//! Role: Exercise the public library API end to end against scratch directories.
//! Invariants: Malformed input leaves the target untouched.

use std::fs;

use curriculum_export::module::extract_json;
use curriculum_export::{ErrorKind, ModuleTarget, convert_str};
use serde_json::Value;

fn scratch_target(dir: &tempfile::TempDir) -> ModuleTarget {
    ModuleTarget::curriculum().with_path(dir.path().join("CurriculumData.js"))
}

fn convert_and_read(input: &str) -> String {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = scratch_target(&temp);
    convert_str(input, &target).expect("convert");
    fs::read_to_string(target.path()).expect("read module")
}

#[test]
fn corpus_documents_round_trip() {
    let corpus = [
        r#"{"a":1,"b":"ok"}"#,
        r#"[1,2,3,{"x":true}]"#,
        r#"{"nested":{"arr":[{"k":"v"}]},"empty":{},"none":[]}"#,
        r#"{"unicode":"☃ snow","escaped":"line\nbreak \"quoted\""}"#,
        r#"{"n":-12.5e3,"big":18446744073709551615,"neg":-9223372036854775808}"#,
        r#"{"id":123456789012345678901234567890,"neg0":-0}"#,
        "null",
        "\"just a string\"",
    ];

    for input in corpus {
        let module = convert_and_read(input);
        assert!(module.starts_with("export const CURRICULUM_DATA = "));
        assert!(module.ends_with(";\n"));
        assert!(!module.ends_with(";\n\n"));

        let payload = extract_json(&module, "CURRICULUM_DATA").expect("payload");
        let original: Value = serde_json::from_str(input).expect("original");
        let reparsed: Value = serde_json::from_str(payload).expect("reparsed");
        assert_eq!(reparsed, original, "input: {input}");
    }
}

#[test]
fn numbers_keep_their_source_text() {
    let module = convert_and_read(
        r#"{"id": 123456789012345678901234567890, "neg0": -0, "sci": -12.5e3, "frac": 0.10}"#,
    );
    let payload = extract_json(&module, "CURRICULUM_DATA").expect("payload");
    assert_eq!(
        payload,
        "{\n  \"id\": 123456789012345678901234567890,\n  \"neg0\": -0,\n  \"sci\": -12.5e3,\n  \"frac\": 0.10\n}"
    );
}

#[test]
fn nested_document_uses_two_space_indent_and_source_key_order() {
    let module = convert_and_read(r#"{"z": [1, 2, {"b": true}], "a": null}"#);
    let expected = "\
export const CURRICULUM_DATA = {
  \"z\": [
    1,
    2,
    {
      \"b\": true
    }
  ],
  \"a\": null
};
";
    assert_eq!(module, expected);
}

#[test]
fn non_ascii_text_is_written_as_utf8() {
    let module = convert_and_read(r#"{"title": "Álgebra ☃"}"#);
    assert!(module.contains("\"Álgebra ☃\""));
}

#[test]
fn malformed_input_does_not_create_target() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = scratch_target(&temp);

    let err = convert_str(r#"{"a": }"#, &target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(err.line(), Some(1));
    assert_eq!(err.column(), Some(7));
    assert!(!target.path().exists());
}

#[test]
fn malformed_input_leaves_existing_target_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = scratch_target(&temp);
    convert_str(r#"{"keep": true}"#, &target).expect("first convert");
    let before = fs::read_to_string(target.path()).expect("read");

    let err = convert_str("PASTE_THE_FULL_JSON_HERE", &target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(fs::read_to_string(target.path()).expect("read"), before);
}

#[test]
fn second_run_fully_overwrites_first() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = scratch_target(&temp);

    let long = format!(r#"{{"items": [{}]}}"#, vec!["1"; 500].join(","));
    convert_str(&long, &target).expect("long convert");
    let report = convert_str(r#"{"items": []}"#, &target).expect("short convert");

    let module = fs::read_to_string(target.path()).expect("read");
    assert_eq!(module, "export const CURRICULUM_DATA = {\n  \"items\": []\n};\n");
    assert_eq!(report.bytes_written, module.len() as u64);
}

#[test]
fn custom_target_changes_only_the_constant_name() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = ModuleTarget::new("LEETCODE_POOL", temp.path().join("ChallengeData.js"))
        .expect("target");

    convert_str(r#"[{"title": "Two Sum"}]"#, &target).expect("convert");
    let module = fs::read_to_string(target.path()).expect("read");
    assert!(module.starts_with("export const LEETCODE_POOL = [\n  {\n    \"title\": \"Two Sum\"\n  }\n];\n"));
}
