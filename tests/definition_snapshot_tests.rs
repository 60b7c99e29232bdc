//! Snapshot tests for rendered definition documents and error output

mod common;

use common::snapshot_utils::{assert_definitions_snapshot, assert_error_snapshot};
use common::{convert, SAMPLE_INPUTS};
use womtool_cbas::error::ErrorFormatter;
use womtool_cbas::{Config, Mode, OutputFormat};

#[test]
fn test_sample_input_definitions() {
    let rendered = convert(SAMPLE_INPUTS, Mode::Input, &Config::default(), OutputFormat::List)
        .expect("sample should convert");
    assert_definitions_snapshot("sample_input_definitions", &rendered);
}

#[test]
fn test_output_definitions_keyed_by_name() {
    let document = r#"{
      "wf.call.reads": "Array[File]+",
      "wf.call.count": "Int"
    }"#;
    let rendered = convert(document, Mode::Output, &Config::default(), OutputFormat::Map)
        .expect("outputs should convert");
    assert_definitions_snapshot("output_definitions_keyed_by_name", &rendered);
}

#[test]
fn test_unsupported_map_error() {
    let document = r#"{"wf.ok": "Int", "wf.lookup": "Map[String,Int]"}"#;
    let err = convert(document, Mode::Input, &Config::default(), OutputFormat::List)
        .expect_err("Map should be rejected");

    let rendered = ErrorFormatter::new(&err).with_color(false).format();
    assert_error_snapshot("unsupported_map_error", &rendered);
}

#[test]
fn test_missing_inner_type_error() {
    let document = r#"{"wf.files": "Array[] (optional)"}"#;
    let err = convert(document, Mode::Input, &Config::default(), OutputFormat::List)
        .expect_err("empty brackets should be rejected");

    assert_error_snapshot("missing_inner_type_error", &err.to_string());
}
