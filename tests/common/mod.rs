#![allow(dead_code)]

pub mod snapshot_utils;

use womtool_cbas::{
    build_definitions, parse_type_declaration, read_declarations, render_definitions, Config,
    ConverterError, Mode, OutputFormat, TypeSpec,
};

/// The sample document womtool prints for a small workflow
pub const SAMPLE_INPUTS: &str = r#"{
  "workflow_name.call_1.input_string_required": "String",
  "workflow_name.call_2.input_string_with_default": "String (optional, default = \"hello world\")",
  "workflow_name.call_3.input_int_optional": "Int? (optional)"
}"#;

/// Parse a single declaration with the default configuration
pub fn parse(declaration: &str) -> Result<TypeSpec, ConverterError> {
    parse_type_declaration(declaration, &Config::default())
}

/// Shared utility running the full pipeline: read → build → render
pub fn convert(
    document: &str,
    mode: Mode,
    config: &Config,
    format: OutputFormat,
) -> Result<String, ConverterError> {
    let declarations = read_declarations(document)?;
    let definitions = build_definitions(&declarations, mode, config)?;
    render_definitions(definitions, format)
}

/// Convert and re-read the output as JSON for structural assertions
pub fn convert_to_value(document: &str, mode: Mode, config: &Config) -> serde_json::Value {
    let rendered = convert(document, mode, config, OutputFormat::List)
        .unwrap_or_else(|err| panic!("conversion should succeed, got: {}", err));
    serde_json::from_str(&rendered).expect("rendered output should be valid JSON")
}
