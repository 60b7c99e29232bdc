//! Reading womtool documents and rendering definition documents

use crate::config::OutputFormat;
use crate::definition::{definitions_by_name, ParameterDefinition};
use crate::error::Result;
use indexmap::IndexMap;

/// Parse womtool `inputs`/`outputs` JSON: an object mapping each qualified
/// parameter name to its type declaration, in document order.
pub fn read_declarations(json: &str) -> Result<IndexMap<String, String>> {
    Ok(serde_json::from_str(json)?)
}

/// Pretty-printed JSON with two-space indentation
pub fn render_definitions(definitions: Vec<ParameterDefinition>, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::List => serde_json::to_string_pretty(&definitions)?,
        OutputFormat::Map => serde_json::to_string_pretty(&definitions_by_name(definitions))?,
    };
    Ok(rendered)
}
