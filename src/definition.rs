//! Parameter definitions and the batch driver that builds them

use crate::binding::{build_binding, BindingSpec, Mode};
use crate::config::Config;
use crate::error::Result;
use crate::parser::{extract_default_value, parse_type_declaration};
use crate::types::TypeSpec;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// One emitted input or output definition
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub name: String,
    pub type_spec: TypeSpec,
    pub binding: BindingSpec,
    pub mode: Mode,
    /// Only populated when `Config::include_defaults` is set
    pub default_value: Option<Value>,
}

/// Emits `{input_name, input_type, source}` or
/// `{output_name, output_type, destination}`, in that order.
impl Serialize for ParameterDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let prefix = self.mode.prefix();
        let len = if self.default_value.is_some() { 4 } else { 3 };

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(&format!("{}_name", prefix), &self.name)?;
        map.serialize_entry(&format!("{}_type", prefix), &self.type_spec)?;
        map.serialize_entry(self.mode.binding_key(), &self.binding)?;
        if let Some(default_value) = &self.default_value {
            map.serialize_entry("default_value", default_value)?;
        }
        map.end()
    }
}

pub fn build_definition(
    name: &str,
    declaration: &str,
    mode: Mode,
    config: &Config,
) -> Result<ParameterDefinition> {
    let type_spec = parse_type_declaration(declaration, config)
        .map_err(|err| err.with_note(format!("while converting parameter '{}'", name)))?;

    let default_value = if config.include_defaults {
        extract_default_value(declaration)
    } else {
        None
    };

    tracing::debug!(name, mode = mode.prefix(), type_spec = %type_spec, "converted parameter");

    Ok(ParameterDefinition {
        name: name.to_string(),
        binding: build_binding(name, mode, config.output_binding),
        type_spec,
        mode,
        default_value,
    })
}

/// Build definitions for every `(name, declaration)` pair in order.
/// The first failure aborts the whole batch.
pub fn build_definitions<I, K, V>(entries: I, mode: Mode, config: &Config) -> Result<Vec<ParameterDefinition>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(name, declaration)| build_definition(name.as_ref(), declaration.as_ref(), mode, config))
        .collect()
}

/// Key definitions by parameter name, keeping their order
pub fn definitions_by_name(definitions: Vec<ParameterDefinition>) -> IndexMap<String, ParameterDefinition> {
    definitions
        .into_iter()
        .map(|definition| (definition.name.clone(), definition))
        .collect()
}
