//! Binding specs: where an input is read from, or an output written to

use crate::config::OutputBinding;
use serde::Serialize;

/// Direction of a parameter definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Input,
    Output,
}

impl Mode {
    /// Key prefix used in the emitted definition (`input_name`, `output_type`, ...)
    pub fn prefix(&self) -> &'static str {
        match self {
            Mode::Input => "input",
            Mode::Output => "output",
        }
    }

    /// Key under which the binding is emitted
    pub fn binding_key(&self) -> &'static str {
        match self {
            Mode::Input => "source",
            Mode::Output => "destination",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BindingSpec {
    RecordLookup { record_attribute: String },
    RecordUpdate { record_attribute: String },
}

impl BindingSpec {
    pub fn record_attribute(&self) -> &str {
        match self {
            BindingSpec::RecordLookup { record_attribute }
            | BindingSpec::RecordUpdate { record_attribute } => record_attribute,
        }
    }
}

/// Record attribute for a qualified parameter name: `wf.call.in` -> `wf_call_in`
pub fn record_attribute(name: &str) -> String {
    name.replace('.', "_")
}

pub fn build_binding(name: &str, mode: Mode, output_binding: OutputBinding) -> BindingSpec {
    let record_attribute = record_attribute(name);
    match (mode, output_binding) {
        (Mode::Output, OutputBinding::RecordUpdate) => BindingSpec::RecordUpdate { record_attribute },
        _ => BindingSpec::RecordLookup { record_attribute },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_attribute() {
        assert_eq!(record_attribute("wf.call.in"), "wf_call_in");
        assert_eq!(record_attribute("plain"), "plain");
        assert_eq!(record_attribute(""), "");
        assert_eq!(record_attribute("a..b."), "a__b_");
    }

    #[test]
    fn test_inputs_always_look_up() {
        for policy in [OutputBinding::RecordUpdate, OutputBinding::RecordLookup] {
            assert_eq!(
                build_binding("wf.in", Mode::Input, policy),
                BindingSpec::RecordLookup {
                    record_attribute: "wf_in".into()
                }
            );
        }
    }

    #[test]
    fn test_output_policy() {
        assert_eq!(
            build_binding("wf.out", Mode::Output, OutputBinding::RecordUpdate),
            BindingSpec::RecordUpdate {
                record_attribute: "wf_out".into()
            }
        );
        assert_eq!(
            build_binding("wf.out", Mode::Output, OutputBinding::RecordLookup),
            BindingSpec::RecordLookup {
                record_attribute: "wf_out".into()
            }
        );
    }

    #[test]
    fn test_wire_shape() {
        let binding = build_binding("wf.out", Mode::Output, OutputBinding::RecordUpdate);
        assert_eq!(
            serde_json::to_value(&binding).unwrap(),
            json!({"type": "record_update", "record_attribute": "wf_out"})
        );
    }
}
