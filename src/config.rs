use clap::ValueEnum;

/// Which binding kind an output definition is written with.
///
/// Tool revisions disagree here: older definitions used `record_lookup` for
/// both directions, newer ones write outputs back with `record_update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputBinding {
    RecordUpdate,
    RecordLookup,
}

/// Where the `optional` marker is looked for in a raw declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionalScan {
    /// Anywhere in the raw string, string literals included.
    WholeString,
    /// Only as a bare word outside bracket groups and string literals.
    Annotation,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output_binding: OutputBinding,
    pub optional_scan: OptionalScan,
    /// Attach `default = ...` values to the emitted definitions.
    pub include_defaults: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_binding: OutputBinding::RecordUpdate,
            optional_scan: OptionalScan::WholeString,
            include_defaults: false,
        }
    }
}

/// Shape of the emitted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A JSON list of definitions, in source order
    #[default]
    List,
    /// A JSON object keyed by parameter name, as older tool revisions wrote
    Map,
}
