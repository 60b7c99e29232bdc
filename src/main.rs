use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use womtool_cbas::config::{Config, OptionalScan, OutputBinding, OutputFormat};
use womtool_cbas::error::{ConverterError, ErrorFormatter, Result};
use womtool_cbas::{build_definitions, read_declarations, render_definitions, Mode};

/// Convert the JSON printed by `womtool inputs` (or `womtool outputs`) into
/// CBAS input or output definitions.
///
/// Example source document:
///
///   {
///     "workflow_name.call_1.input_string_required": "String",
///     "workflow_name.call_3.input_int_optional": "Int? (optional)"
///   }
#[derive(Parser, Debug)]
#[command(name = "womtool-cbas", version, about, long_about, verbatim_doc_comment)]
struct Cli {
    /// Path to a JSON file generated by womtool
    womtool_file: PathBuf,

    /// Format the results as output definitions
    #[arg(long)]
    output_def: bool,

    /// Write the definitions to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Emit a list of definitions or an object keyed by parameter name
    #[arg(long, value_enum, default_value_t = OutputFormat::List)]
    format: OutputFormat,

    /// Binding kind used for output definitions
    #[arg(long, value_enum, default_value_t = OutputBinding::RecordUpdate)]
    output_binding: OutputBinding,

    /// Where to look for the `optional` marker in a declaration
    #[arg(long, value_enum, default_value_t = OptionalScan::WholeString)]
    optional_scan: OptionalScan,

    /// Attach `default = ...` values to the definitions
    #[arg(long)]
    include_defaults: bool,

    /// Render errors without colour
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            output_binding: self.output_binding,
            optional_scan: self.optional_scan,
            include_defaults: self.include_defaults,
        }
    }

    fn mode(&self) -> Mode {
        if self.output_def {
            Mode::Output
        } else {
            Mode::Input
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        let source = cli.womtool_file.display().to_string();
        eprintln!(
            "{}",
            ErrorFormatter::new(&err)
                .with_filename(&source)
                .with_color(!cli.no_color)
                .format()
        );
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.womtool_file).map_err(|err| {
        ConverterError::from(err).with_note(format!("while reading '{}'", cli.womtool_file.display()))
    })?;

    let declarations = read_declarations(&source)?;
    let mode = cli.mode();
    tracing::info!(count = declarations.len(), mode = mode.prefix(), "converting declarations");

    let definitions = build_definitions(&declarations, mode, &cli.config())?;
    let rendered = render_definitions(definitions, cli.format)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered)).map_err(|err| {
                ConverterError::from(err).with_note(format!("while writing '{}'", path.display()))
            })?;
            tracing::info!(path = %path.display(), "wrote definitions");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
