//! Command-line interface for mdto-xsd

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use mdto_xsd::validators::builtins::{builtin_types, get_builtin_type, TypeCategory};
#[cfg(feature = "cli")]
use mdto_xsd::{Limits, MdtoObject, Validate, VERSION, XSD_NAMESPACE};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "mdto-xsd")]
#[command(author, version, about = "XML Schema literal and MDTO record validation tool", long_about = None)]
struct Cli {
    /// Apply strict input limits
    #[arg(long, global = true, conflicts_with = "permissive")]
    strict: bool,

    /// Apply permissive input limits
    #[arg(long, global = true)]
    permissive: bool,

    /// Log rejected fields (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check literals against a built-in datatype
    Check {
        /// Datatype name, e.g. dateTime or xsd:duration
        #[arg(short = 't', long = "type", value_name = "DATATYPE")]
        type_name: String,

        /// Literals to check
        #[arg(value_name = "LITERAL", required = true)]
        literals: Vec<String>,
    },

    /// Validate an MDTO record stored as JSON
    Record {
        /// Path to the JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the errors as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List the supported datatypes
    Types,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let limits = if cli.strict {
        Limits::strict()
    } else if cli.permissive {
        Limits::permissive()
    } else {
        Limits::default()
    };

    let result = match cli.command {
        Commands::Check {
            type_name,
            literals,
        } => cmd_check(&limits, &type_name, &literals),
        Commands::Record { file, json } => cmd_record(&limits, file, json),
        Commands::Types => cmd_types(),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether every literal is valid
#[cfg(feature = "cli")]
fn cmd_check(
    limits: &Limits,
    type_name: &str,
    literals: &[String],
) -> Result<bool, Box<dyn std::error::Error>> {
    let builtin = get_builtin_type(type_name)
        .ok_or_else(|| format!("Unknown datatype: {}. Run `mdto-xsd types` for a list", type_name))?;

    let mut all_valid = true;
    for literal in literals {
        limits.check_literal_length(literal)?;
        let valid = builtin.is_valid(literal);
        println!("{}\t{}", if valid { "valid" } else { "invalid" }, literal);
        all_valid &= valid;
    }

    Ok(all_valid)
}

/// Returns whether the record is valid
#[cfg(feature = "cli")]
fn cmd_record(
    limits: &Limits,
    file: PathBuf,
    json_output: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&file)?;
    limits.check_record_size(content.len())?;

    let record = MdtoObject::from_json(&content)?;

    match record.validate() {
        Ok(()) => {
            if json_output {
                println!("[]");
            } else {
                println!("✓ {} is valid", file.display());
            }
            Ok(true)
        }
        Err(errors) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&errors)?);
            } else {
                println!("✗ {} is invalid", file.display());
                println!();
                println!("Errors:");
                for error in &errors {
                    println!("  - {}", error);
                }
            }
            Ok(false)
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_types() -> Result<bool, Box<dyn std::error::Error>> {
    println!("mdto-xsd {}", VERSION);
    println!("Namespace: {}", XSD_NAMESPACE);
    println!();
    for builtin in builtin_types() {
        let category = match builtin.category {
            TypeCategory::Primitive => "primitive",
            TypeCategory::Derived => "derived",
        };
        let kind = if builtin.is_temporal() { "temporal" } else { "" };
        println!("{:<16} {:<10} {}", builtin.prefixed_name(), category, kind);
    }
    Ok(true)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
