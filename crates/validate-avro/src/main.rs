//! validate-avro - check an Avro schema, and optionally a JSON datum against it

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use avro_schema::{Datum, ParseOptions, DEFAULT_MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(name = "validate-avro")]
#[command(about = "Parse an Avro schema and validate JSON data against it")]
struct Args {
    /// Schema file (JSON)
    #[arg(short, long)]
    schema: PathBuf,

    /// Datum file (JSON). Without it the parsed schema is printed.
    #[arg(short, long)]
    datum: Option<PathBuf>,

    /// Maximum schema nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Only report through the exit status
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "validate_avro=info,avro_schema=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let source = std::fs::read_to_string(&args.schema)
        .with_context(|| format!("Failed to read schema file {}", args.schema.display()))?;
    let options = ParseOptions::default().with_max_depth(args.max_depth);

    let parsed = match avro_schema::parse_with_options(&source, &options) {
        Ok(parsed) => parsed,
        Err(err) => {
            if !args.quiet {
                eprintln!("Invalid schema {}: {}", args.schema.display(), err);
            }
            std::process::exit(1);
        }
    };
    info!(
        schema = %args.schema.display(),
        named_types = parsed.schemata().len(),
        "Parsed schema"
    );

    let Some(datum_path) = args.datum else {
        if !args.quiet {
            println!("{}", serde_json::to_string_pretty(&parsed.to_json())?);
        }
        return Ok(());
    };

    let text = std::fs::read_to_string(&datum_path)
        .with_context(|| format!("Failed to read datum file {}", datum_path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Datum file {} is not valid JSON", datum_path.display()))?;
    let datum = Datum::from(&value);

    match parsed.validate(&datum) {
        Ok(()) => {
            if !args.quiet {
                println!("valid");
            }
            Ok(())
        }
        Err(error) => {
            if !args.quiet {
                eprintln!("{} [{}]", error, error.error_code());
                if !error.schema_path.is_empty() {
                    eprintln!("  schema path: {}", error.schema_path);
                }
            }
            std::process::exit(1);
        }
    }
}
