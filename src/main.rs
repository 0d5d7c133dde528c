use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

// Use library instead of local modules
use comments_js::{run, GeneratorConfig, KeyQuoting};

/// Generate comments.js from a CSV of (code, comment) rows
#[derive(Debug, Parser)]
#[command(name = "comments-js", version, about)]
struct Cli {
    /// CSV with `code` and `comment` columns (windows-1252)
    input: Option<PathBuf>,

    /// Artifact path (default: comments.js next to the input)
    output: Option<PathBuf>,

    /// Interpolate codes without escaping, exactly like the legacy generator
    #[arg(long)]
    raw_keys: bool,

    /// Print the run report as JSON instead of the summary line
    #[arg(long)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(input) = cli.input.as_deref() else {
        println!("Usage: comments-js input.csv [output.js]");
        std::process::exit(1);
    };

    let key_quoting = if cli.raw_keys {
        KeyQuoting::Raw
    } else {
        KeyQuoting::Escaped
    };
    let config = GeneratorConfig::new().with_key_quoting(key_quoting);

    let report = run(input, cli.output.as_deref(), &config)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
