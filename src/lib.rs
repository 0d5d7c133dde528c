// comments.js Generator - Core Library
// CSV (code, comment) → obfuscated JS lookup table for the front end.
// Exposes every stage for use in the CLI and tests.

pub mod config;
pub mod deduplication;
pub mod emitter;
pub mod encoding;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod schema;

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use config::{GeneratorConfig, KeyQuoting, DEFAULT_OUTPUT_NAME};
pub use deduplication::{deduplicate, CommentMapping, Entry};
pub use emitter::{ArtifactEmitter, GLOBAL_NAME, JS_FOOTER, JS_HEADER};
pub use encoding::{decode, decode_or_empty, encode, DecodeFault};
pub use error::GeneratorError;
pub use normalize::{normalize_row, normalize_rows, NormalizedPair};
pub use parser::{read_rows, CommentRow};
pub use report::GenerationReport;
pub use schema::{ColumnIndex, CODE_COLUMN, COMMENT_COLUMN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default artifact location: `comments.js` beside the input
pub fn default_output_path(input: &Path, config: &GeneratorConfig) -> PathBuf {
    input.with_file_name(&config.default_output_name)
}

/// Read rows, normalize, deduplicate and return the finished mapping
/// along with (rows read, rows skipped)
pub fn build_mapping(input: &Path, config: &GeneratorConfig) -> Result<(CommentMapping, usize, usize)> {
    let rows = read_rows(input, config)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let pairs: Vec<NormalizedPair> = normalize_rows(&rows).collect();
    let skipped = rows.len() - pairs.len();

    Ok((deduplicate(pairs), rows.len(), skipped))
}

/// Full pipeline: input CSV → artifact at `output`
pub fn generate_comments_js(input: &Path, output: &Path, config: &GeneratorConfig) -> Result<GenerationReport> {
    let (mapping, rows_read, rows_skipped) = build_mapping(input, config)?;

    let emitter = ArtifactEmitter::new(config.key_quoting);
    let entries = emitter
        .write(&mapping, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let report = GenerationReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        entries,
        rows_read,
        rows_skipped,
        duplicates_overwritten: mapping.overwritten(),
    };
    info!(
        "{} rows read, {} skipped, {} overwritten",
        report.rows_read, report.rows_skipped, report.duplicates_overwritten
    );

    Ok(report)
}

/// Entry point behind the CLI: resolves the default output path
pub fn run(input: &Path, output: Option<&Path>, config: &GeneratorConfig) -> Result<GenerationReport> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, config),
    };

    generate_comments_js(input, &output, config)
}
