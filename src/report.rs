// 📊 Generation Report - What one run read, skipped and wrote

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub input: PathBuf,
    pub output: PathBuf,

    /// Unique codes written to the artifact
    pub entries: usize,

    /// Data rows parsed (header excluded)
    pub rows_read: usize,

    /// Rows dropped for a blank code
    pub rows_skipped: usize,

    /// Rows whose code was already present
    pub duplicates_overwritten: usize,
}

impl GenerationReport {
    /// One-line confirmation printed on success
    pub fn summary(&self) -> String {
        format!(
            "Generated {} from {} ({} entries).",
            self.output.display(),
            self.input.display(),
            self.entries
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
