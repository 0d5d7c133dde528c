// ⚙️ Configuration - Knobs for one generator run
// Defaults reproduce the legacy export format exactly.

use encoding_rs::{Encoding, WINDOWS_1252};

/// Default artifact file name, placed next to the input
pub const DEFAULT_OUTPUT_NAME: &str = "comments.js";

/// How codes are embedded as quoted string literals in the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyQuoting {
    /// JSON string literal: quotes, backslashes and control characters escaped
    Escaped,
    /// Interpolated verbatim between double quotes (legacy output)
    Raw,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Encoding of the input CSV (default: windows-1252)
    pub input_encoding: &'static Encoding,

    /// File name used when no output path is given (default: comments.js)
    pub default_output_name: String,

    /// Key embedding policy (default: Escaped)
    pub key_quoting: KeyQuoting,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        GeneratorConfig {
            input_encoding: WINDOWS_1252,
            default_output_name: DEFAULT_OUTPUT_NAME.to_string(),
            key_quoting: KeyQuoting::Escaped,
        }
    }

    /// Builder pattern: switch key quoting
    pub fn with_key_quoting(mut self, key_quoting: KeyQuoting) -> Self {
        self.key_quoting = key_quoting;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
