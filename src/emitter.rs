// 📜 Artifact Emitter - CommentMapping → comments.js
//
// Layout: fixed header, one `"code": "base64"` line per entry, fixed footer.
// Front-end code reads `window.COMMENTS_BY_CODE` and relies on the runtime
// fallback in `decodeBase64`, so header and footer must stay byte-identical.

use crate::config::KeyQuoting;
use crate::deduplication::CommentMapping;
use crate::error::GeneratorError;
use log::info;
use std::path::Path;

// ============================================================================
// FIXED BLOCKS
// ============================================================================

/// Name the decoded mapping is published under
pub const GLOBAL_NAME: &str = "COMMENTS_BY_CODE";

pub const JS_HEADER: &str = r#"// comments.js
// Generated from CSV. Mapping: code -> base64-encoded feedback.
// This is obfuscation, not real security.

function decodeBase64(str) {
  try {
    return atob(str);
  } catch (e) {
    console.error("Failed to decode base64 string", e);
    return "";
  }
}

// Encoded feedback: { code: base64(comment) }
const COMMENTS_BY_CODE_ENC = {
"#;

pub const JS_FOOTER: &str = r#"};

window.COMMENTS_BY_CODE = {};

for (const [code, enc] of Object.entries(COMMENTS_BY_CODE_ENC)) {
  window.COMMENTS_BY_CODE[code] = decodeBase64(enc);
}
"#;

// ============================================================================
// EMITTER
// ============================================================================

pub struct ArtifactEmitter {
    pub key_quoting: KeyQuoting,
}

impl ArtifactEmitter {
    pub fn new(key_quoting: KeyQuoting) -> Self {
        ArtifactEmitter { key_quoting }
    }

    /// Quote a code as a JS string literal
    pub fn quote_code(&self, code: &str) -> String {
        match self.key_quoting {
            KeyQuoting::Raw => format!("\"{}\"", code),
            // A JSON string literal is also a valid JS string literal
            KeyQuoting::Escaped => serde_json::Value::from(code).to_string(),
        }
    }

    /// Render the body lines: comma between entries, none after the last
    pub fn render_body(&self, mapping: &CommentMapping) -> String {
        let mut body = String::new();
        let last = mapping.len().saturating_sub(1);

        for (i, entry) in mapping.iter().enumerate() {
            let comma = if i < last { "," } else { "" };
            body.push_str(&format!(
                "  {}: \"{}\"{}\n",
                self.quote_code(&entry.code),
                entry.encoded_comment,
                comma
            ));
        }

        body
    }

    /// Full artifact text
    pub fn render(&self, mapping: &CommentMapping) -> String {
        let body = self.render_body(mapping);

        let mut artifact = String::with_capacity(JS_HEADER.len() + body.len() + JS_FOOTER.len());
        artifact.push_str(JS_HEADER);
        artifact.push_str(&body);
        artifact.push_str(JS_FOOTER);
        artifact
    }

    /// Render and write the artifact, replacing any existing file
    pub fn write(&self, mapping: &CommentMapping, path: &Path) -> Result<usize, GeneratorError> {
        let artifact = self.render(mapping);
        std::fs::write(path, artifact.as_bytes()).map_err(|e| GeneratorError::io(path, e))?;

        info!("Wrote {} entries ({} bytes) to {}", mapping.len(), artifact.len(), path.display());
        Ok(mapping.len())
    }
}

impl Default for ArtifactEmitter {
    fn default() -> Self {
        Self::new(KeyQuoting::Escaped)
    }
}
