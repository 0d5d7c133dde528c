// ⚠️ Errors - Generator-side failure taxonomy
// Every variant is fatal: the run aborts and nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Header row lacks `code` or `comment`
    #[error("CSV must contain headers 'code' and 'comment'. Found: {found:?}")]
    Schema { found: Vec<String> },

    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited data
    #[error("Failed to parse CSV line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Byte with no mapping in the input encoding
    #[error("Can't decode byte 0x{byte:02x} in position {offset} as {encoding}")]
    Undecodable {
        encoding: &'static str,
        byte: u8,
        offset: usize,
    },
}

impl GeneratorError {
    /// Wrap an I/O error, promoting `NotFound` to its own variant
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            GeneratorError::NotFound { path }
        } else {
            GeneratorError::Io { path, source }
        }
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, GeneratorError::Schema { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_lists_found_columns() {
        let err = GeneratorError::Schema {
            found: vec!["code".to_string(), "note".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "CSV must contain headers 'code' and 'comment'. Found: [\"code\", \"note\"]"
        );
        assert!(err.is_schema());
    }

    #[test]
    fn test_io_not_found_is_promoted() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = GeneratorError::io("missing.csv", source);

        assert!(matches!(err, GeneratorError::NotFound { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_undecodable_names_byte_and_offset() {
        let err = GeneratorError::Undecodable {
            encoding: "windows-1252",
            byte: 0x81,
            offset: 17,
        };

        assert_eq!(
            err.to_string(),
            "Can't decode byte 0x81 in position 17 as windows-1252"
        );
    }

    #[test]
    fn test_io_other_kind_stays_io() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = GeneratorError::io("locked.csv", source);

        assert!(matches!(err, GeneratorError::Io { .. }));
        assert!(!err.is_schema());
    }
}
