// 📐 Shape Layer - Header Validation
// Locates the required columns in the header row before any row is read

use crate::error::GeneratorError;
use csv::StringRecord;

// ============================================================================
// REQUIRED COLUMNS
// ============================================================================

pub const CODE_COLUMN: &str = "code";
pub const COMMENT_COLUMN: &str = "comment";

// ============================================================================
// COLUMN INDEX
// ============================================================================

/// Positions of the required columns within a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub code: usize,
    pub comment: usize,
}

impl ColumnIndex {
    /// Validate a header row
    ///
    /// Names match exactly (case-sensitive, untrimmed). Extra columns are
    /// ignored. When a name appears twice the last occurrence is used, as a
    /// dict-per-row reader would.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, GeneratorError> {
        let position = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };

        match (position(CODE_COLUMN), position(COMMENT_COLUMN)) {
            (Some(code), Some(comment)) => Ok(ColumnIndex { code, comment }),
            _ => Err(GeneratorError::Schema {
                found: headers.iter().map(str::to_string).collect(),
            }),
        }
    }

    /// Raw code cell; missing cells read as ""
    pub fn code<'r>(&self, record: &'r StringRecord) -> &'r str {
        record.get(self.code).unwrap_or("")
    }

    /// Raw comment cell; missing cells read as ""
    pub fn comment<'r>(&self, record: &'r StringRecord) -> &'r str {
        record.get(self.comment).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns_found() {
        let headers = StringRecord::from(vec!["code", "comment"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();

        assert_eq!(index, ColumnIndex { code: 0, comment: 1 });
    }

    #[test]
    fn test_extra_columns_ignored() {
        let headers = StringRecord::from(vec!["author", "comment", "updated", "code"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();

        assert_eq!(index.code, 3);
        assert_eq!(index.comment, 1);
    }

    #[test]
    fn test_missing_comment_lists_found_columns() {
        let headers = StringRecord::from(vec!["code", "feedback"]);
        let err = ColumnIndex::from_headers(&headers).unwrap_err();

        match err {
            GeneratorError::Schema { found } => assert_eq!(found, vec!["code", "feedback"]),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_header_uses_last_occurrence() {
        let headers = StringRecord::from(vec!["code", "comment", "code"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();

        assert_eq!(index, ColumnIndex { code: 2, comment: 1 });
    }

    #[test]
    fn test_header_match_is_exact() {
        let headers = StringRecord::from(vec!["Code", " comment"]);
        assert!(ColumnIndex::from_headers(&headers).is_err());
    }

    #[test]
    fn test_short_record_reads_empty() {
        let headers = StringRecord::from(vec!["code", "comment"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();
        let record = StringRecord::from(vec!["A1"]);

        assert_eq!(index.code(&record), "A1");
        assert_eq!(index.comment(&record), "");
    }
}
