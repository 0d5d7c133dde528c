// 🧹 Row Normalizer - Trim cells, drop rows without a code

use crate::parser::CommentRow;
use log::debug;

/// A trimmed `(code, comment)` pair; `code` is never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPair {
    pub code: String,
    pub comment: String,
    pub line_number: u64,
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F
fn is_cell_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim a cell
pub fn trim_cell(cell: &str) -> &str {
    cell.trim_matches(is_cell_space)
}

/// Trim one row. Blank or whitespace-only codes yield `None`; an empty
/// comment is kept.
pub fn normalize_row(row: &CommentRow) -> Option<NormalizedPair> {
    let code = trim_cell(&row.code);
    if code.is_empty() {
        debug!("Skipping line {}: no code", row.line_number);
        return None;
    }

    Some(NormalizedPair {
        code: code.to_string(),
        comment: trim_cell(&row.comment).to_string(),
        line_number: row.line_number,
    })
}

/// Lazily normalize rows, preserving input order
pub fn normalize_rows<'a, I>(rows: I) -> impl Iterator<Item = NormalizedPair> + 'a
where
    I: IntoIterator<Item = &'a CommentRow>,
    I::IntoIter: 'a,
{
    rows.into_iter().filter_map(normalize_row)
}
