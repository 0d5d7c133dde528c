// 🏗️ Input Reader - Legacy-encoded CSV → raw comment rows
// Exports from the authoring tool are windows-1252 ("smart quotes"),
// so bytes are transcoded to UTF-8 before the CSV parser sees them.

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::schema::ColumnIndex;
use csv::ReaderBuilder;
use encoding_rs::{DecoderResult, Encoding, WINDOWS_1252};
use log::info;
use std::path::Path;

/// Bytes the windows-1252 code page leaves unassigned
/// (WHATWG decoding maps them to C1 controls)
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

// ============================================================================
// CORE TYPES
// ============================================================================

/// CommentRow - One input record before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub code: String,
    pub comment: String,

    /// Line in original file (1-indexed, header is line 1)
    pub line_number: u64,
}

impl CommentRow {
    pub fn new(code: impl Into<String>, comment: impl Into<String>, line_number: u64) -> Self {
        CommentRow {
            code: code.into(),
            comment: comment.into(),
            line_number,
        }
    }
}

// ============================================================================
// READER
// ============================================================================

/// Read every row of a comments CSV in file order
///
/// # Errors
/// * `NotFound` / `Io` - the file cannot be opened or read
/// * `Undecodable` - a byte has no mapping in the input encoding
/// * `Schema` - the header lacks `code` or `comment`
/// * `Csv` - a record is malformed
pub fn read_rows(path: &Path, config: &GeneratorConfig) -> Result<Vec<CommentRow>, GeneratorError> {
    let bytes = std::fs::read(path).map_err(|e| GeneratorError::io(path, e))?;
    let text = decode_legacy(&bytes, config.input_encoding)?;

    let rows = parse_rows(&text)?;
    info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Transcode input bytes to UTF-8, failing on the first undecodable byte
///
/// No BOM sniffing: a leading BOM is decoded as ordinary characters, the way
/// a plain single-byte decoder treats it.
pub fn decode_legacy(bytes: &[u8], encoding: &'static Encoding) -> Result<String, GeneratorError> {
    let undecodable = |offset: usize| GeneratorError::Undecodable {
        encoding: encoding.name(),
        byte: bytes.get(offset).copied().unwrap_or_default(),
        offset,
    };

    if encoding == WINDOWS_1252 {
        if let Some(offset) = bytes.iter().position(|b| CP1252_UNDEFINED.contains(b)) {
            return Err(undecodable(offset));
        }
    }

    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut text = String::with_capacity(bytes.len());
    let mut consumed = 0;

    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[consumed..], &mut text, true);
        consumed += read;

        match result {
            DecoderResult::InputEmpty => return Ok(text),
            DecoderResult::OutputFull => text.reserve((bytes.len() - consumed) * 3 + 16),
            DecoderResult::Malformed(bad, extra) => {
                return Err(undecodable(consumed - bad as usize - extra as usize));
            }
        }
    }
}

/// Parse already-decoded CSV text
///
/// The header is always the first physical line. The csv reader would skip
/// a blank first line and take its header from further down, so that case
/// is rejected up front with an empty header.
pub fn parse_rows(text: &str) -> Result<Vec<CommentRow>, GeneratorError> {
    if text.starts_with('\n') || text.starts_with('\r') {
        return Err(GeneratorError::Schema { found: Vec::new() });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| GeneratorError::Csv { line: 1, source: e })?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| GeneratorError::Csv {
            line: e.position().map(|p| p.line()).unwrap_or(idx as u64 + 2),
            source: e,
        })?;

        let line_number = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        rows.push(CommentRow::new(
            columns.code(&record),
            columns.comment(&record),
            line_number,
        ));
    }

    Ok(rows)
}
