// 🔍 Deduplication Engine - Fold normalized pairs into a key-unique mapping
// Last write wins; a key keeps the position of its first occurrence.

use crate::encoding::encode;
use crate::normalize::NormalizedPair;
use log::debug;
use std::collections::HashMap;

// ============================================================================
// ENTRY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: String,
    pub encoded_comment: String,
}

// ============================================================================
// COMMENT MAPPING
// ============================================================================

/// Ordered map code → encoded comment
///
/// Iteration follows first insertion. Overwriting a key replaces its value
/// in place without moving it.
#[derive(Debug, Clone, Default)]
pub struct CommentMapping {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,

    /// Number of inserts that replaced an existing value
    overwritten: usize,
}

impl CommentMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-encoded value. Returns the previous value, if any.
    pub fn insert(&mut self, code: String, encoded_comment: String) -> Option<String> {
        if let Some(&pos) = self.index.get(&code) {
            self.overwritten += 1;
            let previous = std::mem::replace(&mut self.entries[pos].encoded_comment, encoded_comment);
            return Some(previous);
        }

        self.index.insert(code.clone(), self.entries.len());
        self.entries.push(Entry {
            code,
            encoded_comment,
        });
        None
    }

    /// Encode `comment` and store it under `code`
    pub fn insert_comment(&mut self, code: String, comment: &str) -> Option<String> {
        self.insert(code, encode(comment))
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&pos| self.entries[pos].encoded_comment.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CommentMapping {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// FOLD
// ============================================================================

/// Build the mapping from normalized pairs, encoding each comment
pub fn deduplicate<I>(pairs: I) -> CommentMapping
where
    I: IntoIterator<Item = NormalizedPair>,
{
    let mut mapping = CommentMapping::new();

    for pair in pairs {
        let line = pair.line_number;
        if mapping.insert_comment(pair.code, &pair.comment).is_some() {
            debug!("Line {} overwrites an earlier comment for the same code", line);
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::decode;

    fn pair(code: &str, comment: &str) -> NormalizedPair {
        NormalizedPair {
            code: code.to_string(),
            comment: comment.to_string(),
            line_number: 0,
        }
    }

    #[test]
    fn test_last_write_wins() {
        let mapping = deduplicate(vec![pair("A", "x"), pair("B", "y"), pair("A", "z")]);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("A"), Some(encode("z").as_str()));
        assert_eq!(mapping.get("B"), Some(encode("y").as_str()));
        assert_eq!(mapping.overwritten(), 1);
    }

    #[test]
    fn test_position_reflects_first_occurrence() {
        let mapping = deduplicate(vec![pair("A", "x"), pair("B", "y"), pair("A", "z")]);

        let codes: Vec<&str> = mapping.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_distinct_codes_keep_every_pair() {
        let mapping = deduplicate(vec![pair("A", "1"), pair("B", "2"), pair("C", "3")]);

        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.overwritten(), 0);
    }

    #[test]
    fn test_empty_comment_is_an_entry() {
        let mapping = deduplicate(vec![pair("C", "")]);

        let encoded = mapping.get("C").unwrap();
        assert_eq!(decode(encoded).unwrap(), "");
    }

    #[test]
    fn test_insert_returns_previous_value() {
        let mut mapping = CommentMapping::new();

        assert!(mapping.insert("K".to_string(), "old".to_string()).is_none());
        assert_eq!(mapping.insert("K".to_string(), "new".to_string()), Some("old".to_string()));
        assert_eq!(mapping.get("K"), Some("new"));
        assert!(mapping.get("missing").is_none());
    }

    #[test]
    fn test_empty_mapping() {
        let mapping = deduplicate(Vec::new());
        assert!(mapping.is_empty());
    }
}
