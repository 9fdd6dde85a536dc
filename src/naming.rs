//! Block Naming
//!
//! Derives the store namespace and page component name a block is
//! instantiated under.

use crate::error::BlockError;

/// A validated block name split into words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockName {
    words: Vec<String>,
}

impl BlockName {
    /// Accepts `list-basic-list`, `list_basic_list`, `List Basic List`,
    /// `listBasicList` or `ListBasicList`.
    pub fn parse(raw: &str) -> Result<Self, BlockError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BlockError::EmptyBlockName);
        }
        let valid_chars = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '));
        let starts_with_letter = trimmed.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !valid_chars || !starts_with_letter {
            return Err(BlockError::InvalidBlockName(trimmed.to_string()));
        }

        let mut words = Vec::new();
        for chunk in trimmed.split(|c| matches!(c, '-' | '_' | ' ')) {
            split_camel(chunk, &mut words);
        }
        if words.is_empty() {
            return Err(BlockError::InvalidBlockName(trimmed.to_string()));
        }
        Ok(Self { words })
    }

    /// `listBasicList`, used as the store namespace
    pub fn camel_case(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i == 0 {
                out.push_str(word);
            } else {
                push_capitalized(&mut out, word);
            }
        }
        out
    }

    /// `ListBasicList`, used as the page component name
    pub fn upper_camel_case(&self) -> String {
        let mut out = String::new();
        for word in &self.words {
            push_capitalized(&mut out, word);
        }
        out
    }
}

/// Split one separator-free chunk on lower→upper and letter→digit boundaries
fn split_camel(chunk: &str, words: &mut Vec<String>) {
    let mut current = String::new();
    let mut prev: Option<char> = None;
    for c in chunk.chars() {
        let boundary = match prev {
            Some(p) => (p.is_ascii_lowercase() || p.is_ascii_digit()) && c.is_ascii_uppercase(),
            None => false,
        };
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars);
    }
}

/// Whether `s` can be used as a store namespace (JS identifier subset)
pub fn is_valid_namespace(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants_agree() {
        let expected = BlockName::parse("ListBasicList").unwrap();
        for raw in ["list-basic-list", "list_basic_list", "List Basic List", "listBasicList"] {
            assert_eq!(BlockName::parse(raw).unwrap(), expected, "input {raw}");
        }
    }

    #[test]
    fn test_case_conversions() {
        let name = BlockName::parse("account-center").unwrap();
        assert_eq!(name.camel_case(), "accountCenter");
        assert_eq!(name.upper_camel_case(), "AccountCenter");
    }

    #[test]
    fn test_digits_and_acronyms() {
        let name = BlockName::parse("list2Columns").unwrap();
        assert_eq!(name.upper_camel_case(), "List2Columns");
        // consecutive capitals stay together
        let name = BlockName::parse("HTMLList").unwrap();
        assert_eq!(name.camel_case(), "htmllist");
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(BlockName::parse("  "), Err(BlockError::EmptyBlockName)));
        assert!(matches!(BlockName::parse("9lives"), Err(BlockError::InvalidBlockName(_))));
        assert!(matches!(BlockName::parse("list/basic"), Err(BlockError::InvalidBlockName(_))));
    }

    #[test]
    fn test_namespace_validation() {
        assert!(is_valid_namespace("listBasicList"));
        assert!(is_valid_namespace("_private$"));
        assert!(!is_valid_namespace(""));
        assert!(!is_valid_namespace("1abc"));
        assert!(!is_valid_namespace("list-basic"));
    }
}
