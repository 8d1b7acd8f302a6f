//! # Notation Types
//!
//! This module defines the value types produced by the header parser and the
//! practice-display helpers.
//!
//! ## Type Hierarchy
//! ```text
//! ParsedNotation
//!   ├── header: ParsedHeader
//!   │     ├── index       (X:)
//!   │     ├── title       (T:)
//!   │     ├── meter       (M:)
//!   │     ├── note_length (L:)
//!   │     └── key         (K:)
//!   ├── body: String           (melodic content, from the first non-header line)
//!   └── full_notation: String  (the input, unmodified)
//!
//! TransposedView
//!   ├── key: String        (target display key)
//!   ├── transpose: i8      (semitones from the original key)
//!   └── notation: String   (notation with hidden header lines removed)
//! ```
//!
//! ## Header Tags
//! Only six single-letter tags are recognized: `X`, `H`, `T`, `M`, `L`, `K`.
//! `H` (history) is recognized so that it does not end the header block, but its
//! value is not stored.
//!
//! All types are plain values: built once, never mutated afterwards.

use serde::Serialize;
use std::fmt;

/// Recognized ABC header tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderTag {
    X, // reference number
    H, // history (recognized, not stored)
    T, // title
    M, // meter
    L, // unit note length
    K, // key
}

impl HeaderTag {
    pub const ALL: [HeaderTag; 6] = [
        HeaderTag::X,
        HeaderTag::H,
        HeaderTag::T,
        HeaderTag::M,
        HeaderTag::L,
        HeaderTag::K,
    ];

    /// Tag for a header letter. Case-sensitive: `k` is not `K`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(HeaderTag::X),
            'H' => Some(HeaderTag::H),
            'T' => Some(HeaderTag::T),
            'M' => Some(HeaderTag::M),
            'L' => Some(HeaderTag::L),
            'K' => Some(HeaderTag::K),
            _ => None,
        }
    }

    /// Parse from a one-letter string such as "T"
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            HeaderTag::X => 'X',
            HeaderTag::H => 'H',
            HeaderTag::T => 'T',
            HeaderTag::M => 'M',
            HeaderTag::L => 'L',
            HeaderTag::K => 'K',
        }
    }
}

impl fmt::Display for HeaderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Header fields extracted from a notation.
/// `None` means the tag never appeared; a repeated tag keeps its last value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParsedHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ParsedHeader {
    /// Store a tag value, overwriting any earlier value for the same tag.
    /// `H` has no field and is dropped.
    pub fn set(&mut self, tag: HeaderTag, value: &str) {
        let slot = match tag {
            HeaderTag::X => &mut self.index,
            HeaderTag::T => &mut self.title,
            HeaderTag::M => &mut self.meter,
            HeaderTag::L => &mut self.note_length,
            HeaderTag::K => &mut self.key,
            HeaderTag::H => return,
        };
        *slot = Some(value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of parsing a notation string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNotation {
    pub header: ParsedHeader,
    /// Melodic content. The whole input when no body line was found.
    pub body: String,
    pub full_notation: String,
}

/// One rendering of a phrase in a target key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransposedView {
    pub key: String,
    pub transpose: i8,
    pub notation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_char() {
        for tag in HeaderTag::ALL {
            assert_eq!(HeaderTag::from_char(tag.as_char()), Some(tag));
        }
        assert_eq!(HeaderTag::from_char('k'), None);
        assert_eq!(HeaderTag::from_char('Q'), None);
    }

    #[test]
    fn test_tag_from_str() {
        assert_eq!(HeaderTag::from_str("T"), Some(HeaderTag::T));
        assert_eq!(HeaderTag::from_str(" M "), Some(HeaderTag::M));
        assert_eq!(HeaderTag::from_str("TM"), None);
        assert_eq!(HeaderTag::from_str(""), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut header = ParsedHeader::default();
        header.set(HeaderTag::K, "G");
        header.set(HeaderTag::K, "Dm");
        assert_eq!(header.key.as_deref(), Some("Dm"));
    }

    #[test]
    fn test_history_not_stored() {
        let mut header = ParsedHeader::default();
        header.set(HeaderTag::H, "Collected in 1902");
        assert!(header.is_empty());
    }
}
