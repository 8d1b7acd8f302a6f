//! Practice display: the same phrase rendered in every key.
//!
//! The notation itself is never rewritten note by note. Each view carries the transpose
//! amount for the renderer and a copy of the notation with distracting header lines
//! (title, meter) removed.

use crate::notation::{HeaderTag, TransposedView};
use crate::transpose::get_transpose_amount;

/// Remove every line that starts with one of `tags` followed by `:`.
/// Only column-0 tags are matched; indented lines are kept.
pub fn strip_header_tags(notation: &str, tags: &[HeaderTag]) -> String {
    notation
        .split('\n')
        .filter(|line| !starts_with_tag(line, tags))
        .collect::<Vec<_>>()
        .join("\n")
}

fn starts_with_tag(line: &str, tags: &[HeaderTag]) -> bool {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some(':')) => tags.iter().any(|tag| tag.as_char() == c),
        _ => false,
    }
}

/// Build one view per target key, in the order given
pub fn transposed_views<S: AsRef<str>>(
    notation: &str,
    original_key: &str,
    keys: &[S],
    hidden_tags: &[HeaderTag],
) -> Vec<TransposedView> {
    let stripped = strip_header_tags(notation, hidden_tags);
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            TransposedView {
                key: key.to_string(),
                transpose: get_transpose_amount(original_key, key),
                notation: stripped.clone(),
            }
        })
        .collect()
}
