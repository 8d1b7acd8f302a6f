//! # Public API
//!
//! Entry points used by the phrase library when a phrase is saved or displayed.
//! The semitone shift between two keys is `transpose::get_transpose_amount`.
//!
//! ## Functions
//!
//! - [`parse_abc_notation()`] - Header fields and body of a notation (absent input allowed)
//! - [`original_key_for()`] - Key stored with a phrase, derived from its `K:` line
//! - [`render_all_keys()`] - Transposed views of a phrase for practice display
//!
//! ## Typical Usage
//!
//! ```rust
//! use phraselib::{get_transpose_amount, original_key_for};
//!
//! let source = "X:1\nT:ii-V-I\nK:Bb\nc2 B2 A2 G2|";
//!
//! let key = original_key_for(source);
//! assert_eq!(key, "Bb");
//! assert_eq!(get_transpose_amount(&key, "C"), -10);
//! ```

use crate::config::DisplayConfig;
use crate::notation::{ParsedNotation, TransposedView};
use crate::parser;
use crate::view::transposed_views;

/// Key assumed for a notation without a usable `K:` line
pub const DEFAULT_KEY: &str = "C";

/// Parse an ABC notation that may be absent.
///
/// Returns `None` when there is nothing to parse, which is distinct from a notation that
/// parsed but had no headers.
///
/// # Example
/// ```rust
/// use phraselib::parse_abc_notation;
///
/// let parsed = parse_abc_notation(Some("X:1\nT:Test\nK:C\nCDEF|GABc|")).unwrap();
/// assert_eq!(parsed.header.title.as_deref(), Some("Test"));
/// assert_eq!(parsed.body, "CDEF|GABc|");
///
/// assert!(parse_abc_notation(None).is_none());
/// assert!(parse_abc_notation(Some("")).is_none());
/// ```
pub fn parse_abc_notation(text: Option<&str>) -> Option<ParsedNotation> {
    text.and_then(parser::parse)
}

/// Key to store with a phrase: the `K:` value verbatim, or [`DEFAULT_KEY`].
pub fn original_key_for(notation: &str) -> String {
    original_key_or(notation, DEFAULT_KEY)
}

fn original_key_or(notation: &str, default_key: &str) -> String {
    parser::parse(notation)
        .and_then(|parsed| parsed.header.key)
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| default_key.to_string())
}

/// Render a phrase in every configured display key.
///
/// # Example
/// ```rust
/// use phraselib::{render_all_keys, DisplayConfig};
///
/// let views = render_all_keys("T:Lick\nK:D\nd2 A2|", &DisplayConfig::default());
/// assert_eq!(views.len(), 12);
/// assert_eq!(views[0].key, "C");
/// assert_eq!(views[0].transpose, -2);
/// assert_eq!(views[0].notation, "K:D\nd2 A2|");
/// ```
pub fn render_all_keys(notation: &str, config: &DisplayConfig) -> Vec<TransposedView> {
    let original_key = original_key_or(notation, &config.default_key);
    transposed_views(
        notation,
        &original_key,
        &config.display_keys,
        &config.hidden_tags,
    )
}
