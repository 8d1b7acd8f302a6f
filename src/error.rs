//! # Error Types
//!
//! This module defines the error types for the phrase library.
//!
//! Parsing never fails: absent input is reported as `None`, and a line that is not a
//! header simply starts the body. Errors only arise from strict key lookups and from
//! loading a display configuration.
//!
//! ## Error Types
//! - `UnknownKey` - A key string that does not normalize to a known pitch class
//! - `ConfigError` - Invalid YAML display configuration
//! - `Io` - A file could not be read
//!
//! ## Usage
//! ```rust
//! use phraselib::{try_transpose_amount, PhraseError};
//!
//! match try_transpose_amount("C", "Xyz") {
//!     Ok(semitones) => println!("Transpose by {}", semitones),
//!     Err(PhraseError::UnknownKey { key, normalized }) => {
//!         eprintln!("Unknown key '{}' (normalized '{}')", key, normalized);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhraseError {
    /// Key lookup failure.
    ///
    /// Occurs when a key string does not normalize to one of the pitch classes in the
    /// semitone table.
    ///
    /// # Example
    /// ```
    /// # use phraselib::PhraseError;
    /// let err = PhraseError::UnknownKey {
    ///     key: "Hm".to_string(),
    ///     normalized: "H".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Unknown key 'Hm' (normalized to 'H')");
    /// ```
    #[error("Unknown key '{key}' (normalized to '{normalized}')")]
    UnknownKey { key: String, normalized: String },

    /// Invalid display configuration.
    ///
    /// # Example
    /// ```
    /// # use phraselib::PhraseError;
    /// let err = PhraseError::ConfigError("display-keys must not be empty".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: display-keys must not be empty");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Error reading '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
