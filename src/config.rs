//! # Display Configuration
//!
//! Controls how a phrase is laid out for all-keys practice. Read from YAML:
//!
//! ```yaml
//! display-keys: [C, F, Bb, Eb]
//! default-key: C
//! hidden-tags: [T, M]
//! ```
//!
//! Every field is optional; missing fields take the values of [`DisplayConfig::default`].

use crate::error::PhraseError;
use crate::notation::HeaderTag;
use crate::transpose::{is_known_key, DISPLAY_KEYS};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Target keys, rendered in this order
    pub display_keys: Vec<String>,
    /// Original key assumed when a notation has no `K:` line
    pub default_key: String,
    /// Header lines removed from transposed views
    pub hidden_tags: Vec<HeaderTag>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_keys: DISPLAY_KEYS.iter().map(|k| k.to_string()).collect(),
            default_key: "C".to_string(),
            hidden_tags: vec![HeaderTag::T, HeaderTag::M],
        }
    }
}

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawDisplayConfig {
    pub display_keys: Option<Vec<String>>,
    pub default_key: Option<String>,
    pub hidden_tags: Option<Vec<String>>,
}

impl DisplayConfig {
    /// Parse and validate a YAML document. An empty document gives the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, PhraseError> {
        let raw: RawDisplayConfig = if content.trim().is_empty() {
            RawDisplayConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| PhraseError::ConfigError(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PhraseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PhraseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    fn from_raw(raw: RawDisplayConfig) -> Result<Self, PhraseError> {
        let defaults = Self::default();

        let display_keys = match raw.display_keys {
            Some(keys) if keys.is_empty() => {
                return Err(PhraseError::ConfigError(
                    "display-keys must not be empty".to_string(),
                ))
            }
            Some(keys) => keys,
            None => defaults.display_keys,
        };
        if let Some(bad) = display_keys.iter().find(|k| !is_known_key(k)) {
            return Err(PhraseError::ConfigError(format!(
                "display-keys contains unknown key '{}'",
                bad
            )));
        }

        let default_key = raw.default_key.unwrap_or(defaults.default_key);
        if !is_known_key(&default_key) {
            return Err(PhraseError::ConfigError(format!(
                "default-key '{}' is not a known key",
                default_key
            )));
        }

        let hidden_tags = match raw.hidden_tags {
            Some(tags) => tags
                .iter()
                .map(|t| {
                    HeaderTag::from_str(t).ok_or_else(|| {
                        let known: Vec<String> =
                            HeaderTag::ALL.iter().map(|tag| tag.to_string()).collect();
                        PhraseError::ConfigError(format!(
                            "hidden-tags entry '{}' must be one of {}",
                            t,
                            known.join(", ")
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.hidden_tags,
        };

        Ok(Self {
            display_keys,
            default_key,
            hidden_tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        assert_eq!(DisplayConfig::from_yaml("").unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = DisplayConfig::from_yaml(
            "display-keys: [C, F, Bb, Eb]\ndefault-key: G\nhidden-tags: [T]\n",
        )
        .unwrap();
        assert_eq!(config.display_keys, vec!["C", "F", "Bb", "Eb"]);
        assert_eq!(config.default_key, "G");
        assert_eq!(config.hidden_tags, vec![HeaderTag::T]);
    }

    #[test]
    fn test_partial_config() {
        let config = DisplayConfig::from_yaml("default-key: Am\n").unwrap();
        assert_eq!(config.default_key, "Am");
        assert_eq!(config.display_keys.len(), 12);
        assert_eq!(config.hidden_tags, vec![HeaderTag::T, HeaderTag::M]);
    }

    #[test]
    fn test_unknown_display_key() {
        let err = DisplayConfig::from_yaml("display-keys: [C, H]\n").unwrap_err();
        assert!(err.to_string().contains("unknown key 'H'"));
    }

    #[test]
    fn test_empty_display_keys() {
        assert!(DisplayConfig::from_yaml("display-keys: []\n").is_err());
    }

    #[test]
    fn test_bad_default_key() {
        assert!(DisplayConfig::from_yaml("default-key: Q\n").is_err());
    }

    #[test]
    fn test_bad_hidden_tag() {
        let err = DisplayConfig::from_yaml("hidden-tags: [Q]\n").unwrap_err();
        assert!(matches!(err, PhraseError::ConfigError(_)));
        assert!(err.to_string().contains("'Q' must be one of X, H, T, M, L, K"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(DisplayConfig::from_yaml("tempo: 120\n").is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(DisplayConfig::from_yaml("display-keys: [C, D\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DisplayConfig::load("/nonexistent/phraselib.yaml").unwrap_err();
        assert!(matches!(err, PhraseError::Io { .. }));
    }
}
