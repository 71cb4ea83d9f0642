//! Editor configuration
//!
//! Preferences are read from `~/.config/lined/config.yaml`. The editor never
//! writes this file; users edit it by hand.

use std::path::Path;

use serde::Deserialize;

use crate::model::{DEFAULT_NUMBER_WIDTH, DEFAULT_SENTINEL};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Character that marks an input line as a command
    pub sentinel: String,
    /// Start with line numbers enabled
    pub line_numbers: bool,
    /// Width of the line-number column
    pub number_width: usize,
    /// Printed when the editor quits
    pub farewell: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            sentinel: char::from(DEFAULT_SENTINEL).to_string(),
            line_numbers: false,
            number_width: DEFAULT_NUMBER_WIDTH,
            farewell: "Goodbye!".to_string(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        validate_sentinel(&config.sentinel)?;
        Ok(config)
    }

    /// The sentinel as a byte
    ///
    /// Falls back to the default when the configured value is not a single
    /// ASCII character.
    pub fn sentinel_byte(&self) -> u8 {
        match self.sentinel.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => DEFAULT_SENTINEL,
        }
    }
}

/// Check that `sentinel` can mark command lines
///
/// It must be one ASCII character that cannot start a command letter or an
/// address, and is not whitespace.
pub fn validate_sentinel(sentinel: &str) -> Result<u8, String> {
    match sentinel.as_bytes() {
        [b] if b.is_ascii_punctuation() && !matches!(*b, b'^' | b',' | b'$' | b'+' | b'-') => {
            Ok(*b)
        }
        _ => Err(format!(
            "invalid sentinel {:?}: expected one ASCII punctuation character other than ^ , $ + -",
            sentinel
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.sentinel, ".");
        assert!(!config.line_numbers);
        assert_eq!(config.number_width, 4);
        assert_eq!(config.farewell, "Goodbye!");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = EditorConfig::from_yaml("line_numbers: true\n").unwrap();
        assert!(config.line_numbers);
        assert_eq!(config.sentinel, ".");
        assert_eq!(config.number_width, 4);
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = "sentinel: ':'\nline_numbers: true\nnumber_width: 6\nfarewell: Bye\n";
        let config = EditorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.sentinel_byte(), b':');
        assert_eq!(config.number_width, 6);
        assert_eq!(config.farewell, "Bye");
    }

    #[test]
    fn test_from_yaml_rejects_bad_sentinel() {
        assert!(EditorConfig::from_yaml("sentinel: ab\n").is_err());
        assert!(EditorConfig::from_yaml("sentinel: p\n").is_err());
        assert!(EditorConfig::from_yaml("sentinel: '^'\n").is_err());
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        assert!(EditorConfig::from_yaml("line_numbers: [1, 2]\n").is_err());
    }

    #[test]
    fn test_validate_sentinel() {
        assert_eq!(validate_sentinel("."), Ok(b'.'));
        assert_eq!(validate_sentinel(":"), Ok(b':'));
        assert!(validate_sentinel("").is_err());
        assert!(validate_sentinel(" ").is_err());
        assert!(validate_sentinel("1").is_err());
        assert!(validate_sentinel("·").is_err());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = EditorConfig::load_from(&dir.path().join("nope.yaml"));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_load_from_invalid_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "sentinel: [\n").unwrap();
        assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
    }

    #[test]
    fn test_load_from_hand_written_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "sentinel: \"!\"\nline_numbers: true\nnumber_width: 3\nfarewell: See you\n",
        )
        .unwrap();

        let expected = EditorConfig {
            sentinel: "!".to_string(),
            line_numbers: true,
            number_width: 3,
            farewell: "See you".to_string(),
        };
        assert_eq!(EditorConfig::load_from(&path), expected);
    }
}
