use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::lexicon::LexiconConfig;

pub mod dictionary;
pub mod lexicon;
pub mod profile;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown setting: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub lexicon: LexiconConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("DICT_TOOL_PATH") {
            self.dictionary.tool_path = path;
        }

        if let Some(code) = env::var("DICT_NOT_FOUND_EXIT_CODE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.dictionary.not_found_exit_code = code;
        }
    }

    /// Update one setting by its user-facing name
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        };

        match field {
            "word-directory" | "word_directory" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                self.lexicon.word_directory = value.to_string();
            }
            "dictionary" | "dictionary-id" | "dictionary_id" => {
                if value.is_empty() || value.contains(char::is_whitespace) {
                    return Err(invalid());
                }
                self.dictionary.dictionary_id = value.to_string();
            }
            "tool-path" | "tool_path" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                self.dictionary.tool_path = value.to_string();
            }
            "not-found-exit-code" | "not_found_exit_code" => {
                self.dictionary.not_found_exit_code = value.parse().map_err(|_| invalid())?;
            }
            other => return Err(ConfigError::UnknownField(other.to_string())),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_settings_form() {
        let config = Config::default();
        assert_eq!(config.lexicon.word_directory, "words");
        assert_eq!(config.dictionary.dictionary_id, "wn");
        assert_eq!(config.dictionary.tool_path, "dict");
        assert_eq!(config.dictionary.not_found_exit_code, 21);
    }

    #[test]
    fn set_field_accepts_both_spellings() {
        let mut config = Config::default();
        config.set_field("word-directory", "vocab").unwrap();
        config.set_field("dictionary_id", "gcide").unwrap();
        assert_eq!(config.lexicon.word_directory, "vocab");
        assert_eq!(config.dictionary.dictionary_id, "gcide");
    }

    #[test]
    fn set_field_rejects_bad_input() {
        let mut config = Config::default();
        assert_eq!(
            config.set_field("colour", "red"),
            Err(ConfigError::UnknownField("colour".to_string()))
        );
        assert!(config.set_field("word-directory", "   ").is_err());
        assert!(config.set_field("not-found-exit-code", "abc").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"lexicon":{"word_directory":"vocab"}}"#).unwrap();
        assert_eq!(config.lexicon.word_directory, "vocab");
        assert_eq!(config.dictionary, DictionaryConfig::default());
    }
}
