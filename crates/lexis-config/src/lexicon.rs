use serde::{Deserialize, Serialize};

fn default_word_directory() -> String {
    "words".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconConfig {
    /// Directory that holds one `<word>.md` file per entry
    #[serde(default = "default_word_directory")]
    pub word_directory: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            word_directory: default_word_directory(),
        }
    }
}
