use serde::{Deserialize, Serialize};

fn default_dictionary_id() -> String {
    "wn".to_string()
}

fn default_tool_path() -> String {
    "dict".to_string()
}

/// `dict` exits with 21 when there is no exact match but approximate ones exist
fn default_not_found_exit_code() -> i32 {
    21
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Database passed to the tool with `-d`
    #[serde(default = "default_dictionary_id")]
    pub dictionary_id: String,
    #[serde(default = "default_tool_path")]
    pub tool_path: String,
    #[serde(default = "default_not_found_exit_code")]
    pub not_found_exit_code: i32,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dictionary_id: default_dictionary_id(),
            tool_path: default_tool_path(),
            not_found_exit_code: default_not_found_exit_code(),
        }
    }
}
