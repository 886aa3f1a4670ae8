use std::path::PathBuf;

use crate::entry::EntryError;
use crate::invoker::InvocationError;

/// Everything that can end a lookup attempt early
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Select a word first")]
    EmptySelection,

    #[error("Dictionary lookup failed: {0}")]
    Invocation(#[from] InvocationError),

    #[error("Could not understand the dictionary output for \"{term}\"")]
    Malformed { term: String },

    #[error("No definition or suggestions for \"{term}\"")]
    NoSuggestions { term: String },

    #[error("\"{word}\" is already in the lexicon")]
    AlreadyExists { word: String, path: PathBuf },

    #[error("Could not save \"{word}\": {source}")]
    Io {
        word: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl LookupError {
    pub fn from_entry(word: &str, err: EntryError) -> Self {
        match err {
            EntryError::AlreadyExists(path) => LookupError::AlreadyExists {
                word: word.to_string(),
                path,
            },
            EntryError::Io { source, .. } => LookupError::Io {
                word: word.to_string(),
                source,
            },
        }
    }

    /// Ordinary outcomes that deserve a notice but not an error log
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            LookupError::EmptySelection
                | LookupError::NoSuggestions { .. }
                | LookupError::AlreadyExists { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_split() {
        assert!(LookupError::EmptySelection.is_expected());
        assert!(LookupError::NoSuggestions { term: "x".into() }.is_expected());
        assert!(
            LookupError::AlreadyExists {
                word: "cat".into(),
                path: PathBuf::from("words/cat.md"),
            }
            .is_expected()
        );
        assert!(!LookupError::Malformed { term: "x".into() }.is_expected());
        assert!(
            !LookupError::Invocation(InvocationError::Terminated {
                tool: "dict".into()
            })
            .is_expected()
        );
    }

    #[test]
    fn entry_errors_keep_the_word() {
        let err = LookupError::from_entry(
            "cat",
            EntryError::AlreadyExists(PathBuf::from("words/cat.md")),
        );
        assert_eq!(err.to_string(), "\"cat\" is already in the lexicon");
    }
}
