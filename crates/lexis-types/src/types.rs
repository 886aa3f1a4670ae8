use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw selected text, before preprocessing
    CreateEntry(String),
    SuggestionChosen(String),
    ShowSuggestions {
        term: String,
        suggestions: Vec<String>,
    },
    Notify(Notice),
    StatusUpdate {
        entry_count: Option<usize>,
    },
    /// Sent once a lookup reaches a terminal state
    LookupFinished,
}

/// A single dictionary request, built per user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub term: String,
    pub dictionary_id: String,
}

impl LookupQuery {
    pub fn new(term: impl Into<String>, dictionary_id: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            dictionary_id: dictionary_id.into(),
        }
    }
}

/// Text captured from one lookup process run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLookupOutput {
    pub text: String,
    /// The tool exited with its "no exact match" status; `text` is its error stream
    pub was_not_found_signal: bool,
}

impl RawLookupOutput {
    pub fn definitions(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            was_not_found_signal: false,
        }
    }

    pub fn not_found(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            was_not_found_signal: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Found { definition: String },
    /// An empty list means the tool offered no candidates
    NotFound { suggestions: Vec<String> },
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub word: String,
    pub definition: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Short transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
