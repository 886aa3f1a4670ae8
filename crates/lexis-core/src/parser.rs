//! Classifies the text printed by the dictionary tool.
//!
//! The tool formats its answers for a terminal and has no machine-readable mode, so
//! the parser slices the text around two anchor phrases instead of parsing it:
//!
//! - `N definition(s) found` followed by a blank line starts a definition body,
//!   which may hold several `From <source>:` blocks back to back.
//! - `No definitions found for "<term>", perhaps you mean:` starts a list of
//!   suggestions separated by double spaces.

use std::sync::LazyLock;

use lexis_types::{ParseResult, RawLookupOutput};
use regex::Regex;

static DEFINITIONS_FOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+ definitions? found\n\n").expect("valid pattern"));

static SOURCE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^From [^\n]*:(?:\n\n?|\z)").expect("valid pattern"));

/// `<source>:  ` prefix at the start of the suggestion list
static SOURCE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[^\n]*?:  ").expect("valid pattern"));

const SUGGESTION_SEPARATOR: &str = "  ";

/// Byte range of the first match of `pattern` in `text`
pub fn find_bounds(pattern: &Regex, text: &str) -> Option<(usize, usize)> {
    pattern.find(text).map(|m| (m.start(), m.end()))
}

/// Byte range of the first occurrence of `needle` in `text`
pub fn find_literal_bounds(needle: &str, text: &str) -> Option<(usize, usize)> {
    text.find(needle).map(|start| (start, start + needle.len()))
}

/// Parser bound to the term that was looked up
pub struct OutputParser {
    not_found_marker: String,
}

impl OutputParser {
    pub fn new(term: &str) -> Self {
        Self {
            not_found_marker: format!("No definitions found for \"{term}\", perhaps you mean:\n"),
        }
    }

    pub fn parse(&self, raw: &RawLookupOutput) -> ParseResult {
        tracing::debug!(
            "Parsing {} bytes of tool output (not found signal: {})",
            raw.text.len(),
            raw.was_not_found_signal
        );

        // A definitions marker wins even if the suggestion marker is present too
        if let Some((_, end)) = find_bounds(&DEFINITIONS_FOUND, &raw.text) {
            let definition = strip_source_headers(&raw.text[end..]);
            let definition = definition.trim();

            if definition.is_empty() {
                tracing::debug!("Definitions marker found but body is empty");
                return ParseResult::Malformed;
            }

            return ParseResult::Found {
                definition: definition.to_string(),
            };
        }

        if let Some((_, end)) = find_literal_bounds(&self.not_found_marker, &raw.text) {
            let mut rest = &raw.text[end..];
            if let Some((_, prefix_end)) = find_bounds(&SOURCE_PREFIX, rest) {
                rest = &rest[prefix_end..];
            }

            return ParseResult::NotFound {
                suggestions: split_suggestions(rest),
            };
        }

        ParseResult::Malformed
    }
}

/// Remove every `From <source>:` header, wherever it sits in the body
fn strip_source_headers(body: &str) -> String {
    let mut body = body.to_string();
    while let Some((start, end)) = find_bounds(&SOURCE_HEADER, &body) {
        body.replace_range(start..end, "");
    }
    body
}

/// Split on double spaces without trimming individual entries
///
/// A trailing separator produces a trailing empty suggestion, matching what the tool
/// prints. Only the final line break of the output is dropped.
fn split_suggestions(list: &str) -> Vec<String> {
    let list = list.trim_end_matches(['\n', '\r']);
    if list.is_empty() {
        return Vec::new();
    }

    list.split(SUGGESTION_SEPARATOR).map(str::to_string).collect()
}
