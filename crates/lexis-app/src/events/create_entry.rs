//! One user-triggered lookup, from selection to saved entry.
//!
//! `Idle -> Invoking -> Found -> Writing -> Idle`, or
//! `Invoking -> NotFound -> AwaitingUserChoice` until the frontend answers with
//! [`AppEvent::SuggestionChosen`], which starts the flow again with the new term.

use lexis_core::entry::{count_entries, entry_path, write_entry};
use lexis_core::error::LookupError;
use lexis_core::parser::OutputParser;
use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_types::{AppEvent, LexiconEntry, LookupQuery, Notice, ParseResult};

use crate::context::LookupContext;

#[derive(Debug)]
pub enum LookupOutcome {
    Created(LexiconEntry),
    Suggestions {
        term: String,
        suggestions: Vec<String>,
    },
}

pub async fn handle_create_entry(ctx: &LookupContext, selection: String) {
    let term = DefaultPreprocessor.process(&selection);
    let result = if term.is_empty() {
        Err(LookupError::EmptySelection)
    } else {
        run_lookup(ctx, term).await
    };

    report(ctx, result).await;
}

pub async fn handle_suggestion_choice(ctx: &LookupContext, term: String) {
    tracing::info!("[LOOKUP] Suggestion chosen: {}", term);
    handle_create_entry(ctx, term).await;
}

/// Look `term` up and save it, or hand back the tool's suggestions
pub async fn run_lookup(ctx: &LookupContext, term: String) -> Result<LookupOutcome, LookupError> {
    let (dictionary_id, word_directory) = {
        let config = ctx.state.config.read().await;
        (
            config.dictionary.dictionary_id.clone(),
            config.lexicon.word_directory.clone(),
        )
    };

    {
        let mut status = ctx.status.lookup.write().await;
        status.lookups += 1;
        status.current_message = format!("Looking up {term}");
    }

    tracing::debug!("[LOOKUP] Invoking dictionary {} for {}", dictionary_id, term);
    let query = LookupQuery::new(term.clone(), dictionary_id);
    let backend = ctx.backend.clone();
    let raw = tokio::task::spawn_blocking(move || backend.invoke(&query)).await??;

    match OutputParser::new(&term).parse(&raw) {
        ParseResult::Found { definition } => {
            tracing::debug!("[LOOKUP] Found {} bytes of definition", definition.len());
            let entry = LexiconEntry {
                path: entry_path(&word_directory, &term),
                word: term,
                definition,
            };

            let pending = entry.clone();
            tokio::task::spawn_blocking(move || write_entry(&pending))
                .await?
                .map_err(|e| LookupError::from_entry(&entry.word, e))?;

            Ok(LookupOutcome::Created(entry))
        }
        ParseResult::NotFound { suggestions } => {
            if suggestions.iter().all(|s| s.trim().is_empty()) {
                return Err(LookupError::NoSuggestions { term });
            }

            tracing::debug!("[LOOKUP] {} suggestions for {}", suggestions.len(), term);
            Ok(LookupOutcome::Suggestions { term, suggestions })
        }
        ParseResult::Malformed => {
            tracing::debug!("[LOOKUP] Unrecognized output: {:?}", raw.text);
            Err(LookupError::Malformed { term })
        }
    }
}

fn notice_for(err: &LookupError) -> Notice {
    match err {
        LookupError::EmptySelection => Notice::warning(err.to_string()),
        _ if err.is_expected() => Notice::info(err.to_string()),
        _ => Notice::error(err.to_string()),
    }
}

async fn report(ctx: &LookupContext, result: Result<LookupOutcome, LookupError>) {
    match result {
        Ok(LookupOutcome::Created(entry)) => {
            tracing::info!("Created entry {} at {}", entry.word, entry.path.display());

            let word_directory = {
                let config = ctx.state.config.read().await;
                config.lexicon.word_directory.clone()
            };
            let entry_count = count_entries(&word_directory)
                .inspect_err(|e| tracing::warn!("Failed to count entries: {}", e))
                .ok();

            let message = format!("Created entry for \"{}\"", entry.word);
            {
                let mut status = ctx.status.lookup.write().await;
                status.entries_created += 1;
                status.entry_count = entry_count;
                status.current_message = message.clone();
            }

            ctx.send(AppEvent::Notify(Notice::info(message))).await;
            ctx.send(AppEvent::StatusUpdate { entry_count }).await;
            ctx.send(AppEvent::LookupFinished).await;
        }
        Ok(LookupOutcome::Suggestions { term, suggestions }) => {
            tracing::info!("No definition for {}, offering suggestions", term);
            ctx.status.lookup.write().await.current_message = format!("Pick a word for {term}");

            ctx.send(AppEvent::ShowSuggestions { term, suggestions })
                .await;
        }
        Err(err) => {
            if err.is_expected() {
                tracing::info!("Lookup ended: {}", err);
            } else {
                tracing::error!("Lookup failed: {}", err);
            }

            let notice = notice_for(&err);
            {
                let mut status = ctx.status.lookup.write().await;
                if !err.is_expected() {
                    status.failures += 1;
                }
                status.current_message = notice.message.clone();
            }

            ctx.send(AppEvent::Notify(notice)).await;
            ctx.send(AppEvent::LookupFinished).await;
        }
    }
}
