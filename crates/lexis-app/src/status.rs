use std::sync::Arc;

use tokio::sync::RwLock;

/// Counters shown next to the entry count
#[derive(Clone, Debug, Default)]
pub struct LookupStatus {
    pub lookups: u64,
    pub entries_created: u64,
    pub failures: u64,
    /// `None` when the word directory could not be listed
    pub entry_count: Option<usize>,
    pub current_message: String,
}

#[derive(Clone)]
pub struct AppStatus {
    pub lookup: Arc<RwLock<LookupStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            lookup: Arc::new(RwLock::new(LookupStatus::default())),
        }
    }

    pub async fn snapshot(&self) -> LookupStatus {
        self.lookup.read().await.clone()
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Status bar text for the entry count
pub fn format_entry_count(entry_count: Option<usize>) -> String {
    match entry_count {
        Some(count) => format!("Words: {count}"),
        None => "Words: error".to_string(),
    }
}
