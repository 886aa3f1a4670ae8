use std::sync::Arc;

use kanal::AsyncSender;
use lexis_core::invoker::LookupBackend;
use lexis_core::state::AppState;
use lexis_types::AppEvent;

use crate::status::AppStatus;

/// Shared dependencies of every lookup handler
#[derive(Clone)]
pub struct LookupContext {
    pub state: Arc<AppState>,
    pub event_tx: AsyncSender<AppEvent>,
    pub backend: Arc<dyn LookupBackend>,
    pub status: AppStatus,
}

impl LookupContext {
    pub fn new(
        state: Arc<AppState>,
        event_tx: AsyncSender<AppEvent>,
        backend: Arc<dyn LookupBackend>,
        status: AppStatus,
    ) -> Self {
        Self {
            state,
            event_tx,
            backend,
            status,
        }
    }

    /// Send to the frontend; a closed frontend only gets logged
    pub async fn send(&self, event: AppEvent) {
        if let Err(e) = self.event_tx.send(event).await {
            tracing::warn!("Failed to send event to frontend: {}", e);
        }
    }
}
