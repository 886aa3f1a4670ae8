use kanal::AsyncReceiver;
use lexis_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::context::LookupContext;

pub mod create_entry;

use create_entry::{handle_create_entry, handle_suggestion_choice};

/// App's main loop
pub async fn event_loop(
    ctx: LookupContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Stopping");
                break;
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(&ctx, event).await;
    }

    Ok(())
}

async fn handle_events(ctx: &LookupContext, event: AppEvent) {
    match event {
        AppEvent::CreateEntry(selection) => {
            handle_create_entry(ctx, selection).await;
        }
        AppEvent::SuggestionChosen(term) => {
            handle_suggestion_choice(ctx, term).await;
        }
        AppEvent::ShowSuggestions { .. }
        | AppEvent::Notify(_)
        | AppEvent::StatusUpdate { .. }
        | AppEvent::LookupFinished => {
            // Frontend-only events, ignore in backend
        }
    }
}
