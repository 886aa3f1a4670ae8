use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::invoker::LookupBackend;
use lexis_core::state::AppState;
use lexis_types::AppEvent;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::context::LookupContext;
use crate::events::event_loop;
use crate::status::AppStatus;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(16), // user actions
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    ctx: LookupContext,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, backend: Arc<dyn LookupBackend>) -> Self {
        let channels = ChannelSet::new();
        let ctx = LookupContext::new(
            state,
            channels.app_to_ui.0.clone(),
            backend,
            AppStatus::new(),
        );

        Self {
            channels,
            ctx,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender for events that originate from the user
    pub fn ui_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.ui_to_app.0.clone()
    }

    pub fn status(&self) -> &AppStatus {
        &self.ctx.status
    }

    pub fn spawn_tasks<R, W>(&self, input: R, output: W) -> JoinSet<anyhow::Result<()>>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.ctx.clone(),
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Terminal frontend
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            input,
            output,
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
