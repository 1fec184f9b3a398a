use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use obhidhan_lookup::LookupService;
use obhidhan_speech::Speaker;
use obhidhan_types::{AppEvent, DictionaryEntry};

use crate::state::AppState;

pub mod lookup;
pub mod provider;
pub mod speak;

use lookup::handle_lookup;
use provider::handle_set_provider;
use speak::handle_speak;

/// App's main loop: consumes input events, runs lookups, feeds the
/// render side.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (service, speaker) = {
        let config = state.config.read().await;
        (
            LookupService::new(&config.lookup),
            Speaker::new(config.speech.clone()),
        )
    };

    // The one piece of render state the loop remembers: what :speak reads.
    let mut last_entry: Option<DictionaryEntry> = None;

    tracing::info!("event loop waiting for input");
    while let Ok(event) = ui_to_app_rx.recv().await {
        match event {
            AppEvent::TextInput { text, source } => {
                last_entry = handle_lookup(&state, &service, text, source, &app_to_ui_tx).await?;
            }
            AppEvent::SetProvider(kind) => handle_set_provider(&state, kind).await,
            AppEvent::Speak => {
                handle_speak(&speaker, last_entry.as_ref(), &app_to_ui_tx).await?;
            }
            // Render-side events never flow into this loop.
            AppEvent::ShowEntry(_) | AppEvent::LookupFailed(_) => {}
        }
    }

    Ok(())
}
