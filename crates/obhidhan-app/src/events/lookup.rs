use std::sync::Arc;

use kanal::AsyncSender;
use obhidhan_lookup::LookupService;
use obhidhan_types::{AppEvent, DictionaryEntry, LookupRequest, TextSource};

use crate::state::AppState;

/// Stores the selection, runs one lookup and reports the outcome to the
/// render side. Returns the entry so the loop can keep it for :speak.
pub async fn handle_lookup(
    state: &Arc<AppState>,
    service: &LookupService,
    text: String,
    source: TextSource,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<DictionaryEntry>> {
    state.session.set_last_selection(text.clone()).await;
    if source == TextSource::Clipboard {
        // Captured selections auto-run, the same contract the keyboard
        // shortcut had.
        state.session.set_auto_lookup(true).await;
    }

    let provider = state.active_provider().await;
    let request = LookupRequest {
        phrase: text,
        provider,
    };

    let outcome = service.perform_lookup(&request).await;
    state.session.take_auto_lookup().await;

    match outcome {
        Ok(entry) => {
            app_to_ui_tx
                .send(AppEvent::ShowEntry(entry.clone()))
                .await?;
            Ok(Some(entry))
        }
        Err(err) => {
            tracing::debug!(provider = provider.as_str(), "lookup failed: {err}");
            app_to_ui_tx
                .send(AppEvent::LookupFailed(err.to_string()))
                .await?;
            Ok(None)
        }
    }
}
