use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use obhidhan_io::SelectionWatcher;
use obhidhan_types::{AppEvent, TextSource};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Watch-mode input: every new clipboard text becomes a lookup.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let poll_interval = {
        let config = state.config.read().await;
        Duration::from_millis(config.poll_interval_ms)
    };

    let mut watcher = SelectionWatcher::new(poll_interval)?;
    tracing::info!("watching clipboard for selections");

    loop {
        tokio::select! {
            text = watcher.next_selection() => {
                let event = AppEvent::TextInput {
                    text,
                    source: TextSource::Clipboard,
                };
                if event_tx.send(event).await.is_err() {
                    break;
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("selection watcher stopping");
                break;
            }
        }
    }

    Ok(())
}
