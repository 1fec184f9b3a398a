use std::time::Duration;

use arboard::Clipboard;
use tokio::time;

/// Snapshot of whatever the user last copied. Empty string when the
/// clipboard holds no text.
pub fn read_selection() -> Result<String, anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text().unwrap_or_default())
}

/// Polls the clipboard and reports each new non-empty text exactly once.
pub struct SelectionWatcher {
    clipboard: Clipboard,
    last_text: String,
    interval: time::Interval,
}

impl SelectionWatcher {
    pub fn new(poll_interval: Duration) -> Result<Self, anyhow::Error> {
        Ok(Self {
            clipboard: Clipboard::new()?,
            last_text: String::new(),
            interval: time::interval(poll_interval),
        })
    }

    /// Waits until the clipboard holds a text different from the one last
    /// reported.
    pub async fn next_selection(&mut self) -> String {
        loop {
            self.interval.tick().await;
            if let Ok(text) = self.clipboard.get_text()
                && !text.is_empty()
                && text != self.last_text
            {
                self.last_text = text.clone();
                return text;
            }
        }
    }
}
