use kanal::AsyncSender;
use obhidhan_speech::Speaker;
use obhidhan_types::{AppEvent, DictionaryEntry};

pub async fn handle_speak(
    speaker: &Speaker,
    entry: Option<&DictionaryEntry>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(text) = entry.and_then(|e| e.speech_text()) else {
        app_to_ui_tx
            .send(AppEvent::LookupFailed(
                "Lookup first, then play audio.".to_string(),
            ))
            .await?;
        return Ok(());
    };

    if let Err(err) = speaker.speak(&text).await {
        app_to_ui_tx
            .send(AppEvent::LookupFailed(err.to_string()))
            .await?;
    }

    Ok(())
}
