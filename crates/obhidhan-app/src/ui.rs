use kanal::{AsyncReceiver, AsyncSender};
use obhidhan_types::{AppEvent, DictionaryEntry, TextSource};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Terminal front side: renders entries and errors, and forwards typed
/// lines as lookups.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    println!("obhidhan — type a word or phrase to look it up.");
    println!("Commands: :provider openai|gemini, :speak. Ctrl+C quits.");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                match event {
                    Ok(AppEvent::ShowEntry(entry)) => render_entry(&entry),
                    Ok(AppEvent::LookupFailed(message)) => render_failure(&message),
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if let Some(event) = parse_input_line(&line)
                            && ui_to_app_tx.send(event).await.is_err()
                        {
                            break;
                        }
                    }
                    // stdin closed
                    None => break,
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    Ok(())
}

/// Maps a typed line to an event; `None` for blanks and bad commands.
pub fn parse_input_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix(":provider") {
        return match rest.trim().parse() {
            Ok(kind) => Some(AppEvent::SetProvider(kind)),
            Err(_) => {
                render_failure("Unknown provider, expected openai or gemini.");
                None
            }
        };
    }

    if line == ":speak" {
        return Some(AppEvent::Speak);
    }

    Some(AppEvent::TextInput {
        text: line.to_string(),
        source: TextSource::Stdin,
    })
}

/// Prints one entry: headword line, definition, Bangla, numbered
/// sentences, then synonym/antonym rows.
pub fn render_entry(entry: &DictionaryEntry) {
    println!();

    let mut headline = entry.word.clone();
    if !entry.ipa.is_empty() {
        headline.push_str("  ");
        headline.push_str(&entry.ipa);
    }
    if !entry.part_of_speech.is_empty() {
        headline.push_str(&format!("  [{}]", entry.part_of_speech.to_uppercase()));
    }
    println!("{headline}");

    if !entry.definition.is_empty() {
        println!("  {}", entry.definition);
    }
    if !entry.bangla.is_empty() {
        println!("  {}", entry.bangla);
    }

    let mut n = 0;
    for sentence in &entry.sentences_intermediate {
        n += 1;
        println!("  {n}. {sentence}");
    }
    if !entry.sentence_advanced.is_empty() {
        n += 1;
        println!("  {n}. {}", entry.sentence_advanced);
    }

    if !entry.synonyms.is_empty() {
        println!("  Synonyms: {}", entry.synonyms.join(" | "));
    }
    if !entry.antonyms.is_empty() {
        println!("  Antonyms: {}", entry.antonyms.join(" | "));
    }
}

/// One line, replacing any previous output. Stale entries are never
/// re-shown after a failure.
pub fn render_failure(message: &str) {
    println!("Error: {message}");
}
