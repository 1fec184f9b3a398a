use crate::entry::DictionaryEntry;
use crate::request::ProviderKind;

/// Events flowing between the input/render side and the lookup loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    TextInput { text: String, source: TextSource },
    SetProvider(ProviderKind),
    /// Read the most recent entry aloud
    Speak,
    ShowEntry(DictionaryEntry),
    LookupFailed(String),
}

/// Where a looked-up phrase came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Clipboard,
    Stdin,
    Cli,
}
