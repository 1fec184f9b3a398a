pub mod entry;
pub mod events;
pub mod request;

pub use self::entry::DictionaryEntry;
pub use self::events::{AppEvent, TextSource};
pub use self::request::{LookupRequest, ProviderKind};
