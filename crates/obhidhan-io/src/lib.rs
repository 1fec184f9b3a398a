pub mod selection;

pub use self::selection::{SelectionWatcher, read_selection};
