use obhidhan_types::ProviderKind;
use tokio::sync::RwLock;

#[derive(Default)]
struct Session {
    last_selection: String,
    preferred_provider: Option<ProviderKind>,
    auto_lookup: bool,
}

/// Process-wide key/value state: last selection, provider preference
/// and the auto-run flag. Nothing here survives a restart, and nothing
/// expires.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<Session>,
}

impl SessionStore {
    pub async fn last_selection(&self) -> String {
        self.inner.read().await.last_selection.clone()
    }

    pub async fn set_last_selection(&self, text: String) {
        self.inner.write().await.last_selection = text;
    }

    pub async fn preferred_provider(&self) -> Option<ProviderKind> {
        self.inner.read().await.preferred_provider
    }

    pub async fn set_preferred_provider(&self, kind: ProviderKind) {
        self.inner.write().await.preferred_provider = Some(kind);
    }

    pub async fn set_auto_lookup(&self, on: bool) {
        self.inner.write().await.auto_lookup = on;
    }

    /// Reads and clears the auto-run flag in one step, so a captured
    /// selection only fires a single lookup.
    pub async fn take_auto_lookup(&self) -> bool {
        let mut session = self.inner.write().await;
        std::mem::take(&mut session.auto_lookup)
    }
}
