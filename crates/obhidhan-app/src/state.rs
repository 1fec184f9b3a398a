use std::sync::Arc;

use obhidhan_config::Config;
use obhidhan_types::ProviderKind;
use tokio::sync::RwLock;

use crate::store::SessionStore;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: SessionStore::default(),
        }
    }

    /// Session preference wins over the configured default.
    pub async fn active_provider(&self) -> ProviderKind {
        if let Some(kind) = self.session.preferred_provider().await {
            return kind;
        }

        let config = self.config.read().await;
        config
            .lookup
            .default_provider
            .parse()
            .unwrap_or(ProviderKind::OpenAi)
    }
}
