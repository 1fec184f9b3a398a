use std::sync::Arc;

use obhidhan_types::ProviderKind;

use crate::state::AppState;

pub async fn handle_set_provider(state: &Arc<AppState>, kind: ProviderKind) {
    state.session.set_preferred_provider(kind).await;
    tracing::info!(provider = kind.as_str(), "provider preference updated");
}
